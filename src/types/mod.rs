pub mod identifiers;
pub mod program;

pub use identifiers::{DocumentDigest, ItemId, VoterId};
pub use program::{Program, ProgramEntry, ProgramMetadata, RankedItem, SelectionError};
