pub mod ballot;
pub mod item;

pub use crate::types::identifiers::{ItemId, VoterId};
pub use ballot::Ballot;
pub use item::{Item, ItemError};
