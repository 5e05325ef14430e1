pub mod persist;
pub mod render;

use std::path::PathBuf;

use thiserror::Error;

use crate::types::program::SelectionError;

pub use persist::{default_file_name, ExportReceipt, ProgramExporter};
pub use render::{render_program, RenderedProgram};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    InvalidBudget(#[from] SelectionError),
    #[error("Serialization failure: {0}")]
    SerializationFailure(#[from] std::io::Error),
    #[error("Output file already exists: {0}")]
    OutputExists(PathBuf),
}
