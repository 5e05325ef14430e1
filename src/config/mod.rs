pub mod labels;
pub mod page;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use labels::ReportLabels;
pub use page::PageGeometry;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    pub page: PageGeometry,
    pub labels: ReportLabels,
}

impl ProgramConfig {
    pub fn v0() -> Self {
        Self {
            page: PageGeometry::a4(),
            labels: ReportLabels::v0(),
        }
    }

    /// Missing keys fall back to [`ProgramConfig::v0`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(f))?)
    }
}
