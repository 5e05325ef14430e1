use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Ballot, Item};
use crate::config::ProgramConfig;
use crate::types::identifiers::DocumentDigest;
use crate::types::program::Program;

use super::render::render_program;
use super::ExportError;

/// What was written, and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub byte_len: usize,
    pub digest: DocumentDigest,
    pub created_at: DateTime<Utc>, // informational only
    pub program: Program,
}

/// `concert_program_YYYYMMDD_HHMMSS.pdf`, UTC.
pub fn default_file_name(at: DateTime<Utc>) -> String {
    format!("concert_program_{}.pdf", at.format("%Y%m%d_%H%M%S"))
}

/// ProgramExporter is single-threaded and holds no state between calls.
pub struct ProgramExporter {
    config: ProgramConfig,
}

impl ProgramExporter {
    pub fn new(config: ProgramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// Render and write into `output_dir` under a timestamped name.
    pub fn export(
        &self,
        items: &[Item],
        ballots: &[Ballot],
        budget_minutes: i64,
        output_dir: &Path,
    ) -> Result<ExportReceipt, ExportError> {
        let created_at = Utc::now();
        let path = output_dir.join(default_file_name(created_at));
        self.export_at(items, ballots, budget_minutes, &path, created_at)
    }

    /// Render and write to exactly `path`. An existing file is never replaced.
    pub fn export_to(
        &self,
        items: &[Item],
        ballots: &[Ballot],
        budget_minutes: i64,
        path: &Path,
    ) -> Result<ExportReceipt, ExportError> {
        self.export_at(items, ballots, budget_minutes, path, Utc::now())
    }

    fn export_at(
        &self,
        items: &[Item],
        ballots: &[Ballot],
        budget_minutes: i64,
        path: &Path,
        created_at: DateTime<Utc>,
    ) -> Result<ExportReceipt, ExportError> {
        // Fast path only; publication itself refuses to replace a file
        if path.exists() {
            return Err(ExportError::OutputExists(path.to_path_buf()));
        }

        let rendered = render_program(items, ballots, budget_minutes, &self.config)?;
        let digest = rendered.document.digest();
        let bytes = rendered.document.into_bytes();

        write_atomic(path, &bytes, &digest)?;

        log::info!(
            "export: wrote {} ({} bytes, {}, {} entries)",
            path.display(),
            bytes.len(),
            digest,
            rendered.program.len()
        );

        Ok(ExportReceipt {
            path: path.to_path_buf(),
            byte_len: bytes.len(),
            digest,
            created_at,
            program: rendered.program,
        })
    }
}

/// Write to a sibling temp file, sync, then link it into place without
/// replacing anything. On failure the temp file is removed and `path` is
/// left untouched.
pub(crate) fn write_atomic(
    path: &Path,
    bytes: &[u8],
    digest: &DocumentDigest,
) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Sibling temp file, named after the digest
    let fragment = digest.as_str().get(7..19).unwrap_or("partial");

    let mut temp = tempfile::Builder::new()
        .prefix(".concert_program.")
        .suffix(&format!(".tmp.{fragment}"))
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    temp.persist_noclobber(path).map_err(|err| {
        if err.error.kind() == ErrorKind::AlreadyExists {
            ExportError::OutputExists(path.to_path_buf())
        } else {
            ExportError::SerializationFailure(err.error)
        }
    })?;
    Ok(())
}
