use crate::catalog::{Ballot, Item};
use crate::config::ProgramConfig;
use crate::report::{compose_report, read_xref, Document, DocumentWriter};
use crate::selection::{apply_tally, validate_budget, ProgramSelector};
use crate::types::program::Program;

use super::ExportError;

/// Everything one pipeline run produces, before anything touches disk.
#[derive(Debug, Clone)]
pub struct RenderedProgram {
    pub program: Program,
    pub lines: Vec<String>,
    pub document: Document,
}

/// ballots -> tally -> selection -> report lines -> document bytes.
///
/// The budget is validated before any other work.
pub fn render_program(
    items: &[Item],
    ballots: &[Ballot],
    budget_minutes: i64,
    config: &ProgramConfig,
) -> Result<RenderedProgram, ExportError> {
    // 0. Reject the budget before tallying anything
    validate_budget(budget_minutes)?;
    let selector = ProgramSelector::default();

    // 1. Fresh vote counts; whatever the caller had cached is discarded
    let tallied = apply_tally(items, ballots);

    // 2. Selection
    let program = selector.select(&tallied, budget_minutes)?;

    // 3. Report + document
    let lines = compose_report(&program, &config.labels);
    let document = DocumentWriter::new(config.page.clone()).write(&lines);

    debug_assert!(read_xref(document.as_bytes()).is_ok());

    Ok(RenderedProgram {
        program,
        lines,
        document,
    })
}
