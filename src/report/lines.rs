use crate::config::ReportLabels;
use crate::types::program::Program;

/// Render the program as plain report lines, one per output row.
///
/// A blank line separates the summary from the entries. An empty program
/// gets a single placeholder line instead of entries. Line breaks inside
/// titles, performers or labels start a new output row.
pub fn compose_report(program: &Program, labels: &ReportLabels) -> Vec<String> {
    let mut lines = Vec::with_capacity(program.len() + 5);
    push_rows(&mut lines, &labels.heading);
    push_rows(&mut lines, &labels.rule);
    push_rows(
        &mut lines,
        &format!(
            "{}: {} {}",
            labels.budget, program.budget_minutes, labels.minutes_unit
        ),
    );
    push_rows(
        &mut lines,
        &format!(
            "{}: {} {}",
            labels.total, program.total_minutes, labels.minutes_unit
        ),
    );
    lines.push(String::new());

    if program.is_empty() {
        push_rows(&mut lines, &labels.empty_program);
        return lines;
    }

    for entry in &program.entries {
        let row = format!(
            "{}) {} — {} ({} {}, {}: {})",
            entry.position,
            entry.title,
            entry.performer,
            entry.duration_minutes,
            labels.minutes_unit,
            labels.votes,
            entry.votes
        );
        push_rows(&mut lines, &row);
    }
    lines
}

/// One row per `\n` or `\r\n` separated piece; empty text is one empty row.
fn push_rows(lines: &mut Vec<String>, text: &str) {
    if text.is_empty() {
        lines.push(String::new());
        return;
    }
    lines.extend(text.lines().map(str::to_string));
}

/// Newline-joined form of the report for on-screen display.
pub fn report_text(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}
