use serde::{Deserialize, Serialize};

/// Fixed wording of the program report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub heading: String,
    pub rule: String,
    pub budget: String,
    pub total: String,
    pub minutes_unit: String,
    pub votes: String,
    pub empty_program: String,
}

impl ReportLabels {
    /// Ukrainian wording; every letter is covered by the transliteration table.
    pub fn v0() -> Self {
        Self {
            heading: "ПРОГРАМА КОНЦЕРТУ".into(),
            rule: "=".repeat(30),
            budget: "Ліміт тривалості".into(),
            total: "Фактична тривалість".into(),
            minutes_unit: "хв".into(),
            votes: "голосів".into(),
            empty_program: "Немає пісень для програми.".into(),
        }
    }

    pub fn english() -> Self {
        Self {
            heading: "CONCERT PROGRAM".into(),
            rule: "=".repeat(30),
            budget: "Duration limit".into(),
            total: "Actual duration".into(),
            minutes_unit: "min".into(),
            votes: "votes".into(),
            empty_program: "No songs in the program.".into(),
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::v0()
    }
}
