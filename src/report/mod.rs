pub mod json;
pub mod text;

use serde::Serialize;

/// One evaluated demonstration scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub label: String,
    pub n_items: usize,
    pub matches: usize,
    pub score: f64,
}

pub fn format_score_7(v: f64) -> String {
    format!("{:.7}", v)
}
