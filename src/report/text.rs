use crate::report::{ScenarioOutcome, format_score_7};

/// Render one line per scenario: `label: score`, score to seven decimals.
pub fn render_report(outcomes: &[ScenarioOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        out.push_str(&format!(
            "{}: {}\n",
            outcome.label,
            format_score_7(outcome.score)
        ));
    }
    out
}
