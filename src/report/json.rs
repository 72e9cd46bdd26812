use serde::Serialize;

use crate::report::ScenarioOutcome;

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    tool: &'a str,
    version: &'a str,
    scenarios: &'a [ScenarioOutcome],
}

pub fn render_report(outcomes: &[ScenarioOutcome]) -> Result<String, serde_json::Error> {
    let doc = ReportDocument {
        tool: "micro-f1",
        version: env!("CARGO_PKG_VERSION"),
        scenarios: outcomes,
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() {
        let outcomes = vec![ScenarioOutcome {
            label: "Perfect".to_string(),
            n_items: 4,
            matches: 4,
            score: 1.0,
        }];
        let rendered = render_report(&outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["tool"], "micro-f1");
        assert_eq!(value["scenarios"][0]["label"], "Perfect");
        assert_eq!(value["scenarios"][0]["n_items"], 4);
        assert_eq!(value["scenarios"][0]["matches"], 4);
        assert_eq!(value["scenarios"][0]["score"], 1.0);
    }
}
