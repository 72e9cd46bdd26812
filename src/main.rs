use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use micro_f1::report::{ScenarioOutcome, json, text};
use micro_f1::{MatchTally, micro_f1};

/// Demonstration runner: scores three fixed classification scenarios and
/// prints the resulting report. Not a general-purpose evaluation CLI.
#[derive(Debug, Parser)]
#[command(name = "micro-f1", version)]
struct Cli {
    /// Output format for the scenario report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let mut outcomes = Vec::new();
    for (label, truth, predicted) in demo_scenarios() {
        let score = micro_f1(&truth, &predicted).map_err(|e| e.to_string())?;
        let tally = MatchTally::from_pairs(&truth, &predicted);
        tracing::info!(scenario = label, score, "scored scenario");
        outcomes.push(ScenarioOutcome {
            label: label.to_string(),
            n_items: truth.len(),
            matches: tally.matches,
            score,
        });
    }

    match cli.format {
        ReportFormat::Text => print!("{}", text::render_report(&outcomes)),
        ReportFormat::Json => {
            println!(
                "{}",
                json::render_report(&outcomes).map_err(|e| e.to_string())?
            );
        }
    }

    Ok(())
}

fn demo_scenarios() -> Vec<(&'static str, Vec<u32>, Vec<u32>)> {
    vec![
        (
            "Scenario 1 – Partial match (2 correct of 3)",
            vec![0, 1, 1],
            vec![0, 1, 0],
        ),
        (
            "Scenario 2 – Perfect match (4 correct of 4)",
            vec![0, 1, 2, 2],
            vec![0, 1, 2, 2],
        ),
        (
            "Scenario 3 – Three correct of four",
            vec![2, 2, 1, 0],
            vec![1, 2, 1, 0],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use micro_f1::report::format_score_7;

    #[test]
    fn test_parse_default_format_text() {
        let cli = Cli::try_parse_from(["micro-f1"]).unwrap();
        assert_eq!(cli.format, ReportFormat::Text);
    }

    #[test]
    fn test_parse_json_format() {
        let cli = Cli::try_parse_from(["micro-f1", "--format", "json"]).unwrap();
        assert_eq!(cli.format, ReportFormat::Json);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["micro-f1", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_demo_scenarios_are_well_formed() {
        let scenarios = demo_scenarios();
        assert_eq!(scenarios.len(), 3);
        for (_, truth, predicted) in &scenarios {
            assert_eq!(truth.len(), predicted.len());
            assert!(!truth.is_empty());
        }
    }

    #[test]
    fn test_demo_scenario_scores() {
        let expected = ["0.6666667", "1.0000000", "0.7500000"];
        for ((_, truth, predicted), want) in demo_scenarios().iter().zip(expected) {
            let score = micro_f1(truth, predicted).unwrap();
            assert_eq!(format_score_7(score), want);
        }
    }
}
