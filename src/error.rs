use thiserror::Error;

/// Caller contract violations. Both conditions are detected before any
/// counting happens; no partial score is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error(
        "ground truth and predictions must be the same length: {ground_truth} vs {predictions}"
    )]
    LengthMismatch {
        ground_truth: usize,
        predictions: usize,
    },
    #[error("micro-F1 is undefined for empty inputs")]
    EmptyInput,
}
