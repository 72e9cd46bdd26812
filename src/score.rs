use crate::error::ScoreError;

/// Outcome counts from one positional pass over a prediction batch.
///
/// For single-label data every mismatch carries double weight in the micro
/// totals: the wrongly claimed class is a false positive and the missed true
/// class is a false negative. The tally keeps the raw match/mismatch counts
/// so that derivation stays visible in the ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub matches: usize,
    pub mismatches: usize,
}

impl MatchTally {
    /// Count matches and mismatches between two aligned label slices.
    ///
    /// Positions beyond the shorter slice are ignored; [`micro_f1`] rejects
    /// unequal lengths before ever building a tally.
    pub fn from_pairs<T: PartialEq>(ground_truth: &[T], predictions: &[T]) -> Self {
        let mut matches = 0usize;
        let mut mismatches = 0usize;
        for (actual, predicted) in ground_truth.iter().zip(predictions.iter()) {
            if actual == predicted {
                matches += 1;
            } else {
                mismatches += 1;
            }
        }
        MatchTally {
            matches,
            mismatches,
        }
    }

    /// One per mismatch: the predicted class was not the true one.
    pub fn false_positives(&self) -> usize {
        self.mismatches
    }

    /// One per mismatch: the true class went unpredicted.
    pub fn false_negatives(&self) -> usize {
        self.mismatches
    }

    pub fn total(&self) -> usize {
        self.matches + self.mismatches
    }

    /// Micro-averaged F1 over the tallied counts: `2*TP / (2*TP + FP + FN)`.
    ///
    /// Returns 0.0 for an empty tally rather than dividing by zero.
    pub fn micro_f1(&self) -> f64 {
        let denominator = 2 * self.matches + self.false_positives() + self.false_negatives();
        if denominator == 0 {
            return 0.0;
        }
        (2 * self.matches) as f64 / denominator as f64
    }
}

/// Compute the micro-averaged F1 score for single-label multi-class results.
///
/// `ground_truth` and `predictions` are aligned by position: index `i` in
/// both slices refers to the same item. The score is deterministic, lies in
/// `[0.0, 1.0]`, and depends only on positional equality between the two
/// sequences.
///
/// # Errors
///
/// Returns [`ScoreError::LengthMismatch`] when the slices differ in length
/// and [`ScoreError::EmptyInput`] when they are empty.
pub fn micro_f1<T: PartialEq>(ground_truth: &[T], predictions: &[T]) -> Result<f64, ScoreError> {
    if ground_truth.len() != predictions.len() {
        return Err(ScoreError::LengthMismatch {
            ground_truth: ground_truth.len(),
            predictions: predictions.len(),
        });
    }
    if ground_truth.is_empty() {
        return Err(ScoreError::EmptyInput);
    }

    let tally = MatchTally::from_pairs(ground_truth, predictions);
    tracing::debug!(
        matches = tally.matches,
        mismatches = tally.mismatches,
        "tallied prediction outcomes"
    );
    Ok(tally.micro_f1())
}
