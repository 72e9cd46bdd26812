//! Micro-averaged F1 scoring for single-label multi-class classification.
//!
//! The crate exposes one supported operation: [`micro_f1`], which compares a
//! ground-truth label sequence against a prediction sequence position by
//! position and returns a score in `[0.0, 1.0]`. Labels are opaque; equality
//! is the only operation required of them.
//!
//! ```
//! use micro_f1::micro_f1;
//!
//! let truth = [0, 1, 1];
//! let predicted = [0, 1, 0];
//! let score = micro_f1(&truth, &predicted)?;
//! assert!((score - 2.0 / 3.0).abs() < 1e-9);
//! # Ok::<(), micro_f1::ScoreError>(())
//! ```

pub mod error;
pub mod report;
pub mod score;

pub use error::ScoreError;
pub use score::{MatchTally, micro_f1};
