//! Classifier score ingestion.
//!
//! The convolutional classifier runs upstream and dumps per-image softmax
//! vectors to score files; this module is the adapter between those dumps
//! and the decision core.

mod reader;
mod types;

pub use reader::{check_alignment, read_score_file};
pub use types::{ImageScores, ScoreFile};
