//! Output type definitions.

use crate::decision::DecisionRecord;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// A triaged camera-trap image: one decision record plus its provenance.
#[derive(Debug, Clone)]
pub struct ImageDecision {
    /// Score file the probabilities came from.
    pub source: PathBuf,
    /// Image file name as recorded by the upstream extractor.
    pub image: String,
    /// Capture timestamp, if the camera recorded one.
    pub captured_at: Option<DateTime<Utc>>,
    /// The decision itself.
    pub record: DecisionRecord,
}
