//! Inbound score file data model.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

/// Softmax output for a single camera-trap image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageScores {
    /// Image file name as recorded by the upstream extractor.
    pub image: String,
    /// Class probabilities, aligned to the score file's class order.
    pub probabilities: Vec<f64>,
    /// Capture timestamp, if the camera recorded one.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
}

/// One classifier score dump, typically covering a camera card.
///
/// `classes` declares the column order of every probability vector in the
/// file; it must match the configured taxonomy exactly.
#[derive(Debug, Clone)]
pub struct ScoreFile {
    /// Path the file was read from.
    pub source: PathBuf,
    /// Camera or site identifier, if present.
    pub camera: Option<String>,
    /// Upstream model identifier, if present.
    pub model: Option<String>,
    /// Class labels in probability-vector order.
    pub classes: Vec<String>,
    /// Per-image scores.
    pub images: Vec<ImageScores>,
}
