//! JSON output format writer.

use crate::decision::{EscalationPolicy, Priority, PriorityThresholds};
use crate::error::Result;
use crate::output::{ImageDecision, OutputWriter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// JSON result file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonResultFile {
    /// Source score file name.
    pub source_file: String,
    /// Triage timestamp.
    pub analysis_date: DateTime<Utc>,
    /// Upstream model identifier, if the score file carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Camera or site identifier, if the score file carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    /// Policy settings used for this triage run.
    pub settings: JsonSettings,
    /// Per-image decisions.
    pub decisions: Vec<JsonDecision>,
    /// Summary statistics.
    pub summary: JsonSummary,
}

/// Policy settings echoed into JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSettings {
    /// Taxonomy labels in classifier output order.
    pub classes: Vec<String>,
    /// Upper bound (inclusive) of the LOW tier.
    pub low_max: f64,
    /// Upper bound (inclusive) of the MEDIUM tier.
    pub medium_max: f64,
    /// Escalation risk threshold.
    pub risk_threshold: f64,
    /// Escalation confidence threshold.
    pub confidence_threshold: f64,
}

/// Single decision in JSON format.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDecision {
    /// Image file name.
    pub image: String,
    /// Predicted class label.
    pub prediction: String,
    /// Confidence in the prediction.
    pub confidence: f64,
    /// Expected risk score.
    pub risk_score: f64,
    /// Priority tier.
    pub priority: Priority,
    /// Whether the case routes to secondary processing.
    pub escalate: bool,
    /// Capture timestamp, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
}

/// Summary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Total number of triaged images.
    pub total_images: usize,
    /// Images flagged for escalation.
    pub escalations: usize,
    /// LOW priority count.
    pub low: usize,
    /// MEDIUM priority count.
    pub medium: usize,
    /// HIGH priority count.
    pub high: usize,
}

/// Writer for JSON triage output files.
pub struct JsonResultWriter {
    decisions: Vec<ImageDecision>,
    output_path: PathBuf,
    source_file: String,
    model: Option<String>,
    camera: Option<String>,
    classes: Vec<String>,
    thresholds: PriorityThresholds,
    policy: EscalationPolicy,
}

impl JsonResultWriter {
    /// Create a new JSON result writer.
    pub fn new(
        output_path: &Path,
        source_file: &str,
        model: Option<String>,
        camera: Option<String>,
        classes: Vec<String>,
        thresholds: PriorityThresholds,
        policy: EscalationPolicy,
    ) -> Self {
        Self {
            decisions: Vec::new(),
            output_path: output_path.to_path_buf(),
            source_file: source_file.to_string(),
            model,
            camera,
            classes,
            thresholds,
            policy,
        }
    }

    /// Compute summary from collected decisions.
    fn compute_summary(&self) -> JsonSummary {
        let mut summary = JsonSummary {
            total_images: self.decisions.len(),
            escalations: 0,
            low: 0,
            medium: 0,
            high: 0,
        };

        for decision in &self.decisions {
            if decision.record.escalate {
                summary.escalations += 1;
            }
            match decision.record.priority {
                Priority::Low => summary.low += 1,
                Priority::Medium => summary.medium += 1,
                Priority::High => summary.high += 1,
            }
        }

        summary
    }
}

impl OutputWriter for JsonResultWriter {
    fn write_header(&mut self) -> Result<()> {
        // No header for JSON - written at finalize
        Ok(())
    }

    fn write_decision(&mut self, decision: &ImageDecision) -> Result<()> {
        self.decisions.push(decision.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let json_decisions: Vec<JsonDecision> = self
            .decisions
            .iter()
            .map(|d| JsonDecision {
                image: d.image.clone(),
                prediction: d.record.prediction.clone(),
                confidence: d.record.confidence,
                risk_score: d.record.risk_score,
                priority: d.record.priority,
                escalate: d.record.escalate,
                captured_at: d.captured_at,
            })
            .collect();

        let result = JsonResultFile {
            source_file: self.source_file.clone(),
            analysis_date: Utc::now(),
            model: self.model.clone(),
            camera: self.camera.clone(),
            settings: JsonSettings {
                classes: self.classes.clone(),
                low_max: self.thresholds.low_max,
                medium_max: self.thresholds.medium_max,
                risk_threshold: self.policy.risk_threshold,
                confidence_threshold: self.policy.confidence_threshold,
            },
            decisions: json_decisions,
            summary: self.compute_summary(),
        };

        let file = File::create(&self.output_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &result).map_err(|e| {
            crate::error::Error::JsonWrite {
                path: self.output_path.clone(),
                source: e,
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::decision::DecisionRecord;
    use tempfile::tempdir;

    fn decision(image: &str, priority: Priority, escalate: bool) -> ImageDecision {
        ImageDecision {
            source: PathBuf::from("card-a.scores.json"),
            image: image.to_string(),
            captured_at: None,
            record: DecisionRecord {
                prediction: "predator".to_string(),
                confidence: 0.8,
                risk_score: 2.55,
                priority,
                escalate,
            },
        }
    }

    #[test]
    fn test_json_writer_basic() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("card-a.triage.json");

        let mut writer = JsonResultWriter::new(
            &output_path,
            "card-a.scores.json",
            Some("mobilenet-v2-ft".to_string()),
            None,
            vec![
                "deer".to_string(),
                "other".to_string(),
                "predator".to_string(),
            ],
            PriorityThresholds::default(),
            EscalationPolicy::default(),
        );

        writer.write_header().unwrap();
        writer
            .write_decision(&decision("IMG_0001.jpg", Priority::High, true))
            .unwrap();
        writer.finalize().unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let result: JsonResultFile = serde_json::from_str(&content).unwrap();

        assert_eq!(result.source_file, "card-a.scores.json");
        assert_eq!(result.model.as_deref(), Some("mobilenet-v2-ft"));
        assert_eq!(result.decisions.len(), 1);
        assert_eq!(result.decisions[0].prediction, "predator");
        assert_eq!(result.settings.classes.len(), 3);
        assert_eq!(result.settings.risk_threshold, 2.0);
        assert_eq!(result.summary.total_images, 1);
        assert_eq!(result.summary.escalations, 1);
        assert_eq!(result.summary.high, 1);
    }

    #[test]
    fn test_json_summary_tier_counts() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("card-b.triage.json");

        let mut writer = JsonResultWriter::new(
            &output_path,
            "card-b.scores.json",
            None,
            Some("site-7".to_string()),
            vec!["deer".to_string()],
            PriorityThresholds::default(),
            EscalationPolicy::default(),
        );

        writer.write_header().unwrap();
        writer
            .write_decision(&decision("a.jpg", Priority::Low, false))
            .unwrap();
        writer
            .write_decision(&decision("b.jpg", Priority::Low, false))
            .unwrap();
        writer
            .write_decision(&decision("c.jpg", Priority::Medium, false))
            .unwrap();
        writer
            .write_decision(&decision("d.jpg", Priority::High, true))
            .unwrap();
        writer.finalize().unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let result: JsonResultFile = serde_json::from_str(&content).unwrap();

        assert_eq!(result.summary.total_images, 4);
        assert_eq!(result.summary.low, 2);
        assert_eq!(result.summary.medium, 1);
        assert_eq!(result.summary.high, 1);
        assert_eq!(result.summary.escalations, 1);
        assert_eq!(result.camera.as_deref(), Some("site-7"));
    }
}
