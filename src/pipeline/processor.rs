//! Single file processing pipeline.

use crate::config::OutputFormat;
use crate::decision::{self, EscalationPolicy, PriorityThresholds, Taxonomy};
use crate::error::{Error, Result};
use crate::output::{CsvWriter, ImageDecision, JsonResultWriter, OutputWriter};
use crate::pipeline::output_path_for;
use crate::scores::{self, ScoreFile};
use std::path::Path;
use tracing::{debug, info};

/// Result of processing a single score file.
#[derive(Debug, Clone, Copy)]
pub struct ProcessResult {
    /// Images triaged.
    pub images: usize,
    /// Images flagged for escalation.
    pub escalations: usize,
}

/// Process a single score file and write triage results.
///
/// Parses the file, checks its class order against the taxonomy, runs the
/// decision policy on every image, and writes each requested format. A
/// malformed probability vector aborts the file with no partial output
/// left behind for it.
pub fn process_file(
    input_path: &Path,
    output_dir: &Path,
    taxonomy: &Taxonomy,
    thresholds: &PriorityThresholds,
    policy: &EscalationPolicy,
    formats: &[OutputFormat],
    csv_bom_enabled: bool,
) -> Result<ProcessResult> {
    info!("Processing: {}", input_path.display());

    let triaged = triage_file(input_path, taxonomy, thresholds, policy)?;
    let escalations = triaged
        .decisions
        .iter()
        .filter(|d| d.record.escalate)
        .count();

    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
    }

    let source_name = input_path
        .file_name()
        .map_or_else(|| input_path.display().to_string(), |n| {
            n.to_string_lossy().into_owned()
        });

    for format in formats {
        let output_path = output_path_for(input_path, output_dir, *format);
        debug!("Writing {format} output: {}", output_path.display());

        let mut writer: Box<dyn OutputWriter> = match format {
            OutputFormat::Csv => Box::new(CsvWriter::new(&output_path, csv_bom_enabled)?),
            OutputFormat::Json => Box::new(JsonResultWriter::new(
                &output_path,
                &source_name,
                triaged.file.model.clone(),
                triaged.file.camera.clone(),
                triaged.file.classes.clone(),
                *thresholds,
                *policy,
            )),
        };

        writer.write_header()?;
        for decision in &triaged.decisions {
            writer.write_decision(decision)?;
        }
        writer.finalize()?;
    }

    info!(
        "Triaged {} image(s), {} flagged for escalation",
        triaged.decisions.len(),
        escalations
    );

    Ok(ProcessResult {
        images: triaged.decisions.len(),
        escalations,
    })
}

/// A parsed score file together with its triage decisions.
#[derive(Debug)]
pub struct TriagedFile {
    /// The parsed score file.
    pub file: ScoreFile,
    /// One decision per image, in file order.
    pub decisions: Vec<ImageDecision>,
}

/// Parse a score file and run the decision policy over every image.
pub fn triage_file(
    input_path: &Path,
    taxonomy: &Taxonomy,
    thresholds: &PriorityThresholds,
    policy: &EscalationPolicy,
) -> Result<TriagedFile> {
    let file = scores::read_score_file(input_path)?;
    scores::check_alignment(&file, taxonomy)?;

    debug!(
        "Score file declares {} image(s) from {}",
        file.images.len(),
        file.camera.as_deref().unwrap_or("unknown camera")
    );

    let mut decisions = Vec::with_capacity(file.images.len());
    for image in &file.images {
        let record = decision::decide(&image.probabilities, taxonomy, thresholds, policy)
            .map_err(|e| match e {
                Error::InvalidDistribution { reason } => Error::InvalidDistribution {
                    reason: format!("{}: {reason}", image.image),
                },
                other => other,
            })?;

        decisions.push(ImageDecision {
            source: input_path.to_path_buf(),
            image: image.image.clone(),
            captured_at: image.captured_at,
            record,
        });
    }

    Ok(TriagedFile { file, decisions })
}
