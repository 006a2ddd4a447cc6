//! Score file parsing.
//!
//! Reads the per-image softmax dumps the upstream extractor writes, in
//! either JSON or CSV form, and checks their class order against the
//! configured taxonomy before any decision is made.

use crate::constants::score_extensions;
use crate::decision::Taxonomy;
use crate::error::{Error, Result};
use crate::scores::{ImageScores, ScoreFile};
use serde::Deserialize;
use std::path::Path;

/// JSON score dump layout.
#[derive(Debug, Deserialize)]
struct JsonScoreFile {
    #[serde(default)]
    camera: Option<String>,
    #[serde(default)]
    model: Option<String>,
    classes: Vec<String>,
    images: Vec<ImageScores>,
}

/// Read a score file, dispatching on its suffix.
pub fn read_score_file(path: &Path) -> Result<ScoreFile> {
    let name = path.to_string_lossy();
    if name.ends_with(score_extensions::JSON) {
        read_json_scores(path)
    } else if name.ends_with(score_extensions::CSV) {
        read_csv_scores(path)
    } else {
        Err(Error::UnsupportedScoreExtension {
            path: path.to_path_buf(),
        })
    }
}

/// Parse a JSON score dump.
fn read_json_scores(path: &Path) -> Result<ScoreFile> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ScoresRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed: JsonScoreFile =
        serde_json::from_str(&contents).map_err(|e| Error::ScoresParse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    if parsed.classes.is_empty() {
        return Err(Error::InvalidScoreFormat {
            message: format!("'{}' declares no classes", path.display()),
        });
    }

    Ok(ScoreFile {
        source: path.to_path_buf(),
        camera: parsed.camera,
        model: parsed.model,
        classes: parsed.classes,
        images: parsed.images,
    })
}

/// Parse a CSV score dump.
///
/// Layout: an `image` column followed by one probability column per class,
/// headed by the class label. Handles UTF-8 BOM and quoted fields.
fn read_csv_scores(path: &Path) -> Result<ScoreFile> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::ScoresParse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let headers = reader.headers().map_err(|e| Error::ScoresParse {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let mut columns = headers.iter();
    if columns.next() != Some("image") {
        return Err(Error::InvalidScoreFormat {
            message: format!("'{}': first column must be 'image'", path.display()),
        });
    }
    let classes: Vec<String> = columns.map(str::to_string).collect();
    if classes.is_empty() {
        return Err(Error::InvalidScoreFormat {
            message: format!("'{}' declares no class columns", path.display()),
        });
    }

    let mut images = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| Error::ScoresParse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        if record.len() != classes.len() + 1 {
            return Err(Error::InvalidScoreFormat {
                message: format!(
                    "line {}: expected {} fields, got {}",
                    line_num + 2,
                    classes.len() + 1,
                    record.len()
                ),
            });
        }

        let image = record
            .get(0)
            .unwrap_or_default()
            .to_string();
        let mut probabilities = Vec::with_capacity(classes.len());
        for (col, field) in record.iter().skip(1).enumerate() {
            let value: f64 = field.parse().map_err(|_| Error::InvalidScoreFormat {
                message: format!(
                    "line {}: '{}' is not a valid probability for class '{}'",
                    line_num + 2,
                    field,
                    classes[col]
                ),
            })?;
            probabilities.push(value);
        }

        images.push(ImageScores {
            image,
            probabilities,
            captured_at: None,
        });
    }

    Ok(ScoreFile {
        source: path.to_path_buf(),
        camera: None,
        model: None,
        classes,
        images,
    })
}

/// Check a score file's class order against the configured taxonomy.
///
/// The vector ordering is a contract the upstream extractor must uphold;
/// a mismatch surfaces as [`Error::InvalidDistribution`] rather than being
/// silently reordered, since reordering here would hide upstream drift.
pub fn check_alignment(file: &ScoreFile, taxonomy: &Taxonomy) -> Result<()> {
    let expected: Vec<&str> = taxonomy.labels().collect();
    let declared: Vec<&str> = file.classes.iter().map(String::as_str).collect();

    if declared != expected {
        return Err(Error::InvalidDistribution {
            reason: format!(
                "'{}' declares classes [{}] but the configured taxonomy is [{}]",
                file.source.display(),
                declared.join(", "),
                expected.join(", ")
            ),
        });
    }

    Ok(())
}
