//! Pipeline coordination for file processing.

use crate::config::OutputFormat;
use crate::constants::{output_extensions, score_extensions};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Result of checking whether a file should be processed.
#[derive(Debug)]
pub enum ProcessCheck {
    /// File should be processed.
    Process,
    /// Skip - output already exists.
    SkipExists,
}

/// Determine the output directory for a file.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// Get output file path for a given format.
///
/// `card-a.scores.json` becomes `card-a.triage.csv` / `card-a.triage.json`
/// in the output directory.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    // Use to_string_lossy() to handle non-UTF-8 filenames gracefully
    let stem = input.file_stem().map_or_else(
        || std::borrow::Cow::Borrowed("output"),
        |s| s.to_string_lossy(),
    );
    let stem = stem.strip_suffix(".scores").unwrap_or(&stem);

    let extension = match format {
        OutputFormat::Csv => output_extensions::CSV,
        OutputFormat::Json => output_extensions::JSON,
    };

    output_dir.join(format!("{stem}{extension}"))
}

/// Check if a file should be processed.
pub fn should_process(
    input: &Path,
    output_dir: &Path,
    formats: &[OutputFormat],
    force: bool,
) -> ProcessCheck {
    if !force {
        let all_exist = formats
            .iter()
            .all(|fmt| output_path_for(input, output_dir, *fmt).exists());
        if all_exist {
            return ProcessCheck::SkipExists;
        }
    }

    ProcessCheck::Process
}

/// Collect input files from paths (files and directories).
pub fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_score_file(path) {
                files.push(path.clone());
            }
        } else if path.is_dir() {
            collect_score_files_recursive(path, &mut files)?;
        } else {
            warn!("Skipping non-existent path: {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Recursively collect score files from a directory.
fn collect_score_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_score_files_recursive(&path, files)?;
        } else if is_score_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

/// Check if a file is a recognized score dump.
fn is_score_file(path: &Path) -> bool {
    let name = path.to_string_lossy();
    name.ends_with(score_extensions::JSON) || name.ends_with(score_extensions::CSV)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_for_with_explicit() {
        let input = Path::new("/data/card-a.scores.json");
        let output = output_dir_for(input, Some(Path::new("/results")));
        assert_eq!(output, PathBuf::from("/results"));
    }

    #[test]
    fn test_output_dir_for_without_explicit() {
        let input = Path::new("/data/card-a.scores.json");
        let output = output_dir_for(input, None);
        assert_eq!(output, PathBuf::from("/data"));
    }

    #[test]
    fn test_output_path_strips_scores_infix() {
        let path = output_path_for(
            Path::new("card-a.scores.json"),
            Path::new("/output"),
            OutputFormat::Csv,
        );
        assert_eq!(path, PathBuf::from("/output/card-a.triage.csv"));

        let path = output_path_for(
            Path::new("card-a.scores.csv"),
            Path::new("/output"),
            OutputFormat::Json,
        );
        assert_eq!(path, PathBuf::from("/output/card-a.triage.json"));
    }

    #[test]
    fn test_is_score_file() {
        assert!(is_score_file(Path::new("card.scores.json")));
        assert!(is_score_file(Path::new("card.scores.csv")));
        assert!(!is_score_file(Path::new("card.json")));
        assert!(!is_score_file(Path::new("card.triage.csv")));
        assert!(!is_score_file(Path::new("IMG_0001.jpg")));
    }

    #[test]
    fn test_collect_input_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        std::fs::write(dir.path().join("b.scores.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::write(nested.join("a.scores.csv"), "image,deer").unwrap();

        let files = collect_input_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("nested/a.scores.csv"));
        assert!(files[1].ends_with("b.scores.json"));
    }

    #[test]
    fn test_should_process_skips_existing_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("card-a.scores.json");
        std::fs::write(&input, "{}").unwrap();
        std::fs::write(dir.path().join("card-a.triage.csv"), "x").unwrap();

        let formats = [OutputFormat::Csv];
        let check = should_process(&input, dir.path(), &formats, false);
        assert!(matches!(check, ProcessCheck::SkipExists));

        let check = should_process(&input, dir.path(), &formats, true);
        assert!(matches!(check, ProcessCheck::Process));

        // JSON output missing, so csv+json is not fully covered.
        let formats = [OutputFormat::Csv, OutputFormat::Json];
        let check = should_process(&input, dir.path(), &formats, false);
        assert!(matches!(check, ProcessCheck::Process));
    }
}
