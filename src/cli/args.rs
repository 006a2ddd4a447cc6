//! CLI argument definitions.

use crate::cli::validators::{parse_confidence, parse_risk_threshold};
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Camera-trap triage: risk, priority, and escalation decisions from
/// classifier score files.
#[derive(Debug, Parser)]
#[command(name = "camtriage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Score files or directories to triage.
    pub inputs: Vec<PathBuf>,

    /// Path to the configuration file (default: platform config dir).
    #[arg(long, env = "CAMTRIAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Common options for triage.
    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
    /// Validate the configuration.
    Check,
}

/// Arguments for the triage command.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnalyzeArgs {
    /// Output formats (comma-separated: csv,json).
    #[arg(short, long, value_delimiter = ',', env = "CAMTRIAGE_FORMAT")]
    pub format: Option<Vec<OutputFormat>>,

    /// Output directory (default: same as input).
    #[arg(short, long, env = "CAMTRIAGE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Escalation risk threshold override.
    #[arg(long, value_parser = parse_risk_threshold, env = "CAMTRIAGE_RISK_THRESHOLD")]
    pub risk_threshold: Option<f64>,

    /// Escalation confidence threshold override (0.0-1.0).
    #[arg(long, value_parser = parse_confidence, env = "CAMTRIAGE_CONFIDENCE_THRESHOLD")]
    pub confidence_threshold: Option<f64>,

    /// Write CSV results to stdout instead of files (single input only).
    #[arg(long)]
    pub stdout: bool,

    /// Reprocess files even if output exists.
    #[arg(long)]
    pub force: bool,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv and above: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Omit the UTF-8 BOM from CSV output files.
    #[arg(long)]
    pub no_csv_bom: bool,
}
