//! Camtriage - camera-trap triage CLI tool.
//!
//! Turns per-image classifier score files into risk scores, priority
//! tiers, and escalation decisions.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod decision;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scores;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Command};
use config::{Config, load_config_file, load_default_config, validate_config};
use decision::{EscalationPolicy, PriorityThresholds, Taxonomy};
use output::OutputWriter;
use pipeline::{ProcessCheck, collect_input_files, output_dir_for, process_file, should_process};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for camtriage CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.analyze.verbose, cli.analyze.quiet);

    // Load configuration
    let config = match cli.config {
        Some(ref path) => load_config_file(path)?,
        None => load_default_config()?,
    };

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config, cli.config.as_deref());
    }

    // A malformed policy is fatal before any triage work starts.
    validate_config(&config)?;

    // Default: triage files
    // Show help if no inputs provided
    if cli.inputs.is_empty() {
        cli::help::print_smart_help(&config);
        std::process::exit(0);
    }

    analyze_files(&cli.inputs, &cli.analyze, &config)
}

/// Triage input files with the given options.
fn analyze_files(inputs: &[PathBuf], args: &AnalyzeArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    validate_stdout_args(inputs, args)?;

    // Collect all input files
    let files = collect_input_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoScoreFiles);
    }

    info!("Found {} score file(s) to triage", files.len());

    // Resolve policy from config, with CLI overrides on the escalation gate
    let taxonomy = config.build_taxonomy()?;
    let thresholds = config.priority;
    let mut policy = config.escalation;
    if let Some(risk) = args.risk_threshold {
        policy.risk_threshold = risk;
    }
    if let Some(confidence) = args.confidence_threshold {
        policy.confidence_threshold = confidence;
    }
    policy.validate()?;

    let formats = args
        .format
        .clone()
        .unwrap_or_else(|| config.defaults.formats.clone());

    if args.stdout {
        return triage_to_stdout(&files[0], &taxonomy, &thresholds, &policy);
    }

    // Create file progress bar
    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);

    // Process files
    let mut processed = 0;
    let mut skipped = 0;
    let mut errors = 0;
    let mut total_images = 0;
    let mut total_escalations = 0;

    for file in &files {
        let file_output_dir = output_dir_for(file, args.output_dir.as_deref());

        // Check if should process
        match should_process(file, &file_output_dir, &formats, args.force) {
            ProcessCheck::SkipExists => {
                info!("Skipping (output exists): {}", file.display());
                skipped += 1;
                progress::inc_progress(file_progress.as_ref());
                continue;
            }
            ProcessCheck::Process => {}
        }

        // Process the file
        match process_file(
            file,
            &file_output_dir,
            &taxonomy,
            &thresholds,
            &policy,
            &formats,
            !args.no_csv_bom,
        ) {
            Ok(result) => {
                processed += 1;
                total_images += result.images;
                total_escalations += result.escalations;
            }
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                errors += 1;
                if args.fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    // Summary
    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} processed, {} skipped, {} errors, {} image(s) triaged, {} escalated in {:.2}s",
        processed, skipped, errors, total_images, total_escalations, total_duration
    );

    if errors > 0 && !args.fail_fast {
        warn!("{} file(s) had errors", errors);
    }

    Ok(())
}

/// Check the `--stdout` argument constraints.
fn validate_stdout_args(inputs: &[PathBuf], args: &AnalyzeArgs) -> Result<()> {
    if !args.stdout {
        return Ok(());
    }

    if inputs.len() != 1 || !inputs[0].is_file() {
        return Err(Error::InvalidArguments {
            message: "--stdout requires exactly one input file".to_string(),
        });
    }
    if args.output_dir.is_some() {
        return Err(Error::InvalidArguments {
            message: "--stdout cannot be used with --output-dir".to_string(),
        });
    }
    if args.format.is_some() {
        return Err(Error::InvalidArguments {
            message: "--stdout cannot be used with --format".to_string(),
        });
    }

    Ok(())
}

/// Triage a single score file and write CSV rows to stdout.
fn triage_to_stdout(
    input: &Path,
    taxonomy: &Taxonomy,
    thresholds: &PriorityThresholds,
    policy: &EscalationPolicy,
) -> Result<()> {
    let triaged = pipeline::triage_file(input, taxonomy, thresholds, policy)?;

    let mut writer = output::CsvWriter::to_stdout();
    writer.write_header()?;
    for decision in &triaged.decisions {
        writer.write_decision(decision)?;
    }
    writer.finalize()
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Build filter string based on verbosity level.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn handle_command(command: Command, config: &Config, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config, config_path),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(
    action: cli::ConfigAction,
    config: &Config,
    config_path: Option<&Path>,
) -> Result<()> {
    use cli::ConfigAction;

    let resolve_path = |explicit: Option<&Path>| -> Result<PathBuf> {
        explicit.map_or_else(config::config_file_path, |p| Ok(p.to_path_buf()))
    };

    match action {
        ConfigAction::Init => {
            let path = resolve_path(config_path)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                config::save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
                println!("\nEdit the [taxonomy], [priority], and [escalation] sections");
                println!("to match your deployment, then triage score files:");
                println!("  camtriage card-a.scores.json");
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = resolve_path(config_path)?;
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Check => {
            validate_config(config)?;
            println!("Configuration OK");
            Ok(())
        }
    }
}
