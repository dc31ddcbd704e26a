//! Command execution for the catalog cleaner CLI
//!
//! Contains the main run logic: logging setup, progress reporting,
//! processor invocation, and the post-run summary.

use crate::cli::args::Args;
use crate::processor::{CatalogProcessor, RunStats};
use crate::Result;
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Run one catalog cleaning pass from parsed arguments
///
/// Orchestrates the whole workflow:
/// 1. Set up logging per the verbosity flags
/// 2. Validate arguments and resolve the output path
/// 3. Process the catalog with row-level progress reporting
/// 4. Print the run summary
pub fn run(args: Args) -> Result<RunStats> {
    setup_logging(&args);

    info!("Starting catalog cleaner");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let output_path = args.resolved_output_path();

    let progress_bar = if args.show_progress() {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let processor = CatalogProcessor::new(args.input_path.clone(), output_path.clone());
    let stats = processor.process(progress_bar.as_ref())?;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    if !args.quiet {
        print_summary(&stats, &output_path);
    }

    Ok(stats)
}

/// Print the post-run summary to stdout
fn print_summary(stats: &RunStats, output_path: &std::path::Path) {
    println!("{}", "Cleanup complete.".green().bold());
    println!(
        "  {} rows cleaned in {}",
        stats.rows_written,
        HumanDuration(stats.processing_time)
    );
    println!(
        "  {} valid, {} invalid",
        stats.valid_records.to_string().green(),
        stats.invalid_records.to_string().yellow()
    );
    println!("  Output: {}", output_path.display());
}

/// Set up tracing based on command line arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_cleaner={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
