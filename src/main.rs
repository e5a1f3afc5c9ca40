use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};

use find_image_dups::{run_scan, Cli, Precision, ScanConfig};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();

    // Initialize logger with millisecond timestamps
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    info!("Starting find-image-dups v{}", env!("CARGO_PKG_VERSION"));
    debug!("Command line arguments: {:?}", cli);

    // Convert to absolute path for better error messages
    let input_dir = cli
        .input_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", cli.input_dir.display()))?;

    if !input_dir.is_dir() {
        error!("Path is not a directory: {}", input_dir.display());
        anyhow::bail!("Path is not a directory: {}", input_dir.display());
    }

    // --accurate wins when both mode flags are given; fast is the default.
    let precision = if cli.accurate {
        Precision::Accurate
    } else {
        Precision::Fast
    };
    info!(
        "Target directory: '{}' (mode: {:?})",
        input_dir.display(),
        precision
    );

    let summary = run_scan(&ScanConfig {
        root: input_dir,
        precision,
        checkpoint_every: None,
    })
    .context("Scan failed")?;

    info!(
        "Hashed {} of {} images ({} skipped), {} duplicates found, {} moved",
        summary.hashed,
        summary.discovered,
        summary.skipped,
        summary.duplicates.len(),
        summary.moved
    );

    let elapsed = start_time.elapsed();
    info!("Program completed successfully in {:.2}s", elapsed.as_secs_f64());
    Ok(())
}
