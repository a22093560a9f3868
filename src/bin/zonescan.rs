//! Extracts the owner names from a directory of zone files.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use zonescan::extract::stats::write_stats_file;
use zonescan::extract::{pool, Config};
use zonescan::logging::init_logging;

/// Arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory with zone files
    #[arg(long)]
    directory: PathBuf,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,

    /// Report progress as a count of processed files
    #[arg(long)]
    progress: bool,

    /// Number of zones to process in parallel
    #[arg(long, default_value_t = 2)]
    parallel: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::new(args.directory);
    config.parallel = args.parallel;
    config.progress = args.progress;
    if let Err(err) = config.validate() {
        error!("{err}");
        return ExitCode::from(2);
    }
    let config = Arc::new(config);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let zones = match runtime.block_on(pool::run(config.clone())) {
        Ok(zones) => zones,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let stats_path = config.stats_path();
    if let Err(err) = write_stats_file(&stats_path, &zones) {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    info!(
        "{} zones processed, statistics written to {}",
        zones.len(),
        stats_path.display()
    );
    ExitCode::SUCCESS
}
