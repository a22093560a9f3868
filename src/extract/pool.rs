//! Processing many zone files in parallel.
//!
//! Each zone file is processed on a blocking thread of the Tokio runtime.
//! A semaphore limits how many files are in flight at the same time. The
//! [`ZoneInfo`] of every finished file is sent through a channel to a
//! single collector task, which is the only place the results are stored.

use super::config::Config;
use super::error::Error;
use super::zone::{process_zone, ZoneInfo};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Processes all zone files selected by the configuration.
///
/// Returns the information for all zone files that were processed
/// successfully in the order they finished.
pub async fn run(config: Arc<Config>) -> Result<Vec<ZoneInfo>, Error> {
    config.validate()?;
    let files = zone_files(&config)?;
    process_all(config, files).await
}

/// Returns the zone files selected by the configuration.
///
/// These are all the files in the configured directory matching the
/// pattern followed by the extra zones.
pub fn zone_files(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let pattern = config.directory.join(&config.pattern);
    let pattern = pattern
        .to_str()
        .ok_or(Error::Config("directory is not valid UTF-8"))?;
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) => files.push(path),
            Err(err) => warn!("skipping unreadable path: {err}"),
        }
    }
    for name in &config.extra_zones {
        let path = config.directory.join(name);
        if !files.contains(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Processes the given zone files.
///
/// Files that fail are logged and left out of the result.
pub async fn process_all(
    config: Arc<Config>,
    files: Vec<PathBuf>,
) -> Result<Vec<ZoneInfo>, Error> {
    let total = files.len();
    debug!("starting {} parallel workers for {total} files", config.parallel);

    let (tx, mut rx) = mpsc::channel::<ZoneInfo>(config.parallel);
    let collector = tokio::spawn(async move {
        let mut zones = Vec::new();
        while let Some(zone) = rx.recv().await {
            zones.push(zone);
        }
        zones
    });

    let limit = Arc::new(Semaphore::new(config.parallel));
    let done = Arc::new(AtomicUsize::new(0));
    let mut workers = JoinSet::new();
    for path in files {
        let permit = match limit.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };
        let config = config.clone();
        let done = done.clone();
        let tx = tx.clone();
        workers.spawn_blocking(move || {
            let _permit = permit;
            if !config.progress {
                info!("Processing zone {}", path.display());
            }
            let res = process_zone(&path, &config);
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if config.progress {
                info!("processed {finished}/{total}");
            }
            match res {
                Ok(Some(zone)) => {
                    if tx.blocking_send(zone).is_err() {
                        error!("result collector has gone away");
                    }
                }
                Ok(None) => {}
                Err(err) => error!("{err}"),
            }
        });
    }
    drop(tx);

    while let Some(res) = workers.join_next().await {
        res?;
    }
    Ok(collector.await?)
}
