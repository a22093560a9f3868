//! Setting up log output.
#![cfg(feature = "cli")]
#![cfg_attr(docsrs, doc(cfg(feature = "cli")))]

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by zonescan.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. to see every record that could not be read:
///   RUST_LOG=zonescan=trace
///
/// If `verbose` is set, the default level is DEBUG, otherwise it is INFO.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_ids(true)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
