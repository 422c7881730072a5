use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "FH_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Log file inside the data directory
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("fh.log")
}

/// Build the filter: `FH_LOG`, then the configured directive, then `warn`
pub fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Route tracing output to `<data_dir>/fh.log`. The terminal belongs to the
/// UI, so nothing is ever written to stdout or stderr.
pub fn init(data_dir: &Path, configured: Option<&str>) -> std::io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;

    // A global subscriber may already be installed (tests); keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
