//! Log file setup.
//!
//! The terminal belongs to the TUI while it runs, so diagnostics go to an append-only file.
//! Verbosity follows `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a subscriber is already installed.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
