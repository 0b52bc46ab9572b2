use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directives, e.g. `BUNNYBUDGET_LOG=bunnybudget=debug`.
pub(crate) const LOG_ENV: &str = "BUNNYBUDGET_LOG";

const DEFAULT_FILTER: &str = "bunnybudget=info";

/// Send tracing output to `log_path`. Stdout belongs to the TUI and CLI, so
/// nothing is written to the terminal.
pub(crate) fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "bunnybudget starting");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_init_writes_to_log_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bunnybudget.log");
        init(&path).unwrap();
        tracing::warn!("hello from the log test");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("hello from the log test"));
        // A second subscriber cannot be installed.
        assert!(init(&path).is_err());
    }
}
