use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Overrides the data directory (database and log file).
pub(crate) const DATA_DIR_ENV: &str = "BUNNYBUDGET_DATA_DIR";

const DB_FILE: &str = "bunnybudget.db";
const LOG_FILE: &str = "bunnybudget.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) db_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        Self::from_data_dir(&data_dir)
    }

    /// Resolve file locations under `data_dir`, creating it if needed.
    pub(crate) fn from_data_dir(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            db_path: data_dir.join(DB_FILE),
            log_path: data_dir.join(LOG_FILE),
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "bunnybudget", "BunnyBudget")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_from_data_dir_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        let config = Config::from_data_dir(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(config.db_path, dir.join("bunnybudget.db"));
        assert_eq!(config.log_path, dir.join("bunnybudget.log"));
    }

    #[test]
    fn test_from_data_dir_fails_on_file_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, "x").unwrap();
        assert!(Config::from_data_dir(&file).is_err());
    }
}
