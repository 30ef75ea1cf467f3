//! Configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "tmay.toml";

/// Resolve and load configuration.
///
/// An explicit path must exist. Otherwise `tmay.toml` in `work_dir` is used when
/// present, falling back to built-in defaults.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<AppConfig, AppError> {
    let path: PathBuf = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = work_dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                log::debug!("No {} found in {}; using defaults", CONFIG_FILE, work_dir.display());
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    log::debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
