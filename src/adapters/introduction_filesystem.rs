use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::IntroductionStore;

/// Saves introductions as plain files on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FilesystemIntroductionStore;

impl FilesystemIntroductionStore {
    pub fn new() -> Self {
        Self
    }
}

impl IntroductionStore for FilesystemIntroductionStore {
    fn save(&self, path: &Path, contents: &str, overwrite: bool) -> Result<PathBuf, AppError> {
        if path.is_dir() {
            return Err(AppError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }
        if path.exists() && !overwrite {
            return Err(AppError::OutputExists(path.display().to_string()));
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path.to_path_buf())
    }
}
