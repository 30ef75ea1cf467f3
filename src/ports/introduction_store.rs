use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for persisting generated introductions.
pub trait IntroductionStore {
    /// Write `contents` to `path`, returning the path written.
    ///
    /// Fails with `AppError::OutputExists` if the file exists and `overwrite` is false.
    fn save(&self, path: &Path, contents: &str, overwrite: bool) -> Result<PathBuf, AppError>;
}
