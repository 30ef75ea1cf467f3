use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::IntroductionStore;

/// In-memory store keyed by path.
#[derive(Clone, Default)]
pub struct MemoryIntroductionStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryIntroductionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), contents.to_string());
        self
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl IntroductionStore for MemoryIntroductionStore {
    fn save(&self, path: &Path, contents: &str, overwrite: bool) -> Result<PathBuf, AppError> {
        let mut files = self.files.lock().unwrap();
        if files.contains_key(path) && !overwrite {
            return Err(AppError::OutputExists(path.display().to_string()));
        }
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(path.to_path_buf())
    }
}
