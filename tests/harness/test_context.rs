//! Shared testing harness for `tmay` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `tmay` binary.
    ///
    /// The API key variable is cleared so tests opt in explicitly.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tmay").expect("Failed to locate tmay binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove(API_KEY_ENV)
            .env_remove("RUST_LOG");
        cmd
    }

    /// `cli()` with every profile field supplied as flags.
    pub(crate) fn cli_with_profile(&self, subcommand: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg(subcommand).args(full_profile_args());
        cmd
    }

    /// `cli()` with every profile field supplied except `flag`.
    pub(crate) fn cli_with_profile_except(&self, subcommand: &str, flag: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg(subcommand).args(profile_args_without(flag));
        cmd
    }

    /// Write `tmay.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("tmay.toml"), content).expect("Failed to write tmay.toml");
    }

    /// Write a file relative to the work directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}

/// Flags for a complete profile using the form's example values.
pub(crate) fn full_profile_args() -> Vec<&'static str> {
    vec![
        "--nickname",
        "Maverick",
        "--country",
        "USA",
        "--job-role",
        "Software Engineer",
        "--hobbies",
        "Gaming, Cooking, Painting",
        "--fun-fact",
        "I once backpacked across Europe",
        "--catchphrase",
        "Let's rock!",
        "--tone",
        "Friendly",
    ]
}

/// `full_profile_args()` with `flag` and its value left out.
pub(crate) fn profile_args_without(flag: &str) -> Vec<&'static str> {
    let args = full_profile_args();
    let mut kept = Vec::with_capacity(args.len());
    for pair in args.chunks(2) {
        if pair[0] != flag {
            kept.extend_from_slice(pair);
        }
    }
    assert_ne!(kept.len(), args.len(), "unknown profile flag {}", flag);
    kept
}
