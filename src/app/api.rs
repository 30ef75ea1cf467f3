//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! adapter selection and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::gemini_client_http::HttpGeminiClient;
use crate::adapters::introduction_filesystem::FilesystemIntroductionStore;
use crate::adapters::simulated_text_generator::SimulatedTextGenerator;
use crate::adapters::text_generator_retrying::{RetryPolicy, RetryingTextGenerator};
use crate::app::{
    AppContext,
    commands::{generate, preview, tones},
};
use crate::domain::configuration::{loader, validate_model_id};
use crate::domain::{AppConfig, default_file_name};
use crate::ports::TextGenerator;

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::domain::{AppError, Introduction, Profile, ProfileDraft, ProfileField, Tone};

/// Where a generated introduction should be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Display only.
    #[default]
    None,
    /// Configured output directory with a name derived from the nickname.
    Default,
    /// Explicit file path.
    Path(PathBuf),
}

/// Everything needed for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub profile: Profile,
    /// Explicit configuration file.
    pub config_path: Option<PathBuf>,
    /// Overrides the configured model identifier.
    pub model: Option<String>,
    /// Use the simulated generator instead of the hosted model.
    pub offline: bool,
    pub output: OutputTarget,
    pub overwrite: bool,
}

/// Generate an introduction, resolving configuration from the current directory.
pub fn generate(request: GenerateRequest) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, request)
}

/// Generate an introduction, resolving configuration and relative paths from `work_dir`.
pub fn generate_at(
    work_dir: impl Into<PathBuf>,
    request: GenerateRequest,
) -> Result<GenerateOutcome, AppError> {
    let work_dir = work_dir.into();
    let profile = request.profile.normalized();
    profile.validate()?;

    let config = load_config_at(&work_dir, request.config_path.as_deref())?;
    let model = request.model.clone().unwrap_or_else(|| config.model.model.clone());
    validate_model_id(&model)?;

    let generator: Box<dyn TextGenerator> = if request.offline {
        Box::new(SimulatedTextGenerator::new(profile.clone()))
    } else {
        let client = HttpGeminiClient::from_env(&config.model)?;
        Box::new(RetryingTextGenerator::new(
            Box::new(client),
            RetryPolicy::from_config(&config.model),
        ))
    };
    log::info!(
        "Generating introduction with {}",
        if request.offline { "the simulated generator" } else { model.as_str() }
    );

    let save_to = resolve_output_path(&work_dir, &config, &profile, &request.output);
    let ctx = AppContext::new(generator, FilesystemIntroductionStore::new());
    let options = GenerateOptions {
        model,
        temperature: config.model.temperature,
        save_to,
        overwrite: request.overwrite,
    };

    generate::execute(&ctx, &profile, options)
}

/// Render the prompt for a profile without calling the model.
pub fn preview_prompt(profile: &Profile) -> Result<String, AppError> {
    preview::execute(&profile.normalized())
}

/// Tone options in menu order.
pub fn tones() -> Vec<Tone> {
    tones::list()
}

/// Load a profile draft from a YAML file.
pub fn load_profile_draft(path: &Path) -> Result<ProfileDraft, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::Validation(format!("Failed to read profile file {}: {}", path.display(), e))
    })?;
    ProfileDraft::from_yaml(&content, &path.display().to_string())
}

fn load_config_at(work_dir: &Path, explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let explicit = explicit.map(|path| absolutize(work_dir, path));
    loader::load_config(explicit.as_deref(), work_dir)
}

fn resolve_output_path(
    work_dir: &Path,
    config: &AppConfig,
    profile: &Profile,
    target: &OutputTarget,
) -> Option<PathBuf> {
    match target {
        OutputTarget::None => None,
        OutputTarget::Default => {
            let directory = absolutize(work_dir, &config.output.directory);
            Some(directory.join(default_file_name(&profile.nickname)))
        }
        OutputTarget::Path(path) => Some(absolutize(work_dir, path)),
    }
}

fn absolutize(work_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { work_dir.join(path) }
}
