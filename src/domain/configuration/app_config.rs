//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration loaded from `tmay.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Hosted model configuration.
    #[serde(default)]
    pub model: ModelApiConfig,
    /// Where saved introductions go.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.model.validate()?;
        Ok(())
    }
}

/// Hosted model API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelApiConfig {
    /// Base URL of the generative language API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per request.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ModelApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ModelApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.base_url()?;
        validate_model_id(&self.model)?;
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("api_key_env must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error("temperature must be between 0.0 and 2.0"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::config_error("max_retries must be greater than 0"));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::config_error("retry_delay_ms must be greater than 0"));
        }
        Ok(())
    }

    /// Endpoint for a `generateContent` call against `model`.
    pub fn generate_content_url(&self, model: &str) -> Result<Url, AppError> {
        validate_model_id(model)?;
        let mut url = self.base_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::config_error("api_url cannot be used as a base URL"))?
            .pop_if_empty()
            .push("models")
            .push(&format!("{}:generateContent", model));
        Ok(url)
    }

    fn base_url(&self) -> Result<Url, AppError> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| AppError::config_error(format!("invalid api_url '{}': {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api_url must use http or https: {}",
                self.api_url
            )));
        }
        Ok(url)
    }
}

/// A model id is a single path segment such as `gemini-2.0-flash`.
pub fn validate_model_id(model: &str) -> Result<(), AppError> {
    if model.trim().is_empty() {
        return Err(AppError::config_error("model must not be empty"));
    }
    if model == "." || model == ".." || model.contains(['/', '\\', '?', '#', '%']) {
        return Err(AppError::config_error(format!("invalid model id '{}'", model)));
    }
    if model.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
        return Err(AppError::config_error(format!("invalid model id '{}'", model)));
    }
    Ok(())
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_key_env() -> String {
    "GOOGLE_API_KEY".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

/// Output configuration for saved introductions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for saved introductions when no explicit path is given.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { directory: default_output_directory() }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}
