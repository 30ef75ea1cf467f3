use std::io;

use thiserror::Error;

/// Library-wide error type for tmay operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required profile field is empty.
    #[error("'{field}' is required. Please fill it in before generating.")]
    MissingField { field: String },

    /// Tone value is not one of the supported options.
    #[error("Invalid tone '{value}': must be one of {available}")]
    InvalidTone { value: String, available: String },

    /// Required environment variable is not set.
    #[error("Google API Key not found in environment variables. Please set {0}.")]
    EnvironmentVariableMissing(String),

    /// Hosted model answered with an error.
    #[error("Model API error: {message}")]
    ModelApiError { message: String, status: Option<u16>, retry_after_ms: Option<u64> },

    /// Hosted model could not be reached (connect failure or timeout).
    #[error("Could not reach the model API: {message}")]
    ModelUnreachable { message: String, timed_out: bool },

    /// Hosted model returned no usable text.
    #[error("Model '{model}' returned an empty introduction")]
    EmptyResponse { model: String },

    /// Configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicit configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("Failed to parse profile file {path}: {details}")]
    YamlParseError { path: String, details: String },

    /// Prompt template rendering failed.
    #[error("Failed to render template {template}: {reason}")]
    PromptRenderError { template: String, reason: String },

    /// Output file already exists and overwrite was not requested.
    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    /// Generic input validation failure.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub fn model_api<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::ModelApiError { message: message.into(), status, retry_after_ms: None }
    }

    /// Provide an `io::ErrorKind`-like view for library callers.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingField { .. }
            | AppError::InvalidTone { .. }
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::YamlParseError { .. }
            | AppError::PromptRenderError { .. }
            | AppError::Validation(_) => io::ErrorKind::InvalidInput,
            AppError::EnvironmentVariableMissing(_) | AppError::ConfigNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::OutputExists(_) => io::ErrorKind::AlreadyExists,
            AppError::ModelUnreachable { timed_out: true, .. } => io::ErrorKind::TimedOut,
            AppError::ModelApiError { .. }
            | AppError::ModelUnreachable { .. }
            | AppError::EmptyResponse { .. } => io::ErrorKind::Other,
        }
    }
}
