//! Hosted text generation port definition.

use crate::domain::AppError;

/// Request to generate text from a prompt.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Prompt sent verbatim to the model.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Text returned by a generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    pub text: String,
    /// Model that produced the text, as reported by the backend.
    pub model: String,
}

/// Port for text generation backends.
pub trait TextGenerator {
    /// Generate text for a single prompt.
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        (**self).generate(request)
    }
}
