//! Generate an introduction from a profile.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, Introduction, Profile, render_prompt};
use crate::ports::{GenerationRequest, IntroductionStore, TextGenerator};

/// Options for a single generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Model identifier passed to the generator.
    pub model: String,
    pub temperature: f32,
    /// Where to save the introduction, if anywhere.
    pub save_to: Option<PathBuf>,
    /// Replace an existing file at `save_to`.
    pub overwrite: bool,
}

/// Result of a generation.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub introduction: Introduction,
    pub saved_to: Option<PathBuf>,
}

impl GenerateOutcome {
    /// The prompt the introduction was generated from.
    pub fn prompt(&self) -> &str {
        &self.introduction.prompt
    }
}

pub fn execute<G, S>(
    ctx: &AppContext<G, S>,
    profile: &Profile,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    G: TextGenerator,
    S: IntroductionStore,
{
    profile.validate()?;
    let prompt = render_prompt(profile)?;

    let response = ctx.generator().generate(GenerationRequest {
        prompt: prompt.clone(),
        model: options.model.clone(),
        temperature: options.temperature,
    })?;

    let text = response.text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyResponse { model: response.model });
    }

    let introduction = Introduction::new(text, response.model, prompt);

    let saved_to = match &options.save_to {
        Some(path) => {
            Some(ctx.store().save(path, &introduction.file_contents(), options.overwrite)?)
        }
        None => None,
    };

    Ok(GenerateOutcome { introduction, saved_to })
}
