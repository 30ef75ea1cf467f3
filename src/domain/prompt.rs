//! Prompt rendering.
//!
//! Templates are embedded `.j2` assets rendered with minijinja in strict mode,
//! so a template referring to an unknown slot fails instead of emitting blanks.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, Profile};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

const INTRODUCTION_PROMPT: &str = "introduction_prompt.j2";
const SIMULATED_INTRODUCTION: &str = "simulated_introduction.j2";

/// Slot values exposed to templates.
#[derive(Debug, Serialize)]
struct TemplateVars<'a> {
    nickname: &'a str,
    country: &'a str,
    job_role: &'a str,
    hobbies: &'a str,
    fun_fact: &'a str,
    catchphrase: &'a str,
    tone: &'a str,
    tone_lower: String,
}

impl<'a> TemplateVars<'a> {
    fn from_profile(profile: &'a Profile) -> Self {
        Self {
            nickname: &profile.nickname,
            country: &profile.country,
            job_role: &profile.job_role,
            hobbies: &profile.hobbies,
            fun_fact: &profile.fun_fact,
            catchphrase: &profile.catchphrase,
            tone: profile.tone.label(),
            tone_lower: profile.tone.lowercase(),
        }
    }
}

/// Render the prompt sent to the hosted model.
pub fn render_prompt(profile: &Profile) -> Result<String, AppError> {
    render_asset(INTRODUCTION_PROMPT, profile)
}

/// Render the canned introduction used when running offline.
pub fn render_simulated_introduction(profile: &Profile) -> Result<String, AppError> {
    render_asset(SIMULATED_INTRODUCTION, profile)
}

fn render_asset(name: &str, profile: &Profile) -> Result<String, AppError> {
    let source = PROMPTS_DIR.get_file(name).and_then(|file| file.contents_utf8()).ok_or_else(
        || AppError::PromptRenderError {
            template: name.to_string(),
            reason: "embedded template is missing or not UTF-8".to_string(),
        },
    )?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(name, source).map_err(|e| AppError::PromptRenderError {
        template: name.to_string(),
        reason: e.to_string(),
    })?;

    let template = env.get_template(name).map_err(|e| AppError::PromptRenderError {
        template: name.to_string(),
        reason: e.to_string(),
    })?;

    template.render(TemplateVars::from_profile(profile)).map_err(|e| {
        AppError::PromptRenderError { template: name.to_string(), reason: e.to_string() }
    })
}
