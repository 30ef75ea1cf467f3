//! Profile input collection.
//!
//! Values come from an optional YAML profile file overlaid with flags. Anything
//! still missing is asked for interactively when a terminal is attached.

use std::io::{ErrorKind, IsTerminal};
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, Profile, ProfileDraft, ProfileField, Tone};

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Name (fun alias or nickname)
    #[arg(long)]
    pub nickname: Option<String>,
    /// Country of origin
    #[arg(long)]
    pub country: Option<String>,
    /// Job role (what's your hustle?)
    #[arg(long)]
    pub job_role: Option<String>,
    /// Hobbies or interests
    #[arg(long)]
    pub hobbies: Option<String>,
    /// Fun fact or unique detail
    #[arg(long)]
    pub fun_fact: Option<String>,
    /// Favorite emoji or catchphrase
    #[arg(long)]
    pub catchphrase: Option<String>,
    /// Tone of the introduction (see `tmay tones`)
    #[arg(short, long)]
    pub tone: Option<Tone>,
    /// YAML file with profile fields; flags override its values
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
    /// Fail on missing fields instead of prompting
    #[arg(long)]
    pub no_input: bool,
}

impl ProfileArgs {
    fn into_draft(self) -> Result<(ProfileDraft, bool), AppError> {
        let base = match &self.profile {
            Some(path) => crate::app::api::load_profile_draft(path)?,
            None => ProfileDraft::default(),
        };

        let overlay = ProfileDraft {
            nickname: self.nickname,
            country: self.country,
            job_role: self.job_role,
            hobbies: self.hobbies,
            fun_fact: self.fun_fact,
            catchphrase: self.catchphrase,
            tone: self.tone,
        };

        let interactive = !self.no_input && std::io::stdin().is_terminal();
        Ok((base.merge(overlay), interactive))
    }
}

/// Resolve a complete profile. Returns `None` if the user cancelled a prompt.
pub fn resolve_profile(args: ProfileArgs) -> Result<Option<Profile>, AppError> {
    let (mut draft, interactive) = args.into_draft()?;

    let missing = draft.missing_fields();
    if interactive && !missing.is_empty() {
        for field in missing {
            match prompt_field(field)? {
                Some(value) => draft.set(field, value),
                None => return Ok(None),
            }
        }

        if draft.tone.is_none() {
            match prompt_tone()? {
                Some(tone) => draft.tone = Some(tone),
                None => return Ok(None),
            }
        }
    }

    draft.complete().map(Some)
}

fn prompt_field(field: ProfileField) -> Result<Option<String>, AppError> {
    let result = Input::<String>::new()
        .with_prompt(format!("{} ({})", field.label(), field.placeholder()))
        .validate_with(|value: &String| -> Result<(), &'static str> {
            if value.trim().is_empty() { Err("This field is required") } else { Ok(()) }
        })
        .interact_text();

    cancelled_as_none(result.map(Some), || format!("Failed to read {}", field.key()))
}

fn prompt_tone() -> Result<Option<Tone>, AppError> {
    let items: Vec<&str> = Tone::ALL.iter().map(|tone| tone.label()).collect();
    let selection = Select::new()
        .with_prompt("Tone")
        .items(&items)
        .default(0)
        .interact_opt();

    // Esc/q yield `None`; Ctrl-C surfaces as an interrupted read.
    let selection = cancelled_as_none(selection, || "Failed to select tone".to_string())?;
    Ok(selection.and_then(|index| Tone::ALL.get(index).copied()))
}

/// Treat an interrupted terminal read (Ctrl-C) as a cancelled prompt.
fn cancelled_as_none<T>(
    result: Result<Option<T>, DialoguerError>,
    context: impl FnOnce() -> String,
) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("{}: {}", context(), err))),
    }
}
