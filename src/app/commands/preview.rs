use crate::domain::{AppError, Profile, render_prompt};

/// Render the prompt for a profile without contacting the model.
pub fn execute(profile: &Profile) -> Result<String, AppError> {
    profile.validate()?;
    render_prompt(profile)
}
