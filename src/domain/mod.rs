pub mod configuration;
pub mod error;
pub mod introduction;
pub mod profile;
pub mod prompt;
pub mod tone;

pub use configuration::{AppConfig, ModelApiConfig, OutputConfig};
pub use error::AppError;
pub use introduction::{Introduction, default_file_name};
pub use profile::{Profile, ProfileDraft, ProfileField};
pub use prompt::{render_prompt, render_simulated_introduction};
pub use tone::Tone;
