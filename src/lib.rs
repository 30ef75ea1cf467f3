//! tmay: Draft a personalized "Tell Me About Yourself" introduction with a hosted language model.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    GenerateOptions, GenerateOutcome, GenerateRequest, OutputTarget, generate, generate_at,
    load_profile_draft, preview_prompt, tones,
};
pub use domain::{AppError, Introduction, Profile, ProfileDraft, ProfileField, Tone};
