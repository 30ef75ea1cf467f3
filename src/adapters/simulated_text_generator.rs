//! Offline text generator.

use crate::domain::{AppError, Profile, render_simulated_introduction};
use crate::ports::{GenerationRequest, GenerationResponse, TextGenerator};

pub const SIMULATED_MODEL: &str = "simulated";

/// Produces a canned introduction from the profile without any network call.
#[derive(Debug, Clone)]
pub struct SimulatedTextGenerator {
    profile: Profile,
}

impl SimulatedTextGenerator {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl TextGenerator for SimulatedTextGenerator {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        log::debug!("Simulating response for {} char prompt", request.prompt.len());
        Ok(GenerationResponse {
            text: render_simulated_introduction(&self.profile)?,
            model: SIMULATED_MODEL.to_string(),
        })
    }
}
