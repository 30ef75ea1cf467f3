mod introduction_store;
mod text_generator;

pub use introduction_store::IntroductionStore;
pub use text_generator::{GenerationRequest, GenerationResponse, TextGenerator};
