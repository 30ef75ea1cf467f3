mod app_config;
pub mod loader;

pub use app_config::{AppConfig, ModelApiConfig, OutputConfig, validate_model_id};
