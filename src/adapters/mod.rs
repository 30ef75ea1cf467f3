pub mod gemini_client_http;
pub mod introduction_filesystem;
pub mod simulated_text_generator;
pub mod text_generator_retrying;
