//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, ModelApiConfig};
use crate::ports::{GenerationRequest, GenerationResponse, TextGenerator};

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const DEFAULT_STATUS_MESSAGE: &str = "Model API request failed";

/// HTTP transport for the hosted model.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by `RetryingTextGenerator`.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    config: ModelApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_url", &self.config.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ModelApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::model_api(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { api_key, config: config.clone(), client })
    }

    /// Create from the environment variable named by `config.api_key_env`.
    pub fn from_env(config: &ModelApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(config.api_key_env.clone()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, model: &str, request: &ApiRequest) -> Result<GenerationResponse, AppError> {
        let url = self.config.generate_content_url(model)?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);
        let body_text = response.text().map_err(transport_error)?;

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| {
                    AppError::model_api(format!("Failed to parse response: {}", e), Some(status.as_u16()))
                })?;

            let text = api_response.first_candidate_text().ok_or_else(|| {
                let message = match api_response.block_reason() {
                    Some(reason) => format!("Prompt was blocked by the model ({})", reason),
                    None => "No candidate text in response".to_string(),
                };
                AppError::model_api(message, Some(status.as_u16()))
            })?;

            return Ok(GenerationResponse {
                text,
                model: api_response.model_version.unwrap_or_else(|| model.to_string()),
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::ModelApiError { message, status: Some(status.as_u16()), retry_after_ms })
    }
}

/// Map a reqwest failure, keeping connect and timeout failures apart from
/// everything else so the retry layer can act on them.
fn transport_error(err: reqwest::Error) -> AppError {
    let message = error_chain(&err);
    if err.is_timeout() || err.is_connect() || err.is_request() {
        AppError::ModelUnreachable { message, timed_out: err.is_timeout() }
    } else {
        AppError::model_api(format!("HTTP request failed: {}", message), None)
    }
}

/// reqwest's `Display` omits the underlying cause; append each source.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ApiResponse {
    fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().filter_map(|part| part.text.as_deref()).collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }

    fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

impl TextGenerator for HttpGeminiClient {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        let api_request = ApiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(request.prompt) }],
            }],
            generation_config: GenerationConfig { temperature: request.temperature },
        };

        self.send_request(&request.model, &api_request)
    }
}
