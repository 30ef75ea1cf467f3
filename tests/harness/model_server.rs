//! Stand-in for the hosted model API.

use mockito::{Mock, Server, ServerGuard};

pub(crate) const MODEL: &str = "gemini-test";
pub(crate) const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

pub(crate) struct ModelServer {
    server: ServerGuard,
}

impl ModelServer {
    pub(crate) fn start() -> Self {
        Self { server: Server::new() }
    }

    /// `tmay.toml` content pointing at this server with fast retries.
    pub(crate) fn config_toml(&self) -> String {
        format!(
            r#"[model]
api_url = "{}/v1beta"
model = "{}"
timeout_secs = 5
max_retries = 2
retry_delay_ms = 1
"#,
            self.server.url(),
            MODEL
        )
    }

    /// Respond once with a single-candidate introduction.
    pub(crate) fn reply_with(&mut self, text: &str) -> Mock {
        let body = serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}],
            "modelVersion": "gemini-test-001"
        });
        self.server
            .mock("POST", GENERATE_PATH)
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    /// Respond `hits` times with an error status.
    pub(crate) fn fail_with(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        self.server
            .mock("POST", GENERATE_PATH)
            .with_status(status)
            .with_body(body)
            .expect(hits)
            .create()
    }
}
