//! Retries transient text-generation failures.
//!
//! Only two kinds of failure are worth another attempt: the model could not be
//! reached at all, or it answered with a status that signals overload
//! (408, 429, 5xx). Everything else is returned on the first failure.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::{AppError, ModelApiConfig};
use crate::ports::{GenerationRequest, GenerationResponse, TextGenerator};

const MAX_BACKOFF: Duration = Duration::from_secs(30);
const MAX_LOG_CHARS: usize = 300;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &ModelApiConfig) -> Self {
        let base_delay = Duration::from_millis(config.retry_delay_ms.max(1));
        Self { attempts: config.max_retries.max(1), base_delay, max_delay: MAX_BACKOFF.max(base_delay) }
    }

    /// Wait before retry number `retry` (0 for the first retry).
    fn wait_for(&self, retry: u32, server_delay: Option<Duration>) -> Duration {
        match server_delay {
            Some(delay) => delay.min(self.max_delay),
            None => self.backoff(retry),
        }
    }

    fn backoff(&self, retry: u32) -> Duration {
        let doubled = self.base_delay.saturating_mul(2_u32.saturating_pow(retry.min(16)));
        let capped = doubled.min(self.max_delay);
        (capped + jitter(capped)).min(self.max_delay)
    }
}

/// What to do after a failed attempt.
#[derive(Debug, PartialEq, Eq)]
enum Disposition {
    Retry { server_delay: Option<Duration> },
    Fail,
}

fn disposition(error: &AppError) -> Disposition {
    match error {
        AppError::ModelUnreachable { .. } => Disposition::Retry { server_delay: None },
        AppError::ModelApiError { status: Some(status), retry_after_ms, .. }
            if is_transient_status(*status) =>
        {
            Disposition::Retry { server_delay: retry_after_ms.map(Duration::from_millis) }
        }
        _ => Disposition::Fail,
    }
}

fn is_transient_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500..=599)
}

/// Up to a quarter of `delay`, seeded from the clock.
fn jitter(delay: Duration) -> Duration {
    let spread = (delay.as_millis() / 4) as u64;
    if spread == 0 {
        return Duration::ZERO;
    }
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::from(elapsed.subsec_nanos()))
        .unwrap_or_default();
    Duration::from_millis(seed % spread)
}

/// Single-line, bounded rendering of an error for the retry log.
fn log_summary(error: &AppError) -> String {
    let text = match error {
        AppError::ModelApiError { status: Some(status), .. } => format!("[HTTP {}] {}", status, error),
        _ => error.to_string(),
    };
    let flattened: String = text.chars().map(|ch| if ch.is_control() { ' ' } else { ch }).collect();
    let mut summary = flattened.split_whitespace().collect::<Vec<_>>().join(" ");
    if let Some((cut, _)) = summary.char_indices().nth(MAX_LOG_CHARS) {
        summary.truncate(cut);
        summary.push_str("...");
    }
    summary
}

/// Decorator that re-issues requests the inner generator failed transiently.
pub struct RetryingTextGenerator {
    inner: Box<dyn TextGenerator>,
    policy: RetryPolicy,
}

impl RetryingTextGenerator {
    pub fn new(inner: Box<dyn TextGenerator>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl TextGenerator for RetryingTextGenerator {
    fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        let mut attempt = 1;
        loop {
            let error = match self.inner.generate(request.clone()) {
                Ok(response) => return Ok(response),
                Err(error) => error,
            };

            let Disposition::Retry { server_delay } = disposition(&error) else {
                return Err(error);
            };
            if attempt >= self.policy.attempts {
                return Err(error);
            }

            let wait = self.policy.wait_for(attempt - 1, server_delay);
            log::warn!(
                "Model request failed (attempt {}/{}), retrying in {} ms: {}",
                attempt,
                self.policy.attempts,
                wait.as_millis(),
                log_summary(&error)
            );
            thread::sleep(wait);
            attempt += 1;
        }
    }
}
