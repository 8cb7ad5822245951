//! Gemini `generateContent` client.
//!
//! Blocking HTTP over `reqwest`: generation is strictly sequential, so the
//! naming call is the one place a run waits. Each request carries a timeout
//! and failed requests are retried a fixed number of times with a fixed
//! delay.

use std::thread;

use reqwest::blocking::Client;
use tracing::{info, warn};

use super::{NameCandidate, NamingService};
use crate::core::NamingConfig;
use crate::error::NamingError;

/// Naming service backed by the Gemini REST API.
pub struct GeminiClient {
    client: Client,
    config: NamingConfig,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// A missing credential is not an error: the client is created but
    /// reports itself disabled.
    pub fn new(config: NamingConfig) -> Result<Self, NamingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NamingError::Config(format!("failed to build HTTP client: {e}")))?;

        if config.has_credential() {
            info!(model = %config.model, "naming service enabled");
        } else {
            warn!("GEMINI_API_KEY not set, cards will keep placeholder names");
        }

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request_once(&self, api_key: &str, prompt: &str) -> Result<Vec<NameCandidate>, NamingError> {
        let body = serde_json::json!({
            "contents": [
                {"parts": [{"text": prompt}]}
            ],
            "generationConfig": {
                "candidateCount": self.config.candidate_count
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| NamingError::Transient(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(NamingError::Transient(format!(
                "Gemini returned {status}: {error_body}"
            )));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| NamingError::Transient(format!("Gemini response parse failed: {e}")))?;

        Ok(extract_candidates(&json))
    }
}

impl NamingService for GeminiClient {
    fn is_enabled(&self) -> bool {
        self.config.has_credential()
    }

    fn complete(&self, prompt: &str) -> Result<Vec<NameCandidate>, NamingError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| NamingError::Config("GEMINI_API_KEY not set".to_owned()))?;

        let attempts = self.config.attempts.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match self.request_once(api_key, prompt) {
                Ok(candidates) => return Ok(candidates),
                Err(e) => {
                    warn!(attempt, attempts, error = %e, "naming request failed");
                    last_error = Some(e);
                    if attempt < attempts {
                        thread::sleep(self.config.retry_delay);
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| NamingError::Transient("no attempts made".to_owned())))
    }
}

/// Pull candidate texts out of a `generateContent` response.
///
/// A candidate without text parts (blocked by safety filters, for example)
/// becomes a malformed candidate rather than being dropped.
fn extract_candidates(json: &serde_json::Value) -> Vec<NameCandidate> {
    let Some(candidates) = json.get("candidates").and_then(serde_json::Value::as_array) else {
        return Vec::new();
    };

    candidates
        .iter()
        .map(|candidate| {
            let text: Option<String> = candidate
                .get("content")
                .and_then(|c| c.get("parts"))
                .and_then(serde_json::Value::as_array)
                .map(|parts| {
                    parts
                        .iter()
                        .filter_map(|p| p.get("text").and_then(serde_json::Value::as_str))
                        .collect::<String>()
                })
                .filter(|text| !text.is_empty());
            NameCandidate { text }
        })
        .collect()
}
