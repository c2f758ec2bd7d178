//! Single-attempt HTTP transport. Retrying lives in [`crate::llm::invoker`];
//! one call to [`GenerativeBackend::generate`] is exactly one network request.

use crate::config::ScribeConfig;
use crate::error::{ScribeError, ScribeResult};
use crate::llm::protocol::{GenerateRequest, GenerateResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Seam between the retry loop and the actual API, so tests can script
/// outcomes without a network.
#[async_trait::async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Performs exactly one generation attempt for the given prompt and
    /// returns the raw reply text (fence stripping happens in the invoker).
    async fn generate(&self, prompt: &str) -> ScribeResult<String>;
}

pub struct HttpBackend {
    client: Client,
    config: ScribeConfig,
}

impl HttpBackend {
    pub fn new(config: ScribeConfig) -> ScribeResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ScribeError::Network {
                detail: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait::async_trait]
impl GenerativeBackend for HttpBackend {
    async fn generate(&self, prompt: &str) -> ScribeResult<String> {
        let endpoint = self.config.endpoint()?;
        let body = GenerateRequest::from_prompt(prompt);

        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScribeError::Network {
                        detail: "Request timeout - the API took too long to respond".to_string(),
                    }
                } else if e.is_connect() {
                    ScribeError::Network {
                        detail: "Connection error - unable to reach the API".to_string(),
                    }
                } else {
                    ScribeError::Network {
                        detail: format!("Network error: {}", e),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(classify_failure(status.as_u16(), &error_text));
        }

        let reply: GenerateResponse =
            response
                .json()
                .await
                .map_err(|e| ScribeError::MalformedResponse {
                    reason: format!("Failed to parse API response as JSON: {}", e),
                })?;

        match reply.text() {
            Some(text) if !text.trim().is_empty() => {
                debug!(reply_chars = text.len(), "generation request succeeded");
                Ok(text.to_string())
            }
            Some(_) => Err(ScribeError::MalformedResponse {
                reason: "API returned empty content".to_string(),
            }),
            None => Err(ScribeError::MalformedResponse {
                reason: "Response missing candidates[0].content.parts[0].text".to_string(),
            }),
        }
    }
}

/// Maps a non-success status and its raw body to the error handed to the
/// retry loop. Prefers the structured API error body when one parses.
fn classify_failure(status: u16, body: &str) -> ScribeError {
    let detail = serde_json::from_str::<GenerateResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .map(|e| e.summary())
        .unwrap_or_else(|| body.to_string());

    match status {
        401 => ScribeError::Http {
            status,
            detail: "Authentication failed - check your API key".to_string(),
        },
        403 => ScribeError::Http {
            status,
            detail: "Access forbidden - insufficient permissions".to_string(),
        },
        429 => ScribeError::Http {
            status,
            detail: "Rate limit exceeded - too many requests".to_string(),
        },
        _ => ScribeError::Http { status, detail },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_parts(error: ScribeError) -> (u16, String) {
        match error {
            ScribeError::Http { status, detail } => (status, detail),
            other => panic!("expected Http, got {:?}", other),
        }
    }

    #[test]
    fn auth_and_rate_statuses_map_to_distinct_messages() {
        let (status, detail) = http_parts(classify_failure(401, ""));
        assert_eq!(status, 401);
        assert!(detail.contains("API key"));

        let (status, detail) = http_parts(classify_failure(403, ""));
        assert_eq!(status, 403);
        assert!(detail.contains("forbidden"));

        let (status, detail) = http_parts(classify_failure(429, ""));
        assert_eq!(status, 429);
        assert!(detail.contains("Rate limit"));
    }

    #[test]
    fn other_statuses_prefer_the_parsed_error_body() {
        let body = r#"{"error":{"code":500,"message":"Internal error","status":"INTERNAL"}}"#;
        let (status, detail) = http_parts(classify_failure(500, body));
        assert_eq!(status, 500);
        assert_eq!(detail, "Internal error (INTERNAL)");
    }

    #[test]
    fn unparseable_error_body_falls_back_to_raw_text() {
        let (status, detail) = http_parts(classify_failure(502, "Bad Gateway"));
        assert_eq!(status, 502);
        assert_eq!(detail, "Bad Gateway");
    }
}
