use crate::error::{ScribeError, ScribeResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

/// Runtime configuration for the documentation engine.
///
/// The credential is injected from the environment rather than compiled in;
/// `from_env` is the supported entry point for binaries, while tests build
/// the struct directly.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScribeConfig {
    /// Base URL of the generative-language API, without a trailing model path.
    pub api_url: String,
    /// Credential attached to every request as the `key` query parameter.
    pub api_key: String,
    /// Model identifier, e.g. `gemini-2.0-flash`.
    pub model: String,
    pub request_timeout_secs: u64,
    pub retry: RetryPolicy,
}

/// Bounds for the retry loop around a single invocation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    /// Delay slept after a failed attempt (0-based) before the next one:
    /// `base_delay_ms * 2^attempt`, no jitter. Saturates on pathological
    /// configurations instead of overflowing.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.base_delay_ms.saturating_mul(1u64 << attempt.min(32)))
    }
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            request_timeout_secs: 30,
            retry: RetryPolicy::default(),
        }
    }
}

impl ScribeConfig {
    /// Loads configuration from the environment (and a `.env` file when
    /// present). Required variables are collected together so a single error
    /// names everything that is missing.
    pub fn from_env() -> ScribeResult<Self> {
        dotenv::dotenv().ok();

        let required = [
            ("SCRIBE_API_URL", "api_url"),
            ("SCRIBE_API_KEY", "api_key"),
            ("SCRIBE_MODEL", "model"),
        ];

        let mut missing = Vec::new();
        let mut values = Vec::new();
        for (var, _) in &required {
            match env::var(var) {
                Ok(value) if !value.trim().is_empty() => values.push(value),
                _ => missing.push(*var),
            }
        }

        if !missing.is_empty() {
            return Err(ScribeError::Config {
                reason: format!(
                    "Missing required environment variables: {}",
                    missing.join(", ")
                ),
            });
        }

        let mut config = Self {
            api_url: values[0].clone(),
            api_key: values[1].clone(),
            model: values[2].clone(),
            ..Self::default()
        };

        if let Ok(value) = env::var("SCRIBE_MAX_ATTEMPTS") {
            config.retry.max_attempts = parse_var("SCRIBE_MAX_ATTEMPTS", &value)?;
        }
        if let Ok(value) = env::var("SCRIBE_BASE_DELAY_MS") {
            config.retry.base_delay_ms = parse_var("SCRIBE_BASE_DELAY_MS", &value)?;
        }
        if let Ok(value) = env::var("SCRIBE_TIMEOUT_SECS") {
            config.request_timeout_secs = parse_var("SCRIBE_TIMEOUT_SECS", &value)?;
        }

        Ok(config)
    }

    /// Full `generateContent` endpoint for the configured model, with the
    /// credential appended as a query parameter.
    pub fn endpoint(&self) -> ScribeResult<Url> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        );
        let mut url = Url::parse(&raw).map_err(|e| ScribeError::Config {
            reason: format!("Invalid API URL {:?}: {}", self.api_url, e),
        })?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> ScribeResult<T> {
    value.trim().parse().map_err(|_| ScribeError::Config {
        reason: format!("Invalid value for {}: {:?}", name, value),
    })
}
