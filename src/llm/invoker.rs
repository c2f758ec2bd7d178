//! Retrying request invoker: drives a bounded sequence of generation
//! attempts with exponential backoff between failures.

use crate::config::RetryPolicy;
use crate::error::{ScribeError, ScribeResult};
use crate::llm::protocol::strip_markdown_fence;
use crate::llm::transport::GenerativeBackend;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

pub struct Invoker<B: GenerativeBackend> {
    backend: B,
    policy: RetryPolicy,
}

impl<B: GenerativeBackend> Invoker<B> {
    pub fn new(backend: B, policy: RetryPolicy) -> Self {
        Self { backend, policy }
    }

    /// Runs up to `max_attempts` backend calls for one prompt.
    ///
    /// Stops at the first successful parse (never retries after success) and
    /// waits `base_delay_ms * 2^attempt` between failures. When the budget is
    /// spent, the terminal error names the attempt count and the last cause.
    #[instrument(skip(self, prompt), fields(request_id = %Uuid::new_v4(), prompt_chars = prompt.len()))]
    pub async fn invoke(&self, prompt: &str) -> ScribeResult<String> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut last_error = String::new();

        for attempt in 0..max_attempts {
            match self.backend.generate(prompt).await {
                Ok(text) => {
                    debug!(attempt, "generation attempt succeeded");
                    return Ok(strip_markdown_fence(&text));
                }
                Err(e) => {
                    warn!(attempt, error = %e, "generation attempt failed");
                    last_error = e.to_string();
                }
            }

            if attempt + 1 < max_attempts {
                tokio::time::sleep(self.policy.delay_before(attempt)).await;
            }
        }

        Err(ScribeError::Exhausted {
            attempts: max_attempts,
            last_error,
        })
    }
}
