use thiserror::Error;

/// Everything that can go wrong between a user action and the generated text.
///
/// The UI only ever sees the rendered `Display` string; the structured
/// variants exist so the retry loop and the tests can tell failures apart.
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Input validation failed: {reason}")]
    Validation { reason: String },

    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("Network error: {detail}")]
    Network { detail: String },

    #[error("HTTP error {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("All {attempts} attempts failed. Last error: {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

pub type ScribeResult<T> = Result<T, ScribeError>;
