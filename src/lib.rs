//! Core engine of an AI documentation assistant.
//!
//! Takes user-supplied source code, forwards it to a hosted
//! generative-language API, and hands the generated Markdown back to the
//! caller. Two operations exist: generating full documentation for one code
//! blob, and suggesting a documentation update given an original and an
//! updated version. Each operation owns an independent UI slot with its own
//! loading / result / error state.

pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod session;

pub use config::{RetryPolicy, ScribeConfig};
pub use error::{ScribeError, ScribeResult};
pub use llm::{GenerativeBackend, HttpBackend, Invoker};
pub use session::{Scribe, Slot, SlotState};
