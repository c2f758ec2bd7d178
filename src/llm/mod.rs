//! # LLM communication layer
//!
//! Everything between an assembled prompt and the text handed back to a UI
//! slot:
//!
//! ```text
//! prompt → invoker (retry loop) → transport (one HTTP attempt) → protocol (wire types)
//! ```
//!
//! - `protocol`: serde types for the `generateContent` wire format plus the
//!   Markdown fence stripper applied to successful replies.
//! - `transport`: the [`GenerativeBackend`] seam and its `reqwest`
//!   implementation; one call is one network attempt, no retrying here.
//! - `invoker`: the bounded retry loop with exponential backoff.

pub mod invoker;
pub mod protocol;
pub mod transport;

pub use invoker::Invoker;
pub use protocol::{strip_markdown_fence, GenerateRequest, GenerateResponse};
pub use transport::{GenerativeBackend, HttpBackend};
