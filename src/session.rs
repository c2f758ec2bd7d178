//! Per-slot invocation state and the caller-facing operations.
//!
//! The original UI has two independent contexts ("generate full doc" and
//! "suggest update"), each with its own loading flag, result, and error. The
//! [`Scribe`] service owns one state cell per slot; a view layer binds to
//! [`SlotState`] snapshots instead of hidden framework state.

use crate::config::{RetryPolicy, ScribeConfig};
use crate::error::ScribeResult;
use crate::llm::invoker::Invoker;
use crate::llm::transport::{GenerativeBackend, HttpBackend};
use crate::prompt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// The two independent UI contexts. Invocations on different slots may run
/// concurrently; they share no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Generate,
    Suggest,
}

/// Transient state of one slot, overwritten whenever a new invocation starts
/// on it. `result` and `error` are mutually exclusive at terminal state.
#[derive(Debug, Clone, Default)]
pub struct SlotState {
    pub loading: bool,
    pub result: Option<String>,
    pub error: Option<String>,
    /// Bumped on every start; terminal writes from a superseded invocation
    /// are discarded when the slot has moved on.
    pub generation: u64,
}

pub struct Scribe<B: GenerativeBackend> {
    invoker: Invoker<B>,
    generate: Arc<RwLock<SlotState>>,
    suggest: Arc<RwLock<SlotState>>,
}

impl Scribe<HttpBackend> {
    /// Wires the service to the real HTTP backend.
    pub fn from_config(config: ScribeConfig) -> ScribeResult<Self> {
        let policy = config.retry;
        Ok(Self::new(HttpBackend::new(config)?, policy))
    }
}

impl<B: GenerativeBackend> Scribe<B> {
    pub fn new(backend: B, policy: RetryPolicy) -> Self {
        Self {
            invoker: Invoker::new(backend, policy),
            generate: Arc::new(RwLock::new(SlotState::default())),
            suggest: Arc::new(RwLock::new(SlotState::default())),
        }
    }

    /// Snapshot of a slot's current state, for display.
    pub async fn slot_state(&self, slot: Slot) -> SlotState {
        self.cell(slot).read().await.clone()
    }

    /// Generates full documentation for one code blob. Empty input fails
    /// locally with a validation error; the slot is not touched and no
    /// network call is made.
    pub async fn generate_documentation(&self, source_code: &str) -> ScribeResult<String> {
        let prompt = prompt::documentation_prompt(source_code)?;
        self.run(Slot::Generate, prompt).await
    }

    /// Suggests a documentation update given two code versions. Either side
    /// empty fails locally, same as above.
    pub async fn suggest_update(
        &self,
        original_code: &str,
        updated_code: &str,
    ) -> ScribeResult<String> {
        let prompt = prompt::update_prompt(original_code, updated_code)?;
        self.run(Slot::Suggest, prompt).await
    }

    fn cell(&self, slot: Slot) -> &Arc<RwLock<SlotState>> {
        match slot {
            Slot::Generate => &self.generate,
            Slot::Suggest => &self.suggest,
        }
    }

    async fn run(&self, slot: Slot, prompt: String) -> ScribeResult<String> {
        let cell = self.cell(slot);

        let generation = {
            let mut state = cell.write().await;
            state.generation += 1;
            state.loading = true;
            state.result = None;
            state.error = None;
            state.generation
        };

        let outcome = self.invoker.invoke(&prompt).await;

        {
            let mut state = cell.write().await;
            if state.generation == generation {
                state.loading = false;
                match &outcome {
                    Ok(text) => state.result = Some(text.clone()),
                    Err(e) => state.error = Some(e.to_string()),
                }
            } else {
                // A newer invocation owns the slot now; its state wins. The
                // superseded caller still gets its own return value.
                debug!(
                    ?slot,
                    stale = generation,
                    current = state.generation,
                    "discarding stale invocation outcome"
                );
            }
        }

        outcome
    }
}
