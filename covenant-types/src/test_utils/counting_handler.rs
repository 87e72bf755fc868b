//! CountingHandler — records how many times it ran.

use crate::action::Interaction;
use crate::error::ContractError;
use crate::handler::Handler;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A handler that counts its invocations and returns `true`.
///
/// Clones share the counter, so a test can keep one clone and mount the
/// other behind a guard to prove a denied mutator never ran.
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    calls: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a handler with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `call` has run.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S> Handler<S> for CountingHandler {
    fn call(&self, _state: &mut S, _action: &Interaction) -> Result<serde_json::Value, ContractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::Value::Bool(true))
    }
}
