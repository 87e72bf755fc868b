//! MemoryHost — an in-memory stand-in for the ledger.

use crate::kind::ContractKind;
use covenant_types::ContractError;
use serde_json::{Value, json};
use std::sync::Mutex;

/// Threads one contract's state across envelopes, the way a ledger would.
///
/// A call that fails leaves the committed state untouched, mirroring a host
/// that aborts the enclosing transaction.
#[derive(Debug)]
pub struct MemoryHost {
    kind: ContractKind,
    state: Mutex<Value>,
}

impl MemoryHost {
    /// Deploy `kind` with the given genesis state.
    pub fn new(kind: ContractKind, genesis: Value) -> Self {
        Self {
            kind,
            state: Mutex::new(genesis),
        }
    }

    /// The deployed variant.
    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    /// A copy of the committed state.
    pub fn state(&self) -> Value {
        self.lock().clone()
    }

    /// Submit `{ caller, input }` and commit the new state on success.
    pub fn interact(&self, caller: &str, input: Value) -> Result<Value, ContractError> {
        let mut state = self.lock();
        let mut output = self
            .kind
            .handle_json(state.clone(), json!({ "caller": caller, "input": input }))?;
        *state = output["state"].take();
        Ok(output["result"].take())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Value> {
        // a panicking test poisons the lock; the state itself is still whole
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
