//! The success half of a contract call.

use serde::{Deserialize, Serialize};

/// The new state plus the operation's result value.
///
/// Serializes to the host's success shape, `{ "state": ..., "result": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerResult<S> {
    /// State after the transition.
    pub state: S,
    /// Operation result. Mutators return `true`; readers return data.
    pub result: serde_json::Value,
}

impl<S> HandlerResult<S> {
    /// Create a new handler result.
    pub fn new(state: S, result: serde_json::Value) -> Self {
        Self { state, result }
    }
}
