//! The (guard, handler) pair.

use covenant_types::{ContractError, Guard, Handler, Interaction};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A handler wrapped by a guard.
///
/// The guard runs first against the untouched state. If it fails, the
/// handler is never called and the guard's error propagates unchanged.
pub struct Guarded<S> {
    guard: Arc<dyn Guard<S>>,
    handler: Arc<dyn Handler<S>>,
}

impl<S> Guarded<S> {
    /// Pair an already shared guard with an already shared handler.
    pub fn new(guard: Arc<dyn Guard<S>>, handler: Arc<dyn Handler<S>>) -> Self {
        Self { guard, handler }
    }

    /// The guard in front of the handler.
    pub fn guard(&self) -> &Arc<dyn Guard<S>> {
        &self.guard
    }

    /// The guarded handler.
    pub fn handler(&self) -> &Arc<dyn Handler<S>> {
        &self.handler
    }
}

impl<S> Clone for Guarded<S> {
    fn clone(&self) -> Self {
        Self {
            guard: Arc::clone(&self.guard),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S> fmt::Debug for Guarded<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("requirement", &self.guard.requirement())
            .finish_non_exhaustive()
    }
}

impl<S> Handler<S> for Guarded<S> {
    fn call(&self, state: &mut S, action: &Interaction) -> Result<Value, ContractError> {
        self.guard.check(state, &action.caller)?;
        self.handler.call(state, action)
    }
}

/// Wrap `handler` so it only runs once `guard` passes.
///
/// # Example
///
/// ```ignore
/// let set_title = guard(OnlyOwner, handler_fn(|state: &mut Doc, action: &Interaction| {
///     state.title = action.input.string("title")?.to_owned();
///     Ok(Value::Bool(true))
/// }));
/// ```
pub fn guard<S>(guard: impl Guard<S> + 'static, handler: impl Handler<S> + 'static) -> Guarded<S> {
    Guarded::new(Arc::new(guard), Arc::new(handler))
}
