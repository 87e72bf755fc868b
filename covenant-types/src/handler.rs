//! The Handler interface — one mutator or reader over a state type.

use crate::{action::Interaction, error::ContractError};
use serde_json::Value;

/// A single operation body.
///
/// Handlers receive exclusive access to the state for the duration of one
/// call. They MUST validate the whole payload before touching the state: a
/// handler that returns `Err` leaves the state exactly as it found it.
///
/// Handlers carry no authorization of their own. Authorization is attached
/// from the outside when a variant builds its dispatch table.
pub trait Handler<S>: Send + Sync {
    /// Run the operation and return its result value.
    fn call(&self, state: &mut S, action: &Interaction) -> Result<Value, ContractError>;
}

/// Wrapper that implements `Handler` for a closure.
struct HandlerFn<F> {
    f: F,
}

impl<S, F> Handler<S> for HandlerFn<F>
where
    F: Fn(&mut S, &Interaction) -> Result<Value, ContractError> + Send + Sync,
{
    fn call(&self, state: &mut S, action: &Interaction) -> Result<Value, ContractError> {
        (self.f)(state, action)
    }
}

/// Create a handler from a closure.
///
/// # Example
///
/// ```
/// use covenant_types::{Handler, Input, Interaction, handler_fn};
/// use serde_json::Value;
///
/// let rename = handler_fn(|title: &mut String, action: &Interaction| {
///     *title = action.input.string("title")?.to_owned();
///     Ok(Value::Bool(true))
/// });
///
/// let mut title = String::new();
/// let action = Interaction::new("alice", Input::new("rename").with("title", "Hello"));
/// rename.call(&mut title, &action).unwrap();
/// assert_eq!(title, "Hello");
/// ```
#[must_use]
pub fn handler_fn<S, F>(f: F) -> impl Handler<S>
where
    F: Fn(&mut S, &Interaction) -> Result<Value, ContractError> + Send + Sync,
{
    HandlerFn { f }
}
