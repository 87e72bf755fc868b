//! The Contract protocol — a composed variant the host dispatches into.

use crate::{action::Interaction, error::ContractError, result::HandlerResult};
use serde_json::Value;

/// A concrete contract variant.
///
/// A contract owns no state. The host threads the state value through
/// every call: genesis in, the previous output in, and so on. Each call is
/// one atomic transition with no suspended or partial states.
pub trait Contract: Send + Sync {
    /// The variant's composed state.
    type State;

    /// Variant name used in logs.
    fn name(&self) -> &str;

    /// Every operation name this variant accepts, sorted.
    fn operations(&self) -> Vec<&'static str>;

    /// Apply one interaction to the state in place.
    ///
    /// On `Err` the state is unchanged: guards run first and every handler
    /// validates before it mutates.
    fn apply(&self, state: &mut Self::State, action: &Interaction) -> Result<Value, ContractError>;

    /// Consume a state, apply one interaction and hand back the new state.
    fn handle(
        &self,
        mut state: Self::State,
        action: &Interaction,
    ) -> Result<HandlerResult<Self::State>, ContractError> {
        let result = self.apply(&mut state, action)?;
        Ok(HandlerResult { state, result })
    }
}
