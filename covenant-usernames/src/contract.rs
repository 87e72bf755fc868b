//! The Usernames contract.

use crate::policy::{UsernamePolicy, Validator};
use crate::state::UsernamesState;
use covenant_dispatch::{DispatchTable, guard};
use covenant_guard::Unguarded;
use covenant_types::{
    Access, Contract, ContractError, HandlerResult, Interaction, handler_fn,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Username registry contract.
///
/// Every operation is open: callers can only ever touch their own entry,
/// so there is nothing for a guard to protect.
#[derive(Debug)]
pub struct Usernames {
    table: DispatchTable<UsernamesState>,
    policy: UsernamePolicy,
}

impl Usernames {
    /// A registry with the default [`UsernamePolicy`].
    pub fn new() -> Self {
        Self::with_policy(UsernamePolicy::default())
    }

    /// A registry with custom length bounds.
    pub fn with_policy(policy: UsernamePolicy) -> Self {
        let validator = Arc::new(Validator::new(policy));
        let mut table = DispatchTable::new("usernames");

        table.route(
            "register",
            Access::Write,
            guard(
                Unguarded,
                handler_fn(move |state: &mut UsernamesState, action: &Interaction| {
                    let username = action
                        .input
                        .get("username")
                        .and_then(Value::as_str)
                        .ok_or_else(|| ContractError::InvalidUsername("must be a string".into()))?;
                    validator.check(username)?;
                    state.register(&action.caller, username)?;
                    Ok(Value::Bool(true))
                }),
            ),
        );
        table.route(
            "release",
            Access::Write,
            guard(
                Unguarded,
                handler_fn(|state: &mut UsernamesState, action: &Interaction| {
                    state.release(&action.caller);
                    Ok(Value::Bool(true))
                }),
            ),
        );
        table.route(
            "usernameOf",
            Access::Read,
            guard(
                Unguarded,
                handler_fn(|state: &mut UsernamesState, action: &Interaction| {
                    let address = action.input.address("address")?;
                    Ok(json!(state.username_of(&address)))
                }),
            ),
        );

        Self { table, policy }
    }

    /// The naming rules in force.
    pub fn policy(&self) -> UsernamePolicy {
        self.policy
    }

    /// The underlying dispatch table.
    pub fn table(&self) -> &DispatchTable<UsernamesState> {
        &self.table
    }

    /// Consume a state, apply one interaction and return the new state.
    pub fn dispatch(
        &self,
        state: UsernamesState,
        action: &Interaction,
    ) -> Result<HandlerResult<UsernamesState>, ContractError> {
        self.table.dispatch(state, action)
    }
}

impl Default for Usernames {
    fn default() -> Self {
        Self::new()
    }
}

impl Contract for Usernames {
    type State = UsernamesState;

    fn name(&self) -> &str {
        self.table.name()
    }

    fn operations(&self) -> Vec<&'static str> {
        self.table.operations()
    }

    fn apply(&self, state: &mut UsernamesState, action: &Interaction) -> Result<Value, ContractError> {
        self.table.apply(state, action)
    }
}
