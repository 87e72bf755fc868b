#![deny(missing_docs)]
//! Owner-gated source evolution for covenant contracts.
//!
//! A contract's `evolve` field names the source the host should load for
//! the next interaction. Covenant stores it and never interprets it.
//!
//! [`evolve`] checks ownership itself before it looks at the payload, so
//! the `evolve` operation is owner-only no matter how it is mounted.

use covenant_guard::{Owned, require_owner};
use covenant_types::{ContractError, Interaction, Mixin, Operation, handler_fn};
use serde_json::Value;

/// State that carries an optional code reference.
pub trait HasEvolve {
    /// The current code reference, if any.
    fn evolve(&self) -> Option<&str>;

    /// Replace the code reference.
    fn set_evolve(&mut self, code_ref: String);
}

/// Point the contract at new source.
///
/// Fails with `Unauthorized` for anyone but the owner, then with
/// [`ContractError::MissingCodeRef`] when `value` is missing, not a string,
/// or empty. Returns `true`.
pub fn evolve<S>(state: &mut S, action: &Interaction) -> Result<Value, ContractError>
where
    S: Owned + HasEvolve + ?Sized,
{
    require_owner(state, &action.caller)?;
    let code_ref = match action.input.get("value") {
        Some(Value::String(value)) if !value.is_empty() => value.clone(),
        _ => return Err(ContractError::MissingCodeRef),
    };
    state.set_evolve(code_ref);
    Ok(Value::Bool(true))
}

/// Mixin contributing the `evolve` operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evolvable;

impl<S: Owned + HasEvolve + 'static> Mixin<S> for Evolvable {
    fn name(&self) -> &'static str {
        "evolvable"
    }

    fn operations(&self) -> Vec<Operation<S>> {
        vec![Operation::write("evolve", handler_fn(evolve::<S>))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_types::Address;
    use covenant_types::test_utils::{ALICE, OWNER, action};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
    struct License {
        owner: Address,
        #[serde(default)]
        evolve: Option<String>,
    }

    impl Owned for License {
        fn owner(&self) -> &Address {
            &self.owner
        }

        fn set_owner(&mut self, owner: Address) {
            self.owner = owner;
        }
    }

    impl HasEvolve for License {
        fn evolve(&self) -> Option<&str> {
            self.evolve.as_deref()
        }

        fn set_evolve(&mut self, code_ref: String) {
            self.evolve = Some(code_ref);
        }
    }

    fn license() -> License {
        serde_json::from_value(json!({ "owner": OWNER })).unwrap()
    }

    #[test]
    fn owner_evolves() {
        let mut state = license();
        let out = evolve(&mut state, &action(OWNER, json!({ "function": "evolve", "value": "src-2" }))).unwrap();
        assert_eq!(out, json!(true));
        assert_eq!(HasEvolve::evolve(&state), Some("src-2"));
    }

    #[test]
    fn non_owner_is_rejected_before_payload_check() {
        let mut state = license();
        let err = evolve(&mut state, &action(ALICE, json!({ "function": "evolve" }))).unwrap_err();
        assert_eq!(err, ContractError::unauthorized("the contract owner"));
        assert_eq!(state, license());
    }

    #[test]
    fn owner_needs_a_reference() {
        let mut state = license();
        for input in [
            json!({ "function": "evolve" }),
            json!({ "function": "evolve", "value": "" }),
            json!({ "function": "evolve", "value": 42 }),
            json!({ "function": "evolve", "value": null }),
        ] {
            let err = evolve(&mut state, &action(OWNER, input)).unwrap_err();
            assert_eq!(err, ContractError::MissingCodeRef);
        }
        assert_eq!(state.evolve, None);
    }

    #[test]
    fn mixin_exposes_one_write() {
        let ops = Mixin::<License>::operations(&Evolvable);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name, "evolve");
        assert_eq!(ops[0].access, covenant_types::Access::Write);
    }
}
