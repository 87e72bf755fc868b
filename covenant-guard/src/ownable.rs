//! Single-owner authorization.

use covenant_types::{Address, ContractError, Guard, Interaction, Mixin, Operation, handler_fn};
use serde_json::json;

/// State that carries exactly one owner.
pub trait Owned {
    /// The current owner.
    fn owner(&self) -> &Address;

    /// Replace the owner. Only reachable through an owner-checked path.
    fn set_owner(&mut self, owner: Address);
}

/// Pass iff `caller` is byte-for-byte the state's owner.
pub fn require_owner<S: Owned + ?Sized>(state: &S, caller: &Address) -> Result<(), ContractError> {
    if state.owner() == caller {
        Ok(())
    } else {
        Err(ContractError::unauthorized(OnlyOwner.requirement_text()))
    }
}

/// Guard admitting only the state's owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyOwner;

impl OnlyOwner {
    fn requirement_text(self) -> &'static str {
        "the contract owner"
    }
}

impl<S: Owned> Guard<S> for OnlyOwner {
    fn requirement(&self) -> String {
        self.requirement_text().into()
    }

    fn check(&self, state: &S, caller: &Address) -> Result<(), ContractError> {
        require_owner(state, caller)
    }
}

/// Mixin exposing the owner and letting the owner hand it over.
///
/// `transferOwnership` checks the caller itself, so it stays owner-only
/// even when mounted without a guard. After a transfer the previous owner
/// loses every owner-gated right on the next call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ownable;

impl<S: Owned + 'static> Mixin<S> for Ownable {
    fn name(&self) -> &'static str {
        "ownable"
    }

    fn operations(&self) -> Vec<Operation<S>> {
        vec![
            Operation::read(
                "owner",
                handler_fn(|state: &mut S, _action: &Interaction| Ok(json!(state.owner()))),
            ),
            Operation::write(
                "transferOwnership",
                handler_fn(|state: &mut S, action: &Interaction| {
                    require_owner(state, &action.caller)?;
                    let new_owner = action.input.address("newOwner")?;
                    state.set_owner(new_owner.clone());
                    Ok(json!(new_owner))
                }),
            ),
        ]
    }
}
