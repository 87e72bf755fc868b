//! The Guard interface — authorization predicates over a state snapshot.

use crate::{error::ContractError, id::Address};
use std::sync::Arc;

/// An authorization predicate gating a mutator.
///
/// A guard reads the state snapshot and the caller and either passes or
/// fails with [`ContractError::Unauthorized`]. Guards never mutate: they
/// receive `&S`, and the mutator they protect is only called once the
/// guard has passed.
///
/// Implementations:
/// - `Unguarded`: always passes (open operations)
/// - `OnlyOwner`: caller must equal the state's owner
/// - `OnlyRole`: caller must hold a named role
/// - `OnlyOwnerOrRole`: union of the two, read from one snapshot
/// - `AnyOf`: union of arbitrary guards
pub trait Guard<S>: Send + Sync {
    /// Who the guard admits, phrased to complete "only available to ...".
    fn requirement(&self) -> String;

    /// Check the caller against the state snapshot.
    fn check(&self, state: &S, caller: &Address) -> Result<(), ContractError>;
}

impl<S, G: Guard<S> + ?Sized> Guard<S> for Arc<G> {
    fn requirement(&self) -> String {
        (**self).requirement()
    }

    fn check(&self, state: &S, caller: &Address) -> Result<(), ContractError> {
        (**self).check(state, caller)
    }
}

impl<S, G: Guard<S> + ?Sized> Guard<S> for Box<G> {
    fn requirement(&self) -> String {
        (**self).requirement()
    }

    fn check(&self, state: &S, caller: &Address) -> Result<(), ContractError> {
        (**self).check(state, caller)
    }
}
