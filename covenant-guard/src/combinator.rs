//! Guard combinators.

use covenant_types::{Address, ContractError, Guard};
use std::sync::Arc;

/// Guard that always passes. Used for open operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unguarded;

impl<S> Guard<S> for Unguarded {
    fn requirement(&self) -> String {
        "anyone".into()
    }

    fn check(&self, _state: &S, _caller: &Address) -> Result<(), ContractError> {
        Ok(())
    }
}

/// Union of guards: passes if any member passes.
///
/// Every member sees the same snapshot. Members are tried in order and the
/// first pass wins; since guards are pure, the order changes neither the
/// decision nor, on denial, the error (the combined requirement is built
/// from all members).
pub struct AnyOf<S> {
    guards: Vec<Arc<dyn Guard<S>>>,
}

impl<S> AnyOf<S> {
    /// Create an empty union. An empty union denies everyone.
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Add a member to the union.
    pub fn or(mut self, guard: impl Guard<S> + 'static) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    fn requirements(&self) -> Vec<String> {
        let mut requirements: Vec<String> = self.guards.iter().map(|g| g.requirement()).collect();
        requirements.sort();
        requirements.dedup();
        requirements
    }
}

impl<S> Default for AnyOf<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Guard<S> for AnyOf<S> {
    fn requirement(&self) -> String {
        let requirements = self.requirements();
        if requirements.is_empty() {
            "no one".into()
        } else {
            requirements.join(" or ")
        }
    }

    fn check(&self, state: &S, caller: &Address) -> Result<(), ContractError> {
        if self.guards.iter().any(|g| g.check(state, caller).is_ok()) {
            Ok(())
        } else {
            Err(ContractError::unauthorized(self.requirement()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HasRoles, OnlyOwner, OnlyOwnerOrRole, OnlyRole, Owned, RoleRegistry};
    use covenant_types::RoleName;
    use proptest::prelude::*;

    #[derive(Debug)]
    struct Doc {
        owner: Address,
        roles: RoleRegistry,
    }

    impl Owned for Doc {
        fn owner(&self) -> &Address {
            &self.owner
        }

        fn set_owner(&mut self, owner: Address) {
            self.owner = owner;
        }
    }

    impl HasRoles for Doc {
        fn roles(&self) -> &RoleRegistry {
            &self.roles
        }

        fn roles_mut(&mut self) -> &mut RoleRegistry {
            &mut self.roles
        }
    }

    fn doc(curators: &[u8]) -> Doc {
        let mut roles = RoleRegistry::new();
        for c in curators {
            let _ = roles.add_member(&RoleName::from("curator"), Address::new(format!("0x{c}")));
        }
        Doc {
            owner: Address::from("0x0"),
            roles,
        }
    }

    #[test]
    fn unguarded_admits_everyone() {
        let state = doc(&[]);
        assert!(Unguarded.check(&state, &Address::from("")).is_ok());
    }

    #[test]
    fn empty_union_denies() {
        let state = doc(&[]);
        let err = AnyOf::<Doc>::new().check(&state, &Address::from("0x0")).unwrap_err();
        assert_eq!(err, ContractError::unauthorized("no one"));
    }

    proptest! {
        #[test]
        fn union_is_order_independent(curators in proptest::collection::vec(0u8..6, 0..6), caller in 0u8..6) {
            let state = doc(&curators);
            let caller = Address::new(format!("0x{caller}"));
            let owner_first = AnyOf::new().or(OnlyOwner).or(OnlyRole::new("curator"));
            let role_first = AnyOf::new().or(OnlyRole::new("curator")).or(OnlyOwner);
            prop_assert_eq!(
                owner_first.check(&state, &caller),
                role_first.check(&state, &caller)
            );
        }

        #[test]
        fn union_matches_owner_or_role(curators in proptest::collection::vec(0u8..6, 0..6), caller in 0u8..6) {
            let state = doc(&curators);
            let caller = Address::new(format!("0x{caller}"));
            let union = AnyOf::new().or(OnlyOwner).or(OnlyRole::new("curator"));
            let compound = OnlyOwnerOrRole::new("curator");
            prop_assert_eq!(
                union.check(&state, &caller).is_ok(),
                compound.check(&state, &caller).is_ok()
            );
        }
    }
}
