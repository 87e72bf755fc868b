//! Named roles mapping to address sets.

use crate::ownable::Owned;
use covenant_types::{
    Address, ContractError, Guard, Interaction, Mixin, Operation, RoleName, handler_fn,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Role name → members.
///
/// Serializes as `{ "curator": ["0xA", "0xB"] }`. Member lists keep
/// insertion order and never hold duplicates when written through
/// [`RoleRegistry::add_member`]. A role missing from the map is an empty
/// set, so genesis state may omit roles nobody holds yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleRegistry {
    roles: BTreeMap<RoleName, Vec<Address>>,
}

impl RoleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a role with no members. No-op if it already exists.
    pub fn with_role(mut self, role: impl Into<RoleName>) -> Self {
        self.roles.entry(role.into()).or_default();
        self
    }

    /// Members of `role`, in grant order.
    pub fn members(&self, role: &RoleName) -> &[Address] {
        self.roles.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, role: &RoleName, address: &Address) -> bool {
        self.members(role).contains(address)
    }

    /// Grant `role` to `address`.
    pub fn add_member(&mut self, role: &RoleName, address: Address) -> Result<(), ContractError> {
        if self.contains(role, &address) {
            return Err(ContractError::DuplicateMember {
                role: role.clone(),
                address,
            });
        }
        self.roles.entry(role.clone()).or_default().push(address);
        Ok(())
    }

    /// Revoke `role` from `address`.
    pub fn remove_member(&mut self, role: &RoleName, address: &Address) -> Result<(), ContractError> {
        let idx = self
            .roles
            .get(role)
            .and_then(|members| members.iter().position(|m| m == address));
        match (idx, self.roles.get_mut(role)) {
            (Some(idx), Some(members)) => {
                members.remove(idx);
                Ok(())
            }
            _ => Err(ContractError::MemberNotFound {
                role: role.clone(),
                address: address.clone(),
            }),
        }
    }
}

/// State that carries a role registry.
pub trait HasRoles {
    /// Read access to the registry.
    fn roles(&self) -> &RoleRegistry;

    /// Write access to the registry.
    fn roles_mut(&mut self) -> &mut RoleRegistry;
}

/// Pass iff `caller` holds `role`. The owner gets no special treatment.
pub fn require_role<S: HasRoles + ?Sized>(
    state: &S,
    caller: &Address,
    role: &RoleName,
) -> Result<(), ContractError> {
    if state.roles().contains(role, caller) {
        Ok(())
    } else {
        Err(ContractError::unauthorized(format!("addresses with {role} role")))
    }
}

/// Guard admitting only members of one role.
#[derive(Debug, Clone)]
pub struct OnlyRole {
    role: RoleName,
}

impl OnlyRole {
    /// Create a guard for `role`.
    pub fn new(role: impl Into<RoleName>) -> Self {
        Self { role: role.into() }
    }
}

impl<S: HasRoles> Guard<S> for OnlyRole {
    fn requirement(&self) -> String {
        format!("addresses with {} role", self.role)
    }

    fn check(&self, state: &S, caller: &Address) -> Result<(), ContractError> {
        require_role(state, caller, &self.role)
    }
}

/// Guard admitting the owner or any member of one role.
///
/// Both checks read the same snapshot and are OR-ed, never chained, so
/// neither can observe the other's outcome.
#[derive(Debug, Clone)]
pub struct OnlyOwnerOrRole {
    role: RoleName,
}

impl OnlyOwnerOrRole {
    /// Create a guard for the owner or `role`.
    pub fn new(role: impl Into<RoleName>) -> Self {
        Self { role: role.into() }
    }
}

impl<S: Owned + HasRoles> Guard<S> for OnlyOwnerOrRole {
    fn requirement(&self) -> String {
        format!("the owner or {} role", self.role)
    }

    fn check(&self, state: &S, caller: &Address) -> Result<(), ContractError> {
        if state.owner() == caller || state.roles().contains(&self.role, caller) {
            Ok(())
        } else {
            Err(ContractError::unauthorized(Guard::<S>::requirement(self)))
        }
    }
}

/// Mixin with one grant and one revoke operation for a single role.
///
/// Both operations read the target from the `address` payload field. The
/// mixin carries no authorization; variants mount it behind `OnlyOwner`.
#[derive(Debug, Clone)]
pub struct RoleMembership {
    role: RoleName,
    grant: &'static str,
    revoke: &'static str,
}

impl RoleMembership {
    /// Membership operations for `role` under the given operation names.
    pub fn new(role: impl Into<RoleName>, grant: &'static str, revoke: &'static str) -> Self {
        Self {
            role: role.into(),
            grant,
            revoke,
        }
    }

    /// `addCurator` / `removeCurator` for the `curator` role.
    pub fn curator() -> Self {
        Self::new("curator", "addCurator", "removeCurator")
    }

    /// The role this mixin manages.
    pub fn role(&self) -> &RoleName {
        &self.role
    }
}

impl<S: HasRoles + 'static> Mixin<S> for RoleMembership {
    fn name(&self) -> &'static str {
        "role-membership"
    }

    fn operations(&self) -> Vec<Operation<S>> {
        let grant_role = self.role.clone();
        let revoke_role = self.role.clone();
        vec![
            Operation::write(
                self.grant,
                handler_fn(move |state: &mut S, action: &Interaction| {
                    let address = action.input.address("address")?;
                    state.roles_mut().add_member(&grant_role, address)?;
                    Ok(Value::Bool(true))
                }),
            ),
            Operation::write(
                self.revoke,
                handler_fn(move |state: &mut S, action: &Interaction| {
                    let address = action.input.address("address")?;
                    state.roles_mut().remove_member(&revoke_role, &address)?;
                    Ok(Value::Bool(true))
                }),
            ),
        ]
    }
}
