#![deny(missing_docs)]
//! Ownership and role-based guards for covenant contracts.
//!
//! Provides the two authorization primitives and the guard values built on
//! them:
//! - [`require_owner`] / [`OnlyOwner`]: caller must equal the state's owner
//! - [`require_role`] / [`OnlyRole`]: caller must hold a named role
//! - [`OnlyOwnerOrRole`]: owner OR role member, evaluated against one snapshot
//! - [`AnyOf`]: union of arbitrary guards
//! - [`Unguarded`]: always passes
//!
//! And two mixins that manage the state those guards read:
//! - [`Ownable`]: `owner` and `transferOwnership`
//! - [`RoleMembership`]: grant/revoke operations for one role
//!
//! Guards read disjoint slices of state ([`Owned`] and [`HasRoles`]) and
//! never mutate, so stacking or reordering them cannot change a decision.

mod combinator;
mod ownable;
mod roles;

pub use combinator::{AnyOf, Unguarded};
pub use ownable::{OnlyOwner, Ownable, Owned, require_owner};
pub use roles::{HasRoles, OnlyOwnerOrRole, OnlyRole, RoleMembership, RoleRegistry, require_role};
