//! # covenant-types — protocol for composable state-transition contracts
//!
//! A contract is a pure function `state × action → (state, result) | error`.
//! This crate defines the vocabulary every other covenant crate speaks:
//!
//! | Concept | Types | What it does |
//! |---------|-------|-------------|
//! | Identity | [`Address`], [`RoleName`] | Who is calling, which role they hold |
//! | Action | [`Interaction`], [`Input`] | The authenticated envelope delivered by the host |
//! | Outcome | [`HandlerResult`], [`ContractError`] | New state plus result, or a typed failure |
//! | Guard | [`Guard`] | Authorization predicate evaluated before a mutator |
//! | Handler | [`Handler`], [`handler_fn`] | A mutator or reader over one state type |
//! | Mixin | [`Mixin`], [`Operation`], [`Access`] | A named bundle of operations composed into a variant |
//! | Contract | [`Contract`] | A composed variant the host dispatches into |
//!
//! ## Design Principle
//!
//! Nothing here knows about ledgers, signatures or ordering. The host hands
//! in a state value and an already-authenticated [`Interaction`]; the
//! contract hands back a new state or an error. Mutators validate before they
//! mutate, so a failed call leaves the state as it was.
//!
//! State is strongly typed per variant. Payloads stay `serde_json::Value`
//! because the envelope is JSON on the wire and operations read fields
//! lazily, failing with [`ContractError::InvalidType`] on the first
//! mismatch.

#![deny(missing_docs)]

pub mod action;
pub mod contract;
pub mod error;
pub mod guard;
pub mod handler;
pub mod id;
pub mod mixin;
pub mod result;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use action::{Input, Interaction};
pub use contract::Contract;
pub use error::ContractError;
pub use guard::Guard;
pub use handler::{Handler, handler_fn};
pub use id::{Address, RoleName};
pub use mixin::{Access, Mixin, Operation};
pub use result::HandlerResult;
