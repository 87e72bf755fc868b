#![deny(missing_docs)]
//! # covenant — composable state-transition contracts
//!
//! Each contract variant is a dispatch table of `operation → (guard,
//! handler)`, built by mounting capability mixins behind authorization
//! guards. This crate assembles the catalogue:
//!
//! | Variant | Mixins | Guard on mutators |
//! |---------|--------|-------------------|
//! | [`BaseCuration`] | curation | none |
//! | [`OwnableCuration`] | curation | owner |
//! | [`FollowingCuration`] | curation, social graph | owner |
//! | [`CollaborativeCuration`] | curation, curator roles | owner or curator; curator management owner only |
//! | [`CollaborativeFollowingCuration`] | curation, curator roles, social graph | owner or curator; curator management owner only |
//! | [`OwnerlessFollowingCuration`] | curation, social graph | none |
//! | [`Following`] | social graph, ownable | owner |
//! | [`AtomicLicense`] | evolvable, ownable | owner |
//! | [`HelloWorld`] | speak/squeak demo | owner on `speak` |
//! | [`Usernames`] | username registry | self-service |
//!
//! [`ContractKind`] selects a variant at runtime and runs raw JSON
//! envelopes through it, which is all a host needs.
//!
//! ## Quick start
//!
//! ```
//! use covenant::prelude::*;
//! use serde_json::json;
//!
//! let out = ContractKind::OwnableCuration
//!     .handle_json(
//!         json!({ "owner": "O", "title": "", "metadata": {}, "items": [], "hidden": [] }),
//!         json!({ "caller": "O", "input": { "function": "addItem", "item": "x" } }),
//!     )
//!     .unwrap();
//! assert_eq!(out["state"]["items"], json!(["x"]));
//! assert_eq!(out["result"], json!(true));
//! ```

pub mod contracts;
mod kind;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use covenant_curation;
pub use covenant_dispatch;
pub use covenant_evolve;
pub use covenant_following;
pub use covenant_guard;
pub use covenant_types;
pub use covenant_usernames;

pub use contracts::{
    AtomicLicense, AtomicLicenseState, BaseCuration, BaseCurationState, CollaborativeCuration,
    CollaborativeCurationState, CollaborativeFollowingCuration,
    CollaborativeFollowingCurationState, Following, FollowingCuration, FollowingCurationState,
    FollowingState, HelloWorld, HelloWorldPolicy, HelloWorldState, OwnableCuration,
    OwnableCurationState, OwnerlessFollowingCuration, OwnerlessFollowingCurationState,
};
pub use covenant_usernames::{UsernamePolicy, Usernames, UsernamesState};
pub use kind::{ContractKind, UnknownContractKind};

/// Happy-path imports for hosting and composing contracts.
pub mod prelude {
    pub use crate::contracts::{
        AtomicLicense, BaseCuration, CollaborativeCuration, CollaborativeFollowingCuration,
        Following, FollowingCuration, HelloWorld, OwnableCuration, OwnerlessFollowingCuration,
    };
    pub use crate::kind::ContractKind;

    pub use covenant_types::{
        Access, Address, Contract, ContractError, Guard, Handler, HandlerResult, Input,
        Interaction, Mixin, Operation, RoleName, handler_fn,
    };

    pub use covenant_guard::{
        AnyOf, OnlyOwner, OnlyOwnerOrRole, OnlyRole, Ownable, RoleMembership, Unguarded,
    };

    pub use covenant_dispatch::{DispatchTable, Guarded, guard};

    pub use covenant_curation::{Curation, CurationCore};
    pub use covenant_evolve::Evolvable;
    pub use covenant_following::SocialGraph;
    pub use covenant_usernames::Usernames;
}
