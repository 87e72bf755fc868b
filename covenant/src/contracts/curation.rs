//! Curation variants.

use super::CURATOR;
use covenant_curation::{Curation, CurationCore};
use covenant_following::{FollowingList, SocialGraph};
use covenant_guard::{OnlyOwner, OnlyOwnerOrRole, RoleMembership, RoleRegistry, Unguarded};
use covenant_types::Address;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State of [`BaseCuration`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseCurationState {
    /// Title, metadata and item lists.
    #[serde(flatten)]
    pub curation: Curation,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// State of [`OwnableCuration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnableCurationState {
    /// The only address allowed to curate.
    pub owner: Address,
    /// Title, metadata and item lists.
    #[serde(flatten)]
    pub curation: Curation,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// State of [`FollowingCuration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowingCurationState {
    /// The only address allowed to curate or follow.
    pub owner: Address,
    /// Followed addresses.
    #[serde(default)]
    pub following: FollowingList,
    /// Title, metadata and item lists.
    #[serde(flatten)]
    pub curation: Curation,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// State of [`CollaborativeCuration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeCurationState {
    /// Manages curators; may also curate.
    pub owner: Address,
    /// Holds the `curator` role.
    #[serde(default)]
    pub roles: RoleRegistry,
    /// Title, metadata and item lists.
    #[serde(flatten)]
    pub curation: Curation,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// State of [`CollaborativeFollowingCuration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeFollowingCurationState {
    /// Manages curators; may also curate and follow.
    pub owner: Address,
    /// Holds the `curator` role.
    #[serde(default)]
    pub roles: RoleRegistry,
    /// Followed addresses.
    #[serde(default)]
    pub following: FollowingList,
    /// Title, metadata and item lists.
    #[serde(flatten)]
    pub curation: Curation,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// State of [`OwnerlessFollowingCuration`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnerlessFollowingCurationState {
    /// Followed addresses.
    #[serde(default)]
    pub following: FollowingList,
    /// Title, metadata and item lists.
    #[serde(flatten)]
    pub curation: Curation,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

state_slices!(BaseCurationState { curation });
state_slices!(OwnableCurationState { owner, curation });
state_slices!(FollowingCurationState { owner, following, curation });
state_slices!(CollaborativeCurationState { owner, roles, curation });
state_slices!(CollaborativeFollowingCurationState { owner, roles, following, curation });
state_slices!(OwnerlessFollowingCurationState { following, curation });

variant! {
    /// A curation anyone may edit.
    BaseCuration(BaseCurationState) = "base-curation";
    |table| {
        table.mount(&CurationCore, Unguarded);
    }
}

variant! {
    /// A curation only its owner may edit.
    OwnableCuration(OwnableCurationState) = "ownable-curation";
    |table| {
        table.mount(&CurationCore, OnlyOwner);
    }
}

variant! {
    /// An owner-edited curation that also follows other addresses.
    ///
    /// `following` is open to everyone.
    FollowingCuration(FollowingCurationState) = "following-curation";
    |table| {
        table
            .mount(&CurationCore, OnlyOwner)
            .mount(&SocialGraph, OnlyOwner);
    }
}

variant! {
    /// A curation the owner shares with curators.
    ///
    /// The owner and every curator may run the curation mutators. Only the
    /// owner may `addCurator` or `removeCurator`; the owner never needs the
    /// role.
    CollaborativeCuration(CollaborativeCurationState) = "collaborative-curation";
    |table| {
        table
            .mount(&CurationCore, OnlyOwnerOrRole::new(CURATOR))
            .mount(&RoleMembership::curator(), OnlyOwner);
    }
}

variant! {
    /// [`CollaborativeCuration`] plus a following list curators may edit.
    CollaborativeFollowingCuration(CollaborativeFollowingCurationState) = "collaborative-following-curation";
    |table| {
        table
            .mount(&CurationCore, OnlyOwnerOrRole::new(CURATOR))
            .mount(&RoleMembership::curator(), OnlyOwner)
            .mount(&SocialGraph, OnlyOwnerOrRole::new(CURATOR));
    }
}

variant! {
    /// A curation and following list with no access control at all.
    OwnerlessFollowingCuration(OwnerlessFollowingCurationState) = "ownerless-following-curation";
    |table| {
        table
            .mount(&CurationCore, Unguarded)
            .mount(&SocialGraph, Unguarded);
    }
}
