//! The standalone following contract.

use covenant_following::{FollowingList, SocialGraph};
use covenant_guard::{OnlyOwner, Ownable};
use covenant_types::Address;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State of [`Following`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowingState {
    /// The account doing the following.
    pub owner: Address,
    /// Followed addresses.
    #[serde(default)]
    pub following: FollowingList,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

state_slices!(FollowingState { owner, following });

variant! {
    /// An owner's following list.
    ///
    /// `follow`, `unfollow` and `transferOwnership` are owner only;
    /// `following` and `owner` are open.
    Following(FollowingState) = "following";
    |table| {
        table
            .mount(&SocialGraph, OnlyOwner)
            .mount(&Ownable, OnlyOwner);
    }
}
