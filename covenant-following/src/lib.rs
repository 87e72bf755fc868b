#![deny(missing_docs)]
//! Social-graph following list for covenant contracts.
//!
//! [`FollowingList`] is an ordered set of addresses. [`SocialGraph`]
//! exposes it as three operations:
//!
//! | Operation | Access | Payload | Result |
//! |-----------|--------|---------|--------|
//! | `follow` | write | `address` | `true` |
//! | `unfollow` | write | `address` | `true` |
//! | `following` | read | none | the followed addresses |
//!
//! The mixin carries no authorization. A variant that mounts it decides
//! who may follow on the contract's behalf.

use covenant_types::{Address, ContractError, Interaction, Mixin, Operation, handler_fn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};

/// Followed addresses in follow order, without duplicates.
///
/// Serializes as a plain array. Deserializing drops repeated addresses,
/// keeping the first occurrence, so `["a", "a", "b"]` loads as `["a", "b"]`
/// and the list holds no duplicates however it was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FollowingList(Vec<Address>);

impl<'de> Deserialize<'de> for FollowingList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Address>::deserialize(deserializer).map(|addresses| addresses.into_iter().collect())
    }
}

impl FollowingList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `address` is followed.
    pub fn contains(&self, address: &Address) -> bool {
        self.0.contains(address)
    }

    /// Follow `address`.
    pub fn follow(&mut self, address: Address) -> Result<(), ContractError> {
        if self.contains(&address) {
            return Err(ContractError::AlreadyFollowing(address));
        }
        self.0.push(address);
        Ok(())
    }

    /// Stop following `address`.
    pub fn unfollow(&mut self, address: &Address) -> Result<(), ContractError> {
        let idx = self
            .0
            .iter()
            .position(|a| a == address)
            .ok_or_else(|| ContractError::NotFollowing(address.clone()))?;
        self.0.remove(idx);
        Ok(())
    }

    /// The followed addresses.
    pub fn as_slice(&self) -> &[Address] {
        &self.0
    }

    /// Number of followed addresses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is followed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Address> for FollowingList {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        let mut list = Self::new();
        for address in iter {
            let _ = list.follow(address);
        }
        list
    }
}

/// State that carries a following list.
pub trait HasFollowing {
    /// Read access.
    fn following(&self) -> &FollowingList;

    /// Write access.
    fn following_mut(&mut self) -> &mut FollowingList;
}

impl HasFollowing for FollowingList {
    fn following(&self) -> &FollowingList {
        self
    }

    fn following_mut(&mut self) -> &mut FollowingList {
        self
    }
}

/// Mixin contributing `follow`, `unfollow` and `following`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialGraph;

impl<S: HasFollowing + 'static> Mixin<S> for SocialGraph {
    fn name(&self) -> &'static str {
        "social-graph"
    }

    fn operations(&self) -> Vec<Operation<S>> {
        vec![
            Operation::write(
                "follow",
                handler_fn(|state: &mut S, action: &Interaction| {
                    let address = action.input.address("address")?;
                    state.following_mut().follow(address)?;
                    Ok(Value::Bool(true))
                }),
            ),
            Operation::write(
                "unfollow",
                handler_fn(|state: &mut S, action: &Interaction| {
                    let address = action.input.address("address")?;
                    state.following_mut().unfollow(&address)?;
                    Ok(Value::Bool(true))
                }),
            ),
            Operation::read(
                "following",
                handler_fn(|state: &mut S, _action: &Interaction| {
                    Ok(json!(state.following().as_slice()))
                }),
            ),
        ]
    }
}
