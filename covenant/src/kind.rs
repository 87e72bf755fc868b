//! Runtime variant selection and the JSON host entry point.

use crate::contracts::{
    AtomicLicense, BaseCuration, CollaborativeCuration, CollaborativeFollowingCuration, Following,
    FollowingCuration, HelloWorld, OwnableCuration, OwnerlessFollowingCuration,
};
use covenant_types::{Contract, ContractError, Interaction};
use covenant_usernames::Usernames;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every contract variant covenant ships.
///
/// Serializes as snake_case (`"collaborative_curation"`), which is also what
/// [`FromStr`] and [`fmt::Display`] use.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    /// [`BaseCuration`]
    BaseCuration,
    /// [`OwnableCuration`]
    OwnableCuration,
    /// [`FollowingCuration`]
    FollowingCuration,
    /// [`CollaborativeCuration`]
    CollaborativeCuration,
    /// [`CollaborativeFollowingCuration`]
    CollaborativeFollowingCuration,
    /// [`OwnerlessFollowingCuration`]
    OwnerlessFollowingCuration,
    /// [`Following`]
    Following,
    /// [`AtomicLicense`]
    AtomicLicense,
    /// [`HelloWorld`]
    HelloWorld,
    /// [`Usernames`]
    Usernames,
}

/// A variant name that [`ContractKind`] does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contract kind: {0}")]
pub struct UnknownContractKind(pub String);

impl ContractKind {
    /// All variants, in catalogue order.
    pub const ALL: [ContractKind; 10] = [
        Self::BaseCuration,
        Self::OwnableCuration,
        Self::FollowingCuration,
        Self::CollaborativeCuration,
        Self::CollaborativeFollowingCuration,
        Self::OwnerlessFollowingCuration,
        Self::Following,
        Self::AtomicLicense,
        Self::HelloWorld,
        Self::Usernames,
    ];

    /// The snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BaseCuration => "base_curation",
            Self::OwnableCuration => "ownable_curation",
            Self::FollowingCuration => "following_curation",
            Self::CollaborativeCuration => "collaborative_curation",
            Self::CollaborativeFollowingCuration => "collaborative_following_curation",
            Self::OwnerlessFollowingCuration => "ownerless_following_curation",
            Self::Following => "following",
            Self::AtomicLicense => "atomic_license",
            Self::HelloWorld => "hello_world",
            Self::Usernames => "usernames",
        }
    }

    /// The operations the variant accepts, sorted.
    pub fn operations(self) -> Vec<&'static str> {
        match self {
            Self::BaseCuration => BaseCuration::new().operations(),
            Self::OwnableCuration => OwnableCuration::new().operations(),
            Self::FollowingCuration => FollowingCuration::new().operations(),
            Self::CollaborativeCuration => CollaborativeCuration::new().operations(),
            Self::CollaborativeFollowingCuration => CollaborativeFollowingCuration::new().operations(),
            Self::OwnerlessFollowingCuration => OwnerlessFollowingCuration::new().operations(),
            Self::Following => Following::new().operations(),
            Self::AtomicLicense => AtomicLicense::new().operations(),
            Self::HelloWorld => HelloWorld::new().operations(),
            Self::Usernames => Usernames::new().operations(),
        }
    }

    /// Run one raw envelope against a raw state.
    ///
    /// `state` must match the variant's state shape, else
    /// [`ContractError::InvalidState`]. `envelope` is
    /// `{ caller, input: { function, ...payload } }`. On success returns
    /// `{ "state": <new state>, "result": <value> }`.
    pub fn handle_json(self, state: Value, envelope: Value) -> Result<Value, ContractError> {
        let action = Interaction::from_envelope(envelope)?;
        match self {
            Self::BaseCuration => run(&BaseCuration::new(), state, &action),
            Self::OwnableCuration => run(&OwnableCuration::new(), state, &action),
            Self::FollowingCuration => run(&FollowingCuration::new(), state, &action),
            Self::CollaborativeCuration => run(&CollaborativeCuration::new(), state, &action),
            Self::CollaborativeFollowingCuration => {
                run(&CollaborativeFollowingCuration::new(), state, &action)
            }
            Self::OwnerlessFollowingCuration => {
                run(&OwnerlessFollowingCuration::new(), state, &action)
            }
            Self::Following => run(&Following::new(), state, &action),
            Self::AtomicLicense => run(&AtomicLicense::new(), state, &action),
            Self::HelloWorld => run(&HelloWorld::new(), state, &action),
            Self::Usernames => run(&Usernames::new(), state, &action),
        }
    }
}

fn run<C>(contract: &C, state: Value, action: &Interaction) -> Result<Value, ContractError>
where
    C: Contract,
    C::State: Serialize + DeserializeOwned,
{
    let state: C::State = serde_json::from_value(state).map_err(|e| {
        tracing::debug!(contract = contract.name(), error = %e, "state does not match variant");
        ContractError::InvalidState(e.to_string())
    })?;
    let output = contract.handle(state, action)?;
    Ok(serde_json::to_value(output)?)
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractKind {
    type Err = UnknownContractKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownContractKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_round_trip() {
        for kind in ContractKind::ALL {
            assert_eq!(kind.to_string().parse::<ContractKind>().unwrap(), kind);
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[test]
    fn unknown_name() {
        let err = "erc20".parse::<ContractKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown contract kind: erc20");
    }

    #[test]
    fn bad_state_is_invalid_state() {
        let err = ContractKind::OwnableCuration
            .handle_json(
                json!({ "title": 5 }),
                json!({ "caller": "O", "input": { "function": "setTitle", "title": "t" } }),
            )
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidState(_)));
    }

    #[test]
    fn bad_envelope_is_invalid_type() {
        let err = ContractKind::BaseCuration
            .handle_json(json!({}), json!({ "input": { "function": "setTitle" } }))
            .unwrap_err();
        assert_eq!(err, ContractError::invalid_type("caller", "a string"));
    }

    #[test]
    fn every_kind_rejects_unknown_operations() {
        for kind in ContractKind::ALL {
            let err = kind
                .handle_json(
                    json!({ "owner": "O" }),
                    json!({ "caller": "O", "input": { "function": "selfDestruct" } }),
                )
                .unwrap_err();
            assert_eq!(err, ContractError::InvalidOperation("selfDestruct".into()), "{kind}");
        }
    }

    #[test]
    fn every_listed_operation_is_routed() {
        for kind in ContractKind::ALL {
            for op in kind.operations() {
                let outcome = kind.handle_json(
                    json!({ "owner": "O" }),
                    json!({ "caller": "O", "input": { "function": op } }),
                );
                assert_ne!(
                    outcome.err(),
                    Some(ContractError::InvalidOperation(op.into())),
                    "{kind}.{op}"
                );
            }
        }
    }
}
