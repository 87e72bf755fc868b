//! Registry state.

use covenant_types::{Address, ContractError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Address → username.
///
/// Serializes as `{ "usernames": { "0xA": "alice" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernamesState {
    /// One entry per registered caller.
    #[serde(default)]
    pub usernames: BTreeMap<Address, String>,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UsernamesState {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The name held by `address`.
    pub fn username_of(&self, address: &Address) -> Option<&str> {
        self.usernames.get(address).map(String::as_str)
    }

    /// Who holds `username`.
    pub fn holder_of(&self, username: &str) -> Option<&Address> {
        self.usernames
            .iter()
            .find_map(|(address, name)| (name == username).then_some(address))
    }

    /// Give `username` to `caller`, dropping whatever they held before.
    ///
    /// Fails if another caller holds it. Re-registering one's own name is
    /// a no-op.
    pub fn register(&mut self, caller: &Address, username: &str) -> Result<(), ContractError> {
        if let Some(holder) = self.holder_of(username) {
            if holder != caller {
                return Err(ContractError::UsernameTaken(username.to_owned()));
            }
        }
        self.usernames.insert(caller.clone(), username.to_owned());
        Ok(())
    }

    /// Free the caller's name. Returns it, if there was one.
    pub fn release(&mut self, caller: &Address) -> Option<String> {
        self.usernames.remove(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_frees_previous_name() {
        let mut state = UsernamesState::new();
        let alice = Address::from("0xA");
        let bob = Address::from("0xB");
        state.register(&alice, "alice").unwrap();
        state.register(&alice, "alicia").unwrap();
        assert_eq!(state.username_of(&alice), Some("alicia"));
        state.register(&bob, "alice").unwrap();
        assert_eq!(state.holder_of("alice"), Some(&bob));
    }

    #[test]
    fn taken_by_someone_else() {
        let mut state = UsernamesState::new();
        state.register(&Address::from("0xA"), "alice").unwrap();
        let err = state.register(&Address::from("0xB"), "alice").unwrap_err();
        assert_eq!(err, ContractError::UsernameTaken("alice".into()));
        assert_eq!(state.usernames.len(), 1);
    }

    #[test]
    fn release_without_name_is_none() {
        let mut state = UsernamesState::new();
        assert_eq!(state.release(&Address::from("0xA")), None);
    }
}
