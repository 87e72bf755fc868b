//! A minimal demo contract.

use covenant_dispatch::{DispatchTable, guard};
use covenant_guard::{OnlyOwner, Unguarded};
use covenant_types::{
    Access, Address, Contract, ContractError, Input, Interaction, handler_fn,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Limits for [`HelloWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloWorldPolicy {
    /// Longest accepted message, in characters.
    pub max_message_len: usize,
    /// How many squeaks are kept. Older ones are dropped first.
    pub max_squeaks: usize,
}

impl Default for HelloWorldPolicy {
    fn default() -> Self {
        Self {
            max_message_len: 100,
            max_squeaks: 10,
        }
    }
}

impl HelloWorldPolicy {
    /// Set the message length limit.
    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = max_message_len;
        self
    }

    /// Set how many squeaks are kept.
    pub fn with_max_squeaks(mut self, max_squeaks: usize) -> Self {
        self.max_squeaks = max_squeaks;
        self
    }

    fn message<'a>(&self, input: &'a Input) -> Result<&'a str, ContractError> {
        match input.get("message").and_then(Value::as_str) {
            Some(message) if message.chars().count() <= self.max_message_len => Ok(message),
            _ => Err(ContractError::invalid_type(
                "message",
                format!("a string of at most {} characters", self.max_message_len),
            )),
        }
    }
}

/// State of [`HelloWorld`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloWorldState {
    /// Who may speak.
    pub owner: Address,
    /// The last spoken message.
    #[serde(default)]
    pub message: String,
    /// How many times the owner has spoken.
    #[serde(default)]
    pub num_speaks: u64,
    /// Recent squeaks, oldest first.
    #[serde(default)]
    pub squeaks: Vec<String>,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

state_slices!(HelloWorldState { owner });

/// The demo contract.
///
/// | Operation | Who | Payload | Effect |
/// |-----------|-----|---------|--------|
/// | `speak` | owner | `message` | store `message`, bump `numSpeaks` |
/// | `squeak` | anyone | `message` | append the *stored* message to `squeaks` |
/// | `readSqueak` | anyone | `index` | the squeak at `index`, or `null` |
///
/// `squeak` validates its own `message` but records the one the owner last
/// spoke.
#[derive(Debug)]
pub struct HelloWorld {
    table: DispatchTable<HelloWorldState>,
    policy: HelloWorldPolicy,
}

impl HelloWorld {
    /// A contract with the default limits.
    pub fn new() -> Self {
        Self::with_policy(HelloWorldPolicy::default())
    }

    /// A contract with custom limits.
    pub fn with_policy(policy: HelloWorldPolicy) -> Self {
        let mut table = DispatchTable::new("hello-world");

        table.route(
            "speak",
            Access::Write,
            guard(
                OnlyOwner,
                handler_fn(move |state: &mut HelloWorldState, action: &Interaction| {
                    let message = policy.message(&action.input)?;
                    state.message = message.to_owned();
                    state.num_speaks = state.num_speaks.saturating_add(1);
                    Ok(Value::Bool(true))
                }),
            ),
        );
        table.route(
            "squeak",
            Access::Write,
            guard(
                Unguarded,
                handler_fn(move |state: &mut HelloWorldState, action: &Interaction| {
                    policy.message(&action.input)?;
                    state.squeaks.push(state.message.clone());
                    let overflow = state.squeaks.len().saturating_sub(policy.max_squeaks);
                    state.squeaks.drain(..overflow);
                    Ok(Value::Bool(true))
                }),
            ),
        );
        table.route(
            "readSqueak",
            Access::Read,
            guard(
                Unguarded,
                handler_fn(|state: &mut HelloWorldState, action: &Interaction| {
                    let index = action.input.index("index")?;
                    Ok(json!(state.squeaks.get(index)))
                }),
            ),
        );

        Self { table, policy }
    }

    /// The limits in force.
    pub fn policy(&self) -> HelloWorldPolicy {
        self.policy
    }

    /// The composed dispatch table.
    pub fn table(&self) -> &DispatchTable<HelloWorldState> {
        &self.table
    }
}

impl Default for HelloWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl Contract for HelloWorld {
    type State = HelloWorldState;

    fn name(&self) -> &str {
        self.table.name()
    }

    fn operations(&self) -> Vec<&'static str> {
        self.table.operations()
    }

    fn apply(&self, state: &mut HelloWorldState, action: &Interaction) -> Result<Value, ContractError> {
        self.table.apply(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_types::test_utils::{ALICE, OWNER, action};

    fn genesis() -> HelloWorldState {
        serde_json::from_value(json!({ "owner": OWNER })).unwrap()
    }

    #[test]
    fn owner_speaks() {
        let contract = HelloWorld::new();
        let mut state = genesis();
        contract
            .apply(&mut state, &action(OWNER, json!({ "function": "speak", "message": "hi" })))
            .unwrap();
        assert_eq!(state.message, "hi");
        assert_eq!(state.num_speaks, 1);
    }

    #[test]
    fn speak_count_saturates() {
        let contract = HelloWorld::new();
        let mut state: HelloWorldState =
            serde_json::from_value(json!({ "owner": OWNER, "numSpeaks": u64::MAX })).unwrap();
        contract
            .apply(&mut state, &action(OWNER, json!({ "function": "speak", "message": "hi" })))
            .unwrap();
        assert_eq!(state.num_speaks, u64::MAX);
        assert_eq!(state.message, "hi");
    }

    #[test]
    fn others_cannot_speak() {
        let contract = HelloWorld::new();
        let mut state = genesis();
        let err = contract
            .apply(&mut state, &action(ALICE, json!({ "function": "speak", "message": "hi" })))
            .unwrap_err();
        assert_eq!(err, ContractError::unauthorized("the contract owner"));
        assert_eq!(state, genesis());
    }

    #[test]
    fn message_length_is_bounded() {
        let contract = HelloWorld::new();
        let mut state = genesis();
        let long = "x".repeat(101);
        let err = contract
            .apply(&mut state, &action(OWNER, json!({ "function": "speak", "message": long })))
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidType { .. }));

        let exact = "x".repeat(100);
        contract
            .apply(&mut state, &action(OWNER, json!({ "function": "speak", "message": exact })))
            .unwrap();
    }

    #[test]
    fn squeak_records_the_stored_message() {
        let contract = HelloWorld::new();
        let mut state = genesis();
        contract
            .apply(&mut state, &action(OWNER, json!({ "function": "speak", "message": "hello" })))
            .unwrap();
        contract
            .apply(&mut state, &action(ALICE, json!({ "function": "squeak", "message": "squeak!" })))
            .unwrap();
        assert_eq!(state.squeaks, vec!["hello"]);
    }

    #[test]
    fn squeaks_keep_the_newest() {
        let contract = HelloWorld::with_policy(HelloWorldPolicy::default().with_max_squeaks(3));
        let mut state = genesis();
        for n in 0..5 {
            let msg = format!("m{n}");
            contract
                .apply(&mut state, &action(OWNER, json!({ "function": "speak", "message": msg })))
                .unwrap();
            contract
                .apply(&mut state, &action(ALICE, json!({ "function": "squeak", "message": "" })))
                .unwrap();
        }
        assert_eq!(state.squeaks, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn read_squeak() {
        let contract = HelloWorld::new();
        let mut state = genesis();
        state.squeaks = vec!["a".into(), "b".into()];
        let read = |state: &mut HelloWorldState, index: Value| {
            contract.apply(state, &action(ALICE, json!({ "function": "readSqueak", "index": index })))
        };
        assert_eq!(read(&mut state, json!(1)).unwrap(), json!("b"));
        assert_eq!(read(&mut state, json!(7)).unwrap(), Value::Null);
        assert!(matches!(read(&mut state, json!("1")), Err(ContractError::InvalidType { .. })));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = serde_json::to_value(genesis()).unwrap();
        assert_eq!(json, json!({ "owner": OWNER, "message": "", "numSpeaks": 0, "squeaks": [] }));
    }
}
