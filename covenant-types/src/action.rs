//! The action envelope: who is calling and what they asked for.

use crate::{error::ContractError, id::Address};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `input` half of an envelope: an operation name plus its payload.
///
/// On the wire this is a flat JSON object, `{ "function": "addItem",
/// "item": "x" }`. Every key other than `function` lands in `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// The operation name the dispatcher resolves.
    pub function: String,
    /// Operation arguments. Read lazily by each operation.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Input {
    /// Create an input with an empty payload.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Raw access to a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Read a string field.
    pub fn string(&self, key: &str) -> Result<&str, ContractError> {
        self.payload
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| ContractError::invalid_type(key, "a string"))
    }

    /// Read a JSON object field. Arrays and `null` are rejected.
    pub fn object(&self, key: &str) -> Result<&Map<String, Value>, ContractError> {
        self.payload
            .get(key)
            .and_then(Value::as_object)
            .ok_or_else(|| ContractError::invalid_type(key, "an object"))
    }

    /// Read an array-of-strings field.
    pub fn string_list(&self, key: &str) -> Result<Vec<String>, ContractError> {
        let invalid = || ContractError::invalid_type(key, "an array of strings");
        let values = self.payload.get(key).and_then(Value::as_array).ok_or_else(invalid)?;
        values
            .iter()
            .map(|v| v.as_str().map(str::to_owned).ok_or_else(invalid))
            .collect()
    }

    /// Read an address field: any non-empty string.
    pub fn address(&self, key: &str) -> Result<Address, ContractError> {
        match self.payload.get(key).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Ok(Address::from(s)),
            _ => Err(ContractError::InvalidAddress { field: key.into() }),
        }
    }

    /// Read a non-negative integer field.
    pub fn index(&self, key: &str) -> Result<usize, ContractError> {
        self.payload
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| ContractError::invalid_type(key, "a non-negative integer"))
    }
}

/// One authenticated invocation: the caller plus the requested input.
///
/// The host has already verified the caller's signature and ordered the
/// interaction; covenant trusts `caller` as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// The authenticated caller.
    pub caller: Address,
    /// The requested operation and its payload.
    pub input: Input,
}

impl Interaction {
    /// Create a new interaction.
    pub fn new(caller: impl Into<Address>, input: Input) -> Self {
        Self {
            caller: caller.into(),
            input,
        }
    }

    /// The requested operation name.
    pub fn operation(&self) -> &str {
        &self.input.function
    }

    /// Parse a raw `{ caller, input: { function, ...payload } }` envelope.
    ///
    /// Missing or mistyped envelope fields fail with
    /// [`ContractError::InvalidType`] naming the field, so the host can
    /// surface the problem verbatim.
    pub fn from_envelope(envelope: Value) -> Result<Self, ContractError> {
        let Value::Object(mut envelope) = envelope else {
            return Err(ContractError::invalid_type("envelope", "an object"));
        };

        let caller = match envelope.remove("caller") {
            Some(Value::String(caller)) => Address::from(caller),
            _ => return Err(ContractError::invalid_type("caller", "a string")),
        };

        let mut payload = match envelope.remove("input") {
            Some(Value::Object(input)) => input,
            _ => return Err(ContractError::invalid_type("input", "an object")),
        };

        let function = match payload.remove("function") {
            Some(Value::String(function)) => function,
            _ => return Err(ContractError::invalid_type("function", "a string")),
        };

        Ok(Self {
            caller,
            input: Input { function, payload },
        })
    }
}
