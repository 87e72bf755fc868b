//! Fixed addresses and interaction builders.

use crate::action::Interaction;
use serde_json::{Value, json};

/// The owner used by genesis fixtures.
pub const OWNER: &str = "0xOWNER";
/// A first non-owner caller.
pub const ALICE: &str = "0xALICE";
/// A second non-owner caller.
pub const BOB: &str = "0xBOB";
/// A third non-owner caller.
pub const CAROL: &str = "0xCAROL";

/// Build the raw `{ caller, input }` envelope a host would deliver.
pub fn envelope(caller: &str, input: Value) -> Value {
    json!({ "caller": caller, "input": input })
}

/// Build an interaction from a caller and a `{ function, ...payload }` input.
///
/// # Panics
///
/// Panics if `input` is not an object with a string `function` field.
pub fn action(caller: &str, input: Value) -> Interaction {
    Interaction::from_envelope(envelope(caller, input)).expect("fixture input must be well formed")
}
