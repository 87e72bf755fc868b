//! Dispatch table tests.
//!
//! Tests cover:
//! - Unknown operations always fail with InvalidOperation
//! - Mount guards writes, leaves reads open
//! - Duplicate operation names panic at construction
//! - Mount order does not change any observable outcome

use covenant_dispatch::{DispatchTable, guard};
use covenant_guard::{OnlyOwner, Owned, Unguarded};
use covenant_types::test_utils::{ALICE, BOB, CountingHandler, OWNER, action};
use covenant_types::{
    Access, Address, Contract, ContractError, Interaction, Mixin, Operation, handler_fn,
};
use proptest::prelude::*;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
struct Doc {
    owner: Address,
    count: u64,
    note: String,
}

impl Owned for Doc {
    fn owner(&self) -> &Address {
        &self.owner
    }

    fn set_owner(&mut self, owner: Address) {
        self.owner = owner;
    }
}

fn doc() -> Doc {
    Doc {
        owner: Address::from(OWNER),
        count: 0,
        note: String::new(),
    }
}

struct CounterMixin;

impl Mixin<Doc> for CounterMixin {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn operations(&self) -> Vec<Operation<Doc>> {
        vec![
            Operation::write(
                "increment",
                handler_fn(|state: &mut Doc, _action: &Interaction| {
                    state.count += 1;
                    Ok(json!(state.count))
                }),
            ),
            Operation::read(
                "count",
                handler_fn(|state: &mut Doc, _action: &Interaction| Ok(json!(state.count))),
            ),
        ]
    }
}

struct NoteMixin;

impl Mixin<Doc> for NoteMixin {
    fn name(&self) -> &'static str {
        "note"
    }

    fn operations(&self) -> Vec<Operation<Doc>> {
        vec![Operation::write(
            "setNote",
            handler_fn(|state: &mut Doc, action: &Interaction| {
                state.note = action.input.string("note")?.to_owned();
                Ok(Value::Bool(true))
            }),
        )]
    }
}

fn counter_then_note() -> DispatchTable<Doc> {
    let mut table = DispatchTable::new("doc");
    table.mount(&CounterMixin, OnlyOwner).mount(&NoteMixin, Unguarded);
    table
}

fn note_then_counter() -> DispatchTable<Doc> {
    let mut table = DispatchTable::new("doc");
    table.mount(&NoteMixin, Unguarded).mount(&CounterMixin, OnlyOwner);
    table
}

#[test]
fn unknown_operation_is_invalid() {
    let table = counter_then_note();
    let mut state = doc();
    let err = table
        .apply(&mut state, &action(OWNER, json!({ "function": "explode" })))
        .unwrap_err();
    assert_eq!(err, ContractError::InvalidOperation("explode".into()));
    assert_eq!(state, doc());
}

#[test]
fn empty_table_rejects_everything() {
    let table: DispatchTable<Doc> = DispatchTable::new("empty");
    let err = table
        .dispatch(doc(), &action(OWNER, json!({ "function": "count" })))
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidOperation(_)));
}

#[test]
fn mount_guards_writes_only() {
    let table = counter_then_note();
    let mut state = doc();

    let err = table
        .apply(&mut state, &action(ALICE, json!({ "function": "increment" })))
        .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized { .. }));
    assert_eq!(state.count, 0);

    let out = table
        .apply(&mut state, &action(ALICE, json!({ "function": "count" })))
        .unwrap();
    assert_eq!(out, json!(0));

    table
        .apply(&mut state, &action(OWNER, json!({ "function": "increment" })))
        .unwrap();
    assert_eq!(state.count, 1);

    assert_eq!(table.access("count"), Some(Access::Read));
    assert_eq!(table.requirement("count").as_deref(), Some("anyone"));
    assert_eq!(table.requirement("increment").as_deref(), Some("the contract owner"));
}

#[test]
fn mount_all_guards_reads_too() {
    let mut table = DispatchTable::new("doc");
    table.mount_all(&CounterMixin, OnlyOwner);
    let err = table
        .apply(&mut doc(), &action(ALICE, json!({ "function": "count" })))
        .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized { .. }));
}

#[test]
fn operations_are_sorted() {
    assert_eq!(
        counter_then_note().operations(),
        vec!["count", "increment", "setNote"]
    );
}

#[test]
#[should_panic(expected = "already provided by `counter`")]
fn duplicate_operation_panics() {
    let mut table = DispatchTable::new("doc");
    table.mount(&CounterMixin, OnlyOwner).mount(&CounterMixin, Unguarded);
}

#[test]
fn routed_handler_behind_guard() {
    let counter = CountingHandler::new();
    let mut table = DispatchTable::new("doc");
    table.route("poke", Access::Write, guard(OnlyOwner, counter.clone()));

    assert!(
        table
            .apply(&mut doc(), &action(BOB, json!({ "function": "poke" })))
            .is_err()
    );
    assert_eq!(counter.calls(), 0);

    table
        .apply(&mut doc(), &action(OWNER, json!({ "function": "poke" })))
        .unwrap();
    assert_eq!(counter.calls(), 1);
}

#[test]
fn table_is_a_contract() {
    let table = counter_then_note();
    let out = Contract::handle(&table, doc(), &action(OWNER, json!({ "function": "increment" })))
        .unwrap();
    assert_eq!(out.state.count, 1);
    assert_eq!(Contract::name(&table), "doc");
}

fn arb_interaction() -> impl Strategy<Value = Interaction> {
    let caller = prop_oneof![Just(OWNER), Just(ALICE), Just(BOB)];
    let input = prop_oneof![
        Just(json!({ "function": "increment" })),
        Just(json!({ "function": "count" })),
        Just(json!({ "function": "setNote", "note": "hi" })),
        Just(json!({ "function": "setNote", "note": 3 })),
        Just(json!({ "function": "missing" })),
    ];
    (caller, input).prop_map(|(caller, input)| action(caller, input))
}

proptest! {
    #[test]
    fn mount_order_is_unobservable(actions in proptest::collection::vec(arb_interaction(), 0..24)) {
        let a = counter_then_note();
        let b = note_then_counter();
        let mut sa = doc();
        let mut sb = doc();
        for act in &actions {
            let ra = a.apply(&mut sa, act);
            let rb = b.apply(&mut sb, act);
            prop_assert_eq!(ra, rb);
            prop_assert_eq!(&sa, &sb);
        }
    }

    #[test]
    fn failures_leave_state_unchanged(actions in proptest::collection::vec(arb_interaction(), 0..24)) {
        let table = counter_then_note();
        let mut state = doc();
        for act in &actions {
            let before = state.clone();
            if table.apply(&mut state, act).is_err() {
                prop_assert_eq!(&state, &before);
            }
        }
    }
}
