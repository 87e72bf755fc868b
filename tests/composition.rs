//! Composition properties across real mixins.
//!
//! A variant is defined by which mixins it mounts behind which guards, not
//! by the order it mounts them in. These tests build the collaborative
//! following table in every mount order and check that random interaction
//! sequences produce identical results and identical states.

use covenant::CollaborativeFollowingCurationState;
use covenant_curation::CurationCore;
use covenant_dispatch::DispatchTable;
use covenant_following::SocialGraph;
use covenant_guard::{AnyOf, OnlyOwner, OnlyOwnerOrRole, OnlyRole, RoleMembership};
use covenant_types::test_utils::action;
use covenant_types::{ContractError, Interaction, Mixin, RoleName};
use proptest::prelude::*;
use serde_json::{Value, json};

type State = CollaborativeFollowingCurationState;

enum Part {
    Curation,
    Curators,
    Social,
}

fn table(order: &[Part]) -> DispatchTable<State> {
    let mut table = DispatchTable::new("collaborative-following-curation");
    for part in order {
        match part {
            Part::Curation => table.mount(&CurationCore, OnlyOwnerOrRole::new("curator")),
            Part::Curators => table.mount(&RoleMembership::curator(), OnlyOwner),
            Part::Social => table.mount(&SocialGraph, OnlyOwnerOrRole::new("curator")),
        };
    }
    table
}

fn genesis() -> State {
    serde_json::from_value(json!({
        "owner": "O",
        "title": "",
        "metadata": {},
        "items": [],
        "hidden": [],
        "roles": { "curator": ["C"] },
        "following": []
    }))
    .unwrap()
}

fn interaction() -> impl Strategy<Value = Interaction> {
    let caller = prop::sample::select(vec!["O", "C", "X"]);
    let item = prop::sample::select(vec!["a", "b", "c"]);
    let who = prop::sample::select(vec!["C", "X", "F"]);
    let function = prop::sample::select(vec![
        "setTitle",
        "addItem",
        "removeItem",
        "setItems",
        "hideItem",
        "unhideItem",
        "addCurator",
        "removeCurator",
        "follow",
        "unfollow",
        "following",
        "bogus",
    ]);
    (caller, function, item, who).prop_map(|(caller, function, item, who)| {
        let input = match function {
            "setTitle" => json!({ "function": function, "title": item }),
            "setItems" => json!({ "function": function, "items": [item, item] }),
            "addCurator" | "removeCurator" | "follow" | "unfollow" => {
                json!({ "function": function, "address": who })
            }
            _ => json!({ "function": function, "item": item }),
        };
        action(caller, input)
    })
}

fn run(table: &DispatchTable<State>, actions: &[Interaction]) -> (State, Vec<Result<Value, ContractError>>) {
    let mut state = genesis();
    let results = actions
        .iter()
        .map(|a| table.apply(&mut state, a))
        .collect();
    (state, results)
}

proptest! {
    #[test]
    fn mount_order_is_unobservable(actions in prop::collection::vec(interaction(), 0..40)) {
        let reference = run(&table(&[Part::Curation, Part::Curators, Part::Social]), &actions);
        for order in [
            [Part::Social, Part::Curators, Part::Curation],
            [Part::Curators, Part::Curation, Part::Social],
            [Part::Social, Part::Curation, Part::Curators],
        ] {
            let other = run(&table(&order), &actions);
            prop_assert_eq!(&other.0, &reference.0);
            prop_assert_eq!(&other.1, &reference.1);
        }
    }

    #[test]
    fn failures_never_change_state(actions in prop::collection::vec(interaction(), 1..30)) {
        let table = table(&[Part::Curation, Part::Curators, Part::Social]);
        let mut state = genesis();
        for a in &actions {
            let before = state.clone();
            if table.apply(&mut state, a).is_err() {
                prop_assert_eq!(&state, &before);
            }
        }
    }

    #[test]
    fn curator_sets_stay_unique(actions in prop::collection::vec(interaction(), 0..40)) {
        let (state, _) = run(&table(&[Part::Curation, Part::Curators, Part::Social]), &actions);
        let mut members: Vec<_> = state.roles.members(&RoleName::from("curator")).to_vec();
        let total = members.len();
        members.sort();
        members.dedup();
        prop_assert_eq!(members.len(), total);

        let mut followed: Vec<_> = state.following.as_slice().to_vec();
        let total = followed.len();
        followed.sort();
        followed.dedup();
        prop_assert_eq!(followed.len(), total);
    }
}

#[test]
fn stacked_guards_authorize_like_the_compound_guard() {
    // owner-or-curator written as a union of the two primitive guards
    let union: AnyOf<State> = AnyOf::new().or(OnlyOwner).or(OnlyRole::new("curator"));
    let mut composed = DispatchTable::new("composed");
    composed.mount(&CurationCore, union);
    let compound = table(&[Part::Curation]);

    for caller in ["O", "C", "X"] {
        let a = action(caller, json!({ "function": "addItem", "item": "z" }));
        let left = composed.apply(&mut genesis(), &a).is_ok();
        let right = compound.apply(&mut genesis(), &a).is_ok();
        assert_eq!(left, right, "{caller}");
    }
    assert_eq!(Mixin::<State>::name(&CurationCore), "curation");
}
