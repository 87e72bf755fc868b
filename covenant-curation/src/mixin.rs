//! The unguarded curation mutators.

use crate::entity::HasCuration;
use crate::list::Collection;
use covenant_types::{Interaction, Mixin, Operation, handler_fn};
use serde_json::Value;

/// Mixin contributing the eight curation mutators.
///
/// | Operation | Payload | Fails with |
/// |-----------|---------|------------|
/// | `setTitle` | `title: string` | `InvalidType` |
/// | `setMetadata` | `metadata: object` | `InvalidType` (arrays too) |
/// | `addItem` | `item: string` | `InvalidType`, `DuplicateItem` |
/// | `removeItem` | `item: string` | `InvalidType`, `ItemNotFound` |
/// | `setItems` | `items: string[]` | `InvalidType` |
/// | `hideItem` | `item: string` | `InvalidType`, `DuplicateItem` |
/// | `unhideItem` | `item: string` | `InvalidType`, `ItemNotFound` |
/// | `setHiddenItems` | `items: string[]` | `InvalidType` |
///
/// Every mutator returns `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurationCore;

fn list_operations<S: HasCuration + 'static>(
    collection: Collection,
    [add, remove, set]: [&'static str; 3],
) -> [Operation<S>; 3] {
    [
        Operation::write(
            add,
            handler_fn(move |state: &mut S, action: &Interaction| {
                let item = action.input.string("item")?;
                state.curation_mut().add(collection, item)?;
                Ok(Value::Bool(true))
            }),
        ),
        Operation::write(
            remove,
            handler_fn(move |state: &mut S, action: &Interaction| {
                let item = action.input.string("item")?;
                state.curation_mut().remove(collection, item)?;
                Ok(Value::Bool(true))
            }),
        ),
        Operation::write(
            set,
            handler_fn(move |state: &mut S, action: &Interaction| {
                let items = action.input.string_list("items")?;
                state.curation_mut().replace(collection, items);
                Ok(Value::Bool(true))
            }),
        ),
    ]
}

impl<S: HasCuration + 'static> Mixin<S> for CurationCore {
    fn name(&self) -> &'static str {
        "curation"
    }

    fn operations(&self) -> Vec<Operation<S>> {
        let mut ops = vec![
            Operation::write(
                "setTitle",
                handler_fn(|state: &mut S, action: &Interaction| {
                    let title = action.input.string("title")?;
                    state.curation_mut().set_title(title);
                    Ok(Value::Bool(true))
                }),
            ),
            Operation::write(
                "setMetadata",
                handler_fn(|state: &mut S, action: &Interaction| {
                    let metadata = action.input.object("metadata")?.clone();
                    state.curation_mut().set_metadata(metadata);
                    Ok(Value::Bool(true))
                }),
            ),
        ];
        ops.extend(list_operations(
            Collection::Items,
            ["addItem", "removeItem", "setItems"],
        ));
        ops.extend(list_operations(
            Collection::Hidden,
            ["hideItem", "unhideItem", "setHiddenItems"],
        ));
        ops
    }
}
