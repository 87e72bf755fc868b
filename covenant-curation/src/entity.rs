//! The curation entity.

use crate::list::{Collection, ItemList};
use covenant_types::ContractError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title, metadata, ordered items and hidden items.
///
/// Variant states flatten this struct, so on the wire the four fields sit
/// next to `owner`, `roles` and friends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curation {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Free-form metadata. Always an object.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Visible items in append order.
    #[serde(default)]
    pub items: ItemList,
    /// Hidden items. Not required to be a subset of `items`.
    #[serde(default)]
    pub hidden: ItemList,
}

impl Curation {
    /// An untitled, empty curation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the metadata object.
    pub fn set_metadata(&mut self, metadata: Map<String, Value>) {
        self.metadata = metadata;
    }

    /// Borrow one of the two lists.
    pub fn list(&self, collection: Collection) -> &ItemList {
        match collection {
            Collection::Items => &self.items,
            Collection::Hidden => &self.hidden,
        }
    }

    fn list_mut(&mut self, collection: Collection) -> &mut ItemList {
        match collection {
            Collection::Items => &mut self.items,
            Collection::Hidden => &mut self.hidden,
        }
    }

    /// Append to a list, refusing duplicates.
    pub fn add(&mut self, collection: Collection, item: impl Into<String>) -> Result<(), ContractError> {
        self.list_mut(collection).insert(collection, item.into())
    }

    /// Remove from a list.
    pub fn remove(&mut self, collection: Collection, item: &str) -> Result<(), ContractError> {
        self.list_mut(collection).remove(collection, item)
    }

    /// Replace a list wholesale.
    pub fn replace(&mut self, collection: Collection, items: Vec<String>) {
        self.list_mut(collection).replace(items);
    }
}

/// State that embeds a curation.
pub trait HasCuration {
    /// Read access.
    fn curation(&self) -> &Curation;

    /// Write access.
    fn curation_mut(&mut self) -> &mut Curation;
}

impl HasCuration for Curation {
    fn curation(&self) -> &Curation {
        self
    }

    fn curation_mut(&mut self) -> &mut Curation {
        self
    }
}
