//! Ordered item lists.

use covenant_types::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two curation lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The visible, ordered item list.
    Items,
    /// The hidden list.
    Hidden,
}

impl Collection {
    /// Name used in error messages and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Hidden => "hidden",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An append-ordered list of item ids.
///
/// [`ItemList::insert`] refuses duplicates. [`ItemList::replace`] does not
/// check: a list set wholesale is stored exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<String>);

impl ItemList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `item` is present.
    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|i| i == item)
    }

    /// Append `item`, refusing duplicates.
    pub fn insert(&mut self, collection: Collection, item: String) -> Result<(), ContractError> {
        if self.contains(&item) {
            return Err(ContractError::DuplicateItem {
                collection: collection.to_string(),
                item,
            });
        }
        self.0.push(item);
        Ok(())
    }

    /// Remove the first match of `item`, keeping the order of the rest.
    pub fn remove(&mut self, collection: Collection, item: &str) -> Result<(), ContractError> {
        match self.0.iter().position(|i| i == item) {
            Some(idx) => {
                self.0.remove(idx);
                Ok(())
            }
            None => Err(ContractError::ItemNotFound {
                collection: collection.to_string(),
                item: item.to_owned(),
            }),
        }
    }

    /// Replace the whole list as given.
    pub fn replace(&mut self, items: Vec<String>) {
        self.0 = items;
    }

    /// The items in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ItemList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<'a> FromIterator<&'a str> for ItemList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}
