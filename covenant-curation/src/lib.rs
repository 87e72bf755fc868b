#![deny(missing_docs)]
//! Curation entity for covenant contracts.
//!
//! A [`Curation`] is a title, a metadata object, an ordered item list and a
//! parallel hidden list. [`CurationCore`] exposes its eight mutators as an
//! unguarded mixin; variants decide who may call them.
//!
//! `setItems` and `setHiddenItems` replace a list wholesale without
//! re-checking uniqueness, and `hidden` is independent of `items`: an item
//! can be hidden without being listed.

mod entity;
mod list;
mod mixin;

pub use entity::{Curation, HasCuration};
pub use list::{Collection, ItemList};
pub use mixin::CurationCore;
