#![deny(missing_docs)]
//! Guarded dispatch tables for covenant contract variants.
//!
//! A variant is a [`DispatchTable`]: operation name → [`Guarded`] pair of
//! (guard, handler). Tables are built by mounting mixins, each behind the
//! guard the variant wants for that mixin's writes. Dispatch looks the
//! operation up, runs the guard, then the handler. Unknown operations fail
//! with `InvalidOperation`; nothing is ever silently ignored.
//!
//! The pattern mirrors a middleware pipeline with exactly one layer: the
//! guard either short-circuits with `Unauthorized` or hands the call on.

mod guarded;
mod table;

pub use guarded::{Guarded, guard};
pub use table::DispatchTable;
