//! Test utilities for covenant.
//!
//! In-memory handlers and interaction builders for testing guards, tables
//! and variants without a host. Enabled with the `test-utils` feature.

mod counting_handler;
mod fixtures;

pub use counting_handler::CountingHandler;
pub use fixtures::{ALICE, BOB, CAROL, OWNER, action, envelope};
