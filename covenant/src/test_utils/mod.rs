//! Test utilities for covenant hosts.
//!
//! Enabled with the `test-utils` feature. Re-exports the protocol-level
//! fixtures so a test only needs this one module.

mod memory_host;

pub use covenant_types::test_utils::{ALICE, BOB, CAROL, CountingHandler, OWNER, action, envelope};
pub use memory_host::MemoryHost;
