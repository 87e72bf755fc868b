#![deny(missing_docs)]
//! Self-service username registry for covenant.
//!
//! Every caller may hold at most one username, and a username belongs to at
//! most one caller. There is no owner: each caller manages only their own
//! entry.
//!
//! | Operation | Payload | Effect |
//! |-----------|---------|--------|
//! | `register` | `username` | claim a name, freeing the caller's previous one |
//! | `release` | none | free the caller's name, if any |
//! | `usernameOf` | `address` | read the name held by `address`, or `null` |
//!
//! Names are checked against a [`UsernamePolicy`]: lowercase ASCII
//! letters, digits, `.` and `_`, between 2 and 64 characters by default.

mod contract;
mod policy;
mod state;

pub use contract::Usernames;
pub use policy::UsernamePolicy;
pub use state::UsernamesState;
