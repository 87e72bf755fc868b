//! The contract error taxonomy.

use crate::id::{Address, RoleName};
use thiserror::Error;

/// Every way a contract invocation can fail.
///
/// All errors are terminal for the invocation: the host either aborts the
/// enclosing transaction or shows the message to the caller. Nothing in
/// covenant recovers from or swallows a `ContractError`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// The caller failed an authorization predicate.
    #[error("this function is only available to {requirement}")]
    Unauthorized {
        /// Who the operation is restricted to, e.g. "the contract owner".
        requirement: String,
    },

    /// A payload field is missing or has the wrong shape.
    #[error("{field} must be {expected}")]
    InvalidType {
        /// The payload field that was read.
        field: String,
        /// Description of the accepted shape, e.g. "a string".
        expected: String,
    },

    /// A payload field that should hold an address does not.
    #[error("{field} must be a non-empty address")]
    InvalidAddress {
        /// The payload field that was read.
        field: String,
    },

    /// Insert into a unique collection that already holds the item.
    #[error("{collection} item must be unique: {item}")]
    DuplicateItem {
        /// The collection that was written, e.g. "items" or "hidden".
        collection: String,
        /// The rejected item.
        item: String,
    },

    /// Remove from a collection that does not hold the item.
    #[error("{collection} item not found: {item}")]
    ItemNotFound {
        /// The collection that was searched.
        collection: String,
        /// The missing item.
        item: String,
    },

    /// The address already holds the role.
    #[error("address {address} already has {role} role")]
    DuplicateMember {
        /// The role being granted.
        role: RoleName,
        /// The address that already holds it.
        address: Address,
    },

    /// The address does not hold the role.
    #[error("address {address} does not have {role} role")]
    MemberNotFound {
        /// The role being revoked.
        role: RoleName,
        /// The address that does not hold it.
        address: Address,
    },

    /// The address is already followed.
    #[error("already following {0}")]
    AlreadyFollowing(Address),

    /// The address is not followed.
    #[error("not following {0}")]
    NotFollowing(Address),

    /// Evolve was called without a code reference.
    #[error("a new contract source reference is required to evolve")]
    MissingCodeRef,

    /// The operation name is not in the variant's dispatch table.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A requested username breaks the registry's naming rules.
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// A requested username is held by another caller.
    #[error("username already taken: {0}")]
    UsernameTaken(String),

    /// Genesis or threaded state does not match the variant's state shape.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Serializing the new state or result failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ContractError {
    /// Shorthand for an [`ContractError::Unauthorized`] error.
    pub fn unauthorized(requirement: impl Into<String>) -> Self {
        Self::Unauthorized {
            requirement: requirement.into(),
        }
    }

    /// Shorthand for an [`ContractError::InvalidType`] error.
    pub fn invalid_type(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "unauthorized",
            Self::InvalidType { .. } => "invalid_type",
            Self::InvalidAddress { .. } => "invalid_address",
            Self::DuplicateItem { .. } => "duplicate_item",
            Self::ItemNotFound { .. } => "item_not_found",
            Self::DuplicateMember { .. } => "duplicate_member",
            Self::MemberNotFound { .. } => "member_not_found",
            Self::AlreadyFollowing(_) => "already_following",
            Self::NotFollowing(_) => "not_following",
            Self::MissingCodeRef => "missing_code_ref",
            Self::InvalidOperation(_) => "invalid_operation",
            Self::InvalidUsername(_) => "invalid_username",
            Self::UsernameTaken(_) => "username_taken",
            Self::InvalidState(_) => "invalid_state",
            Self::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
