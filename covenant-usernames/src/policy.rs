//! Username naming rules.

use covenant_types::ContractError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Length bounds for registered usernames.
///
/// The character set is fixed: lowercase ASCII letters, digits, `.` and
/// `_`. Lengths are counted in characters and both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernamePolicy {
    /// Shortest accepted name.
    pub min_len: usize,
    /// Longest accepted name.
    pub max_len: usize,
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_len: 64,
        }
    }
}

impl UsernamePolicy {
    /// Set the minimum length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Set the maximum length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}

/// A policy with its charset pattern compiled.
#[derive(Debug, Clone)]
pub(crate) struct Validator {
    policy: UsernamePolicy,
    charset: Regex,
}

impl Validator {
    pub(crate) fn new(policy: UsernamePolicy) -> Self {
        Self {
            policy,
            charset: Regex::new(r"^[a-z0-9._]+$").expect("valid regex"),
        }
    }

    pub(crate) fn check(&self, username: &str) -> Result<(), ContractError> {
        let len = username.chars().count();
        if len < self.policy.min_len || len > self.policy.max_len {
            return Err(ContractError::InvalidUsername(format!(
                "must be between {} and {} characters",
                self.policy.min_len, self.policy.max_len
            )));
        }
        if !self.charset.is_match(username) {
            return Err(ContractError::InvalidUsername(
                "may only contain lowercase letters, digits, '.' and '_'".into(),
            ));
        }
        Ok(())
    }
}
