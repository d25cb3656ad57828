//! Account identifiers
//!
//! Generated identifiers look like `ACC-4821`. Accounts created implicitly as
//! transfer destinations keep whatever identifier the user typed, so the
//! wrapper accepts any string and only [`AccountId::from_number`] enforces the
//! generated format.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::RangeInclusive;

/// Prefix shared by every generated identifier
pub const ACCOUNT_ID_PREFIX: &str = "ACC-";

/// Numeric range of generated identifiers
pub const ACCOUNT_ID_RANGE: RangeInclusive<u16> = 1000..=9999;

/// Identifier of an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap an existing identifier string as-is
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a generated-format identifier from its numeric part
    pub fn from_number(number: u16) -> Self {
        debug_assert!(ACCOUNT_ID_RANGE.contains(&number));
        Self(format!("{}{}", ACCOUNT_ID_PREFIX, number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this identifier has the generated `ACC-####` shape
    pub fn is_generated_format(&self) -> bool {
        self.0
            .strip_prefix(ACCOUNT_ID_PREFIX)
            .and_then(|digits| {
                if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
                    digits.parse::<u16>().ok()
                } else {
                    None
                }
            })
            .is_some_and(|n| ACCOUNT_ID_RANGE.contains(&n))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AccountId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AccountId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
