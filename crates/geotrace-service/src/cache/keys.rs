//! Cache keys for list-shaped results.

use std::fmt;

/// Key identifying a cached list result.
///
/// Singleton lookups are keyed directly by their typed identifier; lists
/// need a key that distinguishes the full listing from per-owner listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListKey {
    /// The full listing.
    All,
    /// Records owned by a specific username.
    ByUsername(String),
}

impl ListKey {
    /// Key for records owned by the given username.
    #[must_use]
    pub fn by_username(username: impl Into<String>) -> Self {
        Self::ByUsername(username.into())
    }
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "findAll"),
            Self::ByUsername(username) => write!(f, "findByUsername:{}", username),
        }
    }
}
