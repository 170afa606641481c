//! Typed ID wrappers for domain entities.
//!
//! Ids are assigned by the store (`BIGSERIAL`), so these wrap an `i64`
//! rather than minting identifiers client-side.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for user IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserId(pub i64);

impl UserId {
    /// Creates a user ID from a raw database id.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner id.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parses a user ID from a string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for location IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LocationId(pub i64);

impl LocationId {
    /// Creates a location ID from a raw database id.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner id.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parses a location ID from a string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for LocationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<LocationId> for i64 {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::from_i64(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_id_parsing() {
        let id = UserId::parse("17").unwrap();
        assert_eq!(id, UserId::from_i64(17));
        assert!(UserId::parse("not-a-number").is_err());
    }

    #[test]
    fn test_location_id_roundtrip() {
        let id = LocationId::from_i64(7);
        assert_eq!(i64::from(id), 7);
        assert_eq!(LocationId::from(7), id);
    }
}
