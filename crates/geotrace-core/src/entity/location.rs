//! Location entity.

use crate::{Entity, LocationId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geolocation record derived from an IP address, owned by a [`User`].
///
/// `owner_username` is populated by the repository via a join; a location
/// never outlives its owning user, so the join is total. Cache invalidation
/// is keyed on it.
///
/// [`User`]: crate::User
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier, assigned by the store on creation.
    pub id: LocationId,

    /// Owning user (foreign key, non-null).
    pub user_id: UserId,

    /// Username of the owning user.
    pub owner_username: String,

    /// The IP address this record was resolved from.
    pub ip_address: String,

    /// Resolved city.
    pub city: String,

    /// Resolved country.
    pub country: String,

    /// Resolved continent, when the provider supplies one.
    pub continent: Option<String>,

    /// Latitude in degrees.
    pub latitude: Option<f64>,

    /// Longitude in degrees.
    pub longitude: Option<f64>,

    /// IANA timezone name.
    pub timezone: Option<String>,

    /// Record creation timestamp. Set once, immutable thereafter.
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Overwrites all descriptive fields from another record.
    ///
    /// The id, owner, and creation timestamp are never touched; update does
    /// not support re-parenting.
    pub fn apply_update(&mut self, update: LocationUpdate) {
        self.ip_address = update.ip_address;
        self.city = update.city;
        self.country = update.country;
        self.continent = update.continent;
        self.latitude = update.latitude;
        self.longitude = update.longitude;
        self.timezone = update.timezone;
    }
}

impl Entity<LocationId> for Location {
    fn id(&self) -> &LocationId {
        &self.id
    }
}

/// Descriptive fields of a location, used for updates.
#[derive(Debug, Clone)]
pub struct LocationUpdate {
    pub ip_address: String,
    pub city: String,
    pub country: String,
    pub continent: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

/// A location waiting for a store-assigned id.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub user_id: UserId,
    pub ip_address: String,
    pub city: String,
    pub country: String,
    pub continent: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_location() -> Location {
        Location {
            id: LocationId::from_i64(1),
            user_id: UserId::from_i64(1),
            owner_username: "alice".to_string(),
            ip_address: "8.8.8.8".to_string(),
            city: "Mountain View".to_string(),
            country: "United States".to_string(),
            continent: Some("North America".to_string()),
            latitude: Some(37.386),
            longitude: Some(-122.0838),
            timezone: Some("America/Los_Angeles".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_update_overwrites_descriptive_fields() {
        let mut location = sample_location();
        let created_at = location.created_at;

        location.apply_update(LocationUpdate {
            ip_address: "1.1.1.1".to_string(),
            city: "Sydney".to_string(),
            country: "Australia".to_string(),
            continent: None,
            latitude: None,
            longitude: None,
            timezone: None,
        });

        assert_eq!(location.ip_address, "1.1.1.1");
        assert_eq!(location.city, "Sydney");
        assert!(location.continent.is_none());
        // Identity and ownership are untouched.
        assert_eq!(location.id, LocationId::from_i64(1));
        assert_eq!(location.user_id, UserId::from_i64(1));
        assert_eq!(location.owner_username, "alice");
        assert_eq!(location.created_at, created_at);
    }
}
