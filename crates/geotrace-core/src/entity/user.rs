//! User entity.

use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity owning zero or more geolocation records.
///
/// Username uniqueness is enforced by the store; deleting a user cascades
/// removal of all of its locations at the store level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store on creation.
    pub id: UserId,

    /// Unique username.
    pub username: String,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with a store-assigned id.
    #[must_use]
    pub fn new(id: UserId, username: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            created_at,
        }
    }

    /// Renames the user. The id and creation timestamp never change.
    pub fn rename(&mut self, username: String) {
        self.username = username;
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rename() {
        let mut user = User::new(UserId::from_i64(1), "alice".to_string(), Utc::now());
        user.rename("alicia".to_string());
        assert_eq!(user.username, "alicia");
        assert_eq!(user.id, UserId::from_i64(1));
    }

    #[test]
    fn test_entity_id() {
        let user = User::new(UserId::from_i64(3), "bob".to_string(), Utc::now());
        assert_eq!(*Entity::id(&user), UserId::from_i64(3));
    }
}
