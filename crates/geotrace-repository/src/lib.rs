//! # GeoTrace Repository
//!
//! Data access layer. Services depend on the [`UserRepository`] and
//! [`LocationRepository`] traits; the PostgreSQL implementations live in
//! [`postgres`] and share a [`DatabasePool`].

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::{create_pool, DatabasePool};
pub use postgres::{PgLocationRepository, PgUserRepository};
pub use traits::{LocationRepository, UserRepository};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use geotrace_core::{
        GeotraceError, GeotraceResult, Location, LocationId, NewLocation, User, UserId,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory user repository mimicking store semantics, including the
    /// unique constraint on username and sequential id assignment.
    struct InMemoryUserRepository {
        users: Mutex<HashMap<UserId, User>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryUserRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
                next_id: Mutex::new(1),
            }
        }

        fn insert(&self, username: &str) -> GeotraceResult<User> {
            let mut users = self.users.lock().unwrap();
            if users.values().any(|u| u.username == username) {
                return Err(GeotraceError::conflict(format!(
                    "username '{}' already exists",
                    username
                )));
            }
            let mut next_id = self.next_id.lock().unwrap();
            let user = User {
                id: UserId::from_i64(*next_id),
                username: username.to_string(),
                created_at: Utc::now(),
            };
            *next_id += 1;
            users.insert(user.id, user.clone());
            Ok(user)
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn create(&self, username: &str) -> GeotraceResult<User> {
            self.insert(username)
        }

        async fn create_all(&self, usernames: &[String]) -> GeotraceResult<Vec<User>> {
            usernames.iter().map(|u| self.insert(u)).collect()
        }

        async fn find_by_id(&self, id: UserId) -> GeotraceResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> GeotraceResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn find_all(&self) -> GeotraceResult<Vec<User>> {
            let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
            users.sort_by_key(|u| u.id.into_inner());
            Ok(users)
        }

        async fn update(&self, user: &User) -> GeotraceResult<User> {
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(user.clone())
        }

        async fn delete(&self, id: UserId) -> GeotraceResult<bool> {
            Ok(self.users.lock().unwrap().remove(&id).is_some())
        }

        async fn exists(&self, id: UserId) -> GeotraceResult<bool> {
            Ok(self.users.lock().unwrap().contains_key(&id))
        }

        async fn exists_by_username(&self, username: &str) -> GeotraceResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .any(|u| u.username == username))
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();
        let a = repo.create("alice").await.unwrap();
        let b = repo.create("bob").await.unwrap();
        assert_eq!(a.id.into_inner(), 1);
        assert_eq!(b.id.into_inner(), 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create("alice").await.unwrap();
        let err = repo.create("alice").await.unwrap_err();
        assert!(matches!(err, GeotraceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_all_preserves_input_order() {
        let repo = InMemoryUserRepository::new();
        let users = repo
            .create_all(&["carol".to_string(), "dave".to_string()])
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "carol");
        assert_eq!(users[1].username, "dave");
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create("alice").await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create("alice").await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exists_by_username() {
        let repo = InMemoryUserRepository::new();
        repo.create("alice").await.unwrap();

        assert!(repo.exists_by_username("alice").await.unwrap());
        assert!(!repo.exists_by_username("bob").await.unwrap());
    }

    /// In-memory location repository with sequential id assignment.
    struct InMemoryLocationRepository {
        locations: Mutex<HashMap<LocationId, Location>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryLocationRepository {
        fn new() -> Self {
            Self {
                locations: Mutex::new(HashMap::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl LocationRepository for InMemoryLocationRepository {
        async fn create(&self, location: &NewLocation) -> GeotraceResult<Location> {
            let mut next_id = self.next_id.lock().unwrap();
            let record = Location {
                id: LocationId::from_i64(*next_id),
                user_id: location.user_id,
                owner_username: "alice".to_string(),
                ip_address: location.ip_address.clone(),
                city: location.city.clone(),
                country: location.country.clone(),
                continent: location.continent.clone(),
                latitude: location.latitude,
                longitude: location.longitude,
                timezone: location.timezone.clone(),
                created_at: Utc::now(),
            };
            *next_id += 1;
            self.locations.lock().unwrap().insert(record.id, record.clone());
            Ok(record)
        }

        async fn find_by_id(&self, id: LocationId) -> GeotraceResult<Option<Location>> {
            Ok(self.locations.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> GeotraceResult<Vec<Location>> {
            let mut found: Vec<Location> = self
                .locations
                .lock()
                .unwrap()
                .values()
                .filter(|l| l.owner_username == username)
                .cloned()
                .collect();
            found.sort_by_key(|l| l.id.into_inner());
            Ok(found)
        }

        async fn find_all(&self) -> GeotraceResult<Vec<Location>> {
            let mut all: Vec<Location> =
                self.locations.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|l| l.id.into_inner());
            Ok(all)
        }

        async fn update(&self, location: &Location) -> GeotraceResult<Location> {
            self.locations
                .lock()
                .unwrap()
                .insert(location.id, location.clone());
            Ok(location.clone())
        }

        async fn delete(&self, id: LocationId) -> GeotraceResult<bool> {
            Ok(self.locations.lock().unwrap().remove(&id).is_some())
        }
    }

    fn test_new_location(ip: &str) -> NewLocation {
        NewLocation {
            user_id: UserId::from_i64(1),
            ip_address: ip.to_string(),
            city: "Berlin".to_string(),
            country: "Germany".to_string(),
            continent: Some("Europe".to_string()),
            latitude: Some(52.52),
            longitude: Some(13.405),
            timezone: Some("Europe/Berlin".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_location() {
        let repo = InMemoryLocationRepository::new();
        let created = repo.create(&test_new_location("1.2.3.4")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.ip_address, "1.2.3.4");
        assert_eq!(found.city, "Berlin");
    }

    #[tokio::test]
    async fn test_find_locations_by_username() {
        let repo = InMemoryLocationRepository::new();
        repo.create(&test_new_location("1.2.3.4")).await.unwrap();
        repo.create(&test_new_location("5.6.7.8")).await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].ip_address, "1.2.3.4");

        assert!(repo.find_by_username("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_location() {
        let repo = InMemoryLocationRepository::new();
        let mut created = repo.create(&test_new_location("1.2.3.4")).await.unwrap();

        created.city = "Hamburg".to_string();
        repo.update(&created).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.city, "Hamburg");
    }

    #[tokio::test]
    async fn test_delete_location() {
        let repo = InMemoryLocationRepository::new();
        let created = repo.create(&test_new_location("1.2.3.4")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
