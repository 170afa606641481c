//! Repository trait definitions.

use async_trait::async_trait;
use geotrace_core::{GeotraceResult, Location, LocationId, NewLocation, User, UserId};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user. The store assigns the identifier.
    async fn create(&self, username: &str) -> GeotraceResult<User>;

    /// Inserts a batch of users atomically. The store assigns identifiers.
    async fn create_all(&self, usernames: &[String]) -> GeotraceResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> GeotraceResult<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> GeotraceResult<Option<User>>;

    /// Returns all users ordered by ID.
    async fn find_all(&self) -> GeotraceResult<Vec<User>>;

    /// Updates an existing user.
    async fn update(&self, user: &User) -> GeotraceResult<User>;

    /// Deletes a user by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: UserId) -> GeotraceResult<bool>;

    /// Checks if a user with the given ID exists.
    async fn exists(&self, id: UserId) -> GeotraceResult<bool>;

    /// Checks if a username is already taken.
    async fn exists_by_username(&self, username: &str) -> GeotraceResult<bool>;
}

/// Location repository trait.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Inserts a new location record. The store assigns the identifier.
    async fn create(&self, location: &NewLocation) -> GeotraceResult<Location>;

    /// Finds a location by ID.
    async fn find_by_id(&self, id: LocationId) -> GeotraceResult<Option<Location>>;

    /// Returns all locations owned by the given username, ordered by ID.
    async fn find_by_username(&self, username: &str) -> GeotraceResult<Vec<Location>>;

    /// Returns all locations ordered by ID.
    async fn find_all(&self) -> GeotraceResult<Vec<Location>>;

    /// Updates an existing location.
    async fn update(&self, location: &Location) -> GeotraceResult<Location>;

    /// Deletes a location by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: LocationId) -> GeotraceResult<bool>;
}
