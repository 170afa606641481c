//! User service trait definition.

use crate::dto::{CreateUserRequest, CreateUsersBulkRequest, UpdateUserRequest, UserDto};
use async_trait::async_trait;
use geotrace_core::{GeotraceResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user.
    async fn create_user(&self, request: CreateUserRequest) -> GeotraceResult<UserDto>;

    /// Creates several users in one call. All-or-nothing: any invalid or
    /// duplicate username fails the whole request before anything persists.
    async fn create_users(&self, request: CreateUsersBulkRequest) -> GeotraceResult<Vec<UserDto>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> GeotraceResult<UserDto>;

    /// Gets a user by username.
    async fn get_user_by_username(&self, username: &str) -> GeotraceResult<UserDto>;

    /// Lists all users.
    async fn list_users(&self) -> GeotraceResult<Vec<UserDto>>;

    /// Renames a user.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> GeotraceResult<UserDto>;

    /// Deletes a user and, via the store, all locations it owns.
    async fn delete_user(&self, id: UserId) -> GeotraceResult<()>;
}
