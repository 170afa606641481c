//! User service implementation.

use crate::cache::{CacheManager, ListKey};
use crate::dto::{CreateUserRequest, CreateUsersBulkRequest, UpdateUserRequest, UserDto};
use crate::user_service::UserService;
use async_trait::async_trait;
use geotrace_core::{GeotraceError, GeotraceResult, RequestCounter, UserId, ValidateExt};
use geotrace_repository::UserRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// User service implementation.
///
/// Reads are read-through against the cache. Every mutation clears all
/// caches, location caches included: location list keys and owner fields
/// embed usernames, so a user change can stale any of them.
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
    cache: Arc<CacheManager>,
    counter: Arc<RequestCounter>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: Arc<CacheManager>,
        counter: Arc<RequestCounter>,
    ) -> Self {
        Self {
            repository,
            cache,
            counter,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, request: CreateUserRequest) -> GeotraceResult<UserDto> {
        self.counter.increment();
        debug!("Creating user: {}", request.username);

        request.validate_request()?;

        if self.repository.exists_by_username(&request.username).await? {
            return Err(GeotraceError::Conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        let user = self.repository.create(&request.username).await?;
        self.cache.clear_all();

        info!("User created: {}", user.id);
        Ok(UserDto::from(user))
    }

    async fn create_users(&self, request: CreateUsersBulkRequest) -> GeotraceResult<Vec<UserDto>> {
        self.counter.increment();
        debug!("Creating {} users", request.usernames.len());

        if request.usernames.is_empty() {
            return Ok(Vec::new());
        }

        request.validate_request()?;

        let mut seen = HashSet::new();
        for username in &request.usernames {
            if !seen.insert(username.as_str()) {
                return Err(GeotraceError::Conflict(format!(
                    "Duplicate username '{}' in request",
                    username
                )));
            }
            if self.repository.exists_by_username(username).await? {
                return Err(GeotraceError::Conflict(format!(
                    "Username '{}' already exists",
                    username
                )));
            }
        }

        let users = self.repository.create_all(&request.usernames).await?;
        self.cache.clear_all();

        info!("Created {} users", users.len());
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    async fn get_user(&self, id: UserId) -> GeotraceResult<UserDto> {
        self.counter.increment();
        debug!("Getting user: {}", id);

        if let Some(cached) = self.cache.get_user(id) {
            debug!("Cache hit for user: {}", id);
            return Ok(cached);
        }

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GeotraceError::not_found("User", id))?;

        let dto = UserDto::from(user);
        self.cache.put_user(&dto);
        Ok(dto)
    }

    async fn get_user_by_username(&self, username: &str) -> GeotraceResult<UserDto> {
        self.counter.increment();
        debug!("Getting user by username: {}", username);

        if let Some(cached) = self.cache.get_user_by_username(username) {
            debug!("Cache hit for username: {}", username);
            return Ok(cached);
        }

        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| GeotraceError::not_found("User", username))?;

        let dto = UserDto::from(user);
        // Cache under both lookups so a follow-up by-ID read also hits.
        self.cache.put_user_by_username(&dto);
        self.cache.put_user(&dto);
        Ok(dto)
    }

    async fn list_users(&self) -> GeotraceResult<Vec<UserDto>> {
        self.counter.increment();
        debug!("Listing users");

        if let Some(cached) = self.cache.get_user_list(&ListKey::All) {
            debug!("Cache hit for user list");
            return Ok(cached);
        }

        let users = self.repository.find_all().await?;
        let dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
        self.cache.put_user_list(ListKey::All, dtos.clone());
        Ok(dtos)
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> GeotraceResult<UserDto> {
        self.counter.increment();
        debug!("Updating user: {}", id);

        request.validate_request()?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GeotraceError::not_found("User", id))?;

        if user.username != request.username
            && self.repository.exists_by_username(&request.username).await?
        {
            return Err(GeotraceError::Conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        user.rename(request.username);
        let updated = self.repository.update(&user).await?;
        self.cache.clear_all();

        info!("User updated: {}", id);
        Ok(UserDto::from(updated))
    }

    async fn delete_user(&self, id: UserId) -> GeotraceResult<()> {
        self.counter.increment();
        debug!("Deleting user: {}", id);

        // Existence is checked up front so an unknown id never reaches the
        // store's delete path.
        if !self.repository.exists(id).await? {
            return Err(GeotraceError::not_found("User", id));
        }

        self.repository.delete(id).await?;
        self.cache.clear_all();
        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
