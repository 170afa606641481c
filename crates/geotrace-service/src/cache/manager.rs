//! In-process cache manager.
//!
//! Holds service-level results so repeated reads skip the store and the
//! geolocation provider. Writers invalidate; they never refresh entries
//! in place, so the next read repopulates from the store.

use crate::cache::keys::ListKey;
use crate::dto::{LocationDto, UserDto};
use geotrace_core::{LocationId, UserId};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Shared cache for user and location results.
///
/// Each map is guarded by its own lock, so a user lookup never contends
/// with a location listing. All operations are idempotent.
#[derive(Default)]
pub struct CacheManager {
    users_by_id: RwLock<HashMap<UserId, UserDto>>,
    users_by_username: RwLock<HashMap<String, UserDto>>,
    user_lists: RwLock<HashMap<ListKey, Vec<UserDto>>>,
    locations_by_id: RwLock<HashMap<LocationId, LocationDto>>,
    location_lists: RwLock<HashMap<ListKey, Vec<LocationDto>>>,
}

impl CacheManager {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- users ---

    /// Returns the cached user for the given ID, if any.
    pub fn get_user(&self, id: UserId) -> Option<UserDto> {
        self.users_by_id.read().get(&id).cloned()
    }

    /// Caches a user under its ID.
    pub fn put_user(&self, user: &UserDto) {
        self.users_by_id.write().insert(user.id, user.clone());
    }

    /// Returns the cached user for the given username, if any.
    pub fn get_user_by_username(&self, username: &str) -> Option<UserDto> {
        self.users_by_username.read().get(username).cloned()
    }

    /// Caches a user under its username.
    pub fn put_user_by_username(&self, user: &UserDto) {
        self.users_by_username
            .write()
            .insert(user.username.clone(), user.clone());
    }

    /// Returns the cached user list for the given key, if any.
    pub fn get_user_list(&self, key: &ListKey) -> Option<Vec<UserDto>> {
        self.user_lists.read().get(key).cloned()
    }

    /// Caches a user list under the given key.
    pub fn put_user_list(&self, key: ListKey, users: Vec<UserDto>) {
        self.user_lists.write().insert(key, users);
    }

    // --- locations ---

    /// Returns the cached location for the given ID, if any.
    pub fn get_location(&self, id: LocationId) -> Option<LocationDto> {
        self.locations_by_id.read().get(&id).cloned()
    }

    /// Caches a location under its ID.
    pub fn put_location(&self, location: &LocationDto) {
        self.locations_by_id
            .write()
            .insert(location.id, location.clone());
    }

    /// Returns the cached location list for the given key, if any.
    pub fn get_location_list(&self, key: &ListKey) -> Option<Vec<LocationDto>> {
        self.location_lists.read().get(key).cloned()
    }

    /// Caches a location list under the given key.
    pub fn put_location_list(&self, key: ListKey, locations: Vec<LocationDto>) {
        self.location_lists.write().insert(key, locations);
    }

    // --- invalidation ---

    /// Drops every cached entry a location mutation can make stale: the
    /// record itself, the full listing, and the owner's listing.
    pub fn invalidate_location(&self, id: LocationId, owner_username: &str) {
        debug!("Invalidating location cache for id {} (owner: {})", id, owner_username);
        self.locations_by_id.write().remove(&id);
        let mut lists = self.location_lists.write();
        lists.remove(&ListKey::All);
        lists.remove(&ListKey::by_username(owner_username));
    }

    /// Clears all user caches.
    pub fn clear_users(&self) {
        debug!("Clearing user caches");
        self.users_by_id.write().clear();
        self.users_by_username.write().clear();
        self.user_lists.write().clear();
    }

    /// Clears all location caches.
    pub fn clear_locations(&self) {
        debug!("Clearing location caches");
        self.locations_by_id.write().clear();
        self.location_lists.write().clear();
    }

    /// Clears everything. User mutations go through here: a username is
    /// embedded in location list keys and in location owner fields, so a
    /// user change can stale any of them.
    pub fn clear_all(&self) {
        debug!("Clearing all caches");
        self.clear_users();
        self.clear_locations();
    }
}

impl std::fmt::Debug for CacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheManager")
            .field("users_by_id", &self.users_by_id.read().len())
            .field("users_by_username", &self.users_by_username.read().len())
            .field("user_lists", &self.user_lists.read().len())
            .field("locations_by_id", &self.locations_by_id.read().len())
            .field("location_lists", &self.location_lists.read().len())
            .finish()
    }
}
