//! Location service implementation.

use crate::cache::{CacheManager, ListKey};
use crate::dto::{
    CreateLocationRequest, CreateLocationsBulkRequest, LocationDto, UpdateLocationRequest,
};
use crate::location_service::LocationService;
use async_trait::async_trait;
use geotrace_core::validation::is_valid_ip_address;
use geotrace_core::{
    GeotraceError, GeotraceResult, LocationId, NewLocation, RequestCounter, User, ValidateExt,
};
use geotrace_geoip::{GeoLookup, GeoLookupError};
use geotrace_repository::{LocationRepository, UserRepository};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Location service implementation.
///
/// Creation resolves the address through the geolocation provider, persists
/// the result, and invalidates the caches the new record makes stale. The
/// stored IP is always the one the caller asked for, regardless of what the
/// provider echoes back.
pub struct LocationServiceImpl {
    locations: Arc<dyn LocationRepository>,
    users: Arc<dyn UserRepository>,
    geo: Arc<dyn GeoLookup>,
    cache: Arc<CacheManager>,
    counter: Arc<RequestCounter>,
}

impl LocationServiceImpl {
    /// Creates a new location service.
    pub fn new(
        locations: Arc<dyn LocationRepository>,
        users: Arc<dyn UserRepository>,
        geo: Arc<dyn GeoLookup>,
        cache: Arc<CacheManager>,
        counter: Arc<RequestCounter>,
    ) -> Self {
        Self {
            locations,
            users,
            geo,
            cache,
            counter,
        }
    }

    /// Resolves an address and builds the record to persist. A usable
    /// record needs at least a city and a country.
    async fn resolve_new_location(
        &self,
        owner: &User,
        ip_address: &str,
    ) -> GeotraceResult<NewLocation> {
        let record = self.geo.resolve(ip_address).await.map_err(|e| match e {
            GeoLookupError::ClientRejected { address, message } => GeotraceError::validation(
                format!("Unable to resolve location for '{}': {}", address, message),
            ),
            GeoLookupError::Unavailable(message) => GeotraceError::internal(format!(
                "Geolocation lookup failed for '{}': {}",
                ip_address, message
            )),
        })?;

        let (Some(city), Some(country)) = (record.city, record.country) else {
            return Err(GeotraceError::validation(format!(
                "Geolocation for '{}' is missing city or country",
                ip_address
            )));
        };

        Ok(NewLocation {
            user_id: owner.id,
            ip_address: ip_address.to_string(),
            city,
            country,
            continent: record.continent,
            latitude: record.latitude,
            longitude: record.longitude,
            timezone: record.timezone,
        })
    }
}

#[async_trait]
impl LocationService for LocationServiceImpl {
    async fn create_location(&self, request: CreateLocationRequest) -> GeotraceResult<LocationDto> {
        self.counter.increment();
        debug!(
            "Creating location for {} (user: {})",
            request.ip_address, request.username
        );

        request.validate_request()?;

        let owner = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| GeotraceError::not_found("User", &request.username))?;

        let new_location = self
            .resolve_new_location(&owner, &request.ip_address)
            .await?;

        let created = self.locations.create(&new_location).await?;
        self.cache
            .invalidate_location(created.id, &created.owner_username);

        info!("Location created: {}", created.id);
        Ok(LocationDto::from(created))
    }

    async fn create_locations(
        &self,
        request: CreateLocationsBulkRequest,
    ) -> GeotraceResult<Vec<LocationDto>> {
        self.counter.increment();
        debug!(
            "Creating {} locations for user {}",
            request.ip_addresses.len(),
            request.username
        );

        request.validate_request()?;

        let owner = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| GeotraceError::not_found("User", &request.username))?;

        let mut created = Vec::new();
        for ip_address in &request.ip_addresses {
            if !is_valid_ip_address(ip_address) {
                warn!("Skipping malformed address '{}'", ip_address);
                continue;
            }

            let new_location = match self.resolve_new_location(&owner, ip_address).await {
                Ok(new_location) => new_location,
                Err(e) => {
                    warn!("Skipping address '{}': {}", ip_address, e);
                    continue;
                }
            };

            match self.locations.create(&new_location).await {
                Ok(location) => {
                    self.cache
                        .invalidate_location(location.id, &location.owner_username);
                    created.push(LocationDto::from(location));
                }
                Err(e) => {
                    warn!("Failed to persist location for '{}': {}", ip_address, e);
                }
            }
        }

        info!(
            "Created {} of {} requested locations",
            created.len(),
            request.ip_addresses.len()
        );
        Ok(created)
    }

    async fn get_location(&self, id: LocationId) -> GeotraceResult<LocationDto> {
        self.counter.increment();
        debug!("Getting location: {}", id);

        if let Some(cached) = self.cache.get_location(id) {
            debug!("Cache hit for location: {}", id);
            return Ok(cached);
        }

        let location = self
            .locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| GeotraceError::not_found("Location", id))?;

        let dto = LocationDto::from(location);
        self.cache.put_location(&dto);
        Ok(dto)
    }

    async fn get_locations_by_username(&self, username: &str) -> GeotraceResult<Vec<LocationDto>> {
        self.counter.increment();
        debug!("Getting locations for username: {}", username);

        let key = ListKey::by_username(username);
        if let Some(cached) = self.cache.get_location_list(&key) {
            debug!("Cache hit for locations of {}", username);
            return Ok(cached);
        }

        let locations = self.locations.find_by_username(username).await?;
        let dtos: Vec<LocationDto> = locations.into_iter().map(LocationDto::from).collect();
        self.cache.put_location_list(key, dtos.clone());
        Ok(dtos)
    }

    async fn list_locations(&self) -> GeotraceResult<Vec<LocationDto>> {
        self.counter.increment();
        debug!("Listing locations");

        if let Some(cached) = self.cache.get_location_list(&ListKey::All) {
            debug!("Cache hit for location list");
            return Ok(cached);
        }

        let locations = self.locations.find_all().await?;
        let dtos: Vec<LocationDto> = locations.into_iter().map(LocationDto::from).collect();
        self.cache.put_location_list(ListKey::All, dtos.clone());
        Ok(dtos)
    }

    async fn update_location(
        &self,
        id: LocationId,
        request: UpdateLocationRequest,
    ) -> GeotraceResult<LocationDto> {
        self.counter.increment();
        debug!("Updating location: {}", id);

        request.validate_request()?;

        let mut location = self
            .locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| GeotraceError::not_found("Location", id))?;

        let owner_username = location.owner_username.clone();
        location.apply_update(request.into());

        let updated = self.locations.update(&location).await?;
        self.cache.invalidate_location(id, &owner_username);

        info!("Location updated: {}", id);
        Ok(LocationDto::from(updated))
    }

    async fn delete_location(&self, id: LocationId) -> GeotraceResult<()> {
        self.counter.increment();
        debug!("Deleting location: {}", id);

        let location = self
            .locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| GeotraceError::not_found("Location", id))?;

        let deleted = self.locations.delete(id).await?;
        if !deleted {
            return Err(GeotraceError::not_found("Location", id));
        }

        self.cache.invalidate_location(id, &location.owner_username);
        info!("Location deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for LocationServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationServiceImpl").finish_non_exhaustive()
    }
}
