//! Location service trait definition.

use crate::dto::{
    CreateLocationRequest, CreateLocationsBulkRequest, LocationDto, UpdateLocationRequest,
};
use async_trait::async_trait;
use geotrace_core::{GeotraceResult, LocationId};

/// Location service trait.
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Resolves the IP address through the geolocation provider and records
    /// the result for the owning user.
    async fn create_location(&self, request: CreateLocationRequest) -> GeotraceResult<LocationDto>;

    /// Resolves and records several IP addresses for one user. Partial
    /// success: addresses that fail to resolve or persist are skipped and
    /// the rest are returned in input order.
    async fn create_locations(
        &self,
        request: CreateLocationsBulkRequest,
    ) -> GeotraceResult<Vec<LocationDto>>;

    /// Gets a location by ID.
    async fn get_location(&self, id: LocationId) -> GeotraceResult<LocationDto>;

    /// Lists locations owned by the given username.
    async fn get_locations_by_username(&self, username: &str) -> GeotraceResult<Vec<LocationDto>>;

    /// Lists all locations.
    async fn list_locations(&self) -> GeotraceResult<Vec<LocationDto>>;

    /// Updates a location record.
    async fn update_location(
        &self,
        id: LocationId,
        request: UpdateLocationRequest,
    ) -> GeotraceResult<LocationDto>;

    /// Deletes a location.
    async fn delete_location(&self, id: LocationId) -> GeotraceResult<()>;
}
