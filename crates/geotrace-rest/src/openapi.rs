//! OpenAPI documentation configuration.

use crate::controllers::counter_controller::RequestCountResponse;
use crate::controllers::health_controller::HealthResponse;
use geotrace_core::{ErrorResponse, FieldError, LocationId, UserId};
use geotrace_service::{
    CreateLocationRequest, CreateLocationsBulkRequest, CreateUserRequest, CreateUsersBulkRequest,
    LocationDto, UpdateLocationRequest, UpdateUserRequest, UserDto,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the GeoTrace API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GeoTrace API",
        version = "1.0.0",
        description = "Users and IP geolocation records with cached reads"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::create_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::get_user_by_username,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Location endpoints
        crate::controllers::location_controller::list_locations,
        crate::controllers::location_controller::create_location,
        crate::controllers::location_controller::create_locations,
        crate::controllers::location_controller::get_location,
        crate::controllers::location_controller::get_locations_by_username,
        crate::controllers::location_controller::update_location,
        crate::controllers::location_controller::delete_location,
        // Counter endpoints
        crate::controllers::counter_controller::get_request_count,
        crate::controllers::counter_controller::reset_request_count,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            UserId,
            LocationId,
            ErrorResponse,
            FieldError,
            // User DTOs
            CreateUserRequest,
            CreateUsersBulkRequest,
            UpdateUserRequest,
            UserDto,
            // Location DTOs
            CreateLocationRequest,
            CreateLocationsBulkRequest,
            UpdateLocationRequest,
            LocationDto,
            // Misc
            RequestCountResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "locations", description = "Location management endpoints"),
        (name = "counter", description = "Request counter endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
