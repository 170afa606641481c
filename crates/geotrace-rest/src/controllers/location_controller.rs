//! Location management controller.

use crate::{
    controllers::user_controller::UsernameQuery,
    extractors::ValidatedJson,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use geotrace_core::LocationId;
use geotrace_service::{
    CreateLocationRequest, CreateLocationsBulkRequest, LocationDto, UpdateLocationRequest,
};
use tracing::debug;

/// Creates the location router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route("/bulk", post(create_locations))
        .route("/by-username", get(get_locations_by_username))
        .route(
            "/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
}

/// List all locations.
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    responses(
        (status = 200, description = "All locations", body = [LocationDto])
    )
)]
pub async fn list_locations(State(state): State<AppState>) -> ApiResult<Vec<LocationDto>> {
    debug!("List locations request");
    let response = state.location_service.list_locations().await?;
    ok(response)
}

/// Resolve an IP address and record the location for a user.
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Address could not be resolved"),
        (status = 404, description = "Owner not found"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn create_location(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateLocationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LocationDto>>), AppError> {
    debug!(
        "Create location request: {} for {}",
        request.ip_address, request.username
    );
    let response = state.location_service.create_location(request).await?;
    Ok(created(response))
}

/// Resolve and record several IP addresses for a user.
#[utoipa::path(
    post,
    path = "/locations/bulk",
    tag = "locations",
    request_body = CreateLocationsBulkRequest,
    responses(
        (status = 201, description = "Locations created; unresolvable addresses are skipped", body = [LocationDto]),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn create_locations(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateLocationsBulkRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<LocationDto>>>), AppError> {
    debug!(
        "Create locations bulk request: {} addresses for {}",
        request.ip_addresses.len(),
        request.username
    );
    let response = state.location_service.create_locations(request).await?;
    Ok(created(response))
}

/// Get a location by ID.
#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Location ID")),
    responses(
        (status = 200, description = "The location", body = LocationDto),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<LocationDto> {
    debug!("Get location request: {}", id);
    let response = state
        .location_service
        .get_location(LocationId::from_i64(id))
        .await?;
    ok(response)
}

/// List locations owned by a username.
#[utoipa::path(
    get,
    path = "/locations/by-username",
    tag = "locations",
    params(("username" = String, Query, description = "Owner username")),
    responses(
        (status = 200, description = "Locations owned by the user", body = [LocationDto])
    )
)]
pub async fn get_locations_by_username(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> ApiResult<Vec<LocationDto>> {
    debug!("Get locations by username request: {}", query.username);
    let response = state
        .location_service
        .get_locations_by_username(&query.username)
        .await?;
    ok(response)
}

/// Update a location record.
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Location ID")),
    request_body = UpdateLocationRequest,
    responses(
        (status = 200, description = "Location updated", body = LocationDto),
        (status = 404, description = "Location not found")
    )
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateLocationRequest>,
) -> ApiResult<LocationDto> {
    debug!("Update location request: {}", id);
    let response = state
        .location_service
        .update_location(LocationId::from_i64(id), request)
        .await?;
    ok(response)
}

/// Delete a location.
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i64, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete location request: {}", id);
    state
        .location_service
        .delete_location(LocationId::from_i64(id))
        .await?;
    Ok(no_content())
}
