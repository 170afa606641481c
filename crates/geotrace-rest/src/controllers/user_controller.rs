//! User management controller.

use crate::{
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
use geotrace_core::UserId;
use geotrace_service::{CreateUserRequest, CreateUsersBulkRequest, UpdateUserRequest, UserDto};
use serde::Deserialize;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/bulk", post(create_users))
        .route("/by-username", get(get_user_by_username))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Query parameters for by-username lookups.
#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [UserDto])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserDto>> {
    debug!("List users request");
    let response = state.user_service.list_users().await?;
    ok(response)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 409, description = "Username already exists"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), AppError> {
    debug!("Create user request: {}", request.username);
    let response = state.user_service.create_user(request).await?;
    Ok(created(response))
}

/// Create several users in one call.
#[utoipa::path(
    post,
    path = "/users/bulk",
    tag = "users",
    request_body = CreateUsersBulkRequest,
    responses(
        (status = 201, description = "Users created", body = [UserDto]),
        (status = 409, description = "A username already exists or is duplicated")
    )
)]
pub async fn create_users(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUsersBulkRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<UserDto>>>), AppError> {
    debug!("Create users bulk request: {} usernames", request.usernames.len());
    let response = state.user_service.create_users(request).await?;
    Ok(created(response))
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<UserDto> {
    debug!("Get user request: {}", id);
    let response = state.user_service.get_user(UserId::from_i64(id)).await?;
    ok(response)
}

/// Get a user by username.
#[utoipa::path(
    get,
    path = "/users/by-username",
    tag = "users",
    params(("username" = String, Query, description = "Username to look up")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> ApiResult<UserDto> {
    debug!("Get user by username request: {}", query.username);
    let response = state
        .user_service
        .get_user_by_username(&query.username)
        .await?;
    ok(response)
}

/// Rename a user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<UserDto> {
    debug!("Update user request: {}", id);
    let response = state
        .user_service
        .update_user(UserId::from_i64(id), request)
        .await?;
    ok(response)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);
    state.user_service.delete_user(UserId::from_i64(id)).await?;
    Ok(no_content())
}
