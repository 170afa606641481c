//! Request counter controller.

use crate::{
    responses::{no_content, ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Request count response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestCountResponse {
    /// Number of service operations handled since start or last reset.
    pub count: u64,
}

/// Creates the counter router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_request_count))
        .route("/reset", post(reset_request_count))
}

/// Get the current request count.
#[utoipa::path(
    get,
    path = "/request-count",
    tag = "counter",
    responses(
        (status = 200, description = "Current request count", body = RequestCountResponse)
    )
)]
pub async fn get_request_count(State(state): State<AppState>) -> ApiResult<RequestCountResponse> {
    let count = state.counter.count();
    debug!("Request count: {}", count);
    ok(RequestCountResponse { count })
}

/// Reset the request count to zero.
#[utoipa::path(
    post,
    path = "/request-count/reset",
    tag = "counter",
    responses(
        (status = 204, description = "Request count reset")
    )
)]
pub async fn reset_request_count(State(state): State<AppState>) -> StatusCode {
    debug!("Resetting request count");
    state.counter.reset();
    no_content()
}
