//! Response envelope and error conversion.
//!
//! Every endpoint answers with the same envelope: a `success` flag plus
//! either `data` or `error`. Service errors choose their own HTTP status
//! through `GeotraceError::status_code`, so handlers only propagate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geotrace_core::{ErrorResponse, GeotraceError};
use serde::{Deserialize, Serialize};

/// Envelope carried by every API payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn failure(error: ErrorResponse) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Newtype making `GeotraceError` usable as an Axum rejection.
#[derive(Debug)]
pub struct AppError(pub GeotraceError);

impl From<GeotraceError> for AppError {
    fn from(err: GeotraceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = ApiResponse::failure(ErrorResponse::from_error(&self.0));
        (status, Json(envelope)).into_response()
    }
}

/// Handler result: a wrapped payload or an error with its own status.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// 200 with the payload wrapped in a success envelope.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// 201 for successful creations.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::success(data)))
}

/// 204 for deletions and resets.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
