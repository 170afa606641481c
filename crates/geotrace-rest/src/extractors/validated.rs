//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes JSON and validates it using the
//! `validator` crate. Validation errors are returned as 422 Unprocessable
//! Entity with field-level error details.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geotrace_core::{ErrorResponse, FieldError};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// JSON extractor that automatically validates the deserialized value.
///
/// Returns 422 Unprocessable Entity with field-level errors if validation
/// fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Rejection type for validated JSON extraction.
pub enum ValidatedJsonRejection {
    /// JSON parsing/deserialization error.
    JsonError(JsonRejection),
    /// Validation error with field-level details.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let error_response = ErrorResponse {
                    code: "INVALID_JSON".to_string(),
                    message: format!("Invalid JSON: {}", rejection),
                    details: None,
                };
                (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
            }
            Self::ValidationError(errors) => {
                let field_errors = convert_validation_errors(&errors);
                let error_response = ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "Request validation failed".to_string(),
                    details: Some(field_errors),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(error_response)).into_response()
            }
        }
    }
}

/// Convert validator errors to field errors.
fn convert_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors = Vec::new();

    for (field, field_errs) in errors.field_errors() {
        for err in field_errs {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Validation failed for field '{}'", field));

            field_errors.push(FieldError {
                field: field.to_string(),
                message,
                code: err.code.to_string(),
            });
        }
    }

    // Handle nested struct errors
    for (field, errors_kind) in &errors.0 {
        if let ValidationErrorsKind::Struct(nested) = errors_kind {
            for nested_err in convert_validation_errors(nested.as_ref()) {
                field_errors.push(FieldError {
                    field: format!("{}.{}", field, nested_err.field),
                    message: nested_err.message,
                    code: nested_err.code,
                });
            }
        }
    }

    field_errors
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestRequest {
        #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
        name: String,
    }

    #[test]
    fn test_convert_validation_errors_single_field() {
        let req = TestRequest {
            name: "ab".to_string(),
        };

        let errors = req.validate().unwrap_err();
        let field_errors = convert_validation_errors(&errors);

        assert_eq!(field_errors.len(), 1);
        assert_eq!(field_errors[0].field, "name");
        assert_eq!(field_errors[0].message, "Name must be at least 3 characters");
    }

    #[test]
    fn test_valid_request_passes() {
        let req = TestRequest {
            name: "Valid Name".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
