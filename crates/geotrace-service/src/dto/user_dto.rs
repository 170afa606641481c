//! User-related DTOs.

use geotrace_core::validation::rules::{not_blank, valid_usernames};
use geotrace_core::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(
        custom(function = not_blank),
        length(max = 64, message = "Username must be at most 64 characters")
    )]
    pub username: String,
}

/// Request to create several users in one call. Every entry must satisfy
/// the same rules as a single username.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUsersBulkRequest {
    #[validate(custom(function = valid_usernames))]
    pub usernames: Vec<String>,
}

/// Request to rename a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(
        custom(function = not_blank),
        length(max = 64, message = "Username must be at most 64 characters")
    )]
    pub username: String,
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotrace_core::ValidateExt;

    #[test]
    fn test_create_user_request_rejects_blank_username() {
        let request = CreateUserRequest {
            username: "   ".to_string(),
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_create_user_request_accepts_valid_username() {
        let request = CreateUserRequest {
            username: "alice".to_string(),
        };
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_create_user_request_rejects_overlong_username() {
        let request = CreateUserRequest {
            username: "a".repeat(65),
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_bulk_request_rejects_blank_entry() {
        let request = CreateUsersBulkRequest {
            usernames: vec!["alice".to_string(), " ".to_string()],
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_bulk_request_rejects_overlong_entry() {
        let request = CreateUsersBulkRequest {
            usernames: vec!["a".repeat(65)],
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_bulk_request_accepts_valid_entries() {
        let request = CreateUsersBulkRequest {
            usernames: vec!["alice".to_string(), "bob".to_string()],
        };
        assert!(request.validate_request().is_ok());
    }
}
