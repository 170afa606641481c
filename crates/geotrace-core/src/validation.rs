//! Validation utilities.

use crate::{FieldError, GeotraceError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `GeotraceError` on failure.
    fn validate_request(&self) -> Result<(), GeotraceError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `GeotraceError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> GeotraceError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    GeotraceError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Checks whether a string looks like a dotted-quad IPv4 address.
    ///
    /// Matches the lenient pattern `^([0-9]{1,3}\.){3}[0-9]{1,3}$`: four
    /// groups of 1-3 digits separated by dots, without range-checking each
    /// octet. Stateless pure function.
    #[must_use]
    pub fn is_valid_ip_address(address: &str) -> bool {
        let mut octets = 0;
        for part in address.split('.') {
            if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            octets += 1;
        }
        octets == 4
    }

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// `validator`-compatible wrapper around [`is_valid_ip_address`].
    pub fn valid_ip_address(address: &str) -> Result<(), ValidationError> {
        if !is_valid_ip_address(address) {
            return Err(ValidationError::new("invalid_ip_address"));
        }
        Ok(())
    }

    /// Validates every entry of a username list: non-blank and at most 64
    /// characters, the same rules a single username must satisfy.
    pub fn valid_usernames(usernames: &[String]) -> Result<(), ValidationError> {
        for username in usernames {
            if username.trim().is_empty() {
                return Err(ValidationError::new("not_blank"));
            }
            if username.len() > 64 {
                return Err(ValidationError::new("length"));
            }
        }
        Ok(())
    }
}

pub use rules::is_valid_ip_address;

#[cfg(test)]
mod tests {
    use super::rules::*;

    #[test]
    fn test_valid_ip_addresses() {
        assert!(is_valid_ip_address("8.8.8.8"));
        assert!(is_valid_ip_address("192.168.0.1"));
        assert!(is_valid_ip_address("255.255.255.255"));
        // The pattern is lenient about octet ranges, as documented.
        assert!(is_valid_ip_address("999.999.999.999"));
    }

    #[test]
    fn test_invalid_ip_addresses() {
        assert!(!is_valid_ip_address(""));
        assert!(!is_valid_ip_address("not-an-ip"));
        assert!(!is_valid_ip_address("1.2.3"));
        assert!(!is_valid_ip_address("1.2.3.4.5"));
        assert!(!is_valid_ip_address("1.2.3.abcd"));
        assert!(!is_valid_ip_address("1234.2.3.4"));
        assert!(!is_valid_ip_address("1..3.4"));
        assert!(!is_valid_ip_address("1.2.3.4 "));
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_valid_ip_address_rule() {
        assert!(valid_ip_address("8.8.4.4").is_ok());
        assert!(valid_ip_address("not-an-ip").is_err());
    }

    #[test]
    fn test_valid_usernames() {
        assert!(valid_usernames(&[]).is_ok());
        assert!(valid_usernames(&["alice".to_string(), "bob".to_string()]).is_ok());
        assert!(valid_usernames(&["alice".to_string(), "  ".to_string()]).is_err());
        assert!(valid_usernames(&["a".repeat(65)]).is_err());
    }
}
