//! Geolocation lookup trait and result types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geolocation record resolved for an IP address.
///
/// All fields are optional; the provider decides what it can resolve.
/// Callers enforce their own completeness requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub city: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

/// Errors from a geolocation lookup.
#[derive(Debug, Error)]
pub enum GeoLookupError {
    /// The provider rejected the address itself (unroutable, reserved, or
    /// otherwise unresolvable). The caller's input is at fault.
    #[error("provider rejected address '{address}': {message}")]
    ClientRejected { address: String, message: String },

    /// The provider could not be reached or returned a malformed or
    /// server-side-failed response.
    #[error("geolocation provider unavailable: {0}")]
    Unavailable(String),
}

/// Geolocation lookup provider.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Resolves a geolocation record for the given IP address.
    async fn resolve(&self, address: &str) -> Result<GeoRecord, GeoLookupError>;
}
