//! Result type alias used across all layers.

use crate::GeotraceError;

/// Convenience result type for all GeoTrace operations.
pub type GeotraceResult<T> = Result<T, GeotraceError>;
