//! Application state for Axum handlers.

use geotrace_core::RequestCounter;
use geotrace_service::{LocationService, UserService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub location_service: Arc<dyn LocationService>,
    pub counter: Arc<RequestCounter>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        location_service: Arc<dyn LocationService>,
        counter: Arc<RequestCounter>,
    ) -> Self {
        Self {
            user_service,
            location_service,
            counter,
        }
    }
}
