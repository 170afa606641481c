//! # GeoTrace REST
//!
//! REST API layer built on Axum: controllers, extractors, response
//! envelopes, and the application router with Swagger UI.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
