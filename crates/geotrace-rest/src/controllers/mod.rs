//! HTTP controllers.

pub mod counter_controller;
pub mod health_controller;
pub mod location_controller;
pub mod user_controller;
