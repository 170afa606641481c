//! # GeoTrace Service
//!
//! Business logic layer. Services orchestrate repositories, the
//! geolocation provider, and the in-process [`CacheManager`]: reads are
//! read-through, writes persist first and invalidate after.

pub mod cache;
pub mod dto;
pub mod location_service;
pub mod user_service;
pub mod r#impl;

pub use cache::{CacheManager, ListKey};
pub use dto::*;
pub use location_service::LocationService;
pub use r#impl::{LocationServiceImpl, UserServiceImpl};
pub use user_service::UserService;
