//! PostgreSQL repository implementations.

mod location_repository;
mod user_repository;

pub use location_repository::PgLocationRepository;
pub use user_repository::PgUserRepository;
