//! Service implementations.

mod location_service_impl;
mod user_service_impl;

pub use location_service_impl::LocationServiceImpl;
pub use user_service_impl::UserServiceImpl;
