//! Domain entities.

mod location;
mod user;

pub use location::{Location, LocationUpdate, NewLocation};
pub use user::User;
