//! Data transfer objects.

mod location_dto;
mod user_dto;

pub use location_dto::{
    CreateLocationRequest, CreateLocationsBulkRequest, LocationDto, UpdateLocationRequest,
};
pub use user_dto::{CreateUserRequest, CreateUsersBulkRequest, UpdateUserRequest, UserDto};
