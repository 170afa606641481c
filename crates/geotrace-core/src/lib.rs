//! # GeoTrace Core
//!
//! Core types, entities, and error definitions for GeoTrace.
//! This crate provides the foundational abstractions used across all layers
//! of the application.

pub mod counter;
pub mod entity;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use counter::*;
pub use entity::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
