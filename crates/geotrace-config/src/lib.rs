//! # GeoTrace Config
//!
//! Layered configuration loading: `config/default.toml`, then an
//! environment-specific file, then `GEOTRACE_`-prefixed environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::ConfigLoader;
