//! In-process cache for service results.

pub mod keys;
pub mod manager;

pub use keys::ListKey;
pub use manager::CacheManager;
