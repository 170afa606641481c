//! # GeoTrace GeoIP
//!
//! IP geolocation lookups. The [`GeoLookup`] trait abstracts the provider;
//! [`IpApiClient`] talks to an ip-api.com compatible HTTP endpoint.

mod client;
mod types;

pub use client::IpApiClient;
pub use types::{GeoLookup, GeoLookupError, GeoRecord};
