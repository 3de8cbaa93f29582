//! Geolocation lookup via the geoiplookup.net API.
//!
//! This module issues the outbound API request for a resolved IP address
//! and extracts the seven known fields from the tagged response.

mod client;
mod extract;
mod types;

// Re-export public API
pub use client::lookup_ip;
pub use types::{GeoRecord, GEO_FIELD_TAGS};
