//! Geolocation data structures.

use serde::Serialize;

/// Tag names of the seven fields in the service's tagged response, in the
/// record's fixed field order.
pub const GEO_FIELD_TAGS: [&str; 7] = [
    "longitude",
    "latitude",
    "countryname",
    "countrycode",
    "city",
    "isp",
    "host",
];

/// Result of a successful geolocation lookup.
///
/// Exactly seven text fields in the fixed order of [`GEO_FIELD_TAGS`]. An
/// empty string means the service returned an empty element for that field;
/// a record with a tag missing entirely is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoRecord {
    /// Longitude of the located IP.
    pub longitude: String,
    /// Latitude of the located IP.
    pub latitude: String,
    /// Country name (`countryname` tag).
    pub country_name: String,
    /// ISO country code (`countrycode` tag).
    pub country_code: String,
    /// City name.
    pub city: String,
    /// Internet service provider.
    pub isp: String,
    /// Host name the service associates with the IP.
    pub host: String,
}

impl GeoRecord {
    /// Returns the `(tag, value)` pairs in fixed field order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("longitude", &self.longitude),
            ("latitude", &self.latitude),
            ("countryname", &self.country_name),
            ("countrycode", &self.country_code),
            ("city", &self.city),
            ("isp", &self.isp),
            ("host", &self.host),
        ]
    }
}
