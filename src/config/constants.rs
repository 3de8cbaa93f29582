//! Configuration constants.
//!
//! This module defines the fixed endpoint, identifying header, and
//! operational limits used throughout the application.

/// Base URL of the geolocation API. The resolved IP address is appended
/// directly; address strings contain no characters that need escaping.
pub const GEOIP_API_ENDPOINT: &str = "http://api.geoiplookup.net/?query=";

/// Service name shown in user-facing availability messages.
pub const SERVICE_NAME: &str = "http://geoiplookup.net";

/// Identifying User-Agent header sent with every API request.
pub const DEFAULT_USER_AGENT: &str = "IP-scout";

// Network operation timeouts
/// HTTP request timeout in seconds.
/// The API normally answers well under a second; 10s bounds the wait on a
/// hung connection without tripping on slow links.
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds.
/// Most queries complete in <1s; 3s fails fast on unresponsive servers.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Maximum accepted entry length in characters.
/// Matches common browser and server URL limits; longer input is rejected
/// before any parsing.
pub const MAX_ENTRY_LENGTH: usize = 2048;
