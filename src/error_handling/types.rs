//! Error type definitions.
//!
//! This module defines the closed error taxonomy for the lookup flow and the
//! initialization error types used during startup.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::SERVICE_NAME;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for resolver configurations that can fail
    DnsResolverError(String),
}

/// Terminal errors for a single lookup.
///
/// Every failure mode of the resolve-then-query flow collapses into one of
/// these variants; the shell renders them via [`LookupError::user_message`]
/// and moves on to the next entry. Address-parse failures, URL-parse
/// failures, and DNS failures intentionally share the `InvalidEntry`
/// variant: the user sees a single message for all of them.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Entry is neither a valid IP address literal nor a resolvable
    /// hostname/URL.
    #[error("entry is neither a valid IP address nor a resolvable host: {entry:?}")]
    InvalidEntry {
        /// The offending user entry.
        entry: String,
    },

    /// The geolocation service could not be reached, timed out, or answered
    /// with an error status.
    #[error("geolocation service unavailable: {reason}")]
    ServiceUnavailable {
        /// Technical detail for the log; not shown to the user.
        reason: String,
    },

    /// A response was received but one of the expected tags is absent.
    #[error("geolocation response is missing the `{tag}` field")]
    MalformedResponse {
        /// The first tag that could not be found.
        tag: &'static str,
    },
}

impl LookupError {
    /// User-facing message for this error.
    ///
    /// These strings are the presentation contract; technical detail stays
    /// in the `Display` impl and the log.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::InvalidEntry { .. } => {
                "Invalid Entry! Please check your entry and try again.".to_string()
            }
            LookupError::ServiceUnavailable { .. } => {
                format!("{SERVICE_NAME} is currently unavailable.")
            }
            LookupError::MalformedResponse { .. } => {
                format!("{SERVICE_NAME} returned an incomplete response. Please try again later.")
            }
        }
    }
}
