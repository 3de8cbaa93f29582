//! Error handling.
//!
//! This module provides the closed error taxonomy returned by the lookup
//! flow and the error types used during initialization.

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError};
