//! ipscout library: IP and URL geolocation lookup
//!
//! This library resolves a user-supplied IP address or URL to a concrete IP
//! and queries the geoiplookup.net API for basic geolocation data
//! (longitude, latitude, country, city, ISP, host).
//!
//! # Example
//!
//! ```no_run
//! use ipscout::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     query: Some("8.8.8.8".to_string()),
//!     ..Default::default()
//! };
//! run(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod display;
mod error_handling;
mod geo;
mod resolver;

pub mod config;
pub mod initialization;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use display::{render_failure, render_record, render_record_json};
pub use error_handling::{InitializationError, LookupError};
pub use geo::{lookup_ip, GeoRecord, GEO_FIELD_TAGS};
pub use resolver::{resolve_entry, ResolveHost};
pub use run::{lookup_entry, run};

// Internal run module (per-entry pipeline and the query/stdin driver)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::config::{Config, OutputFormat};
    use crate::display;
    use crate::error_handling::LookupError;
    use crate::geo::{self, GeoRecord};
    use crate::initialization::{init_client, init_resolver};
    use crate::resolver::{resolve_entry, ResolveHost};

    /// Resolves a user entry and queries the geolocation service.
    ///
    /// This is the per-entry pipeline: classification and resolution first,
    /// then one API request. Both stages report failures through the closed
    /// [`LookupError`] enum; the caller decides how to render them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if the entry is neither an address literal
    /// nor a resolvable hostname/URL, `ServiceUnavailable` if the API
    /// cannot be reached, and `MalformedResponse` if the response is
    /// missing an expected field.
    pub async fn lookup_entry<R>(
        entry: &str,
        client: &reqwest::Client,
        resolver: &R,
        endpoint: &str,
    ) -> Result<GeoRecord, LookupError>
    where
        R: ResolveHost + ?Sized,
    {
        let ip = resolve_entry(entry, resolver).await?;
        geo::lookup_ip(client, endpoint, &ip).await
    }

    /// Runs lookups for the configured query, or for stdin lines when no
    /// query was given.
    ///
    /// Each non-empty entry produces exactly one rendered outcome on
    /// stdout. Empty and whitespace-only entries are skipped without
    /// output. Lookup failures render their user message and never abort
    /// the loop or the process; only resource setup failures are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or DNS resolver cannot be
    /// initialized, or if stdin cannot be read.
    pub async fn run(config: Config) -> Result<()> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;

        if let Some(query) = config.query.clone() {
            process_entry(&query, &client, resolver.as_ref(), &config).await;
            return Ok(());
        }

        info!("Reading entries from stdin");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read entry from stdin")?
        {
            process_entry(&line, &client, resolver.as_ref(), &config).await;
        }
        Ok(())
    }

    async fn process_entry<R>(entry: &str, client: &reqwest::Client, resolver: &R, config: &Config)
    where
        R: ResolveHost + ?Sized,
    {
        let entry = entry.trim();
        if entry.is_empty() {
            // Empty entries short-circuit: no lookup, no output
            return;
        }

        match lookup_entry(entry, client, resolver, &config.endpoint).await {
            Ok(record) => match config.output {
                OutputFormat::Text => print!("{}", display::render_record(&record)),
                OutputFormat::Json => println!("{}", display::render_record_json(&record)),
            },
            Err(err) => {
                warn!("Lookup failed for {entry:?}: {err}");
                println!("{}", display::render_failure(&err));
            }
        }
    }
}
