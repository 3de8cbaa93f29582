//! Entry classification and IP resolution.
//!
//! This module turns a raw user entry into a concrete IP address string:
//! - An address literal passes through unchanged.
//! - Anything else is normalized as a URL, its host component extracted,
//!   and the host forward-resolved via DNS.
//!
//! All failure modes (malformed address, malformed URL, empty host, DNS
//! failure) collapse into [`LookupError::InvalidEntry`]; the distinction is
//! not surfaced to the user.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::MAX_ENTRY_LENGTH;
use crate::error_handling::LookupError;

/// What a user entry turned out to be after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    /// The entry is itself an address literal; original text preserved.
    IpLiteral(String),
    /// A URL whose host component is an address literal; no DNS needed.
    IpHost(IpAddr),
    /// A host name that still needs forward resolution.
    Hostname(String),
}

/// Forward DNS lookup seam.
///
/// Implemented for the hickory resolver below and by test doubles, so the
/// resolution flow can be exercised without touching the network.
#[async_trait]
pub trait ResolveHost: Send + Sync {
    /// Resolves a host name to its first IP address.
    async fn resolve_host(&self, host: &str) -> Result<IpAddr, LookupError>;
}

#[async_trait]
impl ResolveHost for TokioAsyncResolver {
    async fn resolve_host(&self, host: &str) -> Result<IpAddr, LookupError> {
        let response = self.lookup_ip(host).await.map_err(|e| {
            debug!("DNS lookup failed for {host}: {e}");
            LookupError::InvalidEntry {
                entry: host.to_string(),
            }
        })?;
        response
            .iter()
            .next()
            .ok_or_else(|| LookupError::InvalidEntry {
                entry: host.to_string(),
            })
    }
}

/// Classifies a user entry as an address literal, an address-hosted URL, or
/// a host name.
///
/// Entries that are not address literals are treated as URLs: an `http://`
/// prefix is added if no recognized scheme is present (never doubled), the
/// result is parsed, and the host component is taken with port and path
/// stripped.
pub(crate) fn classify_entry(entry: &str) -> Result<Target, LookupError> {
    if entry.len() > MAX_ENTRY_LENGTH {
        warn!(
            "Rejecting entry exceeding maximum length ({} > {})",
            entry.len(),
            MAX_ENTRY_LENGTH
        );
        return Err(invalid(entry));
    }

    if entry.parse::<IpAddr>().is_ok() {
        return Ok(Target::IpLiteral(entry.to_string()));
    }

    // Normalize: add http:// prefix if missing
    let normalized = if !entry.starts_with("http://") && !entry.starts_with("https://") {
        format!("http://{entry}")
    } else {
        entry.to_string()
    };

    let parsed = url::Url::parse(&normalized).map_err(|e| {
        debug!("Entry does not parse as a URL ({normalized}): {e}");
        invalid(entry)
    })?;

    match parsed.host() {
        Some(url::Host::Domain(domain)) if !domain.is_empty() => {
            Ok(Target::Hostname(domain.to_string()))
        }
        Some(url::Host::Ipv4(addr)) => Ok(Target::IpHost(IpAddr::V4(addr))),
        Some(url::Host::Ipv6(addr)) => Ok(Target::IpHost(IpAddr::V6(addr))),
        _ => {
            debug!("Entry has no usable host component: {normalized}");
            Err(invalid(entry))
        }
    }
}

/// Resolves a user entry to an IP address string.
///
/// Address-literal entries are returned byte-for-byte unchanged; host names
/// go through one forward DNS lookup, first address wins.
pub async fn resolve_entry<R>(entry: &str, resolver: &R) -> Result<String, LookupError>
where
    R: ResolveHost + ?Sized,
{
    match classify_entry(entry)? {
        Target::IpLiteral(text) => Ok(text),
        Target::IpHost(addr) => Ok(addr.to_string()),
        Target::Hostname(host) => {
            debug!("Resolving host {host}");
            let addr = resolver.resolve_host(&host).await?;
            Ok(addr.to_string())
        }
    }
}

fn invalid(entry: &str) -> LookupError {
    LookupError::InvalidEntry {
        entry: entry.to_string(),
    }
}
