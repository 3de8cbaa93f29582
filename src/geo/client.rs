//! Geolocation API client.

use log::debug;

use super::extract::extract_geo_record;
use super::types::GeoRecord;
use crate::error_handling::LookupError;

/// Queries the geolocation API for a resolved IP address.
///
/// Issues one GET against `endpoint` with the IP appended directly; address
/// strings are URL-safe so no percent-encoding is applied. There are no
/// retries: an unreachable or erroring service fails the lookup with
/// [`LookupError::ServiceUnavailable`].
///
/// # Errors
///
/// Returns `ServiceUnavailable` if the request cannot be sent, times out,
/// or answers with an error status, and `MalformedResponse` if the body is
/// missing one of the expected tags.
pub async fn lookup_ip(
    client: &reqwest::Client,
    endpoint: &str,
    ip: &str,
) -> Result<GeoRecord, LookupError> {
    let request_url = format!("{endpoint}{ip}");
    debug!("Requesting geolocation data: {request_url}");

    let response = client
        .get(&request_url)
        .send()
        .await
        .map_err(unavailable)?;
    let response = response.error_for_status().map_err(unavailable)?;
    let body = response.text().await.map_err(unavailable)?;

    extract_geo_record(&body)
}

fn unavailable(err: reqwest::Error) -> LookupError {
    debug!(
        "Geolocation request failed (timeout: {}, connect: {}): {err}",
        err.is_timeout(),
        err.is_connect()
    );
    LookupError::ServiceUnavailable {
        reason: err.to_string(),
    }
}
