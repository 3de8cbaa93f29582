//! Tagged-response field extraction.
//!
//! The API answers with an XML-like tagged document. It is parsed leniently
//! as markup soup rather than strict XML: the service has no published
//! schema and real responses carry declaration noise the strict parsers
//! reject. Each known field is the text content of the first element with
//! that tag name.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::types::{GeoRecord, GEO_FIELD_TAGS};
use crate::error_handling::LookupError;

static FIELD_SELECTORS: LazyLock<HashMap<&'static str, Selector>> = LazyLock::new(|| {
    GEO_FIELD_TAGS
        .iter()
        .map(|tag| (*tag, tag_selector(tag)))
        .collect()
});

fn tag_selector(tag: &str) -> Selector {
    Selector::parse(tag).unwrap_or_else(|e| {
        log::error!("Failed to parse selector for tag '{tag}': {e}. Using fallback selector.");
        // Fallback that matches nothing; the record then fails as malformed
        Selector::parse("*:not(*)")
            .expect("Fallback selector '*:not(*)' should always parse - this is a programming error")
    })
}

/// Text content of the first element named `tag`, trimmed.
fn tag_text(document: &Html, tag: &'static str) -> Result<String, LookupError> {
    let selector = FIELD_SELECTORS
        .get(tag)
        .ok_or(LookupError::MalformedResponse { tag })?;
    let element = document
        .select(selector)
        .next()
        .ok_or(LookupError::MalformedResponse { tag })?;
    Ok(element.text().collect::<String>().trim().to_string())
}

/// Extracts the seven known fields from a response body.
///
/// A tag absent from the document fails the whole record; a present but
/// empty tag yields an empty-string field.
pub(crate) fn extract_geo_record(body: &str) -> Result<GeoRecord, LookupError> {
    let document = Html::parse_document(body);
    Ok(GeoRecord {
        longitude: tag_text(&document, "longitude")?,
        latitude: tag_text(&document, "latitude")?,
        country_name: tag_text(&document, "countryname")?,
        country_code: tag_text(&document, "countrycode")?,
        city: tag_text(&document, "city")?,
        isp: tag_text(&document, "isp")?,
        host: tag_text(&document, "host")?,
    })
}
