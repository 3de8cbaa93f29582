//! Presentation rendering.
//!
//! Turns lookup outcomes into the text shown to the user. The core makes no
//! other assumption about presentation; these functions are the only sink
//! for a finished lookup.

use crate::error_handling::LookupError;
use crate::geo::GeoRecord;

/// Renders a record as text blocks.
///
/// One `Field:value` block per field followed by a blank line. Blocks are
/// emitted in reverse field order, host first.
pub fn render_record(record: &GeoRecord) -> String {
    let mut out = String::new();
    for (tag, value) in record.fields().iter().rev() {
        out.push_str(&title_case(tag));
        out.push(':');
        out.push_str(value);
        out.push_str("\n\n");
    }
    out
}

/// Renders a record as pretty-printed JSON.
pub fn render_record_json(record: &GeoRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|e| {
        log::error!("Failed to serialize record to JSON: {e}");
        "{}".to_string()
    })
}

/// Renders a lookup failure as its user-facing message.
pub fn render_failure(err: &LookupError) -> String {
    err.user_message()
}

fn title_case(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
