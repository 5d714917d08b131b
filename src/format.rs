//! Display helpers shared by the CLI.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::Document;

const SIZE_UNITS: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Human-readable size. Always reports at least kilobytes, e.g. `0.5 KB`.
pub fn readable_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    value /= 1024.0;
    while value > 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value.max(0.1), SIZE_UNITS[unit])
}

/// File name used when saving a document's asset locally.
pub fn download_file_name(doc: &Document, compressed: bool) -> String {
    let suffix = if compressed { "_compressed" } else { "" };
    match doc.extension() {
        Some(ext) => format!("{}{}.{}", doc.reference_name, suffix, ext),
        None => format!("{}{}", doc.reference_name, suffix),
    }
}

/// Relative age of an RFC 3339 timestamp ("just now", "5m ago", ...).
pub fn fmt_since(ts: &str, now: OffsetDateTime) -> Option<String> {
    let dt = OffsetDateTime::parse(ts, &Rfc3339).ok()?;
    let secs = (now - dt).whole_seconds();

    // Future timestamps are rare; callers fall back to the raw value.
    if secs < 0 {
        return None;
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    let s = if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    };
    Some(s)
}

/// `fmt_since` against the current clock, falling back to the raw string.
pub fn created_label(ts: &str) -> String {
    fmt_since(ts, OffsetDateTime::now_utc()).unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
