use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime};

/// Display format for publication dates, e.g. "22 jan 21"
const DISPLAY_FORMAT: &str = "%-d %b %y";

/// Parse a publication timestamp from the catalog
///
/// Accepts RFC 3339 as well as the ISO-like forms the catalog uses
/// ("2021-01-22 19:00:00", "2021-01-22T19:00:00", "2021-01-22").
/// Values without an offset are taken as UTC.
pub fn parse_published_at(date_str: &str) -> Option<DateTime<FixedOffset>> {
    let date_str = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt);
    }

    let utc = FixedOffset::east_opt(0)?;

    let naive_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    for format in naive_formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(date_str, format) {
            return naive.and_local_timezone(utc).single();
        }
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|naive| naive.and_local_timezone(utc).single())
}

/// Format a publication date for display with Brazilian Portuguese month names
pub fn format_published_at(date: &DateTime<FixedOffset>) -> String {
    date.format_localized(DISPLAY_FORMAT, Locale::pt_BR).to_string()
}
