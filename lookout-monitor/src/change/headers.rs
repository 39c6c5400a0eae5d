//! HTTP header parsing utilities.
//!
//! The scraping layer hands raw header values to the engine; nothing here
//! performs any network I/O.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Parse an HTTP Last-Modified header value into a UTC timestamp.
///
/// Handles the RFC 2822 date format used by HTTP headers. Returns `None`
/// when the header is missing or unparseable.
pub fn parse_last_modified(header_value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = header_value?.trim();
    if value.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Extract the Content-Type from a headers map (case-insensitive key lookup).
///
/// Strips any parameters, e.g. `text/html; charset=utf-8` becomes `text/html`.
pub fn content_type(headers: &HashMap<String, String>) -> Option<String> {
    headers.iter().find_map(|(key, value)| {
        if key.eq_ignore_ascii_case("content-type") {
            value.split(';').next().map(|v| v.trim().to_string())
        } else {
            None
        }
    })
}

/// Check whether a content type indicates HTML content.
pub fn is_html(content_type: Option<&str>) -> bool {
    match content_type {
        Some(ct) => {
            let lower = ct.to_lowercase();
            lower == "text/html" || lower == "application/xhtml+xml"
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_last_modified_rfc2822() {
        let parsed = parse_last_modified(Some("Tue, 15 Nov 1994 08:12:31 GMT")).unwrap();
        assert_eq!(parsed.to_rfc2822(), "Tue, 15 Nov 1994 08:12:31 +0000");
    }

    #[test]
    fn test_parse_last_modified_invalid() {
        assert!(parse_last_modified(Some("not a date")).is_none());
        assert!(parse_last_modified(Some("")).is_none());
        assert!(parse_last_modified(None).is_none());
    }

    #[test]
    fn test_content_type_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "CONTENT-TYPE".to_string(),
            "text/html; charset=utf-8".to_string(),
        );
        assert_eq!(content_type(&headers).as_deref(), Some("text/html"));
    }

    #[test]
    fn test_content_type_missing() {
        let headers = HashMap::new();
        assert!(content_type(&headers).is_none());
    }

    #[test]
    fn test_is_html() {
        assert!(is_html(Some("text/html")));
        assert!(is_html(Some("application/xhtml+xml")));
        assert!(is_html(Some("TEXT/HTML")));
        assert!(!is_html(Some("application/json")));
        assert!(!is_html(None));
    }
}
