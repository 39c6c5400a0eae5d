//! Status indicator extractors.
//!
//! Each extractor is a pure function from already-materialized inputs to at
//! most one [`StatusIndicator`]. The rule engine in
//! [`crate::status::rules`] does not care where indicators come from.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use lookout_common::FreshnessConfig;

use super::types::{SignalKind, StatusIndicator};
use crate::util::{char_window, window_before};

/// Copyright marker followed by a year, optionally a year range
/// (e.g. "2020-2025", with hyphen or en dash). The marker is required: a
/// bare year is not a copyright line.
static COPYRIGHT_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\(c\)|\(C\)|[Cc]opyright|©)\s*(\d{4})(?:\s*[-\u{2013}]\s*(\d{4}))?").unwrap()
});

/// Acquisition detection phrases.
///
/// "is now" without a corporate structure word is NOT matched, to avoid
/// false positives like "Product X is now available".
pub static ACQUISITION_PATTERNS: &[&str] = &[
    "acquired by",
    "merged with",
    "sold to",
    "now part of",
    "is now a subsidiary of",
    "is now a division of",
    "is now a part of",
    "is now a unit of",
    "is now a brand of",
];

static ACQUISITION_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ACQUISITION_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", regex::escape(p))).unwrap())
        .collect()
});

/// Extract the highest copyright year from content.
///
/// Year ranges contribute their end year. Returns `None` when no copyright
/// marker with a year is present.
pub fn extract_copyright_year(content: &str) -> Option<i32> {
    let mut max_year: Option<i32> = None;
    for caps in COPYRIGHT_YEAR.captures_iter(content) {
        let year = caps
            .get(2)
            .or_else(|| caps.get(1))
            .and_then(|m| m.as_str().parse::<i32>().ok());
        if let Some(year) = year {
            if max_year.map_or(true, |current| year > current) {
                max_year = Some(year);
            }
        }
    }
    max_year
}

/// Detect acquisition language in content.
///
/// Returns the trimmed context around the first matching phrase (30 chars
/// before, 50 after), or `None` when no phrase occurs. Patterns are checked
/// in table order.
pub fn detect_acquisition(content: &str) -> Option<String> {
    for pattern in ACQUISITION_REGEXES.iter() {
        if let Some(found) = pattern.find(content) {
            let before = window_before(content, found.start(), 30);
            let after = char_window(content, found.end(), 0, 50);
            let context = format!("{}{}{}", before, found.as_str(), after);
            return Some(context.trim().to_string());
        }
    }
    None
}

/// Bucket a copyright year into a status indicator.
///
/// Within a year of `current_year` is positive, within three years neutral,
/// anything older negative. No copyright line, no indicator.
pub fn copyright_indicator(content: &str, current_year: i32) -> Option<StatusIndicator> {
    let year = extract_copyright_year(content)?;
    let signal = if year >= current_year - 1 {
        SignalKind::Positive
    } else if year >= current_year - 3 {
        SignalKind::Neutral
    } else {
        SignalKind::Negative
    };
    Some(StatusIndicator::new(
        "copyright_year",
        year.to_string(),
        signal,
    ))
}

/// Turn detected acquisition language into a negative indicator.
pub fn acquisition_indicator(content: &str) -> Option<StatusIndicator> {
    detect_acquisition(content)
        .map(|context| StatusIndicator::new("acquisition_text", context, SignalKind::Negative))
}

/// Bucket HTTP Last-Modified freshness into a status indicator.
///
/// `now` is supplied by the caller; the engine never reads the clock.
pub fn freshness_indicator(
    last_modified: DateTime<Utc>,
    now: DateTime<Utc>,
    windows: &FreshnessConfig,
) -> StatusIndicator {
    let days_since = (now - last_modified).num_days();
    let signal = if days_since <= windows.fresh_days {
        SignalKind::Positive
    } else if days_since <= windows.stale_days {
        SignalKind::Neutral
    } else {
        SignalKind::Negative
    };
    StatusIndicator::new(
        "http_last_modified",
        format!("{days_since} days ago"),
        signal,
    )
}
