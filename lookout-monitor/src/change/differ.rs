//! Checksum- and similarity-based change detection.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// Max chars to compare to avoid excessive computation on pathological inputs.
pub const MAX_COMPARISON_CHARS: usize = 50_000;

/// Similarity at or above this is a minor change.
const MINOR_THRESHOLD: f64 = 0.90;

/// Similarity at or above this (but below minor) is a moderate change.
const MODERATE_THRESHOLD: f64 = 0.50;

/// Coarse bucket describing how much two text snapshots differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeMagnitude {
    /// similarity >= 0.90
    Minor,
    /// similarity 0.50-0.90
    Moderate,
    /// similarity < 0.50
    Major,
}

impl std::fmt::Display for ChangeMagnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minor => write!(f, "minor"),
            Self::Moderate => write!(f, "moderate"),
            Self::Major => write!(f, "major"),
        }
    }
}

/// Outcome of checksum-gated change detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeDetection {
    /// Whether the content changed at all
    pub changed: bool,
    /// How large the change is
    pub magnitude: ChangeMagnitude,
    /// Similarity ratio between old and new content (0.0-1.0)
    pub similarity: f64,
}

/// Truncate to at most `MAX_COMPARISON_CHARS` characters, on a char boundary.
fn comparison_prefix(content: &str) -> &str {
    match content.char_indices().nth(MAX_COMPARISON_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

/// Calculate the similarity ratio between two content strings.
///
/// For content longer than 50,000 characters, only the first 50k chars are
/// compared. Identical strings yield 1.0, fully disjoint strings 0.0.
pub fn similarity(old_content: &str, new_content: &str) -> f64 {
    let old_trimmed = comparison_prefix(old_content);
    let new_trimmed = comparison_prefix(new_content);
    f64::from(TextDiff::from_chars(old_trimmed, new_trimmed).ratio())
}

/// Determine change magnitude from a similarity ratio.
pub fn magnitude(similarity: f64) -> ChangeMagnitude {
    if similarity >= MINOR_THRESHOLD {
        ChangeMagnitude::Minor
    } else if similarity >= MODERATE_THRESHOLD {
        ChangeMagnitude::Moderate
    } else {
        ChangeMagnitude::Major
    }
}

/// Detect whether content changed and how much.
///
/// Equal checksums short-circuit to "no change" regardless of the text
/// arguments. Unequal checksums without both texts available degrade
/// pessimistically to a major change, so callers that only store checksums
/// still get a usable answer.
pub fn detect_change(
    old_checksum: &str,
    new_checksum: &str,
    old_content: Option<&str>,
    new_content: Option<&str>,
) -> ChangeDetection {
    if old_checksum == new_checksum {
        return ChangeDetection {
            changed: false,
            magnitude: ChangeMagnitude::Minor,
            similarity: 1.0,
        };
    }

    let (Some(old), Some(new)) = (old_content, new_content) else {
        return ChangeDetection {
            changed: true,
            magnitude: ChangeMagnitude::Major,
            similarity: 0.0,
        };
    };

    let ratio = similarity(old, new);
    ChangeDetection {
        changed: true,
        magnitude: magnitude(ratio),
        similarity: ratio,
    }
}

/// Extract only the lines added in `new_content` relative to `old_content`.
///
/// Produces no diff headers and no removed or unchanged lines. Keyword
/// scanning runs on this output so that static boilerplate present in every
/// snapshot never re-triggers significance analysis.
pub fn added_lines(old_content: &str, new_content: &str) -> String {
    let diff = TextDiff::from_lines(old_content, new_content);
    let mut added = String::new();
    for change in diff.iter_all_changes() {
        if change.tag() == ChangeTag::Insert {
            added.push_str(change.value());
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_similarity_identical() {
        assert!((similarity("same text", "same text") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_similarity_disjoint() {
        assert!(similarity("aaaa", "bbbb") < f64::EPSILON);
    }

    #[test]
    fn test_similarity_caps_input_length() {
        // Two strings that agree on the first 50k chars but diverge after:
        // the divergence is past the comparison window, so they compare equal.
        let shared: String = "x".repeat(MAX_COMPARISON_CHARS);
        let old = format!("{shared}aaaaaaaaaa");
        let new = format!("{shared}bbbbbbbbbb");
        assert!((similarity(&old, &new) - 1.0).abs() < f64::EPSILON);
    }

    #[test_case(0.90, ChangeMagnitude::Minor; "minor lower bound inclusive")]
    #[test_case(0.8999, ChangeMagnitude::Moderate; "just below minor")]
    #[test_case(0.50, ChangeMagnitude::Moderate; "moderate lower bound inclusive")]
    #[test_case(0.4999, ChangeMagnitude::Major; "just below moderate")]
    #[test_case(1.0, ChangeMagnitude::Minor; "identical")]
    #[test_case(0.0, ChangeMagnitude::Major; "disjoint")]
    fn test_magnitude_bands(ratio: f64, expected: ChangeMagnitude) {
        assert_eq!(magnitude(ratio), expected);
    }

    #[test]
    fn test_detect_change_equal_checksums_short_circuit() {
        // Texts disagree wildly, but matching checksums win.
        let detection = detect_change("abc123", "abc123", Some("old"), Some("completely new"));
        assert!(!detection.changed);
        assert_eq!(detection.magnitude, ChangeMagnitude::Minor);
        assert!((detection.similarity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detect_change_missing_text_is_pessimistic() {
        let detection = detect_change("abc", "def", None, None);
        assert!(detection.changed);
        assert_eq!(detection.magnitude, ChangeMagnitude::Major);
        assert!(detection.similarity < f64::EPSILON);

        let detection = detect_change("abc", "def", Some("old text"), None);
        assert_eq!(detection.magnitude, ChangeMagnitude::Major);
    }

    #[test]
    fn test_detect_change_computes_from_text() {
        let old = "The quick brown fox jumps over the lazy dog";
        let new = "The quick brown fox jumps over the lazy cat";
        let detection = detect_change("abc", "def", Some(old), Some(new));
        assert!(detection.changed);
        assert_eq!(detection.magnitude, ChangeMagnitude::Minor);
        assert!(detection.similarity > 0.9);
    }

    #[test]
    fn test_added_lines_only_insertions() {
        let old = "line one\nline two\nline three\n";
        let new = "line one\nbrand new line\nline three\nanother new line\n";
        let added = added_lines(old, new);
        assert!(added.contains("brand new line"));
        assert!(added.contains("another new line"));
        assert!(!added.contains("line one"));
        assert!(!added.contains("line two"));
    }

    #[test]
    fn test_added_lines_no_change() {
        let text = "same\ncontent\n";
        assert!(added_lines(text, text).is_empty());
    }

    #[test]
    fn test_magnitude_display() {
        assert_eq!(ChangeMagnitude::Minor.to_string(), "minor");
        assert_eq!(ChangeMagnitude::Major.to_string(), "major");
    }
}
