//! Keyword extraction with negation and false-positive suppression.
//!
//! Extraction produces typed matches, never a verdict - the classifier in
//! [`crate::significance::classify`] decides what the matches mean.

use regex::Regex;
use std::sync::LazyLock;

use super::lexicon::{
    keyword_pattern, Lexicon, FALSE_POSITIVE_PHRASES, NEGATION_SUFFIX_PATTERNS, NEGATION_WORDS,
};
use super::types::KeywordMatch;
use crate::util::{char_window, window_before};

/// Chars of surrounding context captured on each side of a match.
const CONTEXT_CHARS: usize = 50;

/// Chars inspected before a match for negation words.
const NEGATION_PREFIX_CHARS: usize = 20;

/// Chars inspected after a match for negation suffix patterns.
/// Not the same width as the prefix window; the asymmetry is intentional.
const NEGATION_SUFFIX_CHARS: usize = 30;

/// First-occurrence spans of the known false-positive phrases.
static FP_PHRASE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    FALSE_POSITIVE_PHRASES
        .iter()
        .map(|phrase| {
            (
                *phrase,
                Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap(),
            )
        })
        .collect()
});

/// Trim a context window and cap it at `CONTEXT_CHARS` characters.
fn clip_context(window: &str) -> String {
    let trimmed = window.trim();
    match trimmed.char_indices().nth(CONTEXT_CHARS) {
        Some((i, _)) => trimmed[..i].to_string(),
        None => trimmed.to_string(),
    }
}

/// Find all keyword matches in content.
///
/// Word-boundary, case-insensitive scan. Each match records its byte offset
/// and up to 50 characters of trimmed context on each side.
pub fn find_matches(content: &str, lexicon: Lexicon) -> Vec<KeywordMatch> {
    let mut matches = Vec::new();

    for (category, terms) in lexicon {
        for keyword in *terms {
            let Some(pattern) = keyword_pattern(keyword) else {
                continue;
            };
            for found in pattern.find_iter(content) {
                matches.push(KeywordMatch {
                    keyword: (*keyword).to_string(),
                    category: (*category).to_string(),
                    position: found.start(),
                    context_before: clip_context(window_before(
                        content,
                        found.start(),
                        CONTEXT_CHARS,
                    )),
                    context_after: clip_context(char_window(
                        content,
                        found.end(),
                        0,
                        CONTEXT_CHARS,
                    )),
                    is_negated: false,
                    is_false_positive: false,
                });
            }
        }
    }

    matches
}

/// Mark matches preceded by negation words or followed by negation suffixes.
///
/// Prefix negation: "no funding", "not acquired", "without partnership" -
/// a negation word inside the 20 characters before the keyword, either
/// ending the prefix or standing as a whole word within it.
///
/// Suffix negation: "funding status: none", "funding date: N/A" - a suffix
/// pattern at the start of the trimmed 30 characters after the keyword.
pub fn apply_negation(matches: &mut [KeywordMatch], content: &str) {
    for m in matches.iter_mut() {
        let prefix = window_before(content, m.position, NEGATION_PREFIX_CHARS)
            .to_lowercase()
            .trim()
            .to_string();
        let padded_prefix = format!(" {prefix} ");
        for neg_word in NEGATION_WORDS {
            if prefix.ends_with(neg_word) || padded_prefix.contains(&format!(" {neg_word} ")) {
                m.is_negated = true;
                break;
            }
        }

        if !m.is_negated {
            let keyword_chars = m.keyword.chars().count();
            let suffix = char_window(content, m.position, keyword_chars, NEGATION_SUFFIX_CHARS)
                .to_lowercase()
                .trim()
                .to_string();
            for suffix_pattern in NEGATION_SUFFIX_PATTERNS {
                if suffix.starts_with(suffix_pattern) {
                    m.is_negated = true;
                    break;
                }
            }
        }
    }
}

/// Mark matches whose span falls inside a known misleading phrase.
///
/// "acquisition" inside "talent acquisition" is not an acquisition signal.
pub fn apply_false_positives(matches: &mut [KeywordMatch], content: &str) {
    let spans: Vec<(usize, usize)> = FP_PHRASE_PATTERNS
        .iter()
        .filter_map(|(_, pattern)| pattern.find(content).map(|m| (m.start(), m.end())))
        .collect();

    for m in matches.iter_mut() {
        if spans
            .iter()
            .any(|&(start, end)| start <= m.position && m.position < end)
        {
            m.is_false_positive = true;
        }
    }
}
