//! Fixed keyword lexicons for significance analysis.
//!
//! All phrases are lowercase; matching is case-insensitive and
//! word-boundary-delimited, so "ipo" never matches inside "Zippo".
//! These tables are process-wide immutable configuration - loaded once,
//! never mutated.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A lexicon maps a category name to its list of lowercase phrases.
pub type Lexicon = &'static [(&'static str, &'static [&'static str])];

/// Signals that a company is doing well.
pub static POSITIVE_KEYWORDS: Lexicon = &[
    (
        "funding_investment",
        &[
            "funding",
            "raised",
            "series a",
            "series b",
            "series c",
            "series d",
            "series e",
            "venture capital",
            "seed round",
            "valuation",
            "unicorn",
            "pre-seed",
            "funding round",
            "investment round",
            "capital raise",
            "angel round",
        ],
    ),
    (
        "product_launch",
        &[
            "launched",
            "new product",
            "beta release",
            "general availability",
            "rollout",
            "product launch",
            "new feature",
            "release",
            "public beta",
            "early access",
        ],
    ),
    (
        "growth_success",
        &[
            "revenue growth",
            "profitable",
            "milestone",
            "arr",
            "mrr",
            "doubled",
            "tripled",
            "record revenue",
            "growth rate",
            "user growth",
        ],
    ),
    (
        "partnerships",
        &[
            "partnership",
            "strategic alliance",
            "joint venture",
            "signed deal",
            "collaboration",
            "partner",
            "teaming up",
        ],
    ),
    (
        "expansion",
        &[
            "expansion",
            "new office",
            "international",
            "hiring",
            "scale up",
            "new market",
            "global expansion",
            "opened office",
            "expanding team",
        ],
    ),
    (
        "recognition",
        &[
            "award",
            "winner",
            "top 10",
            "best of",
            "innovation award",
            "recognized",
            "honored",
            "named to",
            "included in",
        ],
    ),
    (
        "ipo_exit",
        &[
            "ipo",
            "going public",
            "filed s-1",
            "direct listing",
            "nasdaq",
            "nyse",
            "stock exchange",
            "public offering",
            "spac",
        ],
    ),
];

/// Signals that a company is struggling or undergoing disruptive change.
pub static NEGATIVE_KEYWORDS: Lexicon = &[
    (
        "closure",
        &[
            "shut down",
            "closed down",
            "ceased operations",
            "discontinued",
            "winding down",
            "shutting down",
            "closing",
            "going out of business",
            "no longer operating",
        ],
    ),
    (
        "layoffs_downsizing",
        &[
            "layoffs",
            "downsizing",
            "workforce reduction",
            "job cuts",
            "restructuring",
            "furlough",
            "laid off",
            "headcount reduction",
            "rif",
            "reduction in force",
        ],
    ),
    (
        "financial_distress",
        &[
            "bankruptcy",
            "insolvent",
            "chapter 11",
            "cash crunch",
            "debt crisis",
            "defaulted",
            "financial difficulties",
            "creditors",
            "liquidation",
        ],
    ),
    (
        "legal_issues",
        &[
            "lawsuit",
            "litigation",
            "investigation",
            "settlement",
            "fine",
            "penalty",
            "sued",
            "regulatory action",
            "compliance violation",
            "subpoena",
        ],
    ),
    (
        "security_breach",
        &[
            "data breach",
            "hacked",
            "cyberattack",
            "ransomware",
            "vulnerability",
            "security incident",
            "compromised",
            "unauthorized access",
        ],
    ),
    (
        "acquisition",
        &[
            "acquired by",
            "merged with",
            "sold to",
            "bought by",
            "takeover",
            "acquisition",
            "merger",
            "buyout",
        ],
    ),
    (
        "leadership_changes",
        &[
            "ceo resigned",
            "founder left",
            "stepping down",
            "ousted",
            "leadership change",
            "executive departure",
            "cto left",
        ],
    ),
    (
        "product_failures",
        &[
            "recall",
            "discontinued product",
            "defect",
            "safety issue",
            "product failure",
            "pulled from market",
        ],
    ),
    (
        "market_exit",
        &[
            "exiting market",
            "pulling out",
            "retreat",
            "abandoned",
            "market withdrawal",
            "leaving market",
        ],
    ),
];

/// Patterns that indicate pure noise - styling, tracking, copyright lines.
pub static INSIGNIFICANT_PATTERNS: Lexicon = &[
    (
        "css_styling",
        &[
            "font-family",
            "background-color",
            "margin:",
            "padding:",
            ".css",
            "border-radius",
            "text-align",
            "font-size",
        ],
    ),
    (
        "copyright_year",
        &["(c)", "copyright", "all rights reserved"],
    ),
    (
        "tracking_analytics",
        &[
            "google-analytics",
            "gtag",
            "tracking",
            "pixel",
            "analytics",
            "hotjar",
            "mixpanel",
        ],
    ),
];

/// Phrases that look like keywords but are not.
pub static FALSE_POSITIVE_PHRASES: &[&str] = &[
    "talent acquisition",
    "customer acquisition",
    "data acquisition",
    "funding opportunities",
    "funding sources",
    "self-funded",
];

/// Negation words that precede keywords.
pub static NEGATION_WORDS: &[&str] = &["no", "not", "never", "without", "lacks", "none"];

/// Negation suffix patterns that follow keywords (e.g., "funding status: none").
pub static NEGATION_SUFFIX_PATTERNS: &[&str] =
    &["status: none", "date: n/a", "status:none", "date:n/a"];

/// Build a case-insensitive word-boundary pattern for a lexicon phrase.
fn boundary_pattern(keyword: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(keyword))
}

/// Pre-compiled patterns for every phrase in the built-in lexicons.
static KEYWORD_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    let mut patterns = HashMap::new();
    for lexicon in [POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS, INSIGNIFICANT_PATTERNS] {
        for (_, terms) in lexicon {
            for keyword in *terms {
                patterns
                    .entry(*keyword)
                    .or_insert_with(|| Regex::new(&boundary_pattern(keyword)).unwrap());
            }
        }
    }
    patterns
});

/// Look up (or build) the word-boundary pattern for a keyword.
///
/// Built-in lexicon phrases come from the pre-compiled table; phrases from
/// caller-supplied lexicons are compiled on the fly. Returns `None` only for
/// a phrase that cannot form a valid pattern, which escaped input cannot hit.
pub(crate) fn keyword_pattern(keyword: &str) -> Option<std::borrow::Cow<'static, Regex>> {
    if let Some(re) = KEYWORD_PATTERNS.get(keyword) {
        return Some(std::borrow::Cow::Borrowed(re));
    }
    Regex::new(&boundary_pattern(keyword))
        .ok()
        .map(std::borrow::Cow::Owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_category_counts() {
        assert_eq!(POSITIVE_KEYWORDS.len(), 7);
        assert_eq!(NEGATIVE_KEYWORDS.len(), 9);
        assert_eq!(INSIGNIFICANT_PATTERNS.len(), 3);
    }

    #[test]
    fn test_all_phrases_lowercase() {
        for lexicon in [POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS, INSIGNIFICANT_PATTERNS] {
            for (category, terms) in lexicon {
                for keyword in *terms {
                    assert_eq!(
                        *keyword,
                        keyword.to_lowercase(),
                        "phrase {keyword:?} in {category} must be lowercase"
                    );
                }
            }
        }
    }

    #[test]
    fn test_keyword_patterns_compile() {
        // Force the full table to build; a bad phrase would panic here
        // rather than at first use in production.
        assert!(KEYWORD_PATTERNS.len() > 100);
    }

    #[test]
    fn test_pattern_word_boundaries() {
        let re = keyword_pattern("ipo").unwrap();
        assert!(re.is_match("The IPO was announced"));
        assert!(!re.is_match("Zippo lighters"));
    }
}
