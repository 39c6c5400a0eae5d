//! Significance Analysis Module.
//!
//! Decides whether a content change is worth a human's attention. The answer
//! is never a bare boolean: every classification carries a confidence score
//! and the evidence snippets that produced it.
//!
//! # Pipeline
//!
//! 1. Scan the (new) content against three fixed lexicons - positive signals
//!    (funding, launches, growth...), negative signals (closure, layoffs,
//!    breaches...), and insignificant patterns (CSS, copyright lines,
//!    tracking snippets).
//! 2. Annotate matches that are negated ("no funding", "funding status:
//!    none") or known false positives ("talent acquisition").
//! 3. Run the ordered classification rule table over the effective matches
//!    and the change magnitude.
//!
//! # Usage
//!
//! ```ignore
//! use lookout_monitor::change::ChangeMagnitude;
//! use lookout_monitor::significance::analyze_content;
//!
//! let result = analyze_content(&added_text, ChangeMagnitude::Major);
//! if result.classification.is_significant() {
//!     println!("{} ({:.0}%)", result.sentiment, result.confidence * 100.0);
//!     for snippet in &result.evidence_snippets {
//!         println!("  {snippet}");
//!     }
//! }
//! ```

pub mod classify;
pub mod extract;
pub mod lexicon;
pub mod types;

pub use classify::{analyze_content, classify, rule_names};
pub use extract::{apply_false_positives, apply_negation, find_matches};
pub use lexicon::{
    Lexicon, FALSE_POSITIVE_PHRASES, INSIGNIFICANT_PATTERNS, NEGATION_SUFFIX_PATTERNS,
    NEGATION_WORDS, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS,
};
pub use types::{Classification, KeywordMatch, Sentiment, SignificanceResult};
