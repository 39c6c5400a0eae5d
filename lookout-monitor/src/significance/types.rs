//! Significance analysis result types.

use serde::{Deserialize, Serialize};

/// Outcome of a significance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Change is worth surfacing to a human
    Significant,
    /// Change is noise (boilerplate, styling, tracking)
    Insignificant,
    /// Not enough evidence either way; treat as "needs review"
    Uncertain,
}

impl Classification {
    /// Whether this classification should be surfaced for review.
    pub const fn is_significant(self) -> bool {
        matches!(self, Self::Significant)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Significant => write!(f, "significant"),
            Self::Insignificant => write!(f, "insignificant"),
            Self::Uncertain => write!(f, "uncertain"),
        }
    }
}

/// Direction of the detected signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// Strong signals in both directions at once
    Mixed,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// A single keyword hit inside scanned content.
///
/// Produced by the extractor, then annotated in place by the negation and
/// false-positive passes before classification counts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// The lexicon phrase that matched (always lowercase)
    pub keyword: String,
    /// Lexicon category the phrase belongs to (e.g. "funding_investment")
    pub category: String,
    /// Byte offset of the match in the scanned content
    pub position: usize,
    /// Up to 50 characters of context preceding the match
    pub context_before: String,
    /// Up to 50 characters of context following the match
    pub context_after: String,
    /// Set when a negation word or suffix pattern surrounds the match
    pub is_negated: bool,
    /// Set when the match sits inside a known misleading phrase
    pub is_false_positive: bool,
}

impl KeywordMatch {
    /// A match counts toward classification only when neither flag is set.
    pub fn is_effective(&self) -> bool {
        !self.is_negated && !self.is_false_positive
    }

    /// Render the match as a human-readable evidence snippet.
    pub fn evidence_snippet(&self) -> String {
        format!(
            "{} [{}] {}",
            self.context_before, self.keyword, self.context_after
        )
    }
}

/// Result of significance analysis.
///
/// Immutable value produced once per classification call; the persistence
/// and reporting layers consume it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceResult {
    pub classification: Classification,
    pub sentiment: Sentiment,
    /// Confidence in the classification, clamped to [0.0, 1.0]
    pub confidence: f64,
    /// Matched keywords in match order; may repeat across categories
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    /// Matched categories, deduplicated, first-seen order
    #[serde(default)]
    pub matched_categories: Vec<String>,
    /// Short explanation of which rule fired
    #[serde(default)]
    pub notes: Option<String>,
    /// One "context [keyword] context" string per effective match
    #[serde(default)]
    pub evidence_snippets: Vec<String>,
}
