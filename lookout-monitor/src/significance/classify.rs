//! Ordered rule table for significance classification.
//!
//! Rules are evaluated strictly in table order and the first rule whose
//! predicate holds wins. The table itself is the artifact: precedence is
//! data, not nested control flow, so each rule can be named and tested on
//! its own.

use super::extract::{apply_false_positives, apply_negation, find_matches};
use super::lexicon::{INSIGNIFICANT_PATTERNS, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
use super::types::{Classification, KeywordMatch, Sentiment, SignificanceResult};
use crate::change::ChangeMagnitude;

/// Confidence deducted per negated match among the raw matches.
const NEGATION_PENALTY: f64 = 0.20;

/// Confidence deducted per false-positive match among the raw matches.
const FALSE_POSITIVE_PENALTY: f64 = 0.30;

/// Everything a rule needs to decide and to assemble its result.
struct RuleContext<'a> {
    magnitude: ChangeMagnitude,
    insignificant: &'a [KeywordMatch],
    effective_positive: Vec<&'a KeywordMatch>,
    effective_negative: Vec<&'a KeywordMatch>,
    /// Total confidence reduction from negated / false-positive raw matches
    penalty: f64,
}

impl RuleContext<'_> {
    fn effective_total(&self) -> usize {
        self.effective_positive.len() + self.effective_negative.len()
    }

    /// Keywords of all effective matches, positive first, in match order.
    fn effective_keywords(&self) -> Vec<String> {
        self.effective_positive
            .iter()
            .chain(self.effective_negative.iter())
            .map(|m| m.keyword.clone())
            .collect()
    }

    /// Categories of all effective matches, deduplicated, first-seen order.
    fn effective_categories(&self) -> Vec<String> {
        let mut categories = Vec::new();
        for m in self
            .effective_positive
            .iter()
            .chain(self.effective_negative.iter())
        {
            if !categories.contains(&m.category) {
                categories.push(m.category.clone());
            }
        }
        categories
    }

    /// One evidence snippet per effective match.
    fn evidence(&self) -> Vec<String> {
        self.effective_positive
            .iter()
            .chain(self.effective_negative.iter())
            .map(|m| m.evidence_snippet())
            .collect()
    }

    fn sentiment(&self) -> Sentiment {
        determine_sentiment(self.effective_positive.len(), self.effective_negative.len())
    }

    /// Apply the negation/false-positive penalty and clamp to [0, 1].
    fn penalized(&self, base_confidence: f64) -> f64 {
        (base_confidence - self.penalty).clamp(0.0, 1.0)
    }

    /// Assemble a result for one of the keyword-driven rules (2-5).
    fn keyword_result(
        &self,
        classification: Classification,
        base_confidence: f64,
        notes: String,
    ) -> SignificanceResult {
        SignificanceResult {
            classification,
            sentiment: self.sentiment(),
            confidence: self.penalized(base_confidence),
            matched_keywords: self.effective_keywords(),
            matched_categories: self.effective_categories(),
            notes: Some(notes),
            evidence_snippets: self.evidence(),
        }
    }
}

/// Determine sentiment from effective keyword counts.
///
/// 2+ positive AND 2+ negative -> mixed; 2+ negative only -> negative;
/// 2+ positive only -> positive; anything weaker -> neutral.
fn determine_sentiment(positive_count: usize, negative_count: usize) -> Sentiment {
    if positive_count >= 2 && negative_count >= 2 {
        Sentiment::Mixed
    } else if negative_count >= 2 {
        Sentiment::Negative
    } else if positive_count >= 2 {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

/// One row of the classification decision table.
pub struct SignificanceRule {
    /// Stable rule name, usable in logs and tests
    pub name: &'static str,
    applies: fn(&RuleContext) -> bool,
    outcome: fn(&RuleContext) -> SignificanceResult,
}

/// The classification rules, in priority order. First match wins.
static SIGNIFICANCE_RULES: &[SignificanceRule] = &[
    // Rule 1: only insignificant patterns, and the change itself is minor.
    // Requires magnitude exactly minor: with moderate or major magnitude the
    // ladder intentionally falls through to the no-keywords rule instead.
    SignificanceRule {
        name: "insignificant_patterns_only",
        applies: |ctx| {
            !ctx.insignificant.is_empty()
                && ctx.effective_positive.is_empty()
                && ctx.effective_negative.is_empty()
                && ctx.magnitude == ChangeMagnitude::Minor
        },
        outcome: |ctx| {
            let mut categories = Vec::new();
            for m in ctx.insignificant {
                if !categories.contains(&m.category) {
                    categories.push(m.category.clone());
                }
            }
            SignificanceResult {
                classification: Classification::Insignificant,
                sentiment: Sentiment::Neutral,
                confidence: 0.85,
                matched_keywords: ctx.insignificant.iter().map(|m| m.keyword.clone()).collect(),
                matched_categories: categories,
                notes: Some("Only insignificant patterns detected with minor changes".into()),
                evidence_snippets: Vec::new(),
            }
        },
    },
    // Rule 2: multiple negative keywords. Checked before the positive rule so
    // bad news wins ties.
    SignificanceRule {
        name: "multiple_negative_keywords",
        applies: |ctx| ctx.effective_negative.len() >= 2,
        outcome: |ctx| {
            let count = ctx.effective_negative.len();
            let base = 0.80 + (count as f64 * 0.05).min(0.15);
            ctx.keyword_result(
                Classification::Significant,
                base,
                format!("Multiple negative signals detected ({count} negative keywords)"),
            )
        },
    },
    // Rule 3: multiple positive keywords.
    SignificanceRule {
        name: "multiple_positive_keywords",
        applies: |ctx| ctx.effective_positive.len() >= 2,
        outcome: |ctx| {
            let count = ctx.effective_positive.len();
            let base = 0.80 + (count as f64 * 0.05).min(0.10);
            ctx.keyword_result(
                Classification::Significant,
                base,
                format!("Multiple positive signals detected ({count} positive keywords)"),
            )
        },
    },
    // Rule 4: a single keyword, but the page changed drastically.
    SignificanceRule {
        name: "single_keyword_major_change",
        applies: |ctx| ctx.effective_total() == 1 && ctx.magnitude == ChangeMagnitude::Major,
        outcome: |ctx| {
            ctx.keyword_result(
                Classification::Significant,
                0.70,
                "Single keyword with major content change".into(),
            )
        },
    },
    // Rule 5: a single keyword with a minor or moderate change is not enough
    // to call either way.
    SignificanceRule {
        name: "single_keyword_uncertain",
        applies: |ctx| ctx.effective_total() == 1,
        outcome: |ctx| {
            let (base, notes) = match ctx.magnitude {
                ChangeMagnitude::Minor => (0.50, "Single keyword with minor content change"),
                _ => (0.60, "Single keyword with moderate content change"),
            };
            ctx.keyword_result(Classification::Uncertain, base, notes.into())
        },
    },
    // Rule 6: nothing matched.
    SignificanceRule {
        name: "no_keywords",
        applies: |_| true,
        outcome: |_| SignificanceResult {
            classification: Classification::Insignificant,
            sentiment: Sentiment::Neutral,
            confidence: 0.75,
            matched_keywords: Vec::new(),
            matched_categories: Vec::new(),
            notes: Some("No significant keywords detected".into()),
            evidence_snippets: Vec::new(),
        },
    },
];

/// Names of the classification rules in evaluation order.
pub fn rule_names() -> Vec<&'static str> {
    SIGNIFICANCE_RULES.iter().map(|r| r.name).collect()
}

/// Classify significance from keyword matches and change magnitude.
///
/// Matches flagged as negated or false-positive do not count toward any
/// rule, but each one deducts from the final confidence (0.20 per negated,
/// 0.30 per false positive) on the keyword-driven rules.
pub fn classify(
    positive_matches: &[KeywordMatch],
    negative_matches: &[KeywordMatch],
    insignificant_matches: &[KeywordMatch],
    magnitude: ChangeMagnitude,
) -> SignificanceResult {
    let raw = positive_matches.iter().chain(negative_matches.iter());
    let negated_count = raw.clone().filter(|m| m.is_negated).count();
    let false_positive_count = raw.filter(|m| m.is_false_positive).count();

    let ctx = RuleContext {
        magnitude,
        insignificant: insignificant_matches,
        effective_positive: positive_matches.iter().filter(|m| m.is_effective()).collect(),
        effective_negative: negative_matches.iter().filter(|m| m.is_effective()).collect(),
        penalty: negated_count as f64 * NEGATION_PENALTY
            + false_positive_count as f64 * FALSE_POSITIVE_PENALTY,
    };

    for rule in SIGNIFICANCE_RULES {
        if (rule.applies)(&ctx) {
            tracing::trace!(rule = rule.name, "Significance rule fired");
            return (rule.outcome)(&ctx);
        }
    }

    // The last rule always applies; the loop cannot fall through.
    unreachable!("significance rule table has no catch-all rule")
}

/// Full significance analysis pipeline for a piece of content.
///
/// Finds keyword matches in all three lexicons, applies the negation and
/// false-positive passes to the positive/negative matches, then classifies.
/// Empty content simply produces no matches and lands on the no-keywords
/// rule at 0.75 confidence.
pub fn analyze_content(content: &str, magnitude: ChangeMagnitude) -> SignificanceResult {
    let mut positive = find_matches(content, POSITIVE_KEYWORDS);
    let mut negative = find_matches(content, NEGATIVE_KEYWORDS);
    let insignificant = find_matches(content, INSIGNIFICANT_PATTERNS);

    apply_negation(&mut positive, content);
    apply_negation(&mut negative, content);
    apply_false_positives(&mut positive, content);
    apply_false_positives(&mut negative, content);

    tracing::debug!(
        positive = positive.len(),
        negative = negative.len(),
        insignificant = insignificant.len(),
        magnitude = %magnitude,
        "Classifying content significance"
    );

    classify(&positive, &negative, &insignificant, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(keyword: &str, category: &str) -> KeywordMatch {
        KeywordMatch {
            keyword: keyword.into(),
            category: category.into(),
            position: 0,
            context_before: "before".into(),
            context_after: "after".into(),
            is_negated: false,
            is_false_positive: false,
        }
    }

    fn negated(keyword: &str, category: &str) -> KeywordMatch {
        KeywordMatch {
            is_negated: true,
            ..self::keyword(keyword, category)
        }
    }

    #[test]
    fn test_rule_order_is_stable() {
        assert_eq!(
            rule_names(),
            vec![
                "insignificant_patterns_only",
                "multiple_negative_keywords",
                "multiple_positive_keywords",
                "single_keyword_major_change",
                "single_keyword_uncertain",
                "no_keywords",
            ]
        );
    }

    #[test]
    fn test_rule1_insignificant_only_minor() {
        let insig = vec![keyword("copyright", "copyright_year")];
        let result = classify(&[], &[], &insig, ChangeMagnitude::Minor);
        assert_eq!(result.classification, Classification::Insignificant);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!((result.confidence - 0.85).abs() < f64::EPSILON);
        assert_eq!(result.matched_keywords, vec!["copyright"]);
    }

    #[test]
    fn test_rule1_requires_minor_magnitude() {
        // With moderate magnitude the insignificant-only case falls through
        // to the no-keywords rule: same classification, different confidence.
        let insig = vec![keyword("copyright", "copyright_year")];
        let result = classify(&[], &[], &insig, ChangeMagnitude::Moderate);
        assert_eq!(result.classification, Classification::Insignificant);
        assert!((result.confidence - 0.75).abs() < f64::EPSILON);
        assert!(result.matched_keywords.is_empty());

        let result = classify(&[], &[], &insig, ChangeMagnitude::Major);
        assert!((result.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule2_beats_rule3_with_mixed_sentiment() {
        let positive = vec![
            keyword("funding", "funding_investment"),
            keyword("launched", "product_launch"),
        ];
        let negative = vec![
            keyword("layoffs", "layoffs_downsizing"),
            keyword("lawsuit", "legal_issues"),
        ];
        let result = classify(&positive, &negative, &[], ChangeMagnitude::Minor);
        assert_eq!(result.classification, Classification::Significant);
        assert_eq!(result.sentiment, Sentiment::Mixed);
        // Rule 2 fires: 0.80 + min(0.15, 2 * 0.05)
        assert!((result.confidence - 0.90).abs() < f64::EPSILON);
        assert!(result
            .notes
            .as_deref()
            .unwrap()
            .contains("negative signals"));
    }

    #[test]
    fn test_rule2_confidence_caps_at_095() {
        let negative: Vec<_> = (0..5)
            .map(|_| keyword("layoffs", "layoffs_downsizing"))
            .collect();
        let result = classify(&[], &negative, &[], ChangeMagnitude::Minor);
        assert!((result.confidence - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule3_positive_keywords() {
        let positive = vec![
            keyword("raised", "funding_investment"),
            keyword("launched", "product_launch"),
        ];
        let result = classify(&positive, &[], &[], ChangeMagnitude::Major);
        assert_eq!(result.classification, Classification::Significant);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!((result.confidence - 0.90).abs() < f64::EPSILON);
        assert_eq!(result.evidence_snippets.len(), 2);
    }

    #[test]
    fn test_rule4_single_keyword_major() {
        let positive = vec![keyword("funding", "funding_investment")];
        let result = classify(&positive, &[], &[], ChangeMagnitude::Major);
        assert_eq!(result.classification, Classification::Significant);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!((result.confidence - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule5_single_keyword_minor_and_moderate() {
        let negative = vec![keyword("lawsuit", "legal_issues")];

        let result = classify(&[], &negative, &[], ChangeMagnitude::Minor);
        assert_eq!(result.classification, Classification::Uncertain);
        assert!((result.confidence - 0.50).abs() < f64::EPSILON);

        let result = classify(&[], &negative, &[], ChangeMagnitude::Moderate);
        assert_eq!(result.classification, Classification::Uncertain);
        assert!((result.confidence - 0.60).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule6_no_keywords() {
        let result = classify(&[], &[], &[], ChangeMagnitude::Major);
        assert_eq!(result.classification, Classification::Insignificant);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!((result.confidence - 0.75).abs() < f64::EPSILON);
        assert_eq!(result.notes.as_deref(), Some("No significant keywords detected"));
    }

    #[test]
    fn test_single_negated_match_falls_to_no_keywords() {
        // A negated match contributes nothing effective, so the ladder lands
        // on the no-keywords rule - insignificant at 0.75, not uncertain.
        let positive = vec![negated("funding", "funding_investment")];
        let result = classify(&positive, &[], &[], ChangeMagnitude::Minor);
        assert_eq!(result.classification, Classification::Insignificant);
        assert!((result.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negation_penalty_reduces_confidence() {
        let positive = vec![negated("funding", "funding_investment")];
        let negative = vec![
            keyword("layoffs", "layoffs_downsizing"),
            keyword("lawsuit", "legal_issues"),
        ];
        // Rule 2 base: 0.80 + 0.10 = 0.90, minus 0.20 for the negated raw match.
        let result = classify(&positive, &negative, &[], ChangeMagnitude::Minor);
        assert!((result.confidence - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn test_false_positive_penalty_reduces_confidence() {
        let mut fp = keyword("acquisition", "acquisition");
        fp.is_false_positive = true;
        let negative = vec![
            fp,
            keyword("layoffs", "layoffs_downsizing"),
            keyword("lawsuit", "legal_issues"),
        ];
        // Rule 2 base: 0.80 + 0.10 = 0.90, minus 0.30 for the false positive.
        let result = classify(&[], &negative, &[], ChangeMagnitude::Minor);
        assert!((result.confidence - 0.60).abs() < f64::EPSILON);
    }

    #[test]
    fn test_categories_deduplicated() {
        let positive = vec![
            keyword("funding", "funding_investment"),
            keyword("raised", "funding_investment"),
        ];
        let result = classify(&positive, &[], &[], ChangeMagnitude::Minor);
        assert_eq!(result.matched_keywords.len(), 2);
        assert_eq!(result.matched_categories, vec!["funding_investment"]);
    }

    #[test]
    fn test_analyze_content_positive_scenario() {
        let content = "The company raised funding and launched a new product line";
        let result = analyze_content(content, ChangeMagnitude::Major);
        assert_eq!(result.classification, Classification::Significant);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.confidence >= 0.80);
    }

    #[test]
    fn test_analyze_content_empty() {
        let result = analyze_content("", ChangeMagnitude::Minor);
        assert_eq!(result.classification, Classification::Insignificant);
        assert!((result.confidence - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_content_negated_single_keyword() {
        let result = analyze_content("We have no funding today", ChangeMagnitude::Minor);
        assert_eq!(result.classification, Classification::Insignificant);
        assert!((result.confidence - 0.75).abs() < f64::EPSILON);
    }

    mod confidence_bounds {
        use super::*;
        use proptest::prelude::*;

        fn arb_match() -> impl Strategy<Value = KeywordMatch> {
            (any::<bool>(), any::<bool>()).prop_map(|(neg, fp)| KeywordMatch {
                keyword: "funding".into(),
                category: "funding_investment".into(),
                position: 0,
                context_before: String::new(),
                context_after: String::new(),
                is_negated: neg,
                is_false_positive: fp,
            })
        }

        proptest! {
            #[test]
            fn confidence_always_in_unit_interval(
                positive in proptest::collection::vec(arb_match(), 0..6),
                negative in proptest::collection::vec(arb_match(), 0..6),
                magnitude in prop_oneof![
                    Just(ChangeMagnitude::Minor),
                    Just(ChangeMagnitude::Moderate),
                    Just(ChangeMagnitude::Major),
                ],
            ) {
                let result = classify(&positive, &negative, &[], magnitude);
                prop_assert!(result.confidence >= 0.0);
                prop_assert!(result.confidence <= 1.0);
            }
        }
    }
}
