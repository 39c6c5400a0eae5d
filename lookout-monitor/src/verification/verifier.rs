//! Weighted multi-signal confidence scoring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lookout_common::VerificationConfig;

/// Signal name -> value (usually 0.0 or 1.0; logo similarity is fractional).
pub type VerificationSignals = HashMap<String, f64>;

/// Minimum confidence for an entity to count as verified (inclusive).
pub const DEFAULT_VERIFICATION_THRESHOLD: f64 = 0.40;

/// Per-signal weights for confidence scoring.
///
/// The default weights sum to 1.0. Signal names outside the four known ones
/// carry weight 0.0, so unexpected upstream signals are ignored instead of
/// erroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerificationWeights {
    pub logo: f64,
    pub domain: f64,
    pub context: f64,
    pub llm: f64,
}

impl Default for VerificationWeights {
    fn default() -> Self {
        Self {
            logo: 0.30,
            domain: 0.30,
            context: 0.15,
            llm: 0.25,
        }
    }
}

impl VerificationWeights {
    /// Weight for a named signal; unknown names weigh nothing.
    pub fn weight_for(&self, signal_name: &str) -> f64 {
        match signal_name {
            "logo" => self.logo,
            "domain" => self.domain,
            "context" => self.context,
            "llm" => self.llm,
            _ => 0.0,
        }
    }
}

impl From<&VerificationConfig> for VerificationWeights {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            logo: config.logo_weight,
            domain: config.domain_weight,
            context: config.context_weight,
            llm: config.llm_weight,
        }
    }
}

/// Calculate the total weighted confidence score from verification signals.
///
/// Missing signals contribute 0; the sum is clamped to [0.0, 1.0].
pub fn weighted_confidence(signals: &VerificationSignals, weights: &VerificationWeights) -> f64 {
    let total: f64 = signals
        .iter()
        .map(|(name, value)| value * weights.weight_for(name))
        .sum();
    total.clamp(0.0, 1.0)
}

/// Check whether a confidence score passes the verification threshold.
pub fn is_verified(confidence: f64, threshold: f64) -> bool {
    confidence >= threshold
}

/// Build a list of human-readable evidence strings.
///
/// Each signal that matched adds one line; false or absent signals
/// contribute nothing.
pub fn build_evidence(
    logo_match: Option<(bool, f64)>,
    domain_match: bool,
    domain_name: &str,
    context_match: bool,
    company_name: &str,
    llm_match: Option<(bool, &str)>,
) -> Vec<String> {
    let mut evidence = Vec::new();

    if let Some((true, similarity)) = logo_match {
        evidence.push(format!("Logo similarity: {similarity:.2}"));
    }

    if domain_match {
        evidence.push(format!("Domain match: {domain_name}"));
    }

    if context_match {
        evidence.push(format!("Name in business context: {company_name}"));
    }

    if let Some((true, reasoning)) = llm_match {
        evidence.push(format!("LLM verification: {reasoning}"));
    }

    evidence
}

/// Multi-signal identity verifier.
///
/// Holds the weight table and threshold; both default to the values the
/// rest of the pipeline was tuned against, and can be overridden from
/// [`VerificationConfig`].
#[derive(Debug, Clone)]
pub struct IdentityVerifier {
    weights: VerificationWeights,
    threshold: f64,
}

impl Default for IdentityVerifier {
    fn default() -> Self {
        Self {
            weights: VerificationWeights::default(),
            threshold: DEFAULT_VERIFICATION_THRESHOLD,
        }
    }
}

impl IdentityVerifier {
    /// Create a verifier with default weights and threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verifier from loaded configuration.
    pub fn with_config(config: &VerificationConfig) -> Self {
        Self {
            weights: VerificationWeights::from(config),
            threshold: config.threshold,
        }
    }

    /// Total weighted confidence for a set of signals.
    pub fn confidence(&self, signals: &VerificationSignals) -> f64 {
        let confidence = weighted_confidence(signals, &self.weights);
        tracing::debug!(confidence, signal_count = signals.len(), "Scored verification signals");
        confidence
    }

    /// Whether a confidence score passes this verifier's threshold.
    pub fn is_verified(&self, confidence: f64) -> bool {
        is_verified(confidence, self.threshold)
    }
}
