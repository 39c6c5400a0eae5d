//! Status rule engine: indicators in, verdict out.

use chrono::{DateTime, Datelike, Utc};

use lookout_common::FreshnessConfig;

use super::extract::{acquisition_indicator, copyright_indicator, freshness_indicator};
use super::types::{OperationalStatus, SignalKind, StatusIndicator, StatusReport};

/// Confidence contribution of a positive or negative indicator.
const DIRECTIONAL_WEIGHT: f64 = 0.4;

/// Confidence contribution of a neutral indicator.
const NEUTRAL_WEIGHT: f64 = 0.2;

/// Confidence below this yields an uncertain status.
const LOW_CONFIDENCE: f64 = 0.4;

/// Confidence at or above this lets a single negative indicator decide.
const HIGH_CONFIDENCE: f64 = 0.7;

/// Calculate a confidence score from indicators.
///
/// Each directional (positive or negative) indicator contributes 0.4, each
/// neutral one 0.2. The sum is clamped to [0.0, 1.0]; no indicators at all
/// means zero confidence.
pub fn confidence(indicators: &[StatusIndicator]) -> f64 {
    if indicators.is_empty() {
        return 0.0;
    }

    let total: f64 = indicators
        .iter()
        .map(|ind| match ind.signal {
            SignalKind::Positive | SignalKind::Negative => DIRECTIONAL_WEIGHT,
            SignalKind::Neutral => NEUTRAL_WEIGHT,
        })
        .sum();

    total.clamp(0.0, 1.0)
}

/// Determine operational status from confidence and indicators.
///
/// High confidence (>= 0.7): any negative indicator decides likely_closed,
/// otherwise operational. Medium confidence (0.4-0.7): simple majority of
/// positive vs negative indicators, tie (including all-neutral) is
/// uncertain. Low confidence (< 0.4): uncertain.
pub fn determine_status(confidence: f64, indicators: &[StatusIndicator]) -> OperationalStatus {
    if confidence < LOW_CONFIDENCE {
        return OperationalStatus::Uncertain;
    }

    let positive_count = indicators
        .iter()
        .filter(|i| i.signal == SignalKind::Positive)
        .count();
    let negative_count = indicators
        .iter()
        .filter(|i| i.signal == SignalKind::Negative)
        .count();

    if confidence >= HIGH_CONFIDENCE {
        if negative_count > 0 {
            return OperationalStatus::LikelyClosed;
        }
        return OperationalStatus::Operational;
    }

    if positive_count > negative_count {
        OperationalStatus::Operational
    } else if negative_count > positive_count {
        OperationalStatus::LikelyClosed
    } else {
        OperationalStatus::Uncertain
    }
}

/// Snapshot status analyzer.
///
/// Wires the built-in indicator extractors to the rule engine. The
/// freshness windows are configurable; everything else is fixed rule data.
#[derive(Debug, Clone, Default)]
pub struct StatusAnalyzer {
    freshness: FreshnessConfig,
}

impl StatusAnalyzer {
    /// Create an analyzer with the default freshness windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom freshness windows.
    pub fn with_config(freshness: FreshnessConfig) -> Self {
        Self { freshness }
    }

    /// Analyze a snapshot to determine company status.
    ///
    /// `now` is an input so identical snapshots always produce identical
    /// reports for a given reference time.
    pub fn analyze(
        &self,
        content: &str,
        http_last_modified: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> StatusReport {
        let mut indicators = Vec::new();

        if let Some(indicator) = copyright_indicator(content, now.year()) {
            indicators.push(indicator);
        }
        if let Some(indicator) = acquisition_indicator(content) {
            indicators.push(indicator);
        }
        if let Some(last_modified) = http_last_modified {
            indicators.push(freshness_indicator(last_modified, now, &self.freshness));
        }

        let confidence = confidence(&indicators);
        let status = determine_status(confidence, &indicators);

        tracing::debug!(
            %status,
            confidence,
            indicator_count = indicators.len(),
            "Determined operational status"
        );

        StatusReport {
            status,
            confidence,
            indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn indicator(signal: SignalKind) -> StatusIndicator {
        StatusIndicator::new("test", "value", signal)
    }

    #[test]
    fn test_confidence_empty() {
        assert!(confidence(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_weights() {
        let indicators = vec![indicator(SignalKind::Positive), indicator(SignalKind::Neutral)];
        assert!((confidence(&indicators) - 0.6).abs() < 1e-9);

        let indicators = vec![
            indicator(SignalKind::Positive),
            indicator(SignalKind::Negative),
        ];
        assert!((confidence(&indicators) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_clamped_to_one() {
        let indicators: Vec<_> = (0..4).map(|_| indicator(SignalKind::Positive)).collect();
        assert!((confidence(&indicators) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_low_confidence_is_uncertain() {
        let indicators = vec![indicator(SignalKind::Neutral)];
        let c = confidence(&indicators);
        assert_eq!(determine_status(c, &indicators), OperationalStatus::Uncertain);
    }

    #[test]
    fn test_high_confidence_negative_wins() {
        // One positive and one negative: confidence 0.8, and the negative
        // indicator decides at high confidence.
        let indicators = vec![
            indicator(SignalKind::Positive),
            indicator(SignalKind::Negative),
        ];
        let c = confidence(&indicators);
        assert!((c - 0.8).abs() < 1e-9);
        assert_eq!(
            determine_status(c, &indicators),
            OperationalStatus::LikelyClosed
        );
    }

    #[test]
    fn test_high_confidence_all_positive_is_operational() {
        let indicators = vec![
            indicator(SignalKind::Positive),
            indicator(SignalKind::Positive),
        ];
        let c = confidence(&indicators);
        assert_eq!(
            determine_status(c, &indicators),
            OperationalStatus::Operational
        );
    }

    #[test]
    fn test_medium_confidence_majority() {
        let positive_only = vec![indicator(SignalKind::Positive)];
        let c = confidence(&positive_only);
        assert!((c - 0.4).abs() < 1e-9);
        assert_eq!(
            determine_status(c, &positive_only),
            OperationalStatus::Operational
        );

        let negative_only = vec![indicator(SignalKind::Negative)];
        let c = confidence(&negative_only);
        assert_eq!(
            determine_status(c, &negative_only),
            OperationalStatus::LikelyClosed
        );
    }

    #[test]
    fn test_medium_confidence_tie_is_uncertain() {
        let indicators = vec![indicator(SignalKind::Neutral), indicator(SignalKind::Neutral)];
        let c = confidence(&indicators);
        assert!((c - 0.4).abs() < 1e-9);
        assert_eq!(determine_status(c, &indicators), OperationalStatus::Uncertain);
    }

    #[test]
    fn test_analyze_fresh_site() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let analyzer = StatusAnalyzer::new();
        let content = "(c) 2024 Acme Inc. All rights reserved.";
        let last_modified = now - chrono::Duration::days(10);

        let report = analyzer.analyze(content, Some(last_modified), now);
        assert_eq!(report.status, OperationalStatus::Operational);
        assert!((report.confidence - 0.8).abs() < 1e-9);
        assert_eq!(report.indicators.len(), 2);
    }

    #[test]
    fn test_analyze_acquired_company() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let analyzer = StatusAnalyzer::new();
        let content = "(c) 2024 Acme. Acme was acquired by MegaCorp.";

        let report = analyzer.analyze(content, None, now);
        // copyright positive + acquisition negative -> 0.8, negative decides
        assert_eq!(report.status, OperationalStatus::LikelyClosed);
        assert!((report.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_empty_content() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let report = StatusAnalyzer::new().analyze("", None, now);
        assert_eq!(report.status, OperationalStatus::Uncertain);
        assert!(report.confidence.abs() < f64::EPSILON);
        assert!(report.indicators.is_empty());
    }
}
