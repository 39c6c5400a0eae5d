//! Status determination types.

use serde::{Deserialize, Serialize};

/// Direction of a single status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// One piece of evidence about a company's operational status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusIndicator {
    /// What was inspected, e.g. "copyright_year", "acquisition_text",
    /// "http_last_modified"
    pub kind: String,
    /// The observed value, e.g. "2024" or "120 days ago"
    pub value: String,
    /// Which way the observation points
    pub signal: SignalKind,
}

impl StatusIndicator {
    pub fn new(kind: impl Into<String>, value: impl Into<String>, signal: SignalKind) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            signal,
        }
    }
}

/// Operational status verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationalStatus {
    /// The company appears to be operating normally
    Operational,
    /// The weight of evidence points to closure or absorption
    LikelyClosed,
    /// Not enough evidence to call either way
    Uncertain,
}

impl std::fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operational => write!(f, "operational"),
            Self::LikelyClosed => write!(f, "likely_closed"),
            Self::Uncertain => write!(f, "uncertain"),
        }
    }
}

/// Complete status determination, with the indicators that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: OperationalStatus,
    /// Confidence in the determination, clamped to [0.0, 1.0]
    pub confidence: f64,
    pub indicators: Vec<StatusIndicator>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_kind_display() {
        assert_eq!(SignalKind::Positive.to_string(), "positive");
        assert_eq!(SignalKind::Neutral.to_string(), "neutral");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OperationalStatus::LikelyClosed.to_string(), "likely_closed");
        assert_eq!(OperationalStatus::Operational.to_string(), "operational");
    }

    #[test]
    fn test_status_serde_tag() {
        let json = serde_json::to_string(&OperationalStatus::LikelyClosed).unwrap();
        assert_eq!(json, "\"likely_closed\"");
    }

    #[test]
    fn test_indicator_constructor() {
        let ind = StatusIndicator::new("copyright_year", "2024", SignalKind::Positive);
        assert_eq!(ind.kind, "copyright_year");
        assert_eq!(ind.value, "2024");
        assert_eq!(ind.signal, SignalKind::Positive);
    }
}
