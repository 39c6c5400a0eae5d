//! Leadership roster and change types.

use serde::{Deserialize, Serialize};

/// One entry in a leadership roster snapshot.
///
/// `profile_url` is the stable identity key: names and titles can be
/// reworded between scans, profile URLs cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveProfile {
    pub person_name: String,
    pub title: String,
    pub profile_url: String,
}

impl ExecutiveProfile {
    pub fn new(
        person_name: impl Into<String>,
        title: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            person_name: person_name.into(),
            title: title.into(),
            profile_url: profile_url.into(),
        }
    }
}

/// Types of leadership changes detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipChangeType {
    CeoDeparture,
    FounderDeparture,
    CtoDeparture,
    CooDeparture,
    ExecutiveDeparture,
    NewCeo,
    NewLeadership,
    NoChange,
}

impl LeadershipChangeType {
    /// Whether this change removes someone from the roster.
    pub const fn is_departure(self) -> bool {
        matches!(
            self,
            Self::CeoDeparture
                | Self::FounderDeparture
                | Self::CtoDeparture
                | Self::CooDeparture
                | Self::ExecutiveDeparture
        )
    }

    /// Whether this change adds someone to the roster.
    pub const fn is_arrival(self) -> bool {
        matches!(self, Self::NewCeo | Self::NewLeadership)
    }
}

impl std::fmt::Display for LeadershipChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CeoDeparture => write!(f, "ceo_departure"),
            Self::FounderDeparture => write!(f, "founder_departure"),
            Self::CtoDeparture => write!(f, "cto_departure"),
            Self::CooDeparture => write!(f, "coo_departure"),
            Self::ExecutiveDeparture => write!(f, "executive_departure"),
            Self::NewCeo => write!(f, "new_ceo"),
            Self::NewLeadership => write!(f, "new_leadership"),
            Self::NoChange => write!(f, "no_change"),
        }
    }
}

/// Severity of a leadership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeSeverity {
    /// CEO/founder/CTO/COO departures
    Critical,
    /// Other executive departures and new arrivals
    Notable,
    /// Lower-level changes
    Minor,
}

impl std::fmt::Display for ChangeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Notable => write!(f, "notable"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// A single detected leadership change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadershipChange {
    pub change_type: LeadershipChangeType,
    pub person_name: String,
    pub title: String,
    pub profile_url: String,
    pub severity: ChangeSeverity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_type_display() {
        assert_eq!(LeadershipChangeType::CeoDeparture.to_string(), "ceo_departure");
        assert_eq!(LeadershipChangeType::NewCeo.to_string(), "new_ceo");
        assert_eq!(LeadershipChangeType::NoChange.to_string(), "no_change");
    }

    #[test]
    fn test_departure_arrival_predicates() {
        assert!(LeadershipChangeType::FounderDeparture.is_departure());
        assert!(!LeadershipChangeType::FounderDeparture.is_arrival());
        assert!(LeadershipChangeType::NewLeadership.is_arrival());
        assert!(!LeadershipChangeType::NoChange.is_departure());
        assert!(!LeadershipChangeType::NoChange.is_arrival());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(ChangeSeverity::Critical.to_string(), "critical");
    }

    #[test]
    fn test_change_type_serde_tag() {
        let json = serde_json::to_string(&LeadershipChangeType::ExecutiveDeparture).unwrap();
        assert_eq!(json, "\"executive_departure\"");
    }
}
