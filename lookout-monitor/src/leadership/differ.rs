//! Roster comparison and change severity classification.

use std::collections::HashSet;

use super::types::{ChangeSeverity, ExecutiveProfile, LeadershipChange, LeadershipChangeType};
use crate::significance::{Classification, Sentiment, SignificanceResult};

/// Classify a departure by the departing person's title.
fn classify_departure(title: &str) -> LeadershipChangeType {
    match title.trim().to_lowercase().as_str() {
        "ceo" | "chief executive officer" => LeadershipChangeType::CeoDeparture,
        "founder" | "co-founder" | "cofounder" | "co founder" => {
            LeadershipChangeType::FounderDeparture
        }
        "cto" | "chief technology officer" => LeadershipChangeType::CtoDeparture,
        "coo" | "chief operating officer" => LeadershipChangeType::CooDeparture,
        _ => LeadershipChangeType::ExecutiveDeparture,
    }
}

/// Classify a new arrival by title.
fn classify_arrival(title: &str) -> LeadershipChangeType {
    match title.trim().to_lowercase().as_str() {
        "ceo" | "chief executive officer" => LeadershipChangeType::NewCeo,
        _ => LeadershipChangeType::NewLeadership,
    }
}

/// Classify the severity of a leadership change.
///
/// CEO/founder/CTO/COO departures are critical; other departures and all
/// arrivals are notable; anything else is minor.
pub fn severity(change_type: LeadershipChangeType) -> ChangeSeverity {
    match change_type {
        LeadershipChangeType::CeoDeparture
        | LeadershipChangeType::FounderDeparture
        | LeadershipChangeType::CtoDeparture
        | LeadershipChangeType::CooDeparture => ChangeSeverity::Critical,
        LeadershipChangeType::ExecutiveDeparture
        | LeadershipChangeType::NewCeo
        | LeadershipChangeType::NewLeadership => ChangeSeverity::Notable,
        LeadershipChangeType::NoChange => ChangeSeverity::Minor,
    }
}

/// Compare previous and current leadership rosters.
///
/// Profiles are matched by `profile_url`. Departures (in previous, not in
/// current) come first in the output, then arrivals. Unchanged profiles
/// produce no event.
pub fn compare(
    previous: &[ExecutiveProfile],
    current: &[ExecutiveProfile],
) -> Vec<LeadershipChange> {
    let prev_urls: HashSet<&str> = previous.iter().map(|p| p.profile_url.as_str()).collect();
    let curr_urls: HashSet<&str> = current.iter().map(|p| p.profile_url.as_str()).collect();

    let mut changes = Vec::new();

    for person in previous {
        if !curr_urls.contains(person.profile_url.as_str()) {
            let change_type = classify_departure(&person.title);
            changes.push(LeadershipChange {
                change_type,
                person_name: person.person_name.clone(),
                title: person.title.clone(),
                profile_url: person.profile_url.clone(),
                severity: severity(change_type),
            });
        }
    }

    for person in current {
        if !prev_urls.contains(person.profile_url.as_str()) {
            let change_type = classify_arrival(&person.title);
            changes.push(LeadershipChange {
                change_type,
                person_name: person.person_name.clone(),
                title: person.title.clone(),
                profile_url: person.profile_url.clone(),
                severity: severity(change_type),
            });
        }
    }

    tracing::debug!(
        departures = changes.iter().filter(|c| c.change_type.is_departure()).count(),
        arrivals = changes.iter().filter(|c| c.change_type.is_arrival()).count(),
        "Compared leadership rosters"
    );

    changes
}

/// Build an aggregate significance summary from leadership changes.
///
/// Any critical change makes the whole set significant at 0.95 confidence,
/// any notable change at 0.80. Sentiment reflects whether the set contains
/// departures (negative), arrivals (positive), or both (mixed).
pub fn aggregate(changes: &[LeadershipChange]) -> SignificanceResult {
    if changes.is_empty() {
        return SignificanceResult {
            classification: Classification::Insignificant,
            sentiment: Sentiment::Neutral,
            confidence: 0.75,
            matched_keywords: Vec::new(),
            matched_categories: Vec::new(),
            notes: Some("No leadership changes detected".into()),
            evidence_snippets: Vec::new(),
        };
    }

    let critical_count = changes
        .iter()
        .filter(|c| c.severity == ChangeSeverity::Critical)
        .count();
    let notable_count = changes
        .iter()
        .filter(|c| c.severity == ChangeSeverity::Notable)
        .count();

    let has_departures = changes.iter().any(|c| c.change_type.is_departure());
    let has_arrivals = changes.iter().any(|c| c.change_type.is_arrival());

    let sentiment = match (has_departures, has_arrivals) {
        (true, true) => Sentiment::Mixed,
        (true, false) => Sentiment::Negative,
        (false, true) => Sentiment::Positive,
        (false, false) => Sentiment::Neutral,
    };

    let keywords: Vec<String> = changes.iter().map(|c| c.change_type.to_string()).collect();
    let mut categories = Vec::new();
    for c in changes {
        let category = c.severity.to_string();
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    let evidence: Vec<String> = changes
        .iter()
        .map(|c| format!("{} ({}) - {}", c.person_name, c.title, c.change_type))
        .collect();

    if critical_count > 0 {
        return SignificanceResult {
            classification: Classification::Significant,
            sentiment,
            confidence: 0.95,
            matched_keywords: keywords,
            matched_categories: categories,
            notes: Some(format!(
                "{critical_count} critical leadership change(s) detected"
            )),
            evidence_snippets: evidence,
        };
    }

    if notable_count > 0 {
        return SignificanceResult {
            classification: Classification::Significant,
            sentiment,
            confidence: 0.80,
            matched_keywords: keywords,
            matched_categories: categories,
            notes: Some(format!(
                "{notable_count} notable leadership change(s) detected"
            )),
            evidence_snippets: evidence,
        };
    }

    SignificanceResult {
        classification: Classification::Insignificant,
        sentiment: Sentiment::Neutral,
        confidence: 0.75,
        matched_keywords: Vec::new(),
        matched_categories: Vec::new(),
        notes: Some("No significant leadership changes".into()),
        evidence_snippets: Vec::new(),
    }
}
