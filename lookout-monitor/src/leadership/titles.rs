//! Leadership title detection, normalization, and ranking.

use regex::Regex;
use std::sync::LazyLock;

/// Leadership titles mapped to seniority rank (lower = more senior).
/// Used for sorting and for filtering leadership from non-leadership titles.
pub static LEADERSHIP_TITLES: &[(&str, u8)] = &[
    ("ceo", 1),
    ("chief executive officer", 1),
    ("founder", 1),
    ("co-founder", 2),
    ("cofounder", 2),
    ("co founder", 2),
    ("president", 2),
    ("cto", 3),
    ("chief technology officer", 3),
    ("coo", 3),
    ("chief operating officer", 3),
    ("cfo", 3),
    ("chief financial officer", 3),
    ("cmo", 4),
    ("chief marketing officer", 4),
    ("chief people officer", 4),
    ("chief product officer", 4),
    ("chief revenue officer", 4),
    ("chief strategy officer", 4),
    ("managing director", 4),
    ("general manager", 5),
    ("vp of engineering", 5),
    ("vp engineering", 5),
    ("vice president of engineering", 5),
    ("vp of product", 5),
    ("vp product", 5),
    ("vice president", 5),
];

const DEFAULT_RANK: u8 = 99;

/// Generic "Chief X Officer" pattern.
static CHIEF_X_OFFICER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bchief\s+\w+\s+officer\b").unwrap());

/// VP titles in either spelled-out or abbreviated form.
static VP_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:vp|vice\s+president)\b").unwrap());

/// Word-boundary patterns for each known title, longest phrase first so
/// "chief executive officer" wins over "ceo" during extraction.
static TITLE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    let mut titles: Vec<&'static str> = LEADERSHIP_TITLES.iter().map(|(t, _)| *t).collect();
    titles.sort_by_key(|t| std::cmp::Reverse(t.len()));
    titles
        .into_iter()
        .map(|title| {
            (
                title,
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(title))).unwrap(),
            )
        })
        .collect()
});

/// Normalization map: long form -> short form.
static NORMALIZATION_MAP: &[(&str, &str)] = &[
    ("chief executive officer", "CEO"),
    ("chief technology officer", "CTO"),
    ("chief operating officer", "COO"),
    ("chief financial officer", "CFO"),
    ("chief marketing officer", "CMO"),
    ("chief people officer", "CPO"),
    ("chief product officer", "CPO"),
    ("chief revenue officer", "CRO"),
    ("chief strategy officer", "CSO"),
    ("cofounder", "Co-Founder"),
    ("co founder", "Co-Founder"),
    ("co-founder", "Co-Founder"),
];

static KNOWN_ABBREVIATIONS: &[&str] = &["CEO", "CTO", "COO", "CFO", "CMO", "CPO", "CRO", "CSO"];

/// Standardized role category for a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Ceo,
    Founder,
    CoFounder,
    Cto,
    Coo,
    President,
    Cfo,
    OtherExecutive,
    Other,
}

fn rank_lookup(lower: &str) -> Option<u8> {
    LEADERSHIP_TITLES
        .iter()
        .find(|(title, _)| *title == lower)
        .map(|(_, rank)| *rank)
}

/// Check if a title string contains a leadership role.
///
/// Case-insensitive. Checks exact matches against the known-title table,
/// word-boundary matches within longer strings (e.g. "CEO at Acme Corp"),
/// and the generic "Chief X Officer" and VP patterns.
pub fn is_leadership_title(title: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    let lower = title.trim().to_lowercase();

    if rank_lookup(&lower).is_some() {
        return true;
    }

    if TITLE_PATTERNS.iter().any(|(_, re)| re.is_match(&lower)) {
        return true;
    }

    CHIEF_X_OFFICER.is_match(&lower) || VP_TITLE.is_match(&lower)
}

/// Extract a leadership title from a raw text string.
///
/// Scans for known title phrases (longest match first), then the generic
/// "Chief X Officer" and VP patterns. Returns the matching slice of the
/// original text, or `None` if no leadership title is present.
pub fn extract_title(raw_text: &str) -> Option<&str> {
    if raw_text.is_empty() {
        return None;
    }

    for (_, pattern) in TITLE_PATTERNS.iter() {
        if let Some(found) = pattern.find(raw_text) {
            return Some(&raw_text[found.start()..found.end()]);
        }
    }

    if let Some(found) = CHIEF_X_OFFICER.find(raw_text) {
        return Some(found.as_str());
    }

    VP_TITLE.find(raw_text).map(|found| found.as_str())
}

/// Title-case a phrase: first letter of each word upper, rest lower.
fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Normalize a leadership title to its canonical form.
///
/// Long forms become abbreviations ("Chief Executive Officer" -> "CEO"),
/// known abbreviations are upper-cased, other known titles are title-cased.
/// Unknown titles are returned trimmed but otherwise untouched.
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    let lower = trimmed.to_lowercase();

    if let Some((_, short)) = NORMALIZATION_MAP.iter().find(|(long, _)| *long == lower) {
        return (*short).to_string();
    }

    let upper = trimmed.to_uppercase();
    if KNOWN_ABBREVIATIONS.contains(&upper.as_str()) {
        return upper;
    }

    if rank_lookup(&lower).is_some() {
        return title_case(trimmed);
    }

    trimmed.to_string()
}

/// Return the seniority ranking for a title (lower number = more senior).
///
/// Unknown titles receive the lowest rank (99).
pub fn rank_title(title: &str) -> u8 {
    let lower = title.trim().to_lowercase();

    if let Some(rank) = rank_lookup(&lower) {
        return rank;
    }

    if CHIEF_X_OFFICER.is_match(&lower) {
        return 4;
    }

    if VP_TITLE.is_match(&lower) {
        return 5;
    }

    DEFAULT_RANK
}

/// Classify a title into a standardized role category.
pub fn classify_role(title: &str) -> Role {
    let lower = title.trim().to_lowercase();

    match lower.as_str() {
        "ceo" | "chief executive officer" => return Role::Ceo,
        "founder" => return Role::Founder,
        "co-founder" | "cofounder" | "co founder" => return Role::CoFounder,
        "cto" | "chief technology officer" => return Role::Cto,
        "coo" | "chief operating officer" => return Role::Coo,
        "president" => return Role::President,
        "cfo" | "chief financial officer" => return Role::Cfo,
        _ => {}
    }

    if CHIEF_X_OFFICER.is_match(&lower) || VP_TITLE.is_match(&lower) {
        return Role::OtherExecutive;
    }

    if rank_lookup(&lower).is_some() {
        return Role::OtherExecutive;
    }

    Role::Other
}
