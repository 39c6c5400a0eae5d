//! Verification signal producers for domain and context matching.
//!
//! The logo and LLM signals are produced by external collaborators; the two
//! text-derived signals live here because they are pure string functions.

use regex::Regex;

use crate::util::{char_window, window_before};

/// Business context terms that distinguish a company mention from a generic
/// one.
pub static BUSINESS_TERMS: &[&str] = &[
    "announced",
    "raised",
    "launched",
    "acquired",
    "partnered",
    "company",
    "startup",
    "funding",
    "revenue",
    "customers",
    "product",
    "service",
    "platform",
    "technology",
    "ceo",
    "founded",
    "headquartered",
    "employees",
    "valuation",
];

/// Chars of context inspected on each side of a company-name occurrence.
const CONTEXT_WINDOW_CHARS: usize = 200;

/// Characters that may not immediately precede a domain match.
fn blocks_domain_start(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// Characters that may not immediately follow a domain match.
fn blocks_domain_end(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Check whether a company domain appears in text at a word edge.
///
/// "acme.com" must not match inside "notacme.com" or "acme.com.evil.net";
/// a trailing path or query delimiter is fine. Case-insensitive.
pub fn domain_matches(text: &str, company_domain: &str) -> bool {
    if company_domain.is_empty() {
        return false;
    }

    let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(company_domain))) else {
        return false;
    };

    let matched = pattern.find_iter(text).any(|found| {
        let before_ok = text[..found.start()]
            .chars()
            .next_back()
            .map_or(true, |c| !blocks_domain_start(c));
        let after_ok = text[found.end()..]
            .chars()
            .next()
            .map_or(true, |c| !blocks_domain_end(c));
        before_ok && after_ok
    });
    matched
}

/// Check whether a company name appears in a business context.
///
/// Looks for the name near business-related terms (200 chars each side);
/// a name that only ever appears without such context is treated as a
/// generic mention and produces no signal.
pub fn name_in_business_context(content: &str, company_name: &str) -> bool {
    if company_name.is_empty() || content.is_empty() {
        return false;
    }

    let content_lower = content.to_lowercase();
    let name_lower = company_name.to_lowercase();

    if !content_lower.contains(&name_lower) {
        return false;
    }

    for (position, _) in content_lower.match_indices(&name_lower) {
        let before = window_before(&content_lower, position, CONTEXT_WINDOW_CHARS);
        let after = char_window(
            &content_lower,
            position,
            0,
            name_lower.chars().count() + CONTEXT_WINDOW_CHARS,
        );
        let context_window = format!("{before}{after}");
        if BUSINESS_TERMS.iter().any(|term| context_window.contains(term)) {
            return true;
        }
    }

    false
}

/// Extract the base domain from a URL (lowercased, without a leading www).
///
/// Returns `None` when the URL cannot be parsed or has no host.
pub fn base_domain(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_matches_in_url() {
        assert!(domain_matches("https://acme.com/news/article", "acme.com"));
        assert!(domain_matches("See ACME.COM for details", "acme.com"));
    }

    #[test]
    fn test_domain_does_not_match_embedded() {
        assert!(!domain_matches("https://notacme.com/article", "acme.com"));
        assert!(!domain_matches("https://acme.com.evil.net/", "acme.com"));
        assert!(!domain_matches("https://sub.acme.company/", "acme.com"));
    }

    #[test]
    fn test_domain_matches_with_subdomain_prefix_blocked() {
        // "news.acme.com" contains "acme.com" preceded by '.', which is a
        // different host than the bare company domain.
        assert!(!domain_matches("https://news.acme.com/", "acme.com"));
    }

    #[test]
    fn test_domain_empty_inputs() {
        assert!(!domain_matches("https://acme.com", ""));
        assert!(!domain_matches("", "acme.com"));
    }

    #[test]
    fn test_name_in_business_context() {
        let content = "Acme announced a new funding round led by Example Ventures.";
        assert!(name_in_business_context(content, "Acme"));
    }

    #[test]
    fn test_name_without_business_context() {
        let content = "Acme is a word that appears in cartoons.";
        // "Acme" present but no business term nearby... except none of the
        // terms appear at all here.
        assert!(!name_in_business_context(content, "Acme"));
    }

    #[test]
    fn test_name_not_present() {
        assert!(!name_in_business_context("Totally unrelated text", "Acme"));
        assert!(!name_in_business_context("", "Acme"));
        assert!(!name_in_business_context("some text", ""));
    }

    #[test]
    fn test_context_window_is_bounded() {
        let padding = "x ".repeat(150); // 300 chars of nothing
        let content = format!("Acme {padding} company");
        // The business term sits past the 200-char window.
        assert!(!name_in_business_context(&content, "Acme"));
    }

    #[test]
    fn test_base_domain() {
        assert_eq!(base_domain("https://www.acme.com/about"), Some("acme.com".into()));
        assert_eq!(base_domain("https://ACME.com"), Some("acme.com".into()));
        assert_eq!(base_domain("https://news.acme.com"), Some("news.acme.com".into()));
        assert_eq!(base_domain("not a url"), None);
    }
}
