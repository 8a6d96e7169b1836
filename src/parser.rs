//! Hosts-file parsing and IP-literal filtering.
//!
//! Blocklist sources mix several conventions in one document: `0.0.0.0 host`
//! null-route entries, `127.0.0.1 host` loopback entries, bare domain lists,
//! comments, and blank lines. Only the `0.0.0.0 host` convention contributes
//! hostnames here; everything else is silently skipped, never an error.

use std::collections::HashSet;
use std::net::IpAddr;

/// The null-route address that marks a hostname-blocking entry
const NULL_ROUTE: &str = "0.0.0.0";

/// Extract blocked hostnames from a hosts-file formatted document.
///
/// A line contributes a hostname when, after trimming, it is not empty, does
/// not start with `#`, splits on whitespace into at least two tokens, the
/// first token is exactly `0.0.0.0`, and the second token is not an IP
/// literal. Trailing tokens (inline comments, extra fields) are ignored.
pub fn extract_hostnames(content: &str) -> HashSet<String> {
    let mut hostnames = HashSet::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(NULL_ROUTE) {
            continue;
        }
        if let Some(hostname) = tokens.next() {
            if !is_ip_literal(hostname) {
                hostnames.insert(hostname.to_string());
            }
        }
    }

    hostnames
}

/// Check whether a hostname candidate is actually an IP address literal.
///
/// Entries like `0.0.0.0 192.168.1.1` are IP-blocking rules, not domain
/// rules, and are dropped from the hostname blocklist. Parse failure is the
/// normal keep path, not an error.
pub fn is_ip_literal(candidate: &str) -> bool {
    candidate.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_entry() {
        let content = "0.0.0.0 example.com\n";
        let hostnames = extract_hostnames(content);
        assert_eq!(hostnames.len(), 1);
        assert!(hostnames.contains("example.com"));
    }

    #[test]
    fn test_skips_comments_and_blanks() {
        let content = "# 0.0.0.0 example.com\n\n   \n0.0.0.0 ads.example.com\n";
        let hostnames = extract_hostnames(content);
        assert_eq!(hostnames.len(), 1);
        assert!(hostnames.contains("ads.example.com"));
    }

    #[test]
    fn test_skips_loopback_convention() {
        let content = "127.0.0.1 example.com\n0.0.0.0 tracker.example.net\n";
        let hostnames = extract_hostnames(content);
        assert_eq!(hostnames.len(), 1);
        assert!(hostnames.contains("tracker.example.net"));
    }

    #[test]
    fn test_skips_bare_domain_lines() {
        let content = "example.com\nads.example.com\n0.0.0.0 kept.example.org\n";
        let hostnames = extract_hostnames(content);
        assert_eq!(hostnames.len(), 1);
        assert!(hostnames.contains("kept.example.org"));
    }

    #[test]
    fn test_skips_entry_without_hostname() {
        let content = "0.0.0.0\n0.0.0.0   \n";
        assert!(extract_hostnames(content).is_empty());
    }

    #[test]
    fn test_whitespace_tolerance() {
        let content = "  0.0.0.0\t\texample.com  \n0.0.0.0    spaced.example.com\n";
        let hostnames = extract_hostnames(content);
        assert_eq!(hostnames.len(), 2);
        assert!(hostnames.contains("example.com"));
        assert!(hostnames.contains("spaced.example.com"));
    }

    #[test]
    fn test_ignores_trailing_tokens() {
        let content = "0.0.0.0 example.com # inline comment\n";
        let hostnames = extract_hostnames(content);
        assert_eq!(hostnames.len(), 1);
        assert!(hostnames.contains("example.com"));
    }

    #[test]
    fn test_drops_ip_literal_entries() {
        let content = "0.0.0.0 192.168.1.1\n0.0.0.0 ::1\n0.0.0.0 0.0.0.0\n0.0.0.0 real.example.com\n";
        let hostnames = extract_hostnames(content);
        assert_eq!(hostnames.len(), 1);
        assert!(hostnames.contains("real.example.com"));
    }

    #[test]
    fn test_deduplicates_within_source() {
        let content = "0.0.0.0 example.com\n0.0.0.0 example.com\n";
        assert_eq!(extract_hostnames(content).len(), 1);
    }

    #[test]
    fn test_empty_content() {
        assert!(extract_hostnames("").is_empty());
    }

    #[test]
    fn test_is_ip_literal_v4() {
        assert!(is_ip_literal("0.0.0.0"));
        assert!(is_ip_literal("192.168.1.1"));
        assert!(is_ip_literal("255.255.255.255"));
        assert!(!is_ip_literal("256.0.0.0"));
        assert!(!is_ip_literal("1.2.3"));
        assert!(!is_ip_literal("1.2.3.4.5"));
    }

    #[test]
    fn test_is_ip_literal_v6() {
        assert!(is_ip_literal("::"));
        assert!(is_ip_literal("::1"));
        assert!(is_ip_literal("fe80::1"));
        assert!(is_ip_literal("::ffff:1.2.3.4"));
        assert!(!is_ip_literal("fe80::1::2"));
        assert!(!is_ip_literal("g::1"));
    }

    // std's parser rejects zone indexes and dotted-decimal leading zeros, so
    // these tokens fall through to the keep path. They are not valid
    // IP-blocking rules either, so keeping them is acceptable.
    #[test]
    fn test_is_ip_literal_std_edge_cases() {
        assert!(!is_ip_literal("fe80::1%eth0"));
        assert!(!is_ip_literal("001.002.003.004"));
    }

    #[test]
    fn test_is_ip_literal_hostnames() {
        assert!(!is_ip_literal("example.com"));
        assert!(!is_ip_literal("ads.tracker.example.net"));
        assert!(!is_ip_literal(""));
        assert!(!is_ip_literal("localhost"));
    }
}
