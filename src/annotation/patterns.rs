//! # Annotation Regex Patterns
//!
//! Patterns used to find placeholder calls and whitespace runs in a content
//! line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a placeholder call: `keyword(args)`
    ///
    /// Captures:
    /// - Group 1: keyword (lowercase identifier starting at a word boundary,
    ///   may be unknown)
    /// - Group 2: raw argument list (no nested parentheses)
    ///
    /// Unknown keywords are left to the caller, which keeps them as literal
    /// text.
    pub static ref PLACEHOLDER_RE: Regex = Regex::new(
        r"\b([a-z][a-z0-9_]*)\(([^()]*)\)"
    ).unwrap();

    /// Matches a run of whitespace inside literal text
    pub static ref WHITESPACE_RUN_RE: Regex = Regex::new(r"\s+").unwrap();

    /// Valid TextFSM value name (the part after `var_`)
    pub static ref VARIABLE_NAME_RE: Regex = Regex::new(
        r"^[a-zA-Z][a-zA-Z0-9_]*$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_re() {
        let caps = PLACEHOLDER_RE
            .captures("is digits(var_degree, or_empty) now")
            .unwrap();
        assert_eq!(&caps[1], "digits");
        assert_eq!(&caps[2], "var_degree, or_empty");
    }

    #[test]
    fn test_placeholder_re_empty_args() {
        let caps = PLACEHOLDER_RE.captures("value end()").unwrap();
        assert_eq!(&caps[1], "end");
        assert_eq!(&caps[2], "");
    }

    #[test]
    fn test_placeholder_re_skips_uppercase_call() {
        assert!(PLACEHOLDER_RE.captures("Ethernet(1)").is_none());
    }

    #[test]
    fn test_variable_name_re() {
        assert!(VARIABLE_NAME_RE.is_match("degree"));
        assert!(VARIABLE_NAME_RE.is_match("ipv4_addr"));
        assert!(!VARIABLE_NAME_RE.is_match("1st"));
        assert!(!VARIABLE_NAME_RE.is_match("bad-name"));
        assert!(!VARIABLE_NAME_RE.is_match(""));
    }
}
