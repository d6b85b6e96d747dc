//! # Placeholder Keywords
//!
//! Built-in placeholder keywords and the regex each one expands to.
//!
//! ## Keyword Kinds
//!
//! - **Capture** keywords (`digits`, `word`, ...) match a piece of text and
//!   may be bound to a variable with `var_<name>`.
//! - **Anchor** keywords (`start`, `end`) expand to `^` / `$` and take no
//!   variable.
//!
//! Every pattern uses non-capturing groups only, so it can be inlined into a
//! statement or wrapped in the single group of a `Value` line.

/// A placeholder keyword usable as `keyword(args)` in annotated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub name: &'static str,
    pub pattern: &'static str,
    pub anchor: bool,
}

const fn capture(name: &'static str, pattern: &'static str) -> Keyword {
    Keyword {
        name,
        pattern,
        anchor: false,
    }
}

const fn anchor(name: &'static str, pattern: &'static str) -> Keyword {
    Keyword {
        name,
        pattern,
        anchor: true,
    }
}

pub const KEYWORDS: &[Keyword] = &[
    capture("letter", r"[a-zA-Z]"),
    capture("letters", r"[a-zA-Z]+"),
    capture("digit", r"\d"),
    capture("digits", r"\d+"),
    capture("number", r"[+-]?\d*\.?\d+"),
    capture("mixed_number", r"[+(\[$-]?\d[\d,]*(?:\.\d+)?[\])%a-zA-Z]*"),
    capture("word", r"[a-zA-Z][a-zA-Z0-9]*"),
    capture("words", r"[a-zA-Z][a-zA-Z0-9]*(?: [a-zA-Z][a-zA-Z0-9]*)*"),
    capture("mixed_word", r"\S*[a-zA-Z0-9]\S*"),
    capture("mixed_words", r"\S*[a-zA-Z0-9]\S*(?: +\S*[a-zA-Z0-9]\S*)*"),
    capture("phrase", r"[a-zA-Z][a-zA-Z0-9]*(?: [a-zA-Z][a-zA-Z0-9]*)+"),
    capture("punct", r"[!-/:-@\[-`{-~]"),
    capture("puncts", r"[!-/:-@\[-`{-~]+"),
    capture("data", r"\S*"),
    capture("something", r".+"),
    capture("everything", r".*"),
    capture("ipv4_address", r"(?:\d{1,3}\.){3}\d{1,3}"),
    capture(
        "mac_address",
        r"(?:[0-9a-fA-F]{2}(?:[:-][0-9a-fA-F]{2}){5}|[0-9a-fA-F]{4}(?:\.[0-9a-fA-F]{4}){2})",
    ),
    capture("ws", r"\s+"),
    anchor("start", r"^"),
    anchor("end", r"$"),
];

/// Find a keyword by its exact (lowercase) name
pub fn lookup(name: &str) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|k| k.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("digits").map(|k| k.pattern), Some(r"\d+"));
        assert!(lookup("end").is_some_and(|k| k.anchor));
        assert!(lookup("Digits").is_none());
        assert!(lookup("celsius").is_none());
    }

    #[test]
    fn test_every_pattern_compiles() {
        for keyword in KEYWORDS {
            assert!(
                Regex::new(keyword.pattern).is_ok(),
                "pattern of {} does not compile",
                keyword.name
            );
        }
    }

    #[test]
    fn test_patterns_have_no_capture_groups() {
        for keyword in KEYWORDS {
            let re = Regex::new(keyword.pattern).unwrap();
            assert_eq!(re.captures_len(), 1, "{} has a capture group", keyword.name);
        }
    }

    #[test]
    fn test_sample_matches() {
        let full = |name: &str, text: &str| {
            let pattern = format!("^(?:{})$", lookup(name).unwrap().pattern);
            Regex::new(&pattern).unwrap().is_match(text)
        };
        assert!(full("digits", "2024"));
        assert!(full("number", "-1.5"));
        assert!(full("mixed_number", "1,024.50%"));
        assert!(full("word", "celsius"));
        assert!(!full("word", "9abc"));
        assert!(full("words", "Gigabit Ethernet"));
        assert!(full("phrase", "is up"));
        assert!(!full("phrase", "up"));
        assert!(full("puncts", "-->"));
        assert!(full("ipv4_address", "192.168.1.10"));
        assert!(full("mac_address", "00:1a:2B:3c:4D:5e"));
        assert!(full("mac_address", "001a.2b3c.4d5e"));
    }
}
