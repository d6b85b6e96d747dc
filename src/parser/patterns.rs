//! # Line Regex Patterns
//!
//! Patterns for classifying a raw template line.
//!
//! ## Pattern Naming Convention
//!
//! - `*_LINE_RE` - Applied to a whole raw or working line
//! - `*_RE` - Applied to a fragment
//!
//! ## Regex Notes
//!
//! `PARSED_LINE_RE` runs with the `s` flag so `.` also accepts newlines; it
//! matches every string.

use lazy_static::lazy_static;
use regex::Regex;

/// Separator between a line and its trailing directive
pub const DIRECTIVE_SEPARATOR: &str = " -> ";

lazy_static! {
    /// Splits the optional case-insensitivity marker from the content.
    ///
    /// Captures:
    /// - `ic`: the `ignore_case ` marker (any letter case), when present
    /// - `line`: the remaining content, possibly empty
    pub static ref PARSED_LINE_RE: Regex = Regex::new(
        r"(?is)^(?P<ic>ignore_case )?(?P<line>.*)$"
    ).unwrap();

    /// Matches a bare single word such as a state name: `Start`, `abc_xyz`
    pub static ref SINGLE_WORD_LINE_RE: Regex = Regex::new(
        r"(?i)^[a-z0-9_]+$"
    ).unwrap();

    /// Matches a line that already is an assembled statement: `  ^...`
    pub static ref ASSEMBLED_LINE_RE: Regex = Regex::new(
        r"^  \^"
    ).unwrap();

    /// Matches whitespace between two non-whitespace characters
    pub static ref INTERNAL_WHITESPACE_RE: Regex = Regex::new(
        r"\S\s+\S"
    ).unwrap();
}
