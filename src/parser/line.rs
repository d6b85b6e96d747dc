//! # Line Classifier
//!
//! Splits a raw annotated line into content, directive and case flag.
//!
//! ```text
//! ignore_case Today is digits(var_day) -> Record
//! └────┬────┘ └──────────┬──────────┘    └─┬──┘
//!  ignore_case        content          directive
//! ```

use super::patterns::{DIRECTIVE_SEPARATOR, PARSED_LINE_RE, SINGLE_WORD_LINE_RE};
use crate::error::ParseError;

/// Classification of a parsed line, derived from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing but whitespace
    Empty,
    /// A bare `[A-Za-z0-9_]+` word, passed through untouched
    SingleWord,
    /// Delimiters and whitespace only, e.g. `=====   ====`
    PunctuationOnly,
    /// Anything else; goes through the annotation engine
    Annotated,
}

/// A raw line after directive and case-marker extraction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    /// Original raw text
    pub text: String,
    /// Text with directive and marker removed
    pub content: String,
    /// Trailing directive (`Record`, `Next.Record`, ...), empty if absent
    pub directive: String,
    pub ignore_case: bool,
}

impl ParsedLine {
    /// Parse a raw line.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidFormat`] if the catch-all pattern rejects the
    /// working text, which does not happen for any string input.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let (working, directive) = match text.rsplit_once(DIRECTIVE_SEPARATOR) {
            Some((before, after)) => (before.trim_end(), after.trim().to_string()),
            None => (text, String::new()),
        };

        let caps = PARSED_LINE_RE
            .captures(working)
            .ok_or_else(|| ParseError::InvalidFormat(text.to_string()))?;

        let ignore_case = caps.name("ic").is_some();
        let content = caps
            .name("line")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Ok(Self {
            text: text.to_string(),
            content,
            directive,
            ignore_case,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn has_directive(&self) -> bool {
        !self.directive.is_empty()
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Classify the line.
    ///
    /// The single-word check looks at the raw text, not the content, so
    /// `ignore_case Start` is not a single word.
    pub fn kind(&self) -> LineKind {
        if self.is_empty() {
            LineKind::Empty
        } else if SINGLE_WORD_LINE_RE.is_match(self.text.trim_end()) {
            LineKind::SingleWord
        } else if self.content.chars().all(|c| !c.is_alphanumeric()) {
            LineKind::PunctuationOnly
        } else {
            LineKind::Annotated
        }
    }
}
