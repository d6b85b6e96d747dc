//! # Statement Assembler
//!
//! Builds the anchored template statement for one raw line.
//!
//! ## Decision Order
//!
//! | Line | Result |
//! |------|--------|
//! | empty / whitespace | `""` |
//! | bare word (`Start`) | raw text, untouched |
//! | already assembled (`  ^...`), no placeholder | raw text, untouched |
//! | anything else | engine body, anchored, `$` kept, directive appended |
//!
//! When the engine finds no variable, the content itself is tried as a regex:
//! a valid regex without inner whitespace is used verbatim, everything else
//! takes the engine's escaped form.

use regex::Regex;

use super::line::{LineKind, ParsedLine};
use super::patterns::{ASSEMBLED_LINE_RE, DIRECTIVE_SEPARATOR, INTERNAL_WHITESPACE_RE};
use crate::annotation::{
    ends_with_anchor, has_placeholder, AnnotationEngine, LinePattern, IGNORE_CASE_FLAG,
};
use crate::error::Result;
use crate::model::Variable;

/// Indentation of a rule line inside a state
pub const STATEMENT_INDENT: &str = "  ";

/// What an assembled line represents in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Nothing to emit
    Blank,
    /// Bare word, used as a state name
    StateName,
    /// Anchored rule line
    Rule,
}

/// Output of assembling one raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub text: String,
    pub variables: Vec<Variable>,
}

impl Statement {
    fn blank() -> Self {
        Self {
            kind: StatementKind::Blank,
            text: String::new(),
            variables: Vec::new(),
        }
    }

    fn state_name(text: &str) -> Self {
        Self {
            kind: StatementKind::StateName,
            text: text.to_string(),
            variables: Vec::new(),
        }
    }

    fn rule(text: String, variables: Vec<Variable>) -> Self {
        Self {
            kind: StatementKind::Rule,
            text,
            variables,
        }
    }
}

/// Assembles template statements with a pluggable annotation engine
#[derive(Debug, Default, Clone)]
pub struct StatementAssembler<E = LinePattern> {
    engine: E,
}

impl<E: AnnotationEngine> StatementAssembler<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Assemble one raw line.
    ///
    /// # Errors
    ///
    /// - [`crate::TemplateError::Parse`] from the line classifier
    /// - [`crate::TemplateError::Annotation`] from the engine, unchanged
    pub fn assemble(&self, raw: &str) -> Result<Statement> {
        let parsed = ParsedLine::parse(raw)?;

        match parsed.kind() {
            LineKind::Empty => return Ok(Statement::blank()),
            LineKind::SingleWord => return Ok(Statement::state_name(raw)),
            LineKind::PunctuationOnly | LineKind::Annotated => {}
        }

        if ASSEMBLED_LINE_RE.is_match(raw) && !has_placeholder(&parsed.content) {
            return Ok(Statement::rule(raw.to_string(), Vec::new()));
        }

        let expansion = self.engine.expand(&parsed.content, parsed.ignore_case)?;
        let body = if expansion.has_variables() {
            expansion.text().to_string()
        } else {
            plain_body(&parsed, expansion.text())
        };

        Ok(Statement::rule(
            finish(body, &parsed),
            expansion.variables().to_vec(),
        ))
    }
}

/// Pick the body for a line without variables
fn plain_body(parsed: &ParsedLine, engine_text: &str) -> String {
    match Regex::new(&parsed.content) {
        Ok(_) if INTERNAL_WHITESPACE_RE.is_match(&parsed.content) => engine_text.to_string(),
        Ok(_) if parsed.ignore_case => format!("{}{}", IGNORE_CASE_FLAG, parsed.content),
        Ok(_) => parsed.content.clone(),
        Err(_) => engine_text.to_string(),
    }
}

/// Anchor the body and re-attach `$` and the directive
fn finish(body: String, parsed: &ParsedLine) -> String {
    let flag_then_anchor = format!("{}^", IGNORE_CASE_FLAG);
    let mut body = match body.strip_prefix(&flag_then_anchor) {
        Some(rest) => format!("^{}{}", IGNORE_CASE_FLAG, rest),
        None => body,
    };

    if !body.starts_with('^') {
        body.insert(0, '^');
    }

    if ends_with_anchor(&parsed.content) {
        // collapse `$$` left by the content and the engine
        while body.ends_with('$') && ends_with_anchor(&body[..body.len() - 1]) {
            body.pop();
        }
        if !ends_with_anchor(&body) {
            body.push('$');
        }
    }

    let mut line = format!("{}{}", STATEMENT_INDENT, body);
    if parsed.has_directive() {
        line.push_str(DIRECTIVE_SEPARATOR);
        line.push_str(&parsed.directive);
    }
    line
}

/// Convert one raw annotated line into a template statement.
///
/// ```
/// use templateapp::parse_line_to_statement;
///
/// let statement = parse_line_to_statement(
///     "Today temperature is digits(var_degree) word(var_unit). -> Record",
/// ).unwrap();
/// assert_eq!(statement, r"  ^Today temperature is ${degree} ${unit}\. -> Record");
/// ```
pub fn parse_line_to_statement(raw: &str) -> Result<String> {
    StatementAssembler::new(LinePattern::new())
        .assemble(raw)
        .map(|statement| statement.text)
}
