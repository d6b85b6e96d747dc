//! # Annotation Engine
//!
//! Turns an annotated content line into the regex body of a template
//! statement.
//!
//! ```text
//! Today temperature is digits(var_degree) celsius.
//!                      └──────┬──────────┘
//!                        ${degree}  +  Value degree (\d+)
//!
//! => Today temperature is ${degree} celsius\.
//! ```
//!
//! ## Rules
//!
//! - Placeholder calls `keyword(args)` with a known keyword (see
//!   [`keywords::KEYWORDS`]) are expanded; any other text is literal.
//! - `var_<name>` binds the placeholder to a variable and emits `${name}`.
//! - `or_empty` / `or_<text>` add alternatives to the variable pattern.
//! - `filldown`, `fillup`, `key`, `required`, `list` become `Value` options.
//! - Literal text is escaped with [`regex::escape`]; a single space stays a
//!   space, several spaces become ` +`, other whitespace becomes `\s+`.
//! - `start()` / `end()` expand to `^` / `$`, absorb the whitespace next to
//!   them and are only accepted at the edge of the line.
//! - A trailing unescaped `$` is dropped; the statement assembler restores it.
//!
//! ## Engine Seam
//!
//! The statement assembler only knows the [`AnnotationEngine`] trait, so a
//! different engine can be plugged in without touching the assembly rules.

pub mod keywords;
pub mod patterns;

use regex::Regex;

use crate::error::AnnotationError;
use crate::model::{ValueOption, Variable};
use keywords::Keyword;
use patterns::{PLACEHOLDER_RE, VARIABLE_NAME_RE, WHITESPACE_RUN_RE};

/// Case-insensitive inline flag emitted in front of a statement
pub const IGNORE_CASE_FLAG: &str = "(?i)";

/// Result of expanding a content line.
///
/// `Captures` carries the variables declared with `var_<name>`; `Plain` is a
/// line without any variable and is interchangeable with plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Captures {
        variables: Vec<Variable>,
        statement: String,
    },
    Plain(String),
}

impl Expansion {
    pub fn has_variables(&self) -> bool {
        matches!(self, Expansion::Captures { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            Expansion::Captures { statement, .. } => statement,
            Expansion::Plain(text) => text,
        }
    }

    pub fn variables(&self) -> &[Variable] {
        match self {
            Expansion::Captures { variables, .. } => variables,
            Expansion::Plain(_) => &[],
        }
    }
}

/// Converts annotated text into a regex body.
pub trait AnnotationEngine {
    /// Expand `content` into a statement body.
    ///
    /// # Arguments
    ///
    /// - `content`: the line with directive and case marker already removed
    /// - `ignore_case`: prefix the body with `(?i)`
    fn expand(&self, content: &str, ignore_case: bool) -> Result<Expansion, AnnotationError>;
}

/// Built-in annotation engine
#[derive(Debug, Default, Clone, Copy)]
pub struct LinePattern;

impl LinePattern {
    pub fn new() -> Self {
        Self
    }
}

impl AnnotationEngine for LinePattern {
    fn expand(&self, content: &str, ignore_case: bool) -> Result<Expansion, AnnotationError> {
        let mut text = content.trim_end();
        if ends_with_anchor(text) {
            text = text[..text.len() - 1].trim_end();
        }

        let mut statement = String::new();
        // Same text with `${name}` replaced by named groups, used to check
        // that the result is a valid regex.
        let mut probe = String::new();
        let mut variables: Vec<Variable> = Vec::new();
        let mut last = 0;
        let mut after_start = false;

        for caps in PLACEHOLDER_RE.captures_iter(text) {
            let (Some(whole), Some(name), Some(args)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let Some(keyword) = keywords::lookup(name.as_str()) else {
                continue;
            };

            let is_start = keyword.anchor && keyword.name == "start";
            let is_end = keyword.anchor && keyword.name == "end";
            if (is_start && !text[..whole.start()].trim().is_empty())
                || (is_end && !text[whole.end()..].trim().is_empty())
            {
                return Err(AnnotationError::MisplacedAnchor {
                    keyword: keyword.name.to_string(),
                });
            }

            let mut segment = &text[last..whole.start()];
            if after_start {
                segment = segment.trim_start();
            }
            if is_start {
                segment = "";
            }
            if is_end {
                segment = segment.trim_end();
            }
            let literal = escape_literal(segment);
            statement.push_str(&literal);
            probe.push_str(&literal);
            after_start = is_start;

            match expand_placeholder(keyword, args.as_str())? {
                Placeholder::Inline(pattern) => {
                    statement.push_str(&pattern);
                    probe.push_str(&pattern);
                }
                Placeholder::Capture(variable) => {
                    if variables.iter().any(|v| v.name == variable.name) {
                        return Err(AnnotationError::RepeatedVariable {
                            name: variable.name,
                        });
                    }
                    statement.push_str(&variable.reference());
                    probe.push_str(&format!("(?P<{}>{})", variable.name, variable.pattern));
                    variables.push(variable);
                }
            }
            last = whole.end();
        }

        let segment = if after_start {
            text[last..].trim_start()
        } else {
            &text[last..]
        };
        let literal = escape_literal(segment);
        statement.push_str(&literal);
        probe.push_str(&literal);

        if ignore_case {
            statement.insert_str(0, IGNORE_CASE_FLAG);
            probe.insert_str(0, IGNORE_CASE_FLAG);
        }

        if let Err(err) = Regex::new(&probe) {
            return Err(AnnotationError::InvalidPattern {
                pattern: statement,
                reason: err.to_string(),
            });
        }

        if variables.is_empty() {
            Ok(Expansion::Plain(statement))
        } else {
            Ok(Expansion::Captures {
                variables,
                statement,
            })
        }
    }
}

enum Placeholder {
    Inline(String),
    Capture(Variable),
}

fn expand_placeholder(keyword: &Keyword, args: &str) -> Result<Placeholder, AnnotationError> {
    let mut name: Option<&str> = None;
    let mut alternatives: Vec<String> = Vec::new();
    let mut options: Vec<ValueOption> = Vec::new();

    for arg in args.split(',').map(str::trim).filter(|a| !a.is_empty()) {
        if let Some(var_name) = arg.strip_prefix("var_") {
            if !VARIABLE_NAME_RE.is_match(var_name) {
                return Err(AnnotationError::InvalidVariableName {
                    keyword: keyword.name.to_string(),
                    name: var_name.to_string(),
                });
            }
            name = Some(var_name);
        } else if arg == "or_empty" {
            alternatives.push(String::new());
        } else if let Some(alternative) = arg.strip_prefix("or_") {
            alternatives.push(regex::escape(alternative));
        } else if let Ok(option) = arg.parse::<ValueOption>() {
            options.push(option);
        } else {
            return Err(AnnotationError::UnknownArgument {
                keyword: keyword.name.to_string(),
                argument: arg.to_string(),
            });
        }
    }

    if keyword.anchor {
        if name.is_some() {
            return Err(AnnotationError::AnchorWithVariable {
                keyword: keyword.name.to_string(),
            });
        }
        return Ok(Placeholder::Inline(keyword.pattern.to_string()));
    }

    let pattern = if alternatives.is_empty() {
        keyword.pattern.to_string()
    } else {
        format!("(?:{}|{})", keyword.pattern, alternatives.join("|"))
    };

    match name {
        Some(name) => {
            let variable = options
                .into_iter()
                .fold(Variable::new(name, pattern), Variable::with_option);
            Ok(Placeholder::Capture(variable))
        }
        None => Ok(Placeholder::Inline(pattern)),
    }
}

/// Escape literal sample text, normalizing whitespace runs
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in WHITESPACE_RUN_RE.find_iter(text) {
        out.push_str(&regex::escape(&text[last..m.start()]));
        out.push_str(whitespace_pattern(m.as_str()));
        last = m.end();
    }
    out.push_str(&regex::escape(&text[last..]));
    out
}

fn whitespace_pattern(run: &str) -> &'static str {
    if run == " " {
        " "
    } else if run.chars().all(|c| c == ' ') {
        " +"
    } else {
        r"\s+"
    }
}

/// True when `text` holds at least one call to a known keyword
pub fn has_placeholder(text: &str) -> bool {
    PLACEHOLDER_RE
        .captures_iter(text)
        .any(|caps| caps.get(1).and_then(|m| keywords::lookup(m.as_str())).is_some())
}

/// True when `text` ends with a `$` that is not escaped by a backslash
pub fn ends_with_anchor(text: &str) -> bool {
    match text.strip_suffix('$') {
        Some(rest) => {
            let backslashes = rest.chars().rev().take_while(|&c| c == '\\').count();
            backslashes % 2 == 0
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(content: &str) -> Expansion {
        LinePattern::new().expand(content, false).unwrap()
    }

    #[test]
    fn test_single_variable() {
        let result = expand("Today temperature is digits(var_degree) celsius.");
        assert!(result.has_variables());
        assert_eq!(result.text(), r"Today temperature is ${degree} celsius\.");
        assert_eq!(result.variables(), &[Variable::new("degree", r"\d+")]);
    }

    #[test]
    fn test_multiple_variables_keep_order() {
        let result = expand("digits(var_degree) word(var_unit).");
        assert_eq!(result.text(), r"${degree} ${unit}\.");
        let names: Vec<&str> = result.variables().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["degree", "unit"]);
    }

    #[test]
    fn test_separator_line_normalizes_spaces() {
        let result = expand("===   ==========   ======");
        assert_eq!(result, Expansion::Plain("=== +========== +======".to_string()));
    }

    #[test]
    fn test_tab_becomes_whitespace_class() {
        assert_eq!(expand("a\tb").text(), r"a\s+b");
    }

    #[test]
    fn test_unknown_call_is_literal() {
        assert_eq!(expand("celsius(var_x)").text(), r"celsius\(var_x\)");
        assert_eq!(expand("xdigits(var_x)").text(), r"xdigits\(var_x\)");
    }

    #[test]
    fn test_placeholder_without_variable_is_inlined() {
        let result = expand("vlan digits()");
        assert_eq!(result, Expansion::Plain(r"vlan \d+".to_string()));
    }

    #[test]
    fn test_or_empty_changes_pattern_not_statement() {
        let plain = expand("temp digits(var_degree)");
        let optional = expand("temp digits(var_degree, or_empty)");
        assert_eq!(plain.text(), optional.text());
        assert_eq!(optional.variables()[0].pattern, r"(?:\d+|)");
    }

    #[test]
    fn test_or_text_is_escaped() {
        let result = expand("mtu digits(var_mtu, or_n/a)");
        assert_eq!(result.variables()[0].pattern, r"(?:\d+|n/a)");

        let result = expand("speed digits(var_speed, or_1.5)");
        assert_eq!(result.variables()[0].pattern, r"(?:\d+|1\.5)");
    }

    #[test]
    fn test_value_options() {
        let result = expand("Interface mixed_word(var_intf, filldown, key)");
        assert_eq!(
            result.variables()[0].options,
            vec![ValueOption::Filldown, ValueOption::Key]
        );
    }

    #[test]
    fn test_anchors() {
        assert_eq!(expand("start() abc end()").text(), "^abc$");
        assert_eq!(expand("total digits(var_n)  end()").text(), "total ${n}$");
    }

    #[test]
    fn test_anchor_inside_line_is_error() {
        let err = LinePattern::new().expand("x end() y", false).unwrap_err();
        assert_eq!(
            err,
            AnnotationError::MisplacedAnchor {
                keyword: "end".to_string()
            }
        );

        let err = LinePattern::new()
            .expand("digits(var_n) start() abc", false)
            .unwrap_err();
        assert!(matches!(err, AnnotationError::MisplacedAnchor { .. }));
    }

    #[test]
    fn test_anchor_at_edge_allows_surrounding_whitespace() {
        assert_eq!(expand("  start() abc").text(), "^abc");
        assert_eq!(expand("abc end()  $").text(), "abc$");
    }

    #[test]
    fn test_has_placeholder() {
        assert!(has_placeholder("abc digits(var_n)"));
        assert!(has_placeholder("  ^abc end()"));
        assert!(!has_placeholder(r"  ^abc ${n} \(x\)"));
        assert!(!has_placeholder("celsius(var_x)"));
    }

    #[test]
    fn test_trailing_dollar_is_dropped() {
        assert_eq!(expand("total digits(var_n)$").text(), "total ${n}");
        assert_eq!(expand(r"cost \$").text(), r"cost \\\$");
    }

    #[test]
    fn test_ignore_case_prefix() {
        let result = LinePattern::new()
            .expand("status word(var_status)", true)
            .unwrap();
        assert_eq!(result.text(), "(?i)status ${status}");
    }

    #[test]
    fn test_invalid_variable_name() {
        let err = LinePattern::new().expand("digits(var_9x)", false).unwrap_err();
        assert_eq!(
            err,
            AnnotationError::InvalidVariableName {
                keyword: "digits".to_string(),
                name: "9x".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_argument() {
        let err = LinePattern::new()
            .expand("digits(var_x, sometimes)", false)
            .unwrap_err();
        assert!(matches!(err, AnnotationError::UnknownArgument { .. }));
    }

    #[test]
    fn test_anchor_with_variable() {
        let err = LinePattern::new().expand("end(var_x)", false).unwrap_err();
        assert!(matches!(err, AnnotationError::AnchorWithVariable { .. }));
    }

    #[test]
    fn test_repeated_variable_on_line() {
        let err = LinePattern::new()
            .expand("digits(var_x) digits(var_x)", false)
            .unwrap_err();
        assert_eq!(
            err,
            AnnotationError::RepeatedVariable {
                name: "x".to_string()
            }
        );
    }

    #[test]
    fn test_ends_with_anchor() {
        assert!(ends_with_anchor("abc$"));
        assert!(ends_with_anchor(r"abc\\$"));
        assert!(!ends_with_anchor(r"abc\$"));
        assert!(!ends_with_anchor("abc"));
        assert!(!ends_with_anchor(""));
    }
}
