//! Error types for statement and template building

use thiserror::Error;

/// Failure of the line classifier.
///
/// The catch-all pattern accepts every string, so this only guards the
/// invariant that a raw line always splits into marker and content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid format - {0:?}")]
    InvalidFormat(String),
}

/// Failure of the annotation engine while turning a content line into a regex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("invalid variable name {name:?} in {keyword}(...)")]
    InvalidVariableName { keyword: String, name: String },

    #[error("unknown argument {argument:?} in {keyword}(...)")]
    UnknownArgument { keyword: String, argument: String },

    #[error("{keyword}() is an anchor and cannot capture a variable")]
    AnchorWithVariable { keyword: String },

    #[error("{keyword}() must be at the edge of the line")]
    MisplacedAnchor { keyword: String },

    #[error("variable {name:?} is declared twice on the same line")]
    RepeatedVariable { name: String },

    #[error("generated pattern {pattern:?} is not a valid regex: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Top-level error for statement assembly and template building.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<TemplateError>,
    },

    #[error("variable {name:?} is redefined with a different pattern ({first} vs {second})")]
    DuplicateVariable {
        name: String,
        first: String,
        second: String,
    },

    #[error("no template statement could be built from the given data")]
    EmptyTemplate,
}

pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_contains_raw_text() {
        let err = ParseError::InvalidFormat("abc -> ".to_string());
        assert_eq!(err.to_string(), r#"Invalid format - "abc -> ""#);
    }

    #[test]
    fn test_annotation_error_is_transparent() {
        let err: TemplateError = AnnotationError::AnchorWithVariable {
            keyword: "end".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "end() is an anchor and cannot capture a variable"
        );
    }

    #[test]
    fn test_line_error_prefixes_line_number() {
        let inner: TemplateError = ParseError::InvalidFormat("x".to_string()).into();
        let err = TemplateError::Line {
            line: 3,
            source: Box::new(inner),
        };
        assert_eq!(err.to_string(), r#"line 3: Invalid format - "x""#);
    }
}
