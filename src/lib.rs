//! templateapp - TextFSM Template Builder
//!
//! Generates TextFSM-style parsing templates from annotated sample text.
//!
//! # Features
//!
//! - Convert one annotated line into an anchored template statement
//! - Expand placeholder calls (`digits(var_degree)`) into named captures
//! - Build complete templates with `Value` definitions and states
//! - Optional metadata header from the user configuration

pub mod annotation;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod utils;

pub use annotation::{AnnotationEngine, Expansion, LinePattern};
pub use builder::{Metadata, Template, TemplateBuilder};
pub use error::{AnnotationError, ParseError, TemplateError};
pub use model::{Config, ValueOption, Variable};
pub use parser::{parse_line_to_statement, ParsedLine, StatementAssembler};
