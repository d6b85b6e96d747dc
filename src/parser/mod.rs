//! # Parser Module
//!
//! Turns one raw annotated line into one TextFSM template statement.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs          - This file: re-exports
//! ├── patterns.rs     - Regex patterns (PARSED_LINE_RE, SINGLE_WORD_LINE_RE, ...)
//! ├── line.rs         - ParsedLine: directive / case marker / content split
//! └── statement.rs    - StatementAssembler: anchoring and directive re-attachment
//! ```
//!
//! ## Flow
//!
//! ```text
//! raw line ─► ParsedLine::parse ─► LineKind ─► AnnotationEngine ─► "  ^... -> Record"
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use templateapp::parser::{parse_line_to_statement, StatementAssembler};
//!
//! assert_eq!(parse_line_to_statement("Start")?, "Start");
//!
//! let statement = StatementAssembler::new(my_engine).assemble(line)?;
//! for var in statement.variables {
//!     println!("{}", var.to_value_definition());
//! }
//! ```
//!
//! ## How to Modify
//!
//! ### Adding a new line classification
//!
//! 1. Add the variant to `LineKind` in `line.rs`
//! 2. Add its regex in `patterns.rs` if it needs one
//! 3. Handle it in `StatementAssembler::assemble`

mod line;
pub mod patterns;
mod statement;

pub use line::{LineKind, ParsedLine};
pub use statement::{
    parse_line_to_statement, Statement, StatementAssembler, StatementKind, STATEMENT_INDENT,
};
