//! Statement command implementation

use anyhow::{Context as _, Result};

use crate::cli::context::Context;
use crate::parser::parse_line_to_statement;

/// Print the template statement of every given line
pub fn execute(_ctx: &Context, lines: &[String]) -> Result<()> {
    for line in lines {
        let statement = parse_line_to_statement(line)
            .with_context(|| format!("Cannot build a statement from {:?}", line))?;
        println!("{}", statement);
    }
    Ok(())
}
