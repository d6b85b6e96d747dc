//! Config command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Show the configuration, optionally writing the defaults first
pub fn execute(ctx: &Context, init: bool) -> Result<()> {
    let path = ctx.config_path();

    if init {
        let (path, created) = crate::config::init_config(Some(path.as_path()))?;
        if created {
            ctx.print_success(&format!("Created: {}", path.display()));
        } else {
            ctx.print_warning(&format!("Already exists: {}", path.display()));
        }
    }

    println!("{} {}", "Config file:".cyan(), path.display());
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}
