//! Build command implementation

use anyhow::{Context as _, Result};
use colored::Colorize;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

use crate::builder::{Metadata, TemplateBuilder};
use crate::cli::context::Context;
use crate::utils::path::{read_input, write_file};

/// Options of the build command, collected from the CLI
#[derive(Debug, Default)]
pub struct BuildOptions {
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub no_header: bool,
    pub yes: bool,
}

/// Execute the build action
pub fn execute(ctx: &Context, options: &BuildOptions) -> Result<()> {
    let user_data = read_input(options.file.as_deref())?;

    let mut builder = TemplateBuilder::new(user_data)
        .with_default_state(ctx.config.template.default_state.clone());
    if ctx.config.template.header && !options.no_header {
        builder = builder.with_metadata(metadata(ctx, options));
    }

    let template = builder.build().context("Failed to build template")?;
    let content = template.to_string();

    match &options.output {
        Some(output) => {
            if output.exists() && !options.yes && !confirm_overwrite(output)? {
                ctx.print_warning("Cancelled, nothing written.");
                return Ok(());
            }
            write_file(output, &content)?;
            ctx.print_success(&format!(
                "Template with {} variable(s) written to {}",
                template.variables.len(),
                output.display().to_string().cyan()
            ));
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Header fields: CLI flags win over the `[user]` config section
fn metadata(ctx: &Context, options: &BuildOptions) -> Metadata {
    let mut metadata = Metadata::from_user(&ctx.config.user);
    if let Some(author) = &options.author {
        metadata.author = author.clone();
    }
    if let Some(email) = &options.email {
        metadata.email = email.clone();
    }
    if let Some(company) = &options.company {
        metadata.company = company.clone();
    }
    if let Some(description) = &options.description {
        metadata.description = description.clone();
    }
    metadata
}

fn confirm_overwrite(output: &Path) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("'{}' already exists. Overwrite?", output.display()))
        .default(false)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;

    fn context(config: Config) -> Context {
        Context {
            config,
            config_file: None,
        }
    }

    #[test]
    fn test_metadata_flags_override_config() {
        let mut config = Config::default();
        config.user.author = "Config Author".to_string();
        config.user.company = "Config Co".to_string();
        let ctx = context(config);

        let options = BuildOptions {
            author: Some("Cli Author".to_string()),
            description: Some("demo".to_string()),
            ..Default::default()
        };
        let metadata = metadata(&ctx, &options);
        assert_eq!(metadata.author, "Cli Author");
        assert_eq!(metadata.company, "Config Co");
        assert_eq!(metadata.description, "demo");
    }

    #[test]
    fn test_build_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.txt");
        let output = dir.path().join("sample.textfsm");
        std::fs::write(&input, "Today is word(var_day) -> Record\n").unwrap();

        let options = BuildOptions {
            file: Some(input),
            output: Some(output.clone()),
            no_header: true,
            ..Default::default()
        };
        execute(&context(Config::default()), &options).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("Value day ("));
        assert!(written.contains("  ^Today is ${day} -> Record\n"));
    }
}
