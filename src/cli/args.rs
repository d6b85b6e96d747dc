//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "templateapp")]
#[command(about = "TextFSM template builder - Generate parsing templates from annotated text")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use a specific configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert annotated lines into template statements
    #[command(visible_alias = "s")]
    Statement {
        /// Annotated lines, one statement is printed per line
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Build a complete template from annotated text
    #[command(visible_alias = "b")]
    Build {
        /// Annotated text file (stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Write the template to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Author name for the header
        #[arg(long)]
        author: Option<String>,

        /// Author email for the header
        #[arg(long)]
        email: Option<String>,

        /// Company name for the header
        #[arg(long)]
        company: Option<String>,

        /// Template description for the header
        #[arg(short, long)]
        description: Option<String>,

        /// Omit the metadata header
        #[arg(long)]
        no_header: bool,

        /// Overwrite the output file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the packages templateapp depends on
    #[command(visible_alias = "dep")]
    Dependency,

    /// Show the configuration
    Config {
        /// Write a default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}
