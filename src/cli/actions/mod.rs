//! CLI actions, one per subcommand

pub mod build;
pub mod config;
pub mod dependency;
pub mod statement;
