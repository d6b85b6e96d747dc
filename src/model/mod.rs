//! Core data models for templateapp

mod config;
mod variable;

pub use config::{Config, TemplateConfig, UserConfig};
pub use variable::{ValueOption, Variable};
