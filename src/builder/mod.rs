//! # Template Builder
//!
//! Assembles a complete TextFSM template from multi-line annotated text.
//!
//! ## Layout of a Built Template
//!
//! ```text
//! ######################## (optional metadata header)
//! Value degree (\d+)
//! Value unit ([a-zA-Z][a-zA-Z0-9]*)
//!
//! Start
//!   ^Today temperature is ${degree} ${unit}\. -> Record
//! ```
//!
//! ## Rules
//!
//! - Each line goes through [`StatementAssembler`]; blank results are dropped.
//! - A bare word opens a state; rules before the first state go to the
//!   default state (`Start`).
//! - Naming a state again continues it.
//! - Variables are declared once, in first-seen order. Reusing a name with a
//!   different pattern is an error.

mod header;

pub use header::Metadata;

use crate::annotation::{AnnotationEngine, LinePattern};
use crate::error::{Result, TemplateError};
use crate::model::Variable;
use crate::parser::{StatementAssembler, StatementKind};

/// A named state and its rule lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub statements: Vec<String>,
}

impl State {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            statements: Vec::new(),
        }
    }
}

/// A built template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub metadata: Option<Metadata>,
    pub variables: Vec<Variable>,
    pub states: Vec<State>,
}

impl Template {
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(metadata) = &self.metadata {
            writeln!(f, "{}", metadata.render())?;
        }
        for variable in &self.variables {
            writeln!(f, "{}", variable.to_value_definition())?;
        }
        for state in &self.states {
            writeln!(f)?;
            writeln!(f, "{}", state.name)?;
            for statement in &state.statements {
                writeln!(f, "{}", statement)?;
            }
        }
        Ok(())
    }
}

/// Builder turning annotated user data into a [`Template`]
#[derive(Debug, Clone)]
pub struct TemplateBuilder<E = LinePattern> {
    user_data: String,
    assembler: StatementAssembler<E>,
    metadata: Option<Metadata>,
    default_state: String,
}

impl TemplateBuilder<LinePattern> {
    pub fn new(user_data: impl Into<String>) -> Self {
        Self::with_engine(user_data, LinePattern::new())
    }
}

impl<E: AnnotationEngine> TemplateBuilder<E> {
    pub fn with_engine(user_data: impl Into<String>, engine: E) -> Self {
        Self {
            user_data: user_data.into(),
            assembler: StatementAssembler::new(engine),
            metadata: None,
            default_state: "Start".to_string(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_default_state(mut self, name: impl Into<String>) -> Self {
        self.default_state = name.into();
        self
    }

    /// Build the template.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::Line`] wrapping the first failing line (1-based)
    /// - [`TemplateError::DuplicateVariable`] for conflicting declarations
    /// - [`TemplateError::EmptyTemplate`] when no rule line was produced
    pub fn build(&self) -> Result<Template> {
        let mut variables: Vec<Variable> = Vec::new();
        let mut states: Vec<State> = Vec::new();
        let mut current: Option<usize> = None;
        let mut rule_count = 0;

        for (index, line) in self.user_data.lines().enumerate() {
            let statement = self
                .assembler
                .assemble(line)
                .map_err(|source| TemplateError::Line {
                    line: index + 1,
                    source: Box::new(source),
                })?;

            match statement.kind {
                StatementKind::Blank => {}
                StatementKind::StateName => {
                    current = Some(find_or_add_state(&mut states, statement.text.trim()));
                }
                StatementKind::Rule => {
                    for variable in statement.variables {
                        declare(&mut variables, variable)?;
                    }
                    let slot = match current {
                        Some(slot) => slot,
                        None => find_or_add_state(&mut states, &self.default_state),
                    };
                    current = Some(slot);
                    states[slot].statements.push(statement.text);
                    rule_count += 1;
                }
            }
        }

        if rule_count == 0 {
            return Err(TemplateError::EmptyTemplate);
        }

        Ok(Template {
            metadata: self.metadata.clone(),
            variables,
            states,
        })
    }
}

fn find_or_add_state(states: &mut Vec<State>, name: &str) -> usize {
    match states.iter().position(|s| s.name == name) {
        Some(index) => index,
        None => {
            states.push(State::new(name));
            states.len() - 1
        }
    }
}

fn declare(variables: &mut Vec<Variable>, variable: Variable) -> Result<()> {
    match variables.iter_mut().find(|v| v.name == variable.name) {
        Some(existing) if existing.pattern != variable.pattern => {
            Err(TemplateError::DuplicateVariable {
                name: variable.name,
                first: existing.pattern.clone(),
                second: variable.pattern,
            })
        }
        Some(existing) => {
            for option in variable.options {
                if !existing.options.contains(&option) {
                    existing.options.push(option);
                }
            }
            Ok(())
        }
        None => {
            variables.push(variable);
            Ok(())
        }
    }
}
