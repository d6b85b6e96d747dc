//! Captured variables and their TextFSM `Value` definitions

/// TextFSM `Value` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueOption {
    Filldown,
    Fillup,
    Key,
    Required,
    List,
}

impl std::fmt::Display for ValueOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueOption::Filldown => write!(f, "Filldown"),
            ValueOption::Fillup => write!(f, "Fillup"),
            ValueOption::Key => write!(f, "Key"),
            ValueOption::Required => write!(f, "Required"),
            ValueOption::List => write!(f, "List"),
        }
    }
}

impl std::str::FromStr for ValueOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filldown" | "fill_down" => Ok(ValueOption::Filldown),
            "fillup" | "fill_up" => Ok(ValueOption::Fillup),
            "key" => Ok(ValueOption::Key),
            "required" => Ok(ValueOption::Required),
            "list" => Ok(ValueOption::List),
            _ => Err(format!("Unknown value option: {}", s)),
        }
    }
}

/// A named capture discovered in an annotated line
///
/// The statement refers to it as `${name}`; the template declares it as
/// `Value [options ]name (pattern)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub pattern: String,
    pub options: Vec<ValueOption>,
}

impl Variable {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: ValueOption) -> Self {
        if !self.options.contains(&option) {
            self.options.push(option);
        }
        self
    }

    /// Placeholder used inside a template statement
    pub fn reference(&self) -> String {
        format!("${{{}}}", self.name)
    }

    /// Render the `Value` line of a TextFSM template
    pub fn to_value_definition(&self) -> String {
        if self.options.is_empty() {
            format!("Value {} ({})", self.name, self.pattern)
        } else {
            let options: Vec<String> = self.options.iter().map(|o| o.to_string()).collect();
            format!(
                "Value {} {} ({})",
                options.join(","),
                self.name,
                self.pattern
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_definition_without_options() {
        let var = Variable::new("degree", r"\d+");
        assert_eq!(var.to_value_definition(), r"Value degree (\d+)");
        assert_eq!(var.reference(), "${degree}");
    }

    #[test]
    fn test_value_definition_with_options() {
        let var = Variable::new("name", r"\S+")
            .with_option(ValueOption::Filldown)
            .with_option(ValueOption::Required)
            .with_option(ValueOption::Filldown);
        assert_eq!(
            var.to_value_definition(),
            r"Value Filldown,Required name (\S+)"
        );
    }

    #[test]
    fn test_value_option_from_str() {
        assert_eq!("FillDown".parse::<ValueOption>(), Ok(ValueOption::Filldown));
        assert_eq!("fill_up".parse::<ValueOption>(), Ok(ValueOption::Fillup));
        assert!("sometimes".parse::<ValueOption>().is_err());
    }
}
