//! Metadata comment block written above the `Value` lines

use time::OffsetDateTime;

use crate::model::UserConfig;

const RULER_WIDTH: usize = 80;

/// Author information and description of a generated template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub author: String,
    pub email: String,
    pub company: String,
    pub description: String,
    /// `YYYY-MM-DD`; today when built with [`Metadata::new`]
    pub created: String,
}

impl Metadata {
    pub fn new() -> Self {
        Self {
            created: today(),
            ..Default::default()
        }
    }

    /// Metadata pre-filled from the `[user]` config section
    pub fn from_user(user: &UserConfig) -> Self {
        Self {
            author: user.author.clone(),
            email: user.email.clone(),
            company: user.company.clone(),
            ..Self::new()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = created.into();
        self
    }

    /// Render the `#` comment block; empty fields are left out
    pub fn render(&self) -> String {
        let ruler = "#".repeat(RULER_WIDTH);
        let mut lines = vec![
            ruler.clone(),
            format!(
                "# Template is generated by templateapp {}",
                env!("CARGO_PKG_VERSION")
            ),
        ];

        let fields = [
            ("Created by", &self.author),
            ("Email", &self.email),
            ("Company", &self.company),
            ("Created date", &self.created),
        ];
        for (label, value) in fields {
            if !value.is_empty() {
                lines.push(format!("# {:<12}: {}", label, value));
            }
        }

        let mut description = self.description.lines().filter(|l| !l.trim().is_empty());
        if let Some(first) = description.next() {
            lines.push(format!("# {:<12}: {}", "Description", first.trim_end()));
            for line in description {
                lines.push(format!("# {:<12}  {}", "", line.trim_end()));
            }
        }

        lines.push(ruler);
        lines.join("\n")
    }
}

fn today() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}-{:02}-{:02}",
        now.year(),
        now.month() as u8,
        now.day()
    )
}
