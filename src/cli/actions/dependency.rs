//! Dependency command implementation

use anyhow::Result;

use crate::cli::context::Context;

/// Packages templateapp relies on, with their home pages
const DEPENDENCIES: &[(&str, &str)] = &[
    ("regex", "https://crates.io/crates/regex"),
    ("clap", "https://crates.io/crates/clap"),
    ("serde", "https://crates.io/crates/serde"),
    ("toml", "https://crates.io/crates/toml"),
    ("dialoguer", "https://crates.io/crates/dialoguer"),
    ("colored", "https://crates.io/crates/colored"),
];

/// Print the dependency box
pub fn execute(_ctx: &Context) -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut lines = vec![
        format!("templateapp {}", env!("CARGO_PKG_VERSION")),
        format!(
            "Platform: {} {}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        "--------------------".to_string(),
        "Dependencies:".to_string(),
    ];
    for (package, url) in DEPENDENCIES {
        lines.push(format!("  + Package: {}", package));
        lines.push(format!("             {}", url));
    }

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let border = format!("+-{}-+", "-".repeat(width));
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for line in &lines {
        out.push_str(&format!("| {:<width$} |\n", line, width = width));
    }
    out.push_str(&border);
    out.push('\n');
    out
}
