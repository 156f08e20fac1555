use anyhow::Result;
use clap::ValueEnum;
use console::style;
use serde::Serialize;
use tagcheck_core::{Issue, Severity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    issues: &'a [Issue],
}

pub fn print(issues: &[Issue], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for issue in issues {
                println!("{}", render_text(issue));
            }
            if issues.is_empty() {
                eprintln!("{} No missing tags", style("✓").green());
            } else {
                eprintln!(
                    "{} {} resource(s) missing required tags",
                    style("✗").red(),
                    issues.len()
                );
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&JsonReport { issues })?);
        }
    }
    Ok(())
}

fn render_text(issue: &Issue) -> String {
    let severity = match issue.severity {
        Severity::Error => style(issue.severity).red(),
        Severity::Warning => style(issue.severity).yellow(),
        Severity::Notice => style(issue.severity).cyan(),
    };
    format!(
        "{}: {}: {} ({})",
        style(&issue.range).bold(),
        severity,
        issue.message,
        style(issue.rule).dim()
    )
}
