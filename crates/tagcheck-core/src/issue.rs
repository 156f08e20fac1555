use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Notice,
}

impl Severity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based line and column plus the 0-based byte offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourcePos {
    pub line: usize,
    pub column: usize,
    pub byte: usize,
}

impl SourcePos {
    #[must_use]
    pub const fn new(line: usize, column: usize, byte: usize) -> Self {
        Self { line, column, byte }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceRange {
    pub filename: String,
    pub start: SourcePos,
    pub end: SourcePos,
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.filename, self.start.line, self.start.column
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub rule: &'static str,
    pub severity: Severity,
    pub message: String,
    pub range: SourceRange,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {} ({})",
            self.range, self.severity, self.message, self.rule
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Issue {
        Issue {
            rule: "azurerm_resource_missing_tags",
            severity: Severity::Notice,
            message: "The resource is missing the following tags: Foo.".to_string(),
            range: SourceRange {
                filename: "main.tf".to_string(),
                start: SourcePos::new(2, 3, 1),
                end: SourcePos::new(2, 46, 44),
            },
        }
    }

    #[test]
    fn issue_display() {
        assert_eq!(
            sample().to_string(),
            "main.tf:2:3: notice: The resource is missing the following tags: Foo. \
             (azurerm_resource_missing_tags)"
        );
    }

    #[test]
    fn issue_serializes_range() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["severity"], "notice");
        assert_eq!(json["range"]["start"]["line"], 2);
        assert_eq!(json["range"]["end"]["column"], 46);
    }
}
