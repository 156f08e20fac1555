use std::ops::Range;

use tagcheck_core::{SourcePos, SourceRange};

/// A loaded `.tf` file and the byte offsets at which its lines start.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            name: name.into(),
            text,
            line_starts,
        }
    }

    pub fn pos(&self, byte: usize) -> SourcePos {
        let byte = byte.min(self.text.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= byte)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let column = self
            .text
            .get(line_start..byte)
            .map_or(byte - line_start, |s| s.chars().count());
        SourcePos::new(line + 1, column + 1, byte)
    }

    pub fn range(&self, span: Range<usize>) -> SourceRange {
        SourceRange {
            filename: self.name.clone(),
            start: self.pos(span.start),
            end: self.pos(span.end),
        }
    }

    /// Span of a block header: from `start` up to, not including, the opening brace.
    pub fn header_span(&self, start: usize) -> Range<usize> {
        let rest = self.text.get(start..).unwrap_or_default();
        let header = rest.find('{').map_or(rest, |i| &rest[..i]);
        start..start + header.trim_end().len()
    }
}
