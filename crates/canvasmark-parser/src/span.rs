//! Byte ranges into the canvas source text.

use std::ops::Range;

/// A half-open byte range `[start, end)` into the source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift the span right by `offset` bytes.
    pub(crate) fn offset_by(self, offset: usize) -> Self {
        Self::new(self.start + offset..self.end + offset)
    }

    /// Locate a 1-based `line`/`column` position, as reported by `serde_json`,
    /// in `source`.
    ///
    /// `serde_json` counts columns in bytes, with the offending byte being the
    /// last one counted. The resulting span covers the character at that
    /// position, or is empty when the source is exhausted.
    pub(crate) fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();

        let mut start = line_start
            .saturating_add(column.saturating_sub(1))
            .min(source.len());
        while !source.is_char_boundary(start) {
            start -= 1;
        }

        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        Self::new(start..end)
    }
}
