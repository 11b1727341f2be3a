//! Byte spans into a source buffer.

use std::ops::Range;

/// Half-open byte range `[start, end)` into the source text.
///
/// Invariant: both ends fall on UTF-8 boundaries of the buffer that produced the span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must be <= end");
        Self { start, end }
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    pub fn slice(self, text: &str) -> &str {
        &text[self.range()]
    }
}
