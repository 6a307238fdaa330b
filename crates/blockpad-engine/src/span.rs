/// A byte range `[start, end)` into the document.
///
/// Every construct, region and decoration is positioned by spans rather than
/// copied text, so slicing the document with any span reproduces the exact
/// source it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Strict overlap test for half-open intervals.
    ///
    /// Touching endpoints do not count. An empty `other` (a caret) intersects
    /// only when it sits strictly inside `self`.
    #[must_use]
    pub fn intersects(self, other: Span) -> bool {
        other.start < self.end && other.end > self.start
    }

    /// Returns true if `offset` lies in `[start, end]`.
    #[must_use]
    pub fn contains_inclusive(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Shifts both ends by `delta` bytes.
    #[must_use]
    pub fn offset(self, delta: usize) -> Span {
        Span {
            start: self.start + delta,
            end: self.end + delta,
        }
    }
}
