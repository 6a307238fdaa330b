//! Selection model and the reveal predicate.
//!
//! One rule governs every hide decision: a construct's markers stay visible
//! exactly when the main selection range overlaps the construct's full span
//! by at least one position. Cursor movement therefore toggles every
//! construct type between rendered and raw-editable the same way.

use crate::span::Span;

/// One selection range. `anchor == head` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub anchor: usize,
    pub head: usize,
}

impl SelectionRange {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn caret(at: usize) -> Self {
        Self::new(at, at)
    }

    /// The range as an ordered span, regardless of direction.
    pub fn span(self) -> Span {
        Span {
            start: self.anchor.min(self.head),
            end: self.anchor.max(self.head),
        }
    }
}

/// The editor selection: one or more ranges, one of which is the main range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<SelectionRange>,
    main: usize,
}

impl Selection {
    /// Builds a selection. `main` is clamped into the range list; an empty list
    /// becomes a caret at offset zero.
    pub fn new(ranges: Vec<SelectionRange>, main: usize) -> Self {
        if ranges.is_empty() {
            return Self::caret(0);
        }
        let main = main.min(ranges.len() - 1);
        Self { ranges, main }
    }

    pub fn single(range: SelectionRange) -> Self {
        Self {
            ranges: vec![range],
            main: 0,
        }
    }

    pub fn caret(at: usize) -> Self {
        Self::single(SelectionRange::caret(at))
    }

    pub fn main(&self) -> SelectionRange {
        self.ranges[self.main]
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::caret(0)
    }
}

impl From<SelectionRange> for Selection {
    fn from(range: SelectionRange) -> Self {
        Self::single(range)
    }
}

/// True iff `span` strictly overlaps the selection's main range.
pub fn should_reveal(span: Span, selection: &Selection) -> bool {
    span.intersects(selection.main().span())
}
