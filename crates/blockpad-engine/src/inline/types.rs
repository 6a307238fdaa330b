use crate::span::Span;

use super::kinds::TextAlign;

/// A markup instance detected on one line, with byte spans into the document.
///
/// Every variant carries its `full` span, the extent the selection must touch
/// for the construct's markers to be revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructMatch {
    /// `` `code` ``.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between backticks.
        inner: Span,
    },
    /// `[text](url)` on a single line.
    Link { full: Span, text: Span, url: Span },
    /// `[[block:id]]`.
    BlockRef {
        full: Span,
        /// Span of the id inside the token.
        id_span: Span,
        id: String,
    },
    /// ATX heading. `full` is the whole line.
    Heading {
        full: Span,
        /// The `#` run plus the whitespace after it.
        marker: Span,
        level: u8,
    },
    Bold { full: Span, inner: Span },
    Italic { full: Span, inner: Span },
    Strikethrough { full: Span, inner: Span },
    /// `[align-*]`; `line` is the whole line the directive aligns.
    AlignDirective {
        full: Span,
        line: Span,
        align: TextAlign,
    },
}

impl ConstructMatch {
    /// Extracts the full span from any variant.
    pub fn full(&self) -> Span {
        match self {
            ConstructMatch::CodeSpan { full, .. }
            | ConstructMatch::Link { full, .. }
            | ConstructMatch::BlockRef { full, .. }
            | ConstructMatch::Heading { full, .. }
            | ConstructMatch::Bold { full, .. }
            | ConstructMatch::Italic { full, .. }
            | ConstructMatch::Strikethrough { full, .. }
            | ConstructMatch::AlignDirective { full, .. } => *full,
        }
    }

    /// A short name for logs and test output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConstructMatch::CodeSpan { .. } => "code-span",
            ConstructMatch::Link { .. } => "link",
            ConstructMatch::BlockRef { .. } => "block-reference",
            ConstructMatch::Heading { .. } => "heading",
            ConstructMatch::Bold { .. } => "bold",
            ConstructMatch::Italic { .. } => "italic",
            ConstructMatch::Strikethrough { .. } => "strikethrough",
            ConstructMatch::AlignDirective { .. } => "alignment-directive",
        }
    }
}
