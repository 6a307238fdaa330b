//! Decorations handed to the host rendering surface.
//!
//! A decoration is an inert, positioned instruction: hide a span, style a
//! span, or replace a span with a widget. Decorations never modify the
//! document and are rebuilt from scratch on every trigger.
//!
//! The engine emits a possibly-overlapping set. It does not merge or
//! prioritise overlapping styles and hides; the rendering layer layers
//! overlapping styles and coalesces duplicate hides over identical spans.

use crate::inline::kinds::TextAlign;
use crate::span::Span;
use crate::widgets::Widget;

/// CSS class vocabulary shared with the host stylesheet.
pub mod classes {
    use crate::inline::kinds::TextAlign;

    pub const CODE: &str = "md-code";
    pub const LINK: &str = "md-link";
    pub const BOLD: &str = "md-bold";
    pub const ITALIC: &str = "md-italic";
    pub const STRIKETHROUGH: &str = "md-strikethrough";
    pub const CODE_BLOCK: &str = "md-codeblock";

    const HEADINGS: [&str; 6] = [
        "md-heading-1",
        "md-heading-2",
        "md-heading-3",
        "md-heading-4",
        "md-heading-5",
        "md-heading-6",
    ];

    /// Line class for heading depth 1-6; other depths clamp into range.
    pub fn heading(level: u8) -> &'static str {
        HEADINGS[usize::from(level.clamp(1, 6)) - 1]
    }

    pub fn align(align: TextAlign) -> &'static str {
        match align {
            TextAlign::Left => "md-align-left",
            TextAlign::Center => "md-align-center",
            TextAlign::Right => "md-align-right",
        }
    }
}

/// Whether a style marks an inline span or the whole line element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleScope {
    /// Attach to the characters in the span.
    Mark,
    /// Attach to the line that contains the span.
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    /// Replace the span with nothing.
    Hide { span: Span },
    /// Attach a class without altering layout.
    Style {
        span: Span,
        class: &'static str,
        scope: StyleScope,
    },
    /// Replace the span with a rendered element.
    Widget { span: Span, widget: Widget },
}

impl Decoration {
    pub fn hide(span: Span) -> Self {
        Decoration::Hide { span }
    }

    pub fn mark(span: Span, class: &'static str) -> Self {
        Decoration::Style {
            span,
            class,
            scope: StyleScope::Mark,
        }
    }

    pub fn line(span: Span, class: &'static str) -> Self {
        Decoration::Style {
            span,
            class,
            scope: StyleScope::Line,
        }
    }

    pub fn align_line(span: Span, align: TextAlign) -> Self {
        Self::line(span, classes::align(align))
    }

    pub fn widget(span: Span, widget: impl Into<Widget>) -> Self {
        Decoration::Widget {
            span,
            widget: widget.into(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Decoration::Hide { span }
            | Decoration::Style { span, .. }
            | Decoration::Widget { span, .. } => *span,
        }
    }

    /// Whether the host should route input events to the decoration instead
    /// of the text beneath it. Only widgets can intercept.
    pub fn intercepts_events(&self) -> bool {
        match self {
            Decoration::Widget { widget, .. } => widget.intercepts_events(),
            _ => false,
        }
    }

    pub fn is_hide(&self) -> bool {
        matches!(self, Decoration::Hide { .. })
    }

    pub fn is_widget(&self) -> bool {
        matches!(self, Decoration::Widget { .. })
    }

    /// The class of a style decoration.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Decoration::Style { class, .. } => Some(*class),
            _ => None,
        }
    }
}
