//! Applies a decoration set to plain text for hosts without native
//! decoration support, such as terminals and tests.
//!
//! Hidden spans are dropped (duplicate hides coalesce naturally), widgets
//! are replaced by their plain-text rendering, and style classes ride along
//! on the text they cover. Overlapping marks layer: a piece of text carries
//! every class whose span covers it.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::assemble::DecorationSet;
use crate::decoration::Decoration;
use crate::document::DocumentText;
use crate::span::Span;

/// A run of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Source text left visible, with the style classes covering it.
    Text {
        span: Span,
        text: &'a str,
        classes: Vec<&'static str>,
    },
    /// A widget's plain rendering standing in for `span`.
    Widget {
        span: Span,
        text: String,
        intercepts_events: bool,
    },
}

impl Segment<'_> {
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Segment::Text { text, .. } => Cow::Borrowed(*text),
            Segment::Widget { text, .. } => Cow::Borrowed(text.as_str()),
        }
    }
}

/// Splits `text` into visible segments under `decorations`.
///
/// Adjacent text pieces with identical classes are merged.
pub fn render_segments<'a>(text: &'a str, decorations: &DecorationSet) -> Vec<Segment<'a>> {
    let len = text.len();
    let mut cuts = BTreeSet::from([0, len]);
    for d in decorations {
        let span = d.span();
        cuts.insert(span.start.min(len));
        cuts.insert(span.end.min(len));
    }
    let cuts: Vec<usize> = cuts
        .into_iter()
        .filter(|&c| text.is_char_boundary(c))
        .collect();

    let mut emitted = vec![false; decorations.len()];
    let mut out: Vec<Segment<'a>> = vec![];

    for w in cuts.windows(2) {
        let piece = Span::new(w[0], w[1]);
        if piece.is_empty() {
            continue;
        }

        let covering = decorations
            .iter()
            .enumerate()
            .filter(|(_, d)| d.span().start <= piece.start && piece.end <= d.span().end);

        let mut hidden = false;
        let mut classes = vec![];
        for (index, d) in covering {
            match d {
                Decoration::Widget { span, widget } => {
                    hidden = true;
                    if !emitted[index] {
                        emitted[index] = true;
                        out.push(Segment::Widget {
                            span: *span,
                            text: widget.plain_lines().join("\n"),
                            intercepts_events: widget.intercepts_events(),
                        });
                    }
                }
                Decoration::Hide { .. } => hidden = true,
                Decoration::Style { class, .. } => classes.push(*class),
            }
        }
        if hidden {
            continue;
        }

        if let Some(Segment::Text {
            span: prev_span,
            text: prev_text,
            classes: prev_classes,
        }) = out.last_mut()
            && prev_span.end == piece.start
            && *prev_classes == classes
        {
            prev_span.end = piece.end;
            *prev_text = &text[prev_span.start..prev_span.end];
            continue;
        }
        out.push(Segment::Text {
            span: piece,
            text: &text[piece.start..piece.end],
            classes,
        });
    }

    out
}

/// The text a reader sees once `decorations` are applied to `doc`.
pub fn render_visible_text<D: DocumentText + ?Sized>(doc: &D, decorations: &DecorationSet) -> String {
    let text = doc.text();
    render_segments(&text, decorations)
        .iter()
        .map(Segment::text)
        .collect()
}
