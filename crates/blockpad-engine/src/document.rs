//! Read-only access to the host's document.
//!
//! The host editor owns the buffer; the engine only reads one snapshot per
//! rebuild through [`DocumentText`]. Offsets are UTF-8 byte offsets.

use std::borrow::Cow;

use xi_rope::Rope;

use crate::span::Span;

/// A single line of the document, without its line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Zero-based line number.
    pub number: usize,
    /// Byte span of the line content (excludes `\n` and a preceding `\r`).
    pub span: Span,
    /// The line text.
    pub text: String,
}

/// Owned lines covering `window`, numbered from `first_number`.
///
/// `window` must start at a line start. The window text is walked once.
pub fn lines_in<D: DocumentText + ?Sized>(
    doc: &D,
    window: Span,
    first_number: usize,
) -> Vec<Line> {
    let text = doc.slice(window);
    lines_with_spans(&text)
        .map(|l| Line {
            number: first_number + l.number,
            span: l.span.offset(window.start),
            text: l.text.to_string(),
        })
        .collect()
}

/// A borrowed line produced while walking a whole text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    pub span: Span,
    pub text: &'a str,
}

impl LineRef<'_> {
    pub fn to_line(self) -> Line {
        Line {
            number: self.number,
            span: self.span,
            text: self.text.to_string(),
        }
    }
}

/// Document access supplied by the host editor.
pub trait DocumentText {
    /// Total length in bytes.
    fn len(&self) -> usize;

    /// The full text of the snapshot.
    fn text(&self) -> Cow<'_, str>;

    /// The line containing `offset`. Offsets past the end clamp to the last line.
    fn line_at(&self, offset: usize) -> Line;

    /// Number of lines; never zero.
    fn line_count(&self) -> usize;

    /// The line with zero-based `number`.
    fn line(&self, number: usize) -> Option<Line>;

    /// The text covered by `span`, which must lie on char boundaries.
    fn slice(&self, span: Span) -> Cow<'_, str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterates lines with their byte spans.
///
/// Always yields at least one line; a trailing newline yields a final empty
/// line, matching how an editor displays the buffer.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split('\n').enumerate().map(move |(number, raw)| {
        let start = offset;
        offset += raw.len() + 1;
        let content = raw.strip_suffix('\r').unwrap_or(raw);
        LineRef {
            number,
            span: Span {
                start,
                end: start + content.len(),
            },
            text: content,
        }
    })
}

fn trim_line_break(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}

impl DocumentText for str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn line_at(&self, offset: usize) -> Line {
        let mut offset = offset.min(str::len(self));
        while !self.is_char_boundary(offset) {
            offset -= 1;
        }
        let start = self[..offset].rfind('\n').map_or(0, |i| i + 1);
        let number = self.as_bytes()[..start]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        let end = self[start..].find('\n').map_or(str::len(self), |i| start + i);
        let text = trim_line_break(&self[start..end]);
        Line {
            number,
            span: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        }
    }

    fn line_count(&self) -> usize {
        self.bytes().filter(|&b| b == b'\n').count() + 1
    }

    fn line(&self, number: usize) -> Option<Line> {
        lines_with_spans(self).nth(number).map(LineRef::to_line)
    }

    fn slice(&self, span: Span) -> Cow<'_, str> {
        Cow::Borrowed(&self[span.start..span.end])
    }
}

impl DocumentText for String {
    fn len(&self) -> usize {
        self.as_str().len()
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn line_at(&self, offset: usize) -> Line {
        self.as_str().line_at(offset)
    }

    fn line_count(&self) -> usize {
        self.as_str().line_count()
    }

    fn line(&self, number: usize) -> Option<Line> {
        self.as_str().line(number)
    }

    fn slice(&self, span: Span) -> Cow<'_, str> {
        self.as_str().slice(span)
    }
}

impl DocumentText for Rope {
    fn len(&self) -> usize {
        Rope::len(self)
    }

    fn text(&self) -> Cow<'_, str> {
        self.slice_to_cow(..)
    }

    fn line_at(&self, offset: usize) -> Line {
        let len = Rope::len(self);
        let offset = offset.min(len);
        let number = self.line_of_offset(offset);
        let start = self.offset_of_line(number);
        let next = if number < self.line_of_offset(len) {
            self.offset_of_line(number + 1)
        } else {
            len
        };
        let raw = self.slice_to_cow(start..next);
        let text = trim_line_break(&raw).to_string();
        Line {
            number,
            span: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    }

    fn line_count(&self) -> usize {
        self.line_of_offset(Rope::len(self)) + 1
    }

    fn line(&self, number: usize) -> Option<Line> {
        (number < self.line_count()).then(|| self.line_at(self.offset_of_line(number)))
    }

    fn slice(&self, span: Span) -> Cow<'_, str> {
        self.slice_to_cow(span.start..span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lines_with_spans_tracks_offsets() {
        let lines: Vec<_> = lines_with_spans("# a\nbb\r\n\nc").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].span, Span::new(0, 3));
        assert_eq!(lines[1].span, Span::new(4, 6));
        assert_eq!(lines[1].text, "bb");
        assert_eq!(lines[2].span, Span::new(8, 8));
        assert_eq!(lines[3].span, Span::new(9, 10));
        assert_eq!(lines[3].number, 3);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let lines: Vec<_> = lines_with_spans("a\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].span, Span::new(2, 2));
    }

    #[test]
    fn empty_text_has_one_line() {
        let lines: Vec<_> = lines_with_spans("").collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].span.is_empty());
    }

    #[test]
    fn str_line_at_finds_containing_line() {
        let doc = "first\nsecond\nthird";
        let line = doc.line_at(8);
        assert_eq!(line.number, 1);
        assert_eq!(line.span, Span::new(6, 12));
        assert_eq!(line.text, "second");

        // A line break belongs to the line it terminates
        assert_eq!(doc.line_at(5).number, 0);
        assert_eq!(doc.line_at(6).number, 1);
    }

    #[test]
    fn str_line_at_clamps_past_end() {
        let doc = "a\nb";
        assert_eq!(doc.line_at(99).text, "b");
    }

    #[test]
    fn rope_and_str_agree() {
        let text = "# Title\n\nsome *text*\r\n| a | b |\n";
        let rope = Rope::from(text);
        for offset in 0..=text.len() {
            assert_eq!(rope.line_at(offset), text.line_at(offset), "offset {offset}");
        }
        assert_eq!(DocumentText::len(&rope), text.len());
        assert_eq!(rope.text(), text);
        assert_eq!(rope.line_count(), text.line_count());
        for number in 0..=text.line_count() {
            assert_eq!(rope.line(number), text.line(number), "line {number}");
        }
    }

    #[test]
    fn lines_in_window_match_whole_document_lines() {
        let text = "zero\none\r\ntwo\n\nfour";
        let rope = Rope::from(text);
        let window = Span::new(5, 13);
        let expected: Vec<Line> = (1..=2).filter_map(|n| text.line(n)).collect();

        assert_eq!(lines_in(text, window, 1), expected);
        assert_eq!(lines_in(&rope, window, 1), expected);
        assert_eq!(DocumentText::slice(&rope, window), text.slice(window));
    }

    #[test]
    fn line_by_number() {
        let doc = "a\nbb\n";
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(1).map(|l| l.span), Some(Span::new(2, 4)));
        assert_eq!(doc.line(2).map(|l| l.text), Some(String::new()));
        assert_eq!(doc.line(3), None);
    }
}
