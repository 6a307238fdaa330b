use crate::span::Span;

use super::{
    cursor::Cursor,
    kinds::{AlignDirective, Bold, BlockRef, CodeSpan, Heading, Italic, Link, Strikethrough},
    types::ConstructMatch,
};

/// Detects inline constructs on one line.
///
/// # Arguments
/// - `base`: Byte offset in the document where `line` begins
/// - `line`: The line text without its line break
///
/// # Returns
/// Matches grouped by pass in precedence order, each group in left-to-right
/// order. Matches from different passes may overlap.
pub fn match_line(base: usize, line: &str) -> Vec<ConstructMatch> {
    let mut out = vec![];

    scan_pass(line, base, &mut out, try_match_code_span);
    scan_pass(line, base, &mut out, try_match_link);
    scan_pass(line, base, &mut out, try_match_block_ref);

    if let Some(heading) = match_heading(base, line) {
        out.push(heading);
    }

    let bold_start = out.len();
    scan_pass(line, base, &mut out, try_match_bold);
    let bold: Vec<Span> = out[bold_start..].iter().map(ConstructMatch::full).collect();

    let mut italic = vec![];
    scan_pass(line, base, &mut italic, try_match_italic);
    out.extend(
        italic
            .into_iter()
            .filter(|m| !bold.iter().any(|b| b.intersects(m.full()))),
    );

    scan_pass(line, base, &mut out, try_match_strikethrough);

    let line_span = Span {
        start: base,
        end: base + line.len(),
    };
    out.extend(
        AlignDirective::find_all(line)
            .into_iter()
            .map(|(start, end, align)| ConstructMatch::AlignDirective {
                full: Span {
                    start: base + start,
                    end: base + end,
                },
                line: line_span,
                align,
            }),
    );

    out
}

/// Runs one detector across the whole line.
///
/// On a match the cursor resumes after it; otherwise it advances one byte.
fn scan_pass(
    line: &str,
    base: usize,
    out: &mut Vec<ConstructMatch>,
    try_match: fn(&mut Cursor<'_>) -> Option<ConstructMatch>,
) {
    let mut cur = Cursor::new(line, base);
    while !cur.eof() {
        if let Some(m) = try_match(&mut cur) {
            out.push(m);
            continue;
        }
        cur.bump();
    }
}

/// `` `[^`]+` ``. On failure, cursor position is restored.
fn try_match_code_span(cur: &mut Cursor<'_>) -> Option<ConstructMatch> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    if cur.bump_while(|b| b != CodeSpan::TICK) == 0 || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing `

    Some(ConstructMatch::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// `[text](url)` where text has no `]` and url has no `)`.
fn try_match_link(cur: &mut Cursor<'_>) -> Option<ConstructMatch> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let text_start = cur.pos();
    let text_len = cur.bump_while(|b| b != Link::TEXT_CLOSE);
    let text_end = cur.pos();

    if text_len == 0 || !cur.starts_with(&[Link::TEXT_CLOSE, Link::URL_OPEN]) {
        *cur = saved;
        return None;
    }
    cur.bump_n(2); // ](
    let url_start = cur.pos();
    let url_len = cur.bump_while(|b| b != Link::URL_CLOSE);
    let url_end = cur.pos();

    if url_len == 0 || cur.peek() != Some(Link::URL_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(ConstructMatch::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        text: Span {
            start: text_start,
            end: text_end,
        },
        url: Span {
            start: url_start,
            end: url_end,
        },
    })
}

/// `[[block:id]]` with a non-empty `[A-Za-z0-9_-]` id.
fn try_match_block_ref(cur: &mut Cursor<'_>) -> Option<ConstructMatch> {
    if !cur.starts_with(BlockRef::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(BlockRef::OPEN.len());
    let id_local = cur.i;
    let id_start = cur.pos();

    if cur.bump_while(BlockRef::is_id_byte) == 0 || !cur.starts_with(BlockRef::CLOSE) {
        *cur = saved;
        return None;
    }
    let id_end = cur.pos();
    let id = cur.s[id_local..cur.i].to_string();
    cur.bump_n(BlockRef::CLOSE.len());

    Some(ConstructMatch::BlockRef {
        full: Span {
            start,
            end: cur.pos(),
        },
        id_span: Span {
            start: id_start,
            end: id_end,
        },
        id,
    })
}

fn match_heading(base: usize, line: &str) -> Option<ConstructMatch> {
    let (level, marker_len) = Heading::detect(line)?;
    Some(ConstructMatch::Heading {
        full: Span {
            start: base,
            end: base + line.len(),
        },
        marker: Span {
            start: base,
            end: base + marker_len,
        },
        level,
    })
}

/// Shared shape of `**text**` and `~~text~~`: the first inner byte must not
/// be the marker byte, and the inner text ends at the nearest closing pair.
fn try_match_paired(cur: &mut Cursor<'_>, marker: &[u8; 2]) -> Option<(Span, Span)> {
    if !cur.starts_with(marker) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(marker.len());
    let inner_start = cur.pos();

    match cur.bump() {
        Some(b) if b != marker[0] => {}
        _ => {
            *cur = saved;
            return None;
        }
    }
    while !cur.eof() && !cur.starts_with(marker) {
        cur.bump();
    }
    if cur.eof() {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(marker.len());

    Some((
        Span {
            start,
            end: cur.pos(),
        },
        Span {
            start: inner_start,
            end: inner_end,
        },
    ))
}

fn try_match_bold(cur: &mut Cursor<'_>) -> Option<ConstructMatch> {
    try_match_paired(cur, Bold::MARKER).map(|(full, inner)| ConstructMatch::Bold { full, inner })
}

fn try_match_strikethrough(cur: &mut Cursor<'_>) -> Option<ConstructMatch> {
    try_match_paired(cur, Strikethrough::MARKER)
        .map(|(full, inner)| ConstructMatch::Strikethrough { full, inner })
}

/// `*text*` with no star directly before the opener or after the closer.
fn try_match_italic(cur: &mut Cursor<'_>) -> Option<ConstructMatch> {
    if cur.peek() != Some(Italic::MARKER) || cur.prev() == Some(Italic::MARKER) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // *
    let inner_start = cur.pos();

    if cur.bump_while(|b| b != Italic::MARKER) == 0 || cur.peek() != Some(Italic::MARKER) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing *

    if cur.peek() == Some(Italic::MARKER) {
        *cur = saved;
        return None;
    }

    Some(ConstructMatch::Italic {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
