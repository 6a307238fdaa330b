//! # Decoration Assembly
//!
//! Turns pre-scanned regions and per-line inline matches into one ordered
//! decoration set for the host view.
//!
//! ## Visibility
//!
//! Only lines intersecting a visible range are decorated. A fenced code or
//! table block is decorated only when its start line is itself visible; a
//! block whose start has scrolled above the viewport stays undecorated even
//! while its body is on screen. Fence lines are raw zones and never receive
//! inline decorations. A table sharing a line with a fence is never collapsed;
//! its lines outside the fence are matched like ordinary lines.
//!
//! ## Ordering
//!
//! The set is sorted by start offset with a stable sort, so ties keep
//! emission order. Nothing is deduplicated or merged; see
//! [`crate::decoration`] for the overlap contract.

pub mod invariants;

use std::collections::BTreeMap;

use crate::decoration::{Decoration, classes};
use crate::document::{DocumentText, Line, lines_in};
use crate::inline::{ConstructMatch, match_line};
use crate::options::EngineOptions;
use crate::scan::{BlockRegions, FenceRegion, Region, scan_regions};
use crate::selection::{Selection, should_reveal};
use crate::span::Span;
use crate::widgets::{BlockLabels, BlockRefWidget, TableWidget};

/// An ordered, well-formed set of decorations for one rebuild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    pub fn as_slice(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// Decorations whose span intersects `span`, or touches it when `span`
    /// is empty.
    pub fn overlapping(&self, span: Span) -> impl Iterator<Item = &Decoration> + '_ {
        self.decorations.iter().filter(move |d| {
            let s = d.span();
            s.intersects(span) || (span.is_empty() && s.contains_inclusive(span.start))
        })
    }

    pub fn into_vec(self) -> Vec<Decoration> {
        self.decorations
    }
}

impl From<Vec<Decoration>> for DecorationSet {
    /// Orders `decorations` by start offset, keeping the given order on ties.
    fn from(mut decorations: Vec<Decoration>) -> Self {
        decorations.sort_by_key(|d| d.span().start);
        Self { decorations }
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorations.iter()
    }
}

/// Scans `doc` and builds its decoration set in one call.
pub fn annotate<D: DocumentText + ?Sized>(
    doc: &D,
    visible: &[Span],
    selection: &Selection,
    labels: &dyn BlockLabels,
    options: &EngineOptions,
) -> DecorationSet {
    let regions = scan_regions(&doc.text(), options.prescan_limit);
    build_decorations(doc, &regions, visible, selection, labels, options)
}

/// Builds the decoration set from already-scanned `regions`.
///
/// # Panics
/// If an emitted span falls outside the document (an engine defect).
pub fn build_decorations<D: DocumentText + ?Sized>(
    doc: &D,
    regions: &BlockRegions,
    visible: &[Span],
    selection: &Selection,
    labels: &dyn BlockLabels,
    options: &EngineOptions,
) -> DecorationSet {
    let lines = visible_lines(doc, visible);
    let mut out = vec![];

    for line in lines.values() {
        if let Some(fence) = regions.fence_at_line(line.number) {
            if fence.region.start_line == line.number {
                emit_fence(doc, fence, selection, &mut out);
            }
            continue;
        }

        if let Some(table) = regions.table_at_line(line.number)
            && lines.contains_key(&table.start_line)
            && !regions.fence_overlaps(table)
            && !should_reveal(table.span, selection)
        {
            if table.start_line == line.number {
                emit_table(doc, table, &mut out);
            }
            continue;
        }

        for m in match_line(line.span.start, &line.text) {
            emit_construct(m, selection, labels, options, &mut out);
        }
    }

    out.sort_by_key(|d| d.span().start);
    invariants::check(&out, doc.len());

    log::debug!(
        "assembled {} decorations over {} visible lines",
        out.len(),
        lines.len()
    );
    DecorationSet { decorations: out }
}

/// Collects the lines intersecting any visible range, keyed by line number.
///
/// A range includes the line holding its `to` offset. Ranges are clamped to
/// the document; a line shared by two ranges is visited once.
fn visible_lines<D: DocumentText + ?Sized>(doc: &D, visible: &[Span]) -> BTreeMap<usize, Line> {
    let len = doc.len();
    let mut lines = BTreeMap::new();

    for range in visible {
        let from = range.start.min(len);
        let to = range.end.min(len);
        if from > to {
            continue;
        }
        let first = doc.line_at(from);
        let last = doc.line_at(to);
        let window = Span::new(first.span.start, last.span.end);
        for line in lines_in(doc, window, first.number) {
            lines.entry(line.number).or_insert(line);
        }
    }

    lines
}

fn emit_fence<D: DocumentText + ?Sized>(
    doc: &D,
    fence: &FenceRegion,
    selection: &Selection,
    out: &mut Vec<Decoration>,
) {
    let region = &fence.region;
    for line in lines_in(doc, region.span, region.start_line) {
        out.push(Decoration::line(line.span, classes::CODE_BLOCK));
    }

    if !should_reveal(region.span, selection) {
        out.push(Decoration::hide(fence.open));
        if let Some(close) = fence.close {
            out.push(Decoration::hide(close));
        }
    }
}

fn emit_table<D: DocumentText + ?Sized>(doc: &D, table: &Region, out: &mut Vec<Decoration>) {
    let widget = TableWidget::parse(&doc.slice(table.span));
    log::trace!(
        "table widget for lines {}..={}",
        table.start_line,
        table.end_line
    );
    out.push(Decoration::widget(table.span, widget));
}

fn emit_construct(
    m: ConstructMatch,
    selection: &Selection,
    labels: &dyn BlockLabels,
    options: &EngineOptions,
    out: &mut Vec<Decoration>,
) {
    let reveal = should_reveal(m.full(), selection);
    log::trace!("{} at {:?}, revealed: {reveal}", m.kind_name(), m.full());

    match m {
        ConstructMatch::CodeSpan { full, inner } => {
            if !reveal {
                out.push(Decoration::hide(Span::new(full.start, inner.start)));
                out.push(Decoration::hide(Span::new(inner.end, full.end)));
            }
            out.push(Decoration::mark(inner, classes::CODE));
        }
        ConstructMatch::Link { full, text, url } => {
            if !reveal {
                // [ ] ( url )
                out.push(Decoration::hide(Span::new(full.start, text.start)));
                out.push(Decoration::hide(Span::new(text.end, text.end + 1)));
                out.push(Decoration::hide(Span::new(url.start - 1, url.start)));
                out.push(Decoration::hide(url));
                out.push(Decoration::hide(Span::new(url.end, full.end)));
            }
            out.push(Decoration::mark(text, classes::LINK));
        }
        ConstructMatch::BlockRef { full, id, .. } => {
            if !reveal {
                let widget = BlockRefWidget::resolve(&id, labels, &options.block_icon);
                out.push(Decoration::widget(full, widget));
            }
        }
        ConstructMatch::Heading {
            full,
            marker,
            level,
        } => {
            if !reveal {
                out.push(Decoration::hide(marker));
            }
            out.push(Decoration::line(full, classes::heading(level)));
        }
        ConstructMatch::Bold { full, inner } => {
            emit_paired(full, inner, classes::BOLD, reveal, out);
        }
        ConstructMatch::Italic { full, inner } => {
            emit_paired(full, inner, classes::ITALIC, reveal, out);
        }
        ConstructMatch::Strikethrough { full, inner } => {
            emit_paired(full, inner, classes::STRIKETHROUGH, reveal, out);
        }
        ConstructMatch::AlignDirective { full, line, align } => {
            out.push(Decoration::hide(full));
            out.push(Decoration::align_line(line, align));
        }
    }
}

fn emit_paired(
    full: Span,
    inner: Span,
    class: &'static str,
    reveal: bool,
    out: &mut Vec<Decoration>,
) {
    if !reveal {
        out.push(Decoration::hide(Span::new(full.start, inner.start)));
        out.push(Decoration::hide(Span::new(inner.end, full.end)));
    }
    out.push(Decoration::mark(inner, class));
}
