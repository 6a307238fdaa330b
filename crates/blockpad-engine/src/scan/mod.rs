//! # Block Pre-scanning
//!
//! Whole-document pass that locates multi-line blocks before any per-line
//! inline detection runs.
//!
//! ## Passes
//!
//! - **`fence`**: fenced code regions, paired line-start triple backticks
//! - **`table`**: runs of consecutive lines holding at least two pipes
//!
//! The passes are independent: a line may in principle satisfy both
//! heuristics and neither takes precedence here. Both are pure functions over
//! an immutable snapshot, so the regions are computed from the entire
//! document regardless of what is currently visible.
//!
//! ## Modules
//!
//! - **`cache`**: `RegionCache` memoising regions by document revision

pub mod cache;
pub mod fence;
pub mod table;

pub use cache::RegionCache;
pub use fence::{CodeFence, FenceRegion};
pub use table::PipeTable;

use crate::document::{LineRef, lines_with_spans};
use crate::span::Span;

/// A multi-line block located by the pre-scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Zero-based number of the first line.
    pub start_line: usize,
    /// Zero-based number of the last line (inclusive).
    pub end_line: usize,
    /// From the start of the first line to the end of the last line's content.
    pub span: Span,
}

impl Region {
    pub(crate) fn from_lines(first: &LineRef<'_>, last: &LineRef<'_>) -> Self {
        Self {
            start_line: first.number,
            end_line: last.number,
            span: Span {
                start: first.span.start,
                end: last.span.end,
            },
        }
    }

    pub fn contains_line(&self, number: usize) -> bool {
        self.start_line <= number && number <= self.end_line
    }
}

/// Regions found in one document snapshot, each list ordered by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRegions {
    pub fences: Vec<FenceRegion>,
    pub tables: Vec<Region>,
}

impl BlockRegions {
    /// The fence region covering `line`, if any.
    pub fn fence_at_line(&self, line: usize) -> Option<&FenceRegion> {
        let i = self.fences.partition_point(|f| f.region.end_line < line);
        self.fences.get(i).filter(|f| f.region.contains_line(line))
    }

    /// The table region covering `line`, if any.
    pub fn table_at_line(&self, line: usize) -> Option<&Region> {
        let i = self.tables.partition_point(|t| t.end_line < line);
        self.tables.get(i).filter(|t| t.contains_line(line))
    }

    /// Whether any fence region shares a line with `region`.
    pub fn fence_overlaps(&self, region: &Region) -> bool {
        let i = self
            .fences
            .partition_point(|f| f.region.end_line < region.start_line);
        self.fences
            .get(i)
            .is_some_and(|f| f.region.start_line <= region.end_line)
    }
}

/// Scans the whole text for fenced code and table regions.
///
/// With a `limit`, lines starting at or beyond that byte offset are not
/// considered, bounding the cost on very large documents.
pub fn scan_regions(text: &str, limit: Option<usize>) -> BlockRegions {
    let lines: Vec<LineRef<'_>> = lines_with_spans(text)
        .take_while(|l| limit.is_none_or(|max| l.span.start < max))
        .collect();

    let regions = BlockRegions {
        fences: fence::scan_fences(&lines),
        tables: table::scan_tables(&lines),
    };
    log::trace!(
        "pre-scan over {} lines: {} fences, {} tables",
        lines.len(),
        regions.fences.len(),
        regions.tables.len()
    );
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_has_no_regions() {
        assert_eq!(scan_regions("", None), BlockRegions::default());
    }

    #[test]
    fn passes_are_independent() {
        // A pipe-heavy line inside a fence is still reported as a table
        let text = "```\n| a | b |\n```";
        let regions = scan_regions(text, None);
        assert_eq!(regions.fences.len(), 1);
        assert_eq!(regions.tables.len(), 1);
        assert_eq!(regions.tables[0].start_line, 1);
    }

    #[test]
    fn limit_bounds_the_scan() {
        let text = "intro\n| a | b |\n| c | d |";
        let regions = scan_regions(text, Some(6));
        assert!(regions.tables.is_empty());

        let regions = scan_regions(text, Some(7));
        assert_eq!(regions.tables.len(), 1);
        assert_eq!(regions.tables[0].end_line, 1);
    }

    #[test]
    fn lookup_by_line() {
        let regions = scan_regions("```\nx\n```\n| a | b |", None);
        assert!(regions.fence_at_line(1).is_some());
        assert!(regions.fence_at_line(3).is_none());
        assert_eq!(regions.table_at_line(3).map(|t| t.start_line), Some(3));
    }

    #[test]
    fn lookup_across_many_regions() {
        let text = "```\na\n```\nx\n```\nb\n```\n| c | d |\ny\n| e | f |";
        let regions = scan_regions(text, None);
        assert_eq!(regions.fences.len(), 2);
        assert_eq!(regions.fence_at_line(3), None);
        assert_eq!(regions.fence_at_line(5).map(|f| f.region.start_line), Some(4));
        assert_eq!(regions.table_at_line(8), None);
        assert_eq!(regions.table_at_line(9).map(|t| t.start_line), Some(9));
    }

    #[test]
    fn table_sharing_a_fence_line_overlaps() {
        let regions = scan_regions("```\ncode\n```|x|y|\n| c | d |", None);
        assert_eq!(regions.tables.len(), 1);
        assert!(regions.fence_overlaps(&regions.tables[0]));

        let regions = scan_regions("```\ncode\n```\n| c | d |", None);
        assert!(!regions.fence_overlaps(&regions.tables[0]));
    }
}
