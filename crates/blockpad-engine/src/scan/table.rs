use crate::document::LineRef;

use super::Region;

/// Pipe table syntax knowledge.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';

    /// A line looks like a table row when, trimmed, it holds at least two pipes.
    pub fn looks_like_row(text: &str) -> bool {
        text.trim().matches(Self::PIPE).count() >= 2
    }
}

/// Merges runs of consecutive row-like lines into table regions.
pub fn scan_tables(lines: &[LineRef<'_>]) -> Vec<Region> {
    let mut out = vec![];
    let mut run: Option<(usize, usize)> = None;

    for (idx, line) in lines.iter().enumerate() {
        if PipeTable::looks_like_row(line.text) {
            run = Some(match run {
                Some((first, _)) => (first, idx),
                None => (idx, idx),
            });
        } else if let Some((first, last)) = run.take() {
            out.push(Region::from_lines(&lines[first], &lines[last]));
        }
    }
    if let Some((first, last)) = run {
        out.push(Region::from_lines(&lines[first], &lines[last]));
    }

    out
}
