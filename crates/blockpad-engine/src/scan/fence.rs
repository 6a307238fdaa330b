use crate::document::LineRef;
use crate::span::Span;

use super::Region;

/// Fenced code block syntax knowledge.
pub struct CodeFence;

impl CodeFence {
    /// The fence marker. Only a marker at column zero opens or closes a block.
    pub const MARKER: &'static str = "```";

    /// Returns the marker span if `line` starts with a fence.
    pub fn marker(line: &LineRef<'_>) -> Option<Span> {
        line.text.starts_with(Self::MARKER).then(|| Span {
            start: line.span.start,
            end: line.span.start + Self::MARKER.len(),
        })
    }
}

/// A fenced code region with the positions of its markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceRegion {
    pub region: Region,
    /// The opening triple backtick.
    pub open: Span,
    /// The closing triple backtick; `None` for an unterminated fence.
    pub close: Option<Span>,
}

/// Finds fenced code regions.
///
/// An opener pairs with the next line-start fence. An opener with no closer
/// extends to the last line and ends the scan.
pub fn scan_fences(lines: &[LineRef<'_>]) -> Vec<FenceRegion> {
    let mut out = vec![];
    let mut i = 0;

    while i < lines.len() {
        let Some(open) = CodeFence::marker(&lines[i]) else {
            i += 1;
            continue;
        };

        let closer = lines[i + 1..]
            .iter()
            .enumerate()
            .find_map(|(k, l)| CodeFence::marker(l).map(|m| (i + 1 + k, m)));

        match closer {
            Some((j, close)) => {
                out.push(FenceRegion {
                    region: Region::from_lines(&lines[i], &lines[j]),
                    open,
                    close: Some(close),
                });
                i = j + 1;
            }
            None => {
                let last = &lines[lines.len() - 1];
                out.push(FenceRegion {
                    region: Region::from_lines(&lines[i], last),
                    open,
                    close: None,
                });
                break;
            }
        }
    }

    out
}
