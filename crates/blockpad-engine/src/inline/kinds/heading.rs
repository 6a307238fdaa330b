use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})[ \t]+").expect("Invalid heading regex")
});

/// ATX heading marker: one to six `#` at line start, then required whitespace.
pub struct Heading;

impl Heading {
    /// Returns `(level, marker_len)` where the marker includes the trailing
    /// whitespace run.
    pub fn detect(line: &str) -> Option<(u8, usize)> {
        let caps = HEADING.captures(line)?;
        let level = caps.get(1)?.len() as u8;
        let marker = caps.get(0)?;
        Some((level, marker.end()))
    }
}
