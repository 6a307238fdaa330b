use std::sync::LazyLock;

use regex::Regex;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[align-(left|center|right)\]")
        .expect("Invalid align directive regex")
});

/// Horizontal alignment shared by line directives and table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            _ => None,
        }
    }
}

/// Line alignment directive, `[align-left]` / `[align-center]` / `[align-right]`.
pub struct AlignDirective;

impl AlignDirective {
    /// Every directive in `line` as `(local_start, local_end, align)`.
    pub fn find_all(line: &str) -> Vec<(usize, usize, TextAlign)> {
        DIRECTIVE
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let align = TextAlign::parse(caps.get(1)?.as_str())?;
                Some((whole.start(), whole.end(), align))
            })
            .collect()
    }
}
