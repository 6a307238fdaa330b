use std::sync::LazyLock;

use html_escape::encode_text;
use regex::Regex;

use crate::inline::kinds::TextAlign;
use crate::scan::PipeTable;

static SEPARATOR_CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:?-+:?$").expect("Invalid separator cell regex")
});

/// Splits a row on pipes, trims cells, and drops an empty leading and an
/// empty trailing cell (the outer pipes).
pub fn split_cells(row: &str) -> Vec<String> {
    let mut cells: Vec<&str> = row.split(PipeTable::PIPE).map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}

/// Whether every cell is a dash run with optional leading/trailing colons.
pub fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty() && cells.iter().all(|c| SEPARATOR_CELL.is_match(c))
}

/// Colons on both sides centre, a right colon alone right-aligns, anything
/// else is left-aligned.
pub fn column_alignment(cell: &str) -> TextAlign {
    match (cell.starts_with(':'), cell.ends_with(':')) {
        (true, true) => TextAlign::Center,
        (false, true) => TextAlign::Right,
        _ => TextAlign::Left,
    }
}

/// Block substitute for a pipe table region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableWidget {
    header: Option<Vec<String>>,
    body: Vec<Vec<String>>,
    alignments: Vec<TextAlign>,
}

impl TableWidget {
    /// Parses the raw text of a table region.
    ///
    /// Separator rows are consumed: the first one found supplies column
    /// alignments, and none of them are rendered. The first remaining row is
    /// the header. Mismatched cell counts are kept as they are.
    pub fn parse(raw: &str) -> Self {
        let mut table = TableWidget::default();
        let mut seen_separator = false;

        for line in raw.lines() {
            let cells = split_cells(line);
            if is_separator_row(&cells) {
                if !seen_separator {
                    table.alignments = cells.iter().map(|c| column_alignment(c)).collect();
                    seen_separator = true;
                }
                continue;
            }
            if table.header.is_none() {
                table.header = Some(cells);
            } else {
                table.body.push(cells);
            }
        }

        table
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn body(&self) -> &[Vec<String>] {
        &self.body
    }

    pub fn alignments(&self) -> &[TextAlign] {
        &self.alignments
    }

    /// Alignment of column `col`; columns without a separator cell are left-aligned.
    pub fn alignment(&self, col: usize) -> TextAlign {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_empty()
    }

    fn column_count(&self) -> usize {
        self.header
            .iter()
            .chain(self.body.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"md-table-widget\">");
        if self.is_empty() {
            html.push_str("</div>");
            return html;
        }

        html.push_str("<table class=\"md-table\">");
        if let Some(header) = &self.header {
            html.push_str("<thead>");
            self.push_row(&mut html, header, "th");
            html.push_str("</thead>");
        }
        if !self.body.is_empty() {
            html.push_str("<tbody>");
            for row in &self.body {
                self.push_row(&mut html, row, "td");
            }
            html.push_str("</tbody>");
        }
        html.push_str("</table></div>");
        html
    }

    fn push_row(&self, html: &mut String, row: &[String], tag: &str) {
        html.push_str("<tr>");
        for (col, cell) in row.iter().enumerate() {
            html.push_str(&format!(
                "<{tag} style=\"text-align: {}\">{}</{tag}>",
                self.alignment(col).as_str(),
                encode_text(cell)
            ));
        }
        html.push_str("</tr>");
    }

    /// Column-aligned text rendering for hosts without HTML, one string per row.
    pub fn plain_lines(&self) -> Vec<String> {
        let columns = self.column_count();
        let mut widths = vec![0usize; columns];
        for row in self.header.iter().chain(self.body.iter()) {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(cell.chars().count());
            }
        }

        self.header
            .iter()
            .chain(self.body.iter())
            .map(|row| {
                (0..columns)
                    .map(|col| {
                        let cell = row.get(col).map(String::as_str).unwrap_or("");
                        pad(cell, widths[col], self.alignment(col))
                    })
                    .collect::<Vec<_>>()
                    .join(" │ ")
            })
            .collect()
    }
}

fn pad(cell: &str, width: usize, align: TextAlign) -> String {
    let gap = width.saturating_sub(cell.chars().count());
    match align {
        TextAlign::Left => format!("{cell}{}", " ".repeat(gap)),
        TextAlign::Right => format!("{}{cell}", " ".repeat(gap)),
        TextAlign::Center => {
            let left = gap / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}
