use blockpad_engine::decoration::classes;
use blockpad_engine::{Decoration, DocumentText, Segment, StyleScope, render_segments};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;

/// Terminal style for a set of layered decoration classes.
pub fn style_for(class_list: &[&str]) -> Style {
    class_list
        .iter()
        .fold(Style::default(), |style, class| match *class {
            classes::BOLD => style.add_modifier(Modifier::BOLD),
            classes::ITALIC => style.add_modifier(Modifier::ITALIC),
            classes::STRIKETHROUGH => style.add_modifier(Modifier::CROSSED_OUT),
            classes::CODE => style.fg(Color::Yellow),
            classes::LINK => style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            classes::CODE_BLOCK => style.fg(Color::Green),
            c if c.starts_with("md-heading-") => style.fg(Color::Magenta).add_modifier(Modifier::BOLD),
            _ => style,
        })
}

fn alignment_for(class: &str) -> Option<Alignment> {
    match class.strip_prefix("md-align-")? {
        "center" => Some(Alignment::Center),
        "right" => Some(Alignment::Right),
        "left" => Some(Alignment::Left),
        _ => None,
    }
}

/// Renders the viewport lines of `app` with decorations applied.
///
/// A widget is drawn on the line where it starts; lines entirely covered
/// by a widget that started earlier are skipped.
pub fn visible_lines(app: &App) -> Vec<Line<'static>> {
    let doc = app.doc();
    let text = doc.text();
    let set = app.decorations();
    let segments = render_segments(&text, set);
    let range = app.visible_range();
    let first = doc.line_at(range.start).number;
    let last = doc.line_at(range.end).number;

    let mut out = vec![];
    for number in first..=last {
        let Some(line) = doc.line(number) else {
            continue;
        };
        let covered = set.iter().any(|d| {
            d.is_widget() && d.span().start < line.span.start && line.span.end <= d.span().end
        });
        if covered {
            continue;
        }

        let mut rows: Vec<Vec<Span<'static>>> = vec![vec![]];
        for segment in &segments {
            match segment {
                Segment::Text {
                    span,
                    text,
                    classes,
                } => {
                    let start = span.start.max(line.span.start);
                    let end = span.end.min(line.span.end);
                    if start >= end {
                        continue;
                    }
                    let piece = &text[start - span.start..end - span.start];
                    if let Some(row) = rows.last_mut() {
                        row.push(Span::styled(piece.to_string(), style_for(classes)));
                    }
                }
                Segment::Widget {
                    span,
                    text,
                    intercepts_events,
                } if line.span.start <= span.start && span.start <= line.span.end => {
                    let style = if *intercepts_events {
                        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    for (i, part) in text.split('\n').enumerate() {
                        if i > 0 {
                            rows.push(vec![]);
                        }
                        if let Some(row) = rows.last_mut() {
                            row.push(Span::styled(part.to_string(), style));
                        }
                    }
                }
                Segment::Widget { .. } => {}
            }
        }

        let alignment = set.iter().find_map(|d| match d {
            Decoration::Style {
                span,
                class,
                scope: StyleScope::Line,
            } if *span == line.span => alignment_for(class),
            _ => None,
        });
        let caret_line = number == app.caret_line();

        for row in rows {
            let mut rendered = Line::from(row);
            if let Some(alignment) = alignment {
                rendered = rendered.alignment(alignment);
            }
            if caret_line {
                rendered = rendered.style(Style::default().bg(Color::DarkGray));
            }
            out.push(rendered);
        }
    }
    out
}
