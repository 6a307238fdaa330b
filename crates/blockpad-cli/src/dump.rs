use blockpad_engine::{
    BlockLabels, Decoration, DecorationSet, EngineOptions, Selection, Span, StyleScope, Widget,
    annotate,
};

/// Decorates the whole of `text` with the caret at `cursor`.
pub fn decorate_all(
    text: &str,
    cursor: usize,
    labels: &dyn BlockLabels,
    options: &EngineOptions,
) -> DecorationSet {
    annotate(
        text,
        &[Span::new(0, text.len())],
        &Selection::caret(cursor),
        labels,
        options,
    )
}

/// One line per decoration, in set order.
pub fn format_decorations(set: &DecorationSet) -> String {
    let mut out = String::new();
    for d in set {
        out.push_str(&describe(d));
        out.push('\n');
    }
    out
}

fn describe(decoration: &Decoration) -> String {
    let span = decoration.span();
    let range = format!("{}..{}", span.start, span.end);
    match decoration {
        Decoration::Hide { .. } => format!("hide    {range}"),
        Decoration::Style { class, scope, .. } => {
            let scope = match scope {
                StyleScope::Mark => "mark",
                StyleScope::Line => "line",
            };
            format!("style   {range} {class} ({scope})")
        }
        Decoration::Widget { widget, .. } => match widget {
            Widget::BlockRef(w) => format!(
                "widget  {range} block {} \"{}\" (intercepts)",
                w.id(),
                w.label()
            ),
            Widget::Table(w) => format!(
                "widget  {range} table {} rows",
                w.header().iter().count() + w.body().len()
            ),
        },
    }
}
