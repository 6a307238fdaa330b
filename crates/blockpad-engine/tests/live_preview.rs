use std::collections::HashMap;

use blockpad_engine::decoration::classes;
use blockpad_engine::inline::kinds::TextAlign;
use blockpad_engine::widgets::table::TableWidget;
use blockpad_engine::{
    Decoration, DecorationSet, EngineOptions, LivePreview, NoLabels, Selection, SelectionRange,
    Span, ViewState, ViewUpdate, Widget, WidgetEvent, annotate, render_visible_text, should_reveal,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

fn whole(doc: &str) -> Vec<Span> {
    vec![Span::new(0, doc.len())]
}

fn decorate(doc: &str, selection: Selection) -> DecorationSet {
    annotate(
        doc,
        &whole(doc),
        &selection,
        &NoLabels,
        &EngineOptions::default(),
    )
}

#[test]
fn rebuilding_with_unchanged_inputs_is_identical() {
    let doc = "# Notes\n\n**bold** and *it* with `code`\n\n```\nraw **x**\n```\n\n| a | b |\n| - | - |\n\nsee [[block:intro]] [x](y)";
    let rope = Rope::from(doc);
    let selection = Selection::caret(3);
    let visible = whole(doc);

    let from_str = annotate(doc, &visible, &selection, &NoLabels, &EngineOptions::default());
    let again = annotate(doc, &visible, &selection, &NoLabels, &EngineOptions::default());
    let from_rope = annotate(&rope, &visible, &selection, &NoLabels, &EngineOptions::default());

    assert_eq!(from_str, again);
    assert_eq!(from_str, from_rope);
}

#[test]
fn bold_markers_follow_the_caret() {
    let doc = "0123456789**x**";
    let bold = Span::new(10, 15);

    let outside = Selection::caret(0);
    assert!(!should_reveal(bold, &outside));
    insta::assert_snapshot!(render_visible_text(doc, &decorate(doc, outside)), @"0123456789x");

    let inside = Selection::caret(12);
    assert!(should_reveal(bold, &inside));
    let set = decorate(doc, inside);
    insta::assert_snapshot!(render_visible_text(doc, &set), @"0123456789**x**");
    assert_eq!(
        set.into_vec(),
        vec![Decoration::mark(Span::new(12, 13), classes::BOLD)]
    );
}

#[test]
fn inline_code_hides_two_ticks_and_styles_interior() {
    let doc = "`abc`";
    let set = decorate(doc, Selection::caret(doc.len() + 1));

    let hides: Vec<Span> = set.iter().filter(|d| d.is_hide()).map(Decoration::span).collect();
    assert_eq!(hides, vec![Span::new(0, 1), Span::new(4, 5)]);
    assert!(hides.iter().all(|s| s.len() == 1));

    let styles: Vec<&Decoration> = set.iter().filter(|d| d.class().is_some()).collect();
    assert_eq!(styles, vec![&Decoration::mark(Span::new(1, 4), classes::CODE)]);
}

#[test]
fn link_residual_text_is_its_label() {
    let doc = "[go](http://x)";
    let hidden = decorate(doc, Selection::caret(doc.len() + 1));
    insta::assert_snapshot!(render_visible_text(doc, &hidden), @"go");

    let revealed = decorate(doc, Selection::single(SelectionRange::new(2, 6)));
    assert!(revealed.iter().all(|d| !d.is_hide()));
    insta::assert_snapshot!(render_visible_text(doc, &revealed), @"[go](http://x)");
}

#[test]
fn italic_inside_bold_is_not_emitted() {
    let doc = "**a*b*c**";
    let set = decorate(doc, Selection::caret(doc.len() + 1));

    assert!(set.iter().all(|d| d.class() != Some(classes::ITALIC)));
    let bold: Vec<Span> = set
        .iter()
        .filter(|d| d.class() == Some(classes::BOLD))
        .map(Decoration::span)
        .collect();
    assert_eq!(bold, vec![Span::new(2, 7)]);
    insta::assert_snapshot!(render_visible_text(doc, &set), @"a*b*c");
}

#[test]
fn table_parses_header_alignment_and_body() {
    let raw = "| H1 | H2 |\n| :--- | ---: |\n| a | b |";
    let table = TableWidget::parse(raw);

    assert_eq!(
        table.header(),
        Some(&["H1".to_string(), "H2".to_string()][..])
    );
    assert_eq!(table.body(), &[vec!["a".to_string(), "b".to_string()]]);
    assert_eq!(table.alignment(0), TextAlign::Left);
    assert_eq!(table.alignment(1), TextAlign::Right);
    assert!(!table.to_html().contains(":---"));

    let set = decorate(raw, Selection::caret(raw.len() + 1));
    assert_eq!(set.len(), 1);
    match &set.as_slice()[0] {
        Decoration::Widget {
            widget: Widget::Table(w),
            ..
        } => assert_eq!(w, &table),
        other => panic!("expected table widget, got {other:?}"),
    }
}

#[rstest]
#[case::no_labels(None, "missing")]
#[case::labelled(Some("Intro section"), "Intro section")]
fn block_reference_label(#[case] label: Option<&str>, #[case] expected: &str) {
    let doc = "[[block:missing]]";
    let labels: HashMap<String, String> = label
        .map(|l| HashMap::from([("missing".to_string(), l.to_string())]))
        .unwrap_or_default();

    let set = annotate(
        doc,
        &whole(doc),
        &Selection::caret(doc.len() + 1),
        &labels,
        &EngineOptions::default(),
    );
    match &set.as_slice()[0] {
        Decoration::Widget {
            widget: Widget::BlockRef(w),
            ..
        } => {
            assert_eq!(w.id(), "missing");
            assert_eq!(w.label(), expected);
        }
        other => panic!("expected block widget, got {other:?}"),
    }
}

#[test]
fn block_widget_opens_on_double_activation() {
    let doc = "[[block:intro]]";
    let set = decorate(doc, Selection::caret(doc.len() + 1));
    let decoration = &set.as_slice()[0];
    assert!(decoration.intercepts_events());

    let mut opened = vec![];
    let mut opener = |id: &str| opened.push(id.to_string());
    if let Decoration::Widget { widget, .. } = decoration {
        widget.handle_event(WidgetEvent::DoubleActivate, &mut opener);
    }
    assert_eq!(opened, vec!["intro".to_string()]);
}

#[test]
fn table_starting_above_viewport_is_not_decorated() {
    let doc = "| H1 | H2 |\n| --- | --- |\n| **a** | b |";
    // Only the last body line is on screen
    let visible = [Span::new(26, doc.len())];
    let set = annotate(
        doc,
        &visible,
        &Selection::caret(0),
        &NoLabels,
        &EngineOptions::default(),
    );

    assert!(set.iter().all(|d| !d.is_widget()));
    // The body line is decorated as an ordinary line
    assert!(set.iter().any(|d| d.class() == Some(classes::BOLD)));
}

#[test]
fn disjoint_visible_ranges_skip_the_gap() {
    let doc = "**a**\n**b**\n**c**";
    let set = annotate(
        doc,
        &[Span::new(0, 5), Span::new(12, 17)],
        &Selection::caret(doc.len() + 1),
        &NoLabels,
        &EngineOptions::default(),
    );

    let gap = Span::new(6, 11);
    assert!(set.iter().all(|d| !d.span().intersects(gap)));
    assert_eq!(set.iter().filter(|d| d.span().end <= 5).count(), 3);
    assert_eq!(set.iter().filter(|d| d.span().start >= 12).count(), 3);
    assert_eq!(render_visible_text(doc, &set), "a\n**b**\nc");
}

#[test]
fn table_starting_in_a_gap_is_not_decorated() {
    let doc = "intro\n| H1 | H2 |\n| **a** | b |";
    let set = annotate(
        doc,
        &[Span::new(0, 5), Span::new(18, doc.len())],
        &Selection::caret(doc.len() + 1),
        &NoLabels,
        &EngineOptions::default(),
    );

    assert!(set.iter().all(|d| !d.is_widget()));
    assert!(set.iter().all(|d| !d.span().intersects(Span::new(6, 17))));
    assert!(
        set.iter()
            .any(|d| *d == Decoration::mark(Span::new(22, 23), classes::BOLD))
    );
}

#[test]
fn str_and_rope_agree_on_large_documents() {
    let doc = "# Part\n\n**bold** `code` [[block:x]]\n\n```\nraw **x**\n```\n\n| a | b |\n| - | - |\n| *c* | d |\n\n"
        .repeat(200);
    let rope = Rope::from(doc.as_str());
    let mid = doc.len() / 2;
    let visible = [
        Span::new(0, 300),
        Span::new(mid, mid + 500),
        Span::new(doc.len() - 100, doc.len()),
    ];
    let selection = Selection::caret(mid + 40);

    let from_str = annotate(doc.as_str(), &visible, &selection, &NoLabels, &EngineOptions::default());
    let from_rope = annotate(&rope, &visible, &selection, &NoLabels, &EngineOptions::default());

    assert!(!from_str.is_empty());
    assert_eq!(from_str, from_rope);
}

#[test]
fn fence_starting_above_viewport_is_not_decorated() {
    let doc = "```\n**raw**\n```";
    let set = annotate(
        doc,
        &[Span::new(4, 11)],
        &Selection::caret(0),
        &NoLabels,
        &EngineOptions::default(),
    );
    assert!(set.is_empty());
}

#[test]
fn fenced_code_hides_markers_until_selected() {
    let doc = "```\nlet x = `y`;\n```";
    let outside = decorate(doc, Selection::caret(doc.len() + 1));
    assert_eq!(render_visible_text(doc, &outside), "\nlet x = `y`;\n");

    let inside = decorate(doc, Selection::caret(6));
    assert_eq!(render_visible_text(doc, &inside), doc);
    assert_eq!(
        inside.iter().filter(|d| d.class() == Some(classes::CODE_BLOCK)).count(),
        3
    );
}

#[test]
fn live_preview_tracks_scrolling() {
    let doc: String = (0..50).map(|i| format!("line **{i}**\n")).collect();
    let rope = Rope::from(doc.as_str());
    let selection = Selection::caret(0);
    let mut live = LivePreview::default();

    let top = [Span::new(0, 20)];
    live.update(
        ViewUpdate::ALL,
        ViewState {
            doc: &rope,
            revision: 1,
            visible: &top,
            selection: &selection,
        },
        &NoLabels,
    );
    let first = live.decorations().clone();
    assert!(first.iter().all(|d| d.span().end <= 40));

    let bottom = [Span::new(doc.len() - 20, doc.len())];
    live.update(
        ViewUpdate::viewport(),
        ViewState {
            doc: &rope,
            revision: 1,
            visible: &bottom,
            selection: &selection,
        },
        &NoLabels,
    );
    assert_ne!(live.decorations(), &first);
    assert!(
        live.decorations()
            .iter()
            .all(|d| d.span().start >= doc.len() - 40)
    );
}

#[test]
fn heading_and_alignment_classes() {
    let doc = "### [align-center]Title";
    let set = decorate(doc, Selection::caret(doc.len() + 1));
    let classes: Vec<&str> = set.iter().filter_map(Decoration::class).collect();
    assert_eq!(classes, vec!["md-heading-3", "md-align-center"]);
    insta::assert_snapshot!(render_visible_text(doc, &set), @"Title");
}
