use std::hint::black_box;

use blockpad_engine::{
    EngineOptions, LivePreview, NoLabels, Selection, Span, ViewState, ViewUpdate, annotate,
    scan_regions,
};
use criterion::{Criterion, criterion_group, criterion_main};
use xi_rope::Rope;

fn generate_markdown_content(sections: usize) -> String {
    let base = "# Title\n\nParagraph with **bold**, *italic*, `code` and a [link](http://example.com).\n\n\
                [align-center]Centered ~~old~~ text with [[block:intro]]\n\n\
                | Name | Count |\n| :--- | ---: |\n| apples | 3 |\n| pears | 12 |\n\n\
                ```rust\nfn example() {\n    println!(\"**not bold**\");\n}\n```\n\n";
    base.repeat(sections)
}

fn bench_prescan(c: &mut Criterion) {
    let mut group = c.benchmark_group("prescan");
    group.sample_size(20);

    let content = generate_markdown_content(500);
    group.bench_function("scan_regions", |b| {
        b.iter(|| black_box(scan_regions(black_box(&content), None)));
    });

    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    group.sample_size(20);

    let content = generate_markdown_content(500);
    let rope = Rope::from(content.as_str());
    let viewport = [Span::new(content.len() / 2, content.len() / 2 + 4000)];
    let selection = Selection::caret(content.len() / 2 + 100);

    group.bench_function("annotate_viewport", |b| {
        b.iter(|| {
            black_box(annotate(
                &rope,
                &viewport,
                &selection,
                &NoLabels,
                &EngineOptions::default(),
            ))
        });
    });

    group.bench_function("annotate_whole_str", |b| {
        let whole = [Span::new(0, content.len())];
        b.iter(|| {
            black_box(annotate(
                content.as_str(),
                &whole,
                &selection,
                &NoLabels,
                &EngineOptions::default(),
            ))
        });
    });

    group.bench_function("selection_change_cached", |b| {
        let mut live = LivePreview::default();
        let mut caret = 0usize;
        b.iter(|| {
            caret = (caret + 7) % 4000;
            let selection = Selection::caret(viewport[0].start + caret);
            live.update(
                ViewUpdate::selection(),
                ViewState {
                    doc: &rope,
                    revision: 1,
                    visible: &viewport,
                    selection: &selection,
                },
                &NoLabels,
            );
            black_box(live.decorations().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_prescan, bench_rebuild);
criterion_main!(benches);
