use criterion::{Criterion, criterion_group, criterion_main};
use markdown_loom_engine::{ParseOptions, markdown_to_html, parse_document, render_html};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("markdown_loom", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(doc);
        });
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(10);

    let content = common::generate_large_document();
    let doc = parse_document(&content).unwrap();
    group.bench_function("render_only", |b| {
        b.iter(|| std::hint::black_box(render_html(std::hint::black_box(&doc))));
    });

    group.bench_function("markdown_loom_end_to_end", |b| {
        let options = ParseOptions::default();
        b.iter(|| {
            let html = markdown_to_html(std::hint::black_box(&content), &options).unwrap();
            std::hint::black_box(html);
        });
    });

    group.bench_function("pulldown_cmark_end_to_end", |b| {
        b.iter(|| {
            let mut out = String::new();
            html::push_html(&mut out, Parser::new(std::hint::black_box(&content)));
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_lookahead_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookahead");
    group.sample_size(10);

    let content = common::generate_large_document();
    for depth in [1, 5, 10] {
        let options = ParseOptions {
            lookahead: depth,
            ..ParseOptions::default()
        };
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| {
                let html = markdown_to_html(std::hint::black_box(&content), &options).unwrap();
                std::hint::black_box(html);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render, bench_lookahead_depth);
criterion_main!(benches);
