//! Benchmarks for element and list rendering.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tagged_markup::{Content, Element, HtmlFactory, InlineListOptions};

/// Build a `section` holding `paragraphs` paragraphs with inline markup.
fn build_document(paragraphs: usize) -> Element {
    let mut section = Element::new("section.doc", Content::Null).unwrap();
    for i in 0..paragraphs {
        let mut p = Element::new("p", format!("Paragraph {i} with <escaped> text & ")).unwrap();
        p.push(Element::new("strong", "bold").unwrap()).unwrap();
        section.push(p).unwrap();
    }
    section
}

fn bench_render_simple(c: &mut Criterion) {
    let el = Element::new("div.card#main", "Hello world").unwrap();

    c.bench_function("render_simple_element", |b| {
        b.iter(|| el.render(false));
    });
}

fn bench_render_deferred(c: &mut Criterion) {
    let mut el = Element::new("p", Content::Null).unwrap();
    for i in 0..20 {
        el.push(Content::from_fn(move || format!("item {i}")))
            .unwrap();
    }

    c.bench_function("render_deferred_children", |b| {
        b.iter(|| el.render(false));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_size");

    for paragraphs in [10, 100, 1000] {
        let document = build_document(paragraphs);
        let size = document.render(false).unwrap().len();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("document", paragraphs),
            &document,
            |b, document| b.iter(|| document.render(false)),
        );
        group.bench_with_input(
            BenchmarkId::new("document_pretty", paragraphs),
            &document,
            |b, document| b.iter(|| document.render(true)),
        );
    }

    group.finish();
}

fn bench_build_lists(c: &mut Criterion) {
    let html = HtmlFactory::default();
    let items: Vec<String> = (0..100).map(|i| format!("item {i}")).collect();
    let limited = InlineListOptions::default().with_limit(10);

    c.bench_function("build_ulist_100", |b| {
        b.iter(|| html.ulist(Some(items.iter()), None));
    });

    c.bench_function("build_ilist_100_limit_10", |b| {
        b.iter(|| {
            html.ilist_with(
                Some(items.iter()),
                tagged_markup::list::passthrough,
                Some(&limited),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_deferred,
    bench_render_varying_sizes,
    bench_build_lists
);
criterion_main!(benches);
