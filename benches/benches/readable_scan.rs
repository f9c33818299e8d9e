// Copyright 2025 the Readable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use readable_hover::tracker::{HoverTracker, resolve_hover};
use readable_hover::window::Window;
use readable_page::{
    Element, NodeId, Page, QueryFilter, ReadableConfig, TextRun, line_height_of_first_line,
    top_level_readable_elements,
};

/// An article of `sections` sections, each wrapping `per_section` paragraphs of three lines.
fn gen_article(sections: usize, per_section: usize) -> Page {
    let mut page = Page::new();
    let root = page
        .insert_element(None, Element::new("DIV").with_id("content-1"))
        .unwrap();
    let mut y = 0.0;
    for s in 0..sections {
        let section = page.insert_element(Some(root), Element::new("SECTION")).unwrap();
        let heading = page.insert_element(Some(section), Element::new("H2")).unwrap();
        page.insert_text(heading, TextRun::new(format!("Section {s}")))
            .unwrap();
        for _ in 0..per_section {
            let p = page
                .insert_element(
                    Some(section),
                    Element::new("P").with_layout(Rect::new(0.0, y, 640.0, y + 72.0)),
                )
                .unwrap();
            page.insert_text(
                p,
                TextRun::new("lorem ipsum dolor sit amet ".repeat(8)).with_lines([
                    Rect::new(0.0, y, 640.0, y + 24.0),
                    Rect::new(0.0, y + 24.0, 640.0, y + 48.0),
                    Rect::new(0.0, y + 48.0, 320.0, y + 72.0),
                ]),
            )
            .unwrap();
            y += 96.0;
        }
    }
    page
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let config = ReadableConfig::default();
    for &(sections, per) in &[(4usize, 8usize), (16, 16), (64, 16)] {
        let page = gen_article(sections, per);
        group.throughput(Throughput::Elements((sections * per) as u64));
        group.bench_function(format!("top_level_s{sections}_p{per}"), |b| {
            b.iter(|| {
                let found = top_level_readable_elements(&page, &config).unwrap();
                black_box(found.len());
            });
        });
    }
    group.finish();
}

fn bench_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit");
    let page = gen_article(16, 16);
    let candidates = top_level_readable_elements(&page, &ReadableConfig::default()).unwrap();
    let last = *candidates.last().unwrap();
    group.bench_function("resolve_last_candidate", |b| {
        b.iter(|| {
            let pt = Point::new(10.0, 255.0 * 96.0 + 10.0);
            black_box(resolve_hover(&page, &candidates, pt, QueryFilter::default()));
        });
    });
    group.bench_function("resolve_miss", |b| {
        b.iter(|| {
            black_box(resolve_hover(
                &page,
                &candidates,
                Point::new(-5.0, -5.0),
                QueryFilter::default(),
            ));
        });
    });
    group.bench_function("first_line_height", |b| {
        b.iter(|| black_box(line_height_of_first_line(&page, last)));
    });
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.bench_function("pointer_move_100", |b| {
        b.iter_batched(
            || {
                let page = gen_article(16, 16);
                let found = top_level_readable_elements(&page, &ReadableConfig::default()).unwrap();
                let candidates: Rc<[NodeId]> = found.into();
                (Window::new(page), candidates)
            },
            |(mut window, candidates)| {
                let mut tracker = HoverTracker::new();
                let _ = tracker.hovered_paragraph_coordinate(&mut window, &candidates);
                for i in 0..100 {
                    window.pointer_move_page(Point::new(20.0, i as f64 * 37.0));
                }
                black_box(tracker.hovered());
                tracker.unmount(&mut window);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_extract, bench_hit, bench_dispatch);
criterion_main!(benches);
