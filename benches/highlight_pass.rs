//! Highlight pass micro-benchmarks
//!
//! Measures section lookup and a full debounced sidebar pass on long pages.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wayfinder::{
    HeadingEntry, ManualScheduler, MemoryDocument, MemoryElement, MemoryViewport, NavConfig,
    SidebarController, current_section,
};

const SECTION_HEIGHT: f64 = 420.0;

fn headings(count: usize) -> Vec<HeadingEntry> {
    (0..count)
        .map(|i| HeadingEntry::new(format!("section-{}", i), i as f64 * SECTION_HEIGHT))
        .collect()
}

fn bench_current_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("current_section");
    for count in [10, 100, 1000] {
        let entries = headings(count);
        let middle = count as f64 * SECTION_HEIGHT / 2.0;
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| current_section(black_box(entries), black_box(middle), 100.0))
        });
    }
    group.finish();
}

fn bench_scroll_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_pass");
    for count in [10, 100, 1000] {
        let config = NavConfig::default();
        let heading_elements: Vec<_> = (0..count)
            .map(|i| MemoryElement::heading(format!("section-{}", i), i as f64 * SECTION_HEIGHT))
            .collect();
        let links: Vec<_> = (0..count)
            .map(|i| MemoryElement::with_attribute("href", format!("#section-{}", i)))
            .collect();
        let document = MemoryDocument::new()
            .with(config.sidebar_selector.clone(), vec![MemoryElement::new()])
            .with(config.link_selector.clone(), links)
            .with(config.heading_selector.clone(), heading_elements);
        let viewport = MemoryViewport::new(1280.0);
        let scheduler = ManualScheduler::new();
        let delay = config.debounce_delay();
        let Some(controller) =
            SidebarController::attach(&document, viewport.clone(), scheduler.clone(), config)
        else {
            continue;
        };

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 613.0) % (count as f64 * SECTION_HEIGHT);
                viewport.set_scroll_y(y);
                controller.on_scroll();
                scheduler.advance(delay);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_current_section, bench_scroll_pass);
criterion_main!(benches);
