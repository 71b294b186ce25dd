//! Per-frame cost of the carousel engine.

#![allow(missing_docs)]

use std::hint::black_box;

use carousel::carousel::resolve;
use carousel::catalog::{ModelCatalog, ModelEntry};
use carousel::input::{PointerEvent, PointerId};
use carousel::options::{LayoutOptions, Options};
use carousel::util::frame::Frame;
use carousel::Carousel;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn catalog(count: usize) -> ModelCatalog {
    let models = (0..count)
        .map(|i| ModelEntry::new(format!("/models/m{i}.glb"), format!("model {i}")))
        .collect();
    ModelCatalog::new(models).unwrap_or_default()
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_tick");
    for count in [3_usize, 12, 64] {
        let _ = group.bench_with_input(BenchmarkId::new("animating", count), &count, |b, &n| {
            let mut carousel = Carousel::new(catalog(n), Options::default());
            let mut now = 0.0;
            b.iter(|| {
                if carousel.state().animation().is_none() {
                    let _ = carousel.next();
                }
                now += 16.0;
                black_box(carousel.tick(Frame::at(now, 0.016)))
            });
        });
        let _ = group.bench_with_input(BenchmarkId::new("dragging", count), &count, |b, &n| {
            let mut carousel = Carousel::new(catalog(n), Options::default());
            let id = PointerId(1);
            carousel.handle_pointer(PointerEvent::down(id, 0.0, 0.0, 0.0));
            let mut now = 0.0;
            b.iter(|| {
                now += 16.0;
                let x = (now * 0.1).sin() as f32 * 200.0;
                carousel.handle_pointer(PointerEvent::moved(id, x, 0.0, now));
                black_box(carousel.tick(Frame::at(now, 0.016)))
            });
        });
    }
    group.finish();
}

fn layout_benchmark(c: &mut Criterion) {
    let models = catalog(64);
    let options = LayoutOptions::default();
    let _ = c.bench_function("resolve_layout_64", |b| {
        b.iter(|| black_box(resolve(black_box(models.entries()), &options)));
    });
}

criterion_group!(benches, tick_benchmark, layout_benchmark);
criterion_main!(benches);
