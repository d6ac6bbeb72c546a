//! Criterion microbenches for linkmap resolution and rendering.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Configuration JSON parsing (from_json_str)
//! - Area resolution (resolve_areas)
//! - Published markup rendering (render_areas_div)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use linkmap::model::io_json::from_json_str;
use linkmap::model::{Area, Configuration, FileId};
use linkmap::render::render_areas_div;
use linkmap::resolve::resolve_areas;

// Include test fixtures at compile time (no file I/O during benchmark)
const CONFIG_FIXTURE: &str = include_str!("../tests/fixtures/sample_valid.json");

/// A page with many masked and unmasked areas.
fn busy_page(areas: usize) -> Configuration {
    let mut config = Configuration::new();
    config.hover_image_id = Some(FileId(5));
    config.visited_image_id = Some(FileId(6));
    config.masked_hover_image_id = Some(FileId(9));
    config.color_map_file_id = Some(FileId(3));

    for i in 0..areas {
        let offset = (i % 10) as f64 * 9.0;
        let area = Area::new(offset, offset, 8.0, 8.0);
        let area = if i % 2 == 0 {
            area.with_page_target(i as u64, Some("fade"))
                .with_color_map_component(format!("3:c{}", i))
        } else {
            area.with_audio_target(i as u64)
        };
        config.areas.push(area);
    }
    config
}

/// Benchmark configuration JSON parsing.
fn bench_config_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_parse");
    group.throughput(Throughput::Bytes(CONFIG_FIXTURE.len() as u64));

    group.bench_function("from_json_str", |b| {
        b.iter(|| {
            let config = from_json_str(black_box(CONFIG_FIXTURE)).unwrap();
            black_box(config)
        })
    });

    group.finish();
}

/// Benchmark resolving every area of a page.
fn bench_resolve(c: &mut Criterion) {
    let config = busy_page(200);

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(config.areas.len() as u64));

    group.bench_function("resolve_areas", |b| {
        b.iter(|| {
            let attrs = resolve_areas(black_box(&config));
            black_box(attrs)
        })
    });

    group.finish();
}

/// Benchmark rendering the published areas markup.
fn bench_render(c: &mut Criterion) {
    let config = busy_page(200);

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(config.areas.len() as u64));

    group.bench_function("render_areas_div", |b| {
        b.iter(|| {
            let html = render_areas_div(black_box(&config));
            black_box(html)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_config_parse, bench_resolve, bench_render);
criterion_main!(benches);
