use criterion::{Criterion, criterion_group, criterion_main};
use mini_chart::core::layout_points;
use mini_chart::render::{NullRenderer, SvgRenderer};
use mini_chart::{Sparkline, SparklineConfig};
use std::hint::black_box;

fn wave(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 25.0)
        .collect()
}

fn bench_layout_10k(c: &mut Criterion) {
    let values = wave(10_000);
    let geometry = SparklineConfig::new(1_920.0, 120.0).layout_geometry();

    c.bench_function("layout_points_10k", |b| {
        b.iter(|| {
            let _ = layout_points(black_box(&values), black_box(geometry));
        })
    });
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let mut sparkline = Sparkline::with_series(
        NullRenderer::default(),
        SparklineConfig::new(600.0, 80.0),
        wave(500),
    );

    c.bench_function("pointer_sweep_500", |b| {
        b.iter(|| {
            for offset in 0..600 {
                let _ = sparkline.pointer_move(black_box(f64::from(offset)));
            }
            sparkline.pointer_leave();
        })
    });
}

fn bench_svg_render_1k(c: &mut Criterion) {
    let mut sparkline = Sparkline::with_series(
        SvgRenderer::new(),
        SparklineConfig::new(800.0, 100.0),
        wave(1_000),
    );
    sparkline.pointer_move(400.0);

    c.bench_function("svg_render_1k", |b| {
        b.iter(|| {
            sparkline.render().expect("svg render");
        })
    });
}

criterion_group!(
    benches,
    bench_layout_10k,
    bench_pointer_sweep,
    bench_svg_render_1k
);
criterion_main!(benches);
