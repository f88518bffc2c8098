use criterion::{Criterion, criterion_group, criterion_main};
use interval_chart::api::{ChartEngine, ChartEngineConfig, project_whiskers};
use interval_chart::core::{IntervalSeries, Viewport};
use interval_chart::render::NullRenderer;
use std::hint::black_box;

fn generated_series(count: usize) -> IntervalSeries {
    let mut series = IntervalSeries::new();
    for i in 0..count {
        let mean = (i as f64 * 0.37).sin() * 10.0;
        let half_width = 1.0 + (i % 7) as f64 * 0.25;
        series.add_interval(
            format!("r{i}"),
            mean,
            mean + half_width,
            mean - half_width,
            i % 5 == 0,
        );
    }
    series
}

fn bench_whisker_projection_10k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080));
    let mut chart =
        ChartEngine::interval_chart(NullRenderer::default(), config).expect("engine init");
    let series = generated_series(10_000);
    for record in series.iter() {
        chart.update_plot(|plot| plot.push(record.clone()));
    }
    let transform = chart.coordinate_transform().expect("transform");

    c.bench_function("whisker_projection_10k", |b| {
        b.iter(|| {
            let _ = project_whiskers(black_box(chart.intervals()), black_box(&transform));
        })
    });
}

fn bench_interval_frame_build_500(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut chart =
        ChartEngine::interval_chart(NullRenderer::default(), config).expect("engine init");
    for record in generated_series(500).iter() {
        chart.add_interval(
            record.label.clone(),
            record.mean,
            record.upper,
            record.lower,
            record.emphasized,
        );
    }

    c.bench_function("interval_frame_build_500", |b| {
        b.iter(|| {
            let _ = chart.build_render_frame().expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_whisker_projection_10k,
    bench_interval_frame_build_500
);
criterion_main!(benches);
