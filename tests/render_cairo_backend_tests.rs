#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use interval_chart::ChartError;
use interval_chart::api::{ChartEngine, ChartEngineConfig};
use interval_chart::core::Viewport;
use interval_chart::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_interval_glyphs_and_labels() {
    let renderer = CairoRenderer::new(800, 400).expect("renderer");
    let config = ChartEngineConfig::new(Viewport::new(800, 400));
    let mut chart = ChartEngine::interval_chart(renderer, config).expect("engine init");
    chart.add_interval("A", 1.0, 2.0, 0.0, false);
    chart.add_interval("B", 3.0, 4.0, 2.0, true);

    chart.render().expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.lines_drawn, 19);
    assert_eq!(stats.texts_drawn, 7);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let config = ChartEngineConfig::new(Viewport::new(600, 320));
    let mut chart = ChartEngine::interval_chart(renderer, config).expect("engine init");
    chart.add_interval("X", 5.0, 5.0, 5.0, false);

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on context");

    assert!(chart.last_frame().is_some());
    assert!(chart.renderer().last_stats().lines_drawn >= 5);
}
