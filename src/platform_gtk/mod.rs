use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{ChartEngine, PlotSeries};
use crate::core::Viewport;
use crate::render::{CairoContextRenderer, Renderer};

/// Hosts a [`ChartEngine`] inside a GTK `DrawingArea`.
///
/// The engine lives on the GTK main thread. Mutations go through
/// [`GtkChartAdapter::update`], which queues a redraw whenever the engine
/// reports a pending invalidation.
pub struct GtkChartAdapter<P, R>
where
    P: PlotSeries + 'static,
    R: Renderer + CairoContextRenderer + 'static,
{
    engine: Rc<RefCell<ChartEngine<P, R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<P, R> GtkChartAdapter<P, R>
where
    P: PlotSeries + 'static,
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(engine: ChartEngine<P, R>) -> Self {
        let viewport = engine.viewport();
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let draw_engine = Rc::clone(&engine);
        drawing_area.set_draw_func(move |_area, context, width, height| {
            let mut engine = draw_engine.borrow_mut();
            if let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) {
                let viewport = Viewport::new(width, height);
                if viewport.is_valid() && viewport != engine.viewport() {
                    if let Err(err) = engine.set_viewport(viewport) {
                        warn!(error = %err, width, height, "skipping chart draw after resize");
                        return;
                    }
                }
            }
            if let Err(err) = engine.render_on_cairo_context(context) {
                warn!(error = %err, "chart draw failed");
            }
        });

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Runs `mutate` against the engine and queues a redraw when it left a
    /// pending invalidation behind.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut ChartEngine<P, R>) -> T) -> T {
        let (output, needs_draw) = {
            let mut engine = self.engine.borrow_mut();
            let output = mutate(&mut engine);
            (output, engine.pending_invalidation().is_pending())
        };
        if needs_draw {
            self.drawing_area.queue_draw();
        }
        output
    }

    /// Read-only access to the hosted engine.
    pub fn with_engine<T>(&self, read: impl FnOnce(&ChartEngine<P, R>) -> T) -> T {
        read(&self.engine.borrow())
    }
}
