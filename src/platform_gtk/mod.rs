use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{Sparkline, SparklineConfig};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

/// Shared handle used by GTK signal closures on the UI thread.
pub type SharedSparkline = Rc<RefCell<Sparkline<CairoRenderer>>>;

/// `DrawingArea` host for a sparkline.
///
/// Pointer motion and leave events from an `EventControllerMotion` drive the
/// highlight; the area is redrawn only when the highlight actually changes.
pub struct GtkSparkline {
    area: gtk::DrawingArea,
    sparkline: SharedSparkline,
}

impl GtkSparkline {
    pub fn new(config: SparklineConfig, series: Vec<f64>) -> ChartResult<Self> {
        let renderer = CairoRenderer::new(surface_extent(config.width), surface_extent(config.height))?;
        let sparkline = Rc::new(RefCell::new(Sparkline::with_series(
            renderer, config, series,
        )));

        let area = gtk::DrawingArea::new();
        area.set_content_width(surface_extent(config.width));
        area.set_content_height(surface_extent(config.height));

        let draw_target = Rc::clone(&sparkline);
        area.set_draw_func(move |_area, context, _width, _height| {
            if let Err(err) = draw_target.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "skipping sparkline draw");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let move_target = Rc::clone(&sparkline);
        let move_area = area.downgrade();
        motion.connect_motion(move |_controller, x, _y| {
            let changed = move_target.borrow_mut().pointer_move(x);
            if changed {
                if let Some(area) = move_area.upgrade() {
                    area.queue_draw();
                }
            }
        });
        let leave_target = Rc::clone(&sparkline);
        let leave_area = area.downgrade();
        motion.connect_leave(move |_controller| {
            let cleared = leave_target.borrow_mut().pointer_leave();
            if cleared {
                if let Some(area) = leave_area.upgrade() {
                    area.queue_draw();
                }
            }
        });
        area.add_controller(motion);

        Ok(Self { area, sparkline })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn sparkline(&self) -> SharedSparkline {
        Rc::clone(&self.sparkline)
    }

    pub fn set_series(&self, series: Vec<f64>) {
        self.sparkline.borrow_mut().set_series(series);
        self.area.queue_draw();
    }

    pub fn set_config(&self, config: SparklineConfig) -> ChartResult<()> {
        let renderer =
            CairoRenderer::new(surface_extent(config.width), surface_extent(config.height))?;
        {
            let mut sparkline = self.sparkline.borrow_mut();
            *sparkline.renderer_mut() = renderer;
            sparkline.set_config(config);
        }
        self.area.set_content_width(surface_extent(config.width));
        self.area.set_content_height(surface_extent(config.height));
        self.area.queue_draw();
        Ok(())
    }
}

fn surface_extent(size: f64) -> i32 {
    if size.is_finite() && size >= 1.0 {
        size.ceil().min(f64::from(i32::MAX)) as i32
    } else {
        1
    }
}
