use tracing::{trace, warn};

use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::SparklineConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Sparkline widget facade consumed by host applications.
///
/// Owns the series, the styling and the hover state, and hands a fresh
/// `RenderFrame` to its renderer on every `render` call. Point layout is
/// recomputed from scratch each time it is needed; only the active index
/// survives between renders.
pub struct Sparkline<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: SparklineConfig,
    pub(super) series: Vec<f64>,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> Sparkline<R> {
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.log_degenerate_layout();
        trace!(
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            tooltip = frame.tooltip.is_some(),
            "render sparkline frame"
        );
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Used by GTK draw callbacks while keeping the renderer decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.log_degenerate_layout();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn log_degenerate_layout(&self) {
        if self.series.len() < 2 {
            warn!(
                len = self.series.len(),
                "series shorter than two samples; horizontal layout is undefined"
            );
        } else if self.value_scale().is_degenerate() {
            warn!("series range is zero or non-finite; vertical layout is undefined");
        }
    }
}
