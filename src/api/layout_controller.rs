use crate::core::{PlotPoint, ValueScale, layout_points_with_scale};
use crate::render::Renderer;

use super::Sparkline;

impl<R: Renderer> Sparkline<R> {
    /// Vertical mapping for the current series and styling.
    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        ValueScale::from_series(&self.series, self.config.viewport(), self.config.padding)
    }

    /// Pixel position of every sample, recomputed on each call.
    #[must_use]
    pub fn points(&self) -> Vec<PlotPoint> {
        layout_points_with_scale(
            &self.series,
            self.config.layout_geometry(),
            self.value_scale(),
        )
    }

    #[must_use]
    pub fn edge_inset(&self) -> f64 {
        self.config.layout_geometry().edge_inset()
    }

    #[must_use]
    pub fn padding_px(&self) -> f64 {
        self.config.padding.resolve_px(self.config.height)
    }

    /// `true` when the layout cannot place points at finite coordinates:
    /// fewer than two samples or a zero/non-finite value range.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.series.len() < 2 || self.value_scale().is_degenerate()
    }
}
