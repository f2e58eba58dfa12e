use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::PlotPoint;
use crate::interaction::HoverMissBehavior;
use crate::render::Renderer;

use super::Sparkline;

/// Highlighted sample with its original value and laid-out position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePoint {
    pub index: usize,
    pub value: f64,
    pub point: PlotPoint,
}

impl<R: Renderer> Sparkline<R> {
    /// Handles pointer movement at `offset_x` pixels from the left edge of the
    /// drawing surface. Returns `true` when the highlight changed.
    pub fn pointer_move(&mut self, offset_x: f64) -> bool {
        let points = self.points();
        let changed = self
            .interaction
            .on_pointer_move(offset_x, &points, self.config.width);
        trace!(offset_x, changed, "sparkline pointer move");
        if changed {
            debug!(
                active_index = ?self.interaction.active_index(),
                "sparkline active point changed"
            );
        }
        changed
    }

    /// Handles the pointer leaving the widget. Returns `true` when a highlight
    /// was cleared.
    pub fn pointer_leave(&mut self) -> bool {
        let cleared = self.interaction.on_pointer_leave();
        trace!(cleared, "sparkline pointer leave");
        cleared
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.interaction.active_index()
    }

    #[must_use]
    pub fn active_point(&self) -> Option<ActivePoint> {
        let index = self.interaction.active_index()?;
        let value = *self.series.get(index)?;
        let point = *self.points().get(index)?;
        Some(ActivePoint {
            index,
            value,
            point,
        })
    }

    #[must_use]
    pub fn hover_miss_behavior(&self) -> HoverMissBehavior {
        self.interaction.miss_behavior()
    }

    pub fn set_hover_miss_behavior(&mut self, behavior: HoverMissBehavior) {
        self.config.hover_miss_behavior = behavior;
        self.interaction.set_miss_behavior(behavior);
    }
}
