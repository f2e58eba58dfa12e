use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;

/// What a pointer move that misses every capture band does to the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HoverMissBehavior {
    /// Keep the previous active point; the highlight sticks past the last band.
    #[default]
    Retain,
    /// Drop the highlight as soon as the pointer leaves every band.
    Clear,
}

/// Half-width of the capture band around each point.
///
/// `floor(width / (len - 1) / 2)`; infinite for a single sample and `NaN` for
/// an empty series or a zero-width single-sample canvas.
#[must_use]
pub fn capture_half_span(width: f64, len: usize) -> f64 {
    let span = width / (len as f64 - 1.0);
    (span / 2.0).floor()
}

/// First point, in index order, whose open capture band contains `offset_x`.
#[must_use]
pub fn find_captured_index(points: &[PlotPoint], offset_x: f64, width: f64) -> Option<usize> {
    let half_span = capture_half_span(width, points.len());
    points
        .iter()
        .position(|point| offset_x < point.x + half_span && offset_x > point.x - half_span)
}

/// Pointer-driven highlight state; the only state kept between renders.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    active_index: Option<usize>,
    miss_behavior: HoverMissBehavior,
}

impl InteractionState {
    #[must_use]
    pub fn active_index(self) -> Option<usize> {
        self.active_index
    }

    #[must_use]
    pub fn miss_behavior(self) -> HoverMissBehavior {
        self.miss_behavior
    }

    pub fn set_miss_behavior(&mut self, behavior: HoverMissBehavior) {
        self.miss_behavior = behavior;
    }

    /// Applies a pointer move at horizontal offset `offset_x` relative to the
    /// drawing surface. Returns `true` when the active index changed.
    pub fn on_pointer_move(&mut self, offset_x: f64, points: &[PlotPoint], width: f64) -> bool {
        let previous = self.active_index;
        match find_captured_index(points, offset_x, width) {
            Some(index) => self.active_index = Some(index),
            None => {
                if self.miss_behavior == HoverMissBehavior::Clear {
                    self.active_index = None;
                }
            }
        }
        previous != self.active_index
    }

    /// Returns `true` when a highlight was cleared.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.active_index.take().is_some()
    }

    /// Drops the highlight if it no longer indexes into `len` points.
    pub fn clamp_to_len(&mut self, len: usize) -> bool {
        match self.active_index {
            Some(index) if index >= len => {
                self.active_index = None;
                true
            }
            _ => false,
        }
    }
}
