use serde::{Deserialize, Serialize};

use crate::core::padding::Padding;
use crate::core::scale::{ValueScale, round_half_up};
use crate::core::types::{PlotPoint, Viewport};

/// Inputs that shape the point layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub viewport: Viewport,
    pub padding: Padding,
    pub stroke_width: f64,
    pub active_point_radius: f64,
}

impl LayoutGeometry {
    /// Horizontal inset kept free at both ends so neither the stroke nor the
    /// active marker is clipped.
    #[must_use]
    pub fn edge_inset(self) -> f64 {
        (self.stroke_width / 2.0).ceil().max(self.active_point_radius)
    }
}

/// Horizontal pixel position of sample `index` out of `len`.
///
/// A single-sample series divides by zero and yields `NaN`.
#[must_use]
pub fn point_x(index: usize, len: usize, width: f64, edge: f64) -> f64 {
    let step = (width - edge * 2.0) / (len as f64 - 1.0);
    edge + round_half_up(index as f64 * step)
}

/// Lays out `values` into pixel space.
///
/// Pure: the result depends only on the arguments and always has one point per
/// sample.
#[must_use]
pub fn layout_points(values: &[f64], geometry: LayoutGeometry) -> Vec<PlotPoint> {
    let scale = ValueScale::from_series(values, geometry.viewport, geometry.padding);
    layout_points_with_scale(values, geometry, scale)
}

#[must_use]
pub fn layout_points_with_scale(
    values: &[f64],
    geometry: LayoutGeometry,
    scale: ValueScale,
) -> Vec<PlotPoint> {
    let edge = geometry.edge_inset();
    let len = values.len();
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            PlotPoint::new(
                point_x(index, len, geometry.viewport.width, edge),
                scale.value_to_pixel(value),
            )
        })
        .collect()
}
