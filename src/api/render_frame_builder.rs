use crate::core::{PlotPoint, ValueScale, format_number};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextPrimitive,
    TooltipPrimitive,
};

use super::{ActivePoint, Sparkline, SparklineConfig};

pub const AXIS_STROKE_WIDTH: f64 = 1.0;
pub const AXIS_LABEL_FONT_SIZE: f64 = 10.0;
/// Baseline of the max label, measured from the top edge.
pub const MAX_LABEL_BASELINE_Y: f64 = 10.0;
/// Baseline of the min label, measured up from the bottom edge.
pub const MIN_LABEL_BOTTOM_OFFSET: f64 = 2.0;

pub const TOOLTIP_LINE_HEIGHT: f64 = 1.2;
/// Tooltip sits this many font sizes above the marker's top edge.
pub const TOOLTIP_RISE_FACTOR: f64 = 1.3;
pub const TOOLTIP_BORDER_WIDTH: f64 = 1.0;
pub const TOOLTIP_BORDER_RADIUS: f64 = 1.0;

fn tooltip_background() -> Color {
    Color::from_rgba8(255, 255, 255, 0.8)
}

fn tooltip_border() -> Color {
    Color::from_rgba8(0xDD, 0xDD, 0xDD, 1.0)
}

impl<R: Renderer> Sparkline<R> {
    /// Materializes the scene for the current series, styling and highlight.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let scale = self.value_scale();
        let points = self.points();
        let mut frame = with_axis_lines(RenderFrame::new(self.config.viewport()), self.config)
            .with_polyline(series_polyline(points.clone(), self.config));
        let active = self.interaction.active_index().and_then(|index| {
            Some(ActivePoint {
                index,
                value: *self.series.get(index)?,
                point: *points.get(index)?,
            })
        });
        if let Some(active) = active {
            frame = frame.with_circle(active_marker(active.point, self.config));
        }
        frame = with_extreme_labels(frame, scale, self.config);
        if let Some(active) = active {
            frame = frame.with_tooltip(value_tooltip(active, self.config));
        }

        frame
    }
}

fn series_polyline(points: Vec<PlotPoint>, config: SparklineConfig) -> PolylinePrimitive {
    PolylinePrimitive::new(points, config.stroke_width, config.stroke_color)
}

fn with_axis_lines(frame: RenderFrame, config: SparklineConfig) -> RenderFrame {
    let (width, height) = (config.width, config.height);
    frame
        .with_line(LinePrimitive::new(
            0.0,
            0.0,
            0.0,
            height,
            AXIS_STROKE_WIDTH,
            Color::BLACK,
        ))
        .with_line(LinePrimitive::new(
            0.0,
            height,
            width,
            height,
            AXIS_STROKE_WIDTH,
            Color::BLACK,
        ))
}

fn with_extreme_labels(frame: RenderFrame, scale: ValueScale, config: SparklineConfig) -> RenderFrame {
    frame
        .with_text(TextPrimitive::new(
            format_number(scale.max()),
            0.0,
            MAX_LABEL_BASELINE_Y,
            AXIS_LABEL_FONT_SIZE,
            Color::BLACK,
        ))
        .with_text(TextPrimitive::new(
            format_number(scale.min()),
            0.0,
            config.height - MIN_LABEL_BOTTOM_OFFSET,
            AXIS_LABEL_FONT_SIZE,
            Color::BLACK,
        ))
}

fn active_marker(point: PlotPoint, config: SparklineConfig) -> CirclePrimitive {
    CirclePrimitive::new(
        point.x,
        point.y,
        config.active_point_radius,
        config.active_point_color,
    )
}

fn value_tooltip(active: ActivePoint, config: SparklineConfig) -> TooltipPrimitive {
    let font_size = config.label_font_size;
    TooltipPrimitive {
        text: format_number(active.value),
        left: active.point.x,
        top: active.point.y - font_size * TOOLTIP_RISE_FACTOR - config.active_point_radius,
        translate_x_ratio: -0.5,
        font_size_px: font_size,
        line_height: TOOLTIP_LINE_HEIGHT,
        padding_x: font_size / 5.0,
        text_color: config.stroke_color,
        background: tooltip_background(),
        border_color: tooltip_border(),
        border_width: TOOLTIP_BORDER_WIDTH,
        border_radius: TOOLTIP_BORDER_RADIUS,
    }
}
