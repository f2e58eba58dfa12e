use serde::{Deserialize, Serialize};

use crate::core::{LayoutGeometry, Padding, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverMissBehavior;
use crate::render::Color;

pub const DEFAULT_WIDTH: f64 = 100.0;
pub const DEFAULT_HEIGHT: f64 = 50.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;
pub const DEFAULT_ACTIVE_POINT_RADIUS: f64 = 3.0;
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 14.0;

/// `#039BE5`
pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(3.0 / 255.0, 155.0 / 255.0, 229.0 / 255.0);

/// Styling options of one sparkline.
///
/// Values are checked by type only; out-of-range sizes are passed through to
/// the layout unchanged. Serializable so hosts can keep widget presets in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparklineConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_series_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_active_point_radius")]
    pub active_point_radius: f64,
    #[serde(default = "default_series_color")]
    pub active_point_color: Color,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
    #[serde(default)]
    pub hover_miss_behavior: HoverMissBehavior,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            stroke_color: DEFAULT_SERIES_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            padding: Padding::default(),
            active_point_radius: DEFAULT_ACTIVE_POINT_RADIUS,
            active_point_color: DEFAULT_SERIES_COLOR,
            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            hover_miss_behavior: HoverMissBehavior::default(),
        }
    }
}

impl SparklineConfig {
    /// Default styling with an explicit canvas size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_active_point(mut self, color: Color, radius: f64) -> Self {
        self.active_point_color = color;
        self.active_point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_hover_miss_behavior(mut self, behavior: HoverMissBehavior) -> Self {
        self.hover_miss_behavior = behavior;
        self
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn layout_geometry(self) -> LayoutGeometry {
        LayoutGeometry {
            viewport: self.viewport(),
            padding: self.padding,
            stroke_width: self.stroke_width,
            active_point_radius: self.active_point_radius,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse sparkline config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize sparkline config: {e}"))
        })
    }
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_series_color() -> Color {
    DEFAULT_SERIES_COLOR
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_active_point_radius() -> f64 {
    DEFAULT_ACTIVE_POINT_RADIUS
}

fn default_label_font_size() -> f64 {
    DEFAULT_LABEL_FONT_SIZE
}
