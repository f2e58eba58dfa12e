use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsl, Srgb};

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Parses CSS color text (hex, every CSS named color, `transparent`, `rgb()`,
/// `rgba()`, `hsl()`, `hsla()` in legacy comma or space/slash syntax) and
/// prints `#rrggbb` when opaque, `rgba(...)` otherwise.
///
/// `currentColor` is rejected: it has no value outside a CSS cascade.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 0..=255 channels and a 0..=1 alpha.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = self.to_rgb8();
        if self.alpha >= 1.0 {
            write!(f, "#{red:02X}{green:02X}{blue:02X}")
        } else {
            write!(f, "rgba({red},{green},{blue},{})", self.alpha)
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let text = input.trim();
        let invalid = || ChartError::InvalidColor(input.to_owned());

        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        let lower = text.to_ascii_lowercase();
        if let Some((function, rest)) = lower.split_once('(') {
            let body = rest.strip_suffix(')').ok_or_else(invalid)?;
            return parse_functional(function.trim_end(), body).ok_or_else(invalid);
        }
        named_color(&lower).ok_or_else(invalid)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_owned(),
        _ => return None,
    };
    let byte = |index: usize| u8::from_str_radix(&expanded[index..index + 2], 16).ok();
    let alpha = if expanded.len() == 8 {
        f64::from(byte(6)?) / 255.0
    } else {
        1.0
    };
    Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
}

fn parse_functional(function: &str, body: &str) -> Option<Color> {
    let ([first, second, third], alpha) = split_color_arguments(body)?;
    let alpha = match alpha {
        Some(text) => parse_unit_interval(text)?,
        None => 1.0,
    };
    match function {
        "rgb" | "rgba" => Some(Color::rgba(
            parse_rgb_channel(first)?,
            parse_rgb_channel(second)?,
            parse_rgb_channel(third)?,
            alpha,
        )),
        "hsl" | "hsla" => {
            let hsl = Hsl::<palette::encoding::Srgb, f64>::new(
                parse_hue_degrees(first)?,
                parse_unit_interval(second)?,
                parse_unit_interval(third)?,
            );
            let rgb = Srgb::<f64>::from_color(hsl);
            Some(Color::rgba(
                rgb.red.clamp(0.0, 1.0),
                rgb.green.clamp(0.0, 1.0),
                rgb.blue.clamp(0.0, 1.0),
                alpha,
            ))
        }
        _ => None,
    }
}

/// Splits `a, b, c[, alpha]` or `a b c[ / alpha]` into three channels and an
/// optional alpha.
fn split_color_arguments(body: &str) -> Option<([&str; 3], Option<&str>)> {
    if body.contains(',') {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        return match parts.as_slice() {
            [a, b, c] => Some(([*a, *b, *c], None)),
            [a, b, c, alpha] => Some(([*a, *b, *c], Some(*alpha))),
            _ => None,
        };
    }

    let (channels, alpha) = match body.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (body, None),
    };
    let parts: Vec<&str> = channels.split_whitespace().collect();
    match parts.as_slice() {
        [a, b, c] => Some(([*a, *b, *c], alpha)),
        _ => None,
    }
}

fn parse_css_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// `0..=255` or a percentage, normalized to `0..=1`.
fn parse_rgb_channel(text: &str) -> Option<f64> {
    let value = match text.strip_suffix('%') {
        Some(percent) => parse_css_number(percent)? / 100.0,
        None => parse_css_number(text)? / 255.0,
    };
    Some(value.clamp(0.0, 1.0))
}

/// Alpha, saturation and lightness: a percentage or a bare `0..=1` number.
fn parse_unit_interval(text: &str) -> Option<f64> {
    let value = match text.strip_suffix('%') {
        Some(percent) => parse_css_number(percent)? / 100.0,
        None => parse_css_number(text)?,
    };
    Some(value.clamp(0.0, 1.0))
}

fn parse_hue_degrees(text: &str) -> Option<f64> {
    if let Some(value) = text.strip_suffix("deg") {
        return parse_css_number(value);
    }
    if let Some(value) = text.strip_suffix("grad") {
        return Some(parse_css_number(value)? * 0.9);
    }
    if let Some(value) = text.strip_suffix("rad") {
        return Some(parse_css_number(value)?.to_degrees());
    }
    if let Some(value) = text.strip_suffix("turn") {
        return Some(parse_css_number(value)? * 360.0);
    }
    parse_css_number(text)
}

fn named_color(name: &str) -> Option<Color> {
    if name == "transparent" {
        return Some(Color::rgba(0.0, 0.0, 0.0, 0.0));
    }
    let rgb = palette::named::from_str(name)?;
    Some(Color::from_rgba8(rgb.red, rgb.green, rgb.blue, 1.0))
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Draw command for one straight segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl StrokeLineCap {
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Miter,
    Round,
    Bevel,
}

impl StrokeLineJoin {
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Open, unfilled path through `points` in order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub points: Vec<PlotPoint>,
    pub stroke_width: f64,
    pub color: Color,
    pub line_cap: StrokeLineCap,
    pub line_join: StrokeLineJoin,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: Vec<PlotPoint>, stroke_width: f64, color: Color) -> Self {
        Self {
            points,
            stroke_width,
            color,
            line_cap: StrokeLineCap::Round,
            line_join: StrokeLineJoin::Round,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polyline points must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Draw command for one left-anchored label in pixel space; `y` is the text
/// baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        validate_font_size(self.font_size_px)?;
        self.color.validate()
    }
}

/// Floating value label drawn outside the vector surface.
///
/// `left`/`top` locate the box's top edge anchor; the box is shifted
/// horizontally by `translate_x_ratio` of its own width (`-0.5` centers it).
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPrimitive {
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub translate_x_ratio: f64,
    pub font_size_px: f64,
    pub line_height: f64,
    pub padding_x: f64,
    pub text_color: Color,
    pub background: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub border_radius: f64,
}

impl TooltipPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip position must be finite".to_owned(),
            ));
        }
        validate_font_size(self.font_size_px)?;
        if !self.padding_x.is_finite() || !self.border_width.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip box metrics must be finite".to_owned(),
            ));
        }
        self.text_color.validate()?;
        self.background.validate()?;
        self.border_color.validate()
    }
}

fn validate_stroke_width(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_font_size(font_size_px: f64) -> ChartResult<()> {
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
