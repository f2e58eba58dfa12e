use std::fmt::{self, Write};

use crate::core::{PlotPoint, format_number};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, TooltipPrimitive};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const TRANSITION_STYLE: &str = "transition:all 0.3s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Markup renderer producing an inline SVG element and an HTML fragment.
///
/// - `svg()` holds the vector drawing alone.
/// - `html()` wraps it in an inline-block, relatively positioned `div` and
///   appends the tooltip as an absolutely positioned `span`.
///
/// Coordinates are written as-is: `NaN` or `Infinity` in the scene shows up
/// verbatim in the markup.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    transitions: bool,
    svg: String,
    html: String,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            transitions: true,
            svg: String::new(),
            html: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }

    /// Toggles the CSS transition attached to the surface and series line.
    #[must_use]
    pub fn with_transitions(mut self, enabled: bool) -> Self {
        self.transitions = enabled;
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn svg(&self) -> &str {
        &self.svg
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_svg(&self, out: &mut String, frame: &RenderFrame) -> Result<SvgRenderStats, fmt::Error> {
        let width = format_number(frame.viewport.width);
        let height = format_number(frame.viewport.height);
        let mut stats = SvgRenderStats::default();

        write!(
            out,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{width}" height="{height}" viewBox="0 0 {width} {height}" preserveAspectRatio="none" style="{}display:block">"#,
            self.transition_prefix()
        )?;

        for line in &frame.lines {
            write!(
                out,
                r#"<polyline points="{},{} {},{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                format_number(line.x1),
                format_number(line.y1),
                format_number(line.x2),
                format_number(line.y2),
                line.color,
                format_number(line.stroke_width),
            )?;
            stats.lines_drawn += 1;
        }

        for polyline in &frame.polylines {
            out.push_str("<polyline");
            if self.transitions {
                write!(out, r#" style="{TRANSITION_STYLE}""#)?;
            }
            write!(
                out,
                r#" points="{}" stroke-linecap="{}" stroke-linejoin="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                points_attribute(&polyline.points),
                polyline.line_cap.as_svg(),
                polyline.line_join.as_svg(),
                polyline.color,
                format_number(polyline.stroke_width),
            )?;
            stats.polylines_drawn += 1;
        }

        for circle in &frame.circles {
            write!(
                out,
                r#"<circle fill="{}" cx="{}" cy="{}" r="{}"/>"#,
                circle.fill,
                format_number(circle.cx),
                format_number(circle.cy),
                format_number(circle.radius),
            )?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            write!(
                out,
                r#"<text x="{}" y="{}" stroke="{}" text-anchor="start" style="font-size:{}px">{}</text>"#,
                format_number(text.x),
                format_number(text.y),
                text.color,
                format_number(text.font_size_px),
                escape_markup(&text.text),
            )?;
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>");
        Ok(stats)
    }

    fn transition_prefix(&self) -> String {
        if self.transitions {
            format!("{TRANSITION_STYLE};")
        } else {
            String::new()
        }
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let mut svg = String::new();
        let mut stats = self.write_svg(&mut svg, frame).map_err(map_write_error)?;

        let mut html = String::new();
        html.push_str(r#"<div style="display:inline-block;position:relative">"#);
        html.push_str(&svg);
        if let Some(tooltip) = &frame.tooltip {
            write_tooltip(&mut html, tooltip).map_err(map_write_error)?;
            stats.tooltip_drawn = true;
        }
        html.push_str("</div>");

        self.svg = svg;
        self.html = html;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_tooltip(out: &mut String, tooltip: &TooltipPrimitive) -> fmt::Result {
    write!(
        out,
        concat!(
            r#"<span style="font-size:{}px;border:{}px solid {};line-height:{};"#,
            r#"padding:0 {}px;border-radius:{}px;transform:translateX({}%);"#,
            r#"background-color:{};color:{};position:absolute;user-select:none;"#,
            r#"top:{}px;left:{}px">{}</span>"#,
        ),
        format_number(tooltip.font_size_px),
        format_number(tooltip.border_width),
        tooltip.border_color,
        format_number(tooltip.line_height),
        format_number(tooltip.padding_x),
        format_number(tooltip.border_radius),
        format_number(tooltip.translate_x_ratio * 100.0),
        tooltip.background,
        tooltip.text_color,
        format_number(tooltip.top),
        format_number(tooltip.left),
        escape_markup(&tooltip.text),
    )
}

fn points_attribute(points: &[PlotPoint]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", format_number(point.x), format_number(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn map_write_error(err: fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg markup: {err}"))
}
