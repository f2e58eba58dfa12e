use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::debug;

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, PolylinePrimitive, RenderFrame, Renderer, StrokeLineCap, StrokeLineJoin,
    TooltipPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
    /// Primitives left out because cairo cannot draw their geometry or style.
    pub primitives_skipped: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango raster backend.
///
/// Cairo enters a sticky error state on `NaN` coordinates, so each primitive is
/// checked on its own and non-finite ones are skipped. The series path is
/// broken at non-finite points instead of being dropped whole.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(1.0, 1.0, 1.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface as PNG.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        if !frame.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: frame.viewport.width,
                height: frame.viewport.height,
            });
        }

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            if line.validate().is_err() {
                stats.primitives_skipped += 1;
                continue;
            }
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for polyline in &frame.polylines {
            if draw_polyline(context, polyline)? {
                stats.polylines_drawn += 1;
            } else {
                stats.primitives_skipped += 1;
            }
        }

        for circle in &frame.circles {
            if circle.validate().is_err() {
                stats.primitives_skipped += 1;
                continue;
            }
            apply_color(context, circle.fill);
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            if text.validate().is_err() {
                stats.primitives_skipped += 1;
                continue;
            }
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            apply_color(context, text.color);
            context.move_to(text.x, text.y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        if let Some(tooltip) = &frame.tooltip {
            if tooltip.validate().is_ok() {
                draw_tooltip(context, tooltip)?;
                stats.tooltip_drawn = true;
            } else {
                stats.primitives_skipped += 1;
            }
        }

        if stats.primitives_skipped > 0 {
            debug!(
                skipped = stats.primitives_skipped,
                "cairo pass skipped non-drawable primitives"
            );
        }
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Strokes every run of consecutive finite points; returns whether anything
/// was stroked.
fn draw_polyline(context: &Context, polyline: &PolylinePrimitive) -> ChartResult<bool> {
    let style_ok = polyline.stroke_width.is_finite()
        && polyline.stroke_width > 0.0
        && polyline.color.validate().is_ok();
    let mut runs = finite_runs(&polyline.points).peekable();
    if !style_ok || runs.peek().is_none() {
        return Ok(false);
    }

    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context.set_line_cap(map_line_cap(polyline.line_cap));
    context.set_line_join(map_line_join(polyline.line_join));
    for run in runs {
        context.move_to(run[0].x, run[0].y);
        for point in &run[1..] {
            context.line_to(point.x, point.y);
        }
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
    Ok(true)
}

fn finite_runs(points: &[PlotPoint]) -> impl Iterator<Item = &[PlotPoint]> {
    points
        .split(|point| !point.is_finite())
        .filter(|run| run.len() >= 2)
}

fn draw_tooltip(context: &Context, tooltip: &TooltipPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description =
        FontDescription::from_string(&format!("Sans {}px", tooltip.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&tooltip.text);
    let (text_width, text_height) = layout.pixel_size();

    let border = tooltip.border_width.max(0.0);
    let line_box = tooltip.font_size_px * tooltip.line_height;
    let box_width = f64::from(text_width) + tooltip.padding_x * 2.0 + border * 2.0;
    let box_height = line_box + border * 2.0;
    let left = tooltip.left + box_width * tooltip.translate_x_ratio;
    let top = tooltip.top;

    append_rounded_rect_path(context, left, top, box_width, box_height, tooltip.border_radius);
    apply_color(context, tooltip.background);
    if border > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill tooltip", err))?;
        apply_color(context, tooltip.border_color);
        context.set_line_width(border);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke tooltip border", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill tooltip", err))?;
    }

    apply_color(context, tooltip.text_color);
    let text_top = top + border + (line_box - f64::from(text_height)) / 2.0;
    context.move_to(left + border + tooltip.padding_x, text_top);
    pangocairo::functions::show_layout(context, &layout);
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_line_cap(cap: StrokeLineCap) -> LineCap {
    match cap {
        StrokeLineCap::Butt => LineCap::Butt,
        StrokeLineCap::Round => LineCap::Round,
        StrokeLineCap::Square => LineCap::Square,
    }
}

fn map_line_join(join: StrokeLineJoin) -> LineJoin {
    match join {
        StrokeLineJoin::Miter => LineJoin::Miter,
        StrokeLineJoin::Round => LineJoin::Round,
        StrokeLineJoin::Bevel => LineJoin::Bevel,
    }
}

fn append_rounded_rect_path(
    context: &Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    corner_radius: f64,
) {
    if corner_radius <= 0.0 {
        context.rectangle(x, y, width, height);
        return;
    }

    let radius = corner_radius.min(width * 0.5).min(height * 0.5);
    let right = x + width;
    let bottom = y + height;

    context.new_sub_path();
    context.arc(right - radius, y + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(x + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(x + radius, y + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
