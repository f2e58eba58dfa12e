use approx::assert_relative_eq;
use mini_chart::api::{AXIS_LABEL_FONT_SIZE, DEFAULT_SERIES_COLOR};
use mini_chart::core::PlotPoint;
use mini_chart::render::{Color, NullRenderer, StrokeLineCap, StrokeLineJoin};
use mini_chart::{Sparkline, SparklineConfig};

fn five_point_sparkline() -> Sparkline<NullRenderer> {
    Sparkline::with_series(
        NullRenderer::default(),
        SparklineConfig::default(),
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
    )
}

#[test]
fn static_frame_has_axes_series_and_extreme_labels() {
    let frame = five_point_sparkline().build_render_frame();

    assert_eq!(frame.lines.len(), 2);
    let vertical = frame.lines[0];
    assert_eq!(
        (vertical.x1, vertical.y1, vertical.x2, vertical.y2),
        (0.0, 0.0, 0.0, 50.0)
    );
    let horizontal = frame.lines[1];
    assert_eq!(
        (horizontal.x1, horizontal.y1, horizontal.x2, horizontal.y2),
        (0.0, 50.0, 100.0, 50.0)
    );
    assert!(frame.lines.iter().all(|line| line.color == Color::BLACK));

    assert_eq!(frame.polylines.len(), 1);
    let series = &frame.polylines[0];
    assert_eq!(series.points.len(), 5);
    assert_eq!(series.points[0], PlotPoint::new(3.0, 27.0));
    assert_eq!(series.color, DEFAULT_SERIES_COLOR);
    assert_relative_eq!(series.stroke_width, 1.5);
    assert_eq!(series.line_cap, StrokeLineCap::Round);
    assert_eq!(series.line_join, StrokeLineJoin::Round);

    assert_eq!(frame.texts.len(), 2);
    assert_eq!(frame.texts[0].text, "5");
    assert_eq!((frame.texts[0].x, frame.texts[0].y), (0.0, 10.0));
    assert_eq!(frame.texts[1].text, "1");
    assert_eq!((frame.texts[1].x, frame.texts[1].y), (0.0, 48.0));
    for text in &frame.texts {
        assert_relative_eq!(text.font_size_px, AXIS_LABEL_FONT_SIZE);
    }

    assert!(frame.circles.is_empty());
    assert!(frame.tooltip.is_none());
}

#[test]
fn axis_label_size_ignores_configured_label_font_size() {
    let config = SparklineConfig::default().with_label_font_size(30.0);
    let sparkline = Sparkline::with_series(NullRenderer::default(), config, vec![1.0, 2.0]);
    let frame = sparkline.build_render_frame();
    assert!(
        frame
            .texts
            .iter()
            .all(|text| text.font_size_px == AXIS_LABEL_FONT_SIZE)
    );
}

#[test]
fn active_point_adds_marker_and_tooltip() {
    let mut sparkline = five_point_sparkline();
    sparkline.pointer_move(50.0);
    let frame = sparkline.build_render_frame();

    assert_eq!(frame.circles.len(), 1);
    let marker = frame.circles[0];
    assert_eq!((marker.cx, marker.cy), (50.0, 10.0));
    assert_relative_eq!(marker.radius, 3.0);
    assert_eq!(marker.fill, DEFAULT_SERIES_COLOR);

    let tooltip = frame.tooltip.expect("tooltip");
    assert_eq!(tooltip.text, "3");
    assert_relative_eq!(tooltip.left, 50.0);
    assert_relative_eq!(tooltip.top, 10.0 - 14.0 * 1.3 - 3.0);
    assert_relative_eq!(tooltip.translate_x_ratio, -0.5);
    assert_relative_eq!(tooltip.padding_x, 2.8);
    assert_eq!(tooltip.text_color, DEFAULT_SERIES_COLOR);
    assert_relative_eq!(tooltip.background.alpha, 0.8);
}

#[test]
fn tooltip_uses_stroke_color_and_marker_uses_active_color() {
    let stroke: Color = "#ff0000".parse().expect("stroke color");
    let marker: Color = "#00ff00".parse().expect("marker color");
    let config = SparklineConfig::default()
        .with_stroke(stroke, 2.0)
        .with_active_point(marker, 5.0);
    let mut sparkline =
        Sparkline::with_series(NullRenderer::default(), config, vec![2.0, 4.0, 6.0]);
    sparkline.pointer_move(50.0);

    let frame = sparkline.build_render_frame();
    assert_eq!(frame.circles[0].fill, marker);
    assert_relative_eq!(frame.circles[0].radius, 5.0);
    let tooltip = frame.tooltip.expect("tooltip");
    assert_eq!(tooltip.text_color, stroke);
    assert_eq!(tooltip.text, "4");
}

#[test]
fn tooltip_shows_unscaled_fractional_value() {
    let mut sparkline = Sparkline::with_series(
        NullRenderer::default(),
        SparklineConfig::default(),
        vec![0.25, 1.5, 2.75],
    );
    sparkline.pointer_move(97.0);
    let frame = sparkline.build_render_frame();
    assert_eq!(frame.tooltip.expect("tooltip").text, "2.75");
}

#[test]
fn leave_removes_highlight_from_next_frame() {
    let mut sparkline = five_point_sparkline();
    sparkline.pointer_move(50.0);
    sparkline.pointer_leave();
    let frame = sparkline.build_render_frame();
    assert!(frame.circles.is_empty());
    assert!(frame.tooltip.is_none());
}

#[test]
fn render_hands_frame_to_renderer() {
    let mut sparkline = five_point_sparkline();
    sparkline.pointer_move(3.0);
    sparkline.render().expect("render");

    let renderer = sparkline.renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_text_count, 2);
    assert!(renderer.last_had_tooltip);
}

#[test]
fn degenerate_series_still_renders() {
    let mut sparkline = Sparkline::with_series(
        NullRenderer::default(),
        SparklineConfig::default(),
        vec![5.0, 5.0, 5.0],
    );
    assert!(sparkline.is_degenerate());
    sparkline.render().expect("degenerate series renders silently");

    let renderer = sparkline.into_renderer();
    assert_eq!(renderer.last_polyline_count, 1);
    assert!(!renderer.last_frame_finite);
}

#[test]
fn empty_series_renders_axes_with_infinite_labels() {
    let sparkline = Sparkline::new(NullRenderer::default(), SparklineConfig::default());
    let frame = sparkline.build_render_frame();
    assert!(frame.polylines[0].points.is_empty());
    assert_eq!(frame.texts[0].text, "-Infinity");
    assert_eq!(frame.texts[1].text, "Infinity");
}
