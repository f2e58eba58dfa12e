use approx::assert_relative_eq;
use mini_chart::core::{LayoutGeometry, Padding, ValueScale, Viewport, layout_points};
use mini_chart::render::NullRenderer;
use mini_chart::{Sparkline, SparklineConfig};

fn default_geometry() -> LayoutGeometry {
    SparklineConfig::default().layout_geometry()
}

#[test]
fn default_padding_resolves_to_fifteen_percent_of_height() {
    let sparkline = Sparkline::with_series(
        NullRenderer::default(),
        SparklineConfig::default(),
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
    );
    assert_relative_eq!(sparkline.padding_px(), 7.5);
}

#[test]
fn five_point_series_matches_the_offset_formula() {
    let points = layout_points(&[1.0, 2.0, 3.0, 4.0, 5.0], default_geometry());
    assert_eq!(points.len(), 5);

    // y = 50 - (round(v / 4 * 35) + 15) + 1
    let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
    assert_eq!(ys, vec![27.0, 18.0, 10.0, 1.0, -8.0]);

    // edge = max(ceil(0.75), 3) = 3; step = 94 / 4 = 23.5
    let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![3.0, 27.0, 50.0, 74.0, 97.0]);
}

#[test]
fn mapping_is_not_a_normalized_unit_scale() {
    let points = layout_points(&[1.0, 2.0, 3.0, 4.0, 5.0], default_geometry());
    // A min-max normalization would pin the minimum to the bottom inset.
    let normalized_bottom = 50.0 - 7.5;
    assert!((points[0].y - normalized_bottom).abs() > 1.0);
}

#[test]
fn flat_series_divides_by_zero() {
    let points = layout_points(&[5.0, 5.0, 5.0], default_geometry());
    assert_eq!(points.len(), 3);
    for point in &points {
        assert_eq!(point.y, f64::NEG_INFINITY);
    }

    let zeros = layout_points(&[0.0, 0.0], default_geometry());
    assert!(zeros.iter().all(|point| point.y.is_nan()));
}

#[test]
fn single_sample_has_undefined_horizontal_position() {
    let points = layout_points(&[42.0], default_geometry());
    assert_eq!(points.len(), 1);
    assert!(points[0].x.is_nan());
}

#[test]
fn empty_series_lays_out_nothing() {
    assert!(layout_points(&[], default_geometry()).is_empty());
}

#[test]
fn pixel_padding_is_used_as_is() {
    let geometry = LayoutGeometry {
        padding: Padding::Pixels(5.0),
        ..default_geometry()
    };
    let scale = ValueScale::from_series(&[0.0, 10.0], geometry.viewport, geometry.padding);
    assert_eq!(scale.padding_px(), 5.0);
    // round(10 / 10 * 40) = 40 -> 50 - (40 + 10) + 0
    assert_eq!(scale.value_to_pixel(10.0), 0.0);
    assert_eq!(scale.value_to_pixel(0.0), 40.0);
}

#[test]
fn thick_stroke_widens_the_edge_inset() {
    let geometry = LayoutGeometry {
        viewport: Viewport::new(200.0, 50.0),
        stroke_width: 11.0,
        ..default_geometry()
    };
    assert_eq!(geometry.edge_inset(), 6.0);
    let points = layout_points(&[1.0, 2.0, 3.0], geometry);
    assert_eq!(points.first().map(|point| point.x), Some(6.0));
    assert_eq!(points.last().map(|point| point.x), Some(194.0));
}

#[test]
fn zero_width_canvas_degrades_without_panicking() {
    let geometry = LayoutGeometry {
        viewport: Viewport::new(0.0, 0.0),
        ..default_geometry()
    };
    let points = layout_points(&[1.0, 3.0], geometry);
    assert_eq!(points.len(), 2);
}
