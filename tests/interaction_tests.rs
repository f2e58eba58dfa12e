use mini_chart::interaction::HoverMissBehavior;
use mini_chart::render::NullRenderer;
use mini_chart::{Sparkline, SparklineConfig};

fn sparkline(series: Vec<f64>) -> Sparkline<NullRenderer> {
    Sparkline::with_series(NullRenderer::default(), SparklineConfig::default(), series)
}

#[test]
fn starts_without_active_point() {
    let sparkline = sparkline(vec![1.0, 2.0, 3.0]);
    assert_eq!(sparkline.active_index(), None);
    assert_eq!(sparkline.active_point(), None);
}

#[test]
fn pointer_exactly_on_a_point_selects_it() {
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let points = sparkline.points();
    for (index, point) in points.iter().enumerate() {
        sparkline.pointer_move(point.x);
        assert_eq!(sparkline.active_index(), Some(index));
    }
}

#[test]
fn active_point_reports_original_value_and_position() {
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(sparkline.pointer_move(50.0));
    let active = sparkline.active_point().expect("active point");
    assert_eq!(active.index, 2);
    assert_eq!(active.value, 3.0);
    assert_eq!(active.point.x, 50.0);
    assert_eq!(active.point.y, 10.0);
}

#[test]
fn first_matching_band_wins() {
    // half span = floor(100 / 4 / 2) = 12; points at 3, 27, 50, 74, 97.
    // Open bands (-9, 15) and (15, 39) meet at 15.
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    sparkline.pointer_move(14.5);
    assert_eq!(sparkline.active_index(), Some(0));
    sparkline.pointer_move(15.5);
    assert_eq!(sparkline.active_index(), Some(1));
    // Exactly on the seam neither band matches and the highlight is kept.
    sparkline.pointer_move(15.0);
    assert_eq!(sparkline.active_index(), Some(1));
}

#[test]
fn miss_retains_previous_highlight_by_default() {
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    sparkline.pointer_move(97.0);
    assert_eq!(sparkline.active_index(), Some(4));

    assert!(!sparkline.pointer_move(500.0));
    assert_eq!(sparkline.active_index(), Some(4));

    assert!(!sparkline.pointer_move(-500.0));
    assert_eq!(sparkline.active_index(), Some(4));
}

#[test]
fn miss_without_previous_highlight_stays_empty() {
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0]);
    assert!(!sparkline.pointer_move(1_000.0));
    assert_eq!(sparkline.active_index(), None);
}

#[test]
fn clear_on_miss_is_opt_in() {
    let config = SparklineConfig::default().with_hover_miss_behavior(HoverMissBehavior::Clear);
    let mut sparkline =
        Sparkline::with_series(NullRenderer::default(), config, vec![1.0, 2.0, 3.0]);
    sparkline.pointer_move(50.0);
    assert_eq!(sparkline.active_index(), Some(1));
    assert!(sparkline.pointer_move(1_000.0));
    assert_eq!(sparkline.active_index(), None);
}

#[test]
fn pointer_leave_always_resets() {
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0]);
    assert!(!sparkline.pointer_leave());
    assert_eq!(sparkline.active_index(), None);

    sparkline.pointer_move(3.0);
    assert!(sparkline.pointer_leave());
    assert_eq!(sparkline.active_index(), None);
}

#[test]
fn shrinking_series_drops_stale_highlight() {
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    sparkline.pointer_move(97.0);
    assert_eq!(sparkline.active_index(), Some(4));

    sparkline.set_series(vec![1.0, 2.0]);
    assert_eq!(sparkline.active_index(), None);
}

#[test]
fn growing_series_keeps_highlight_index() {
    let mut sparkline = sparkline(vec![1.0, 2.0, 3.0]);
    sparkline.pointer_move(3.0);
    sparkline.set_series(vec![9.0, 8.0, 7.0, 6.0]);
    assert_eq!(sparkline.active_index(), Some(0));
    assert_eq!(sparkline.active_point().map(|active| active.value), Some(9.0));
}

#[test]
fn single_sample_is_never_selected() {
    let mut sparkline = sparkline(vec![42.0]);
    assert!(sparkline.is_degenerate());
    assert!(!sparkline.pointer_move(50.0));
    assert_eq!(sparkline.active_index(), None);
}
