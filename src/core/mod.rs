pub mod layout;
pub mod number_format;
pub mod padding;
pub mod scale;
pub mod types;

pub use layout::{LayoutGeometry, layout_points, layout_points_with_scale, point_x};
pub use number_format::format_number;
pub use padding::Padding;
pub use scale::{ValueScale, round_half_up, series_max, series_min};
pub use types::{PlotPoint, Viewport};
