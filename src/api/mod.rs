mod data_controller;
mod engine;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod json_contract;
mod layout_controller;
mod render_frame_builder;
mod sparkline_config;

pub use engine::Sparkline;
pub use engine_snapshot::SparklineSnapshot;
pub use interaction_controller::ActivePoint;
pub use json_contract::{SPARKLINE_SNAPSHOT_JSON_SCHEMA_V1, SparklineSnapshotJsonContractV1};
pub use render_frame_builder::{
    AXIS_LABEL_FONT_SIZE, AXIS_STROKE_WIDTH, MAX_LABEL_BASELINE_Y, MIN_LABEL_BOTTOM_OFFSET,
    TOOLTIP_BORDER_RADIUS, TOOLTIP_BORDER_WIDTH, TOOLTIP_LINE_HEIGHT, TOOLTIP_RISE_FACTOR,
};
pub use sparkline_config::{
    DEFAULT_ACTIVE_POINT_RADIUS, DEFAULT_HEIGHT, DEFAULT_LABEL_FONT_SIZE, DEFAULT_SERIES_COLOR,
    DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH, SparklineConfig,
};
