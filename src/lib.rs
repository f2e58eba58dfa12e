//! mini-chart-rs: an inline sparkline widget.
//!
//! A numeric series is laid out into a small fixed-size canvas, drawn as a
//! polyline with baseline axes and min/max labels, and the sample nearest to
//! the pointer is highlighted with a marker and a floating value label.
//!
//! Layout is recomputed from the inputs on every pass; the only state kept
//! between renders is the active point index.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Sparkline, SparklineConfig};
pub use error::{ChartError, ChartResult};
