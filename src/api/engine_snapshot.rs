use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ActivePoint, Sparkline, SparklineConfig};

/// Serializable state snapshot used by regression tests and debugging tools.
///
/// Non-finite coordinates serialize as JSON `null` and cannot be loaded back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineSnapshot {
    pub config: SparklineConfig,
    pub series: Vec<f64>,
    pub points: Vec<PlotPoint>,
    pub value_range: (f64, f64),
    pub padding_px: f64,
    pub edge_inset: f64,
    pub active: Option<ActivePoint>,
}

impl<R: Renderer> Sparkline<R> {
    #[must_use]
    pub fn snapshot(&self) -> SparklineSnapshot {
        let scale = self.value_scale();
        SparklineSnapshot {
            config: self.config,
            series: self.series.clone(),
            points: self.points(),
            value_range: (scale.min(), scale.max()),
            padding_px: scale.padding_px(),
            edge_inset: self.edge_inset(),
            active: self.active_point(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
