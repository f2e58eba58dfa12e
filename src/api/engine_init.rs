use tracing::debug;

use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{Sparkline, SparklineConfig};

impl<R: Renderer> Sparkline<R> {
    /// Creates an empty sparkline with no active point.
    #[must_use]
    pub fn new(renderer: R, config: SparklineConfig) -> Self {
        let mut interaction = InteractionState::default();
        interaction.set_miss_behavior(config.hover_miss_behavior);
        debug!(
            width = config.width,
            height = config.height,
            padding = %config.padding,
            "create sparkline"
        );
        Self {
            renderer,
            config,
            series: Vec::new(),
            interaction,
        }
    }

    /// Creates a sparkline already holding `series`.
    #[must_use]
    pub fn with_series(renderer: R, config: SparklineConfig, series: Vec<f64>) -> Self {
        let mut sparkline = Self::new(renderer, config);
        sparkline.set_series(series);
        sparkline
    }
}
