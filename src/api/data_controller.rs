use tracing::{debug, trace};

use crate::render::Renderer;

use super::{Sparkline, SparklineConfig};

impl<R: Renderer> Sparkline<R> {
    /// Replaces the plotted series.
    ///
    /// Samples are taken as given: no sorting, deduplication or finiteness
    /// check. A highlight that would point past the new series is dropped.
    pub fn set_series(&mut self, series: Vec<f64>) {
        debug!(
            previous_len = self.series.len(),
            len = series.len(),
            "set sparkline series"
        );
        self.series = series;
        if self.interaction.clamp_to_len(self.series.len()) {
            trace!("active point dropped after series change");
        }
    }

    #[must_use]
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> SparklineConfig {
        self.config
    }

    /// Replaces the styling. The active index is kept since it addresses
    /// samples, not pixels.
    pub fn set_config(&mut self, config: SparklineConfig) {
        debug!(
            width = config.width,
            height = config.height,
            padding = %config.padding,
            "set sparkline config"
        );
        self.interaction
            .set_miss_behavior(config.hover_miss_behavior);
        self.config = config;
    }
}
