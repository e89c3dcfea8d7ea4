//! Detection configuration

use serde::{Deserialize, Serialize};

use crate::features::FeatureExtractor;
use crate::matching::Metric;

/// Largest accepted best-match distance for rank, format and mode.
///
/// Calibrated for Haar features compared with un-rooted Euclidean distance;
/// changing either invalidates it.
pub const DEFAULT_REJECTION_THRESHOLD: f64 = 400.0;

/// Main detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub rejection_threshold: f64,
    pub metric: Metric,
    pub extractor: FeatureExtractor,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            rejection_threshold: DEFAULT_REJECTION_THRESHOLD,
            metric: Metric::Euclidean,
            extractor: FeatureExtractor::Haar,
        }
    }
}

impl DetectionConfig {
    pub fn with_threshold(mut self, rejection_threshold: f64) -> Self {
        self.rejection_threshold = rejection_threshold;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }
}
