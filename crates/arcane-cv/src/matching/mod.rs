//! Nearest-neighbour matching module

pub mod matcher;
pub mod metric;

pub use matcher::nearest;
pub use metric::{euclidean, hamming, manhattan};

use serde::{Deserialize, Serialize};

/// Distance between feature vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Metric {
    /// Sum of squared differences, not rooted
    #[default]
    Euclidean,
    /// Sum of absolute differences
    Manhattan,
}

/// Bit-count distance between packed 64-bit signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hamming;

/// Best reference found for a query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    /// Reference index, `None` when nothing matched or the match was rejected
    pub index: Option<usize>,
    pub distance: f64,
}

impl MatchResult {
    pub fn unknown() -> Self {
        Self {
            index: None,
            distance: f64::INFINITY,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.index.is_none()
    }

    /// Keep the candidate only if strictly closer than the current best, so
    /// the first of several equal distances wins.
    pub(crate) fn offer(&mut self, index: usize, distance: f64) {
        if distance < self.distance {
            self.index = Some(index);
            self.distance = distance;
        }
    }

    /// Forget the index when the distance exceeds `threshold`.
    ///
    /// The distance is kept so callers can still log how far off it was.
    pub fn reject_above(self, threshold: f64) -> Self {
        if self.distance > threshold {
            Self { index: None, ..self }
        } else {
            self
        }
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::unknown()
    }
}
