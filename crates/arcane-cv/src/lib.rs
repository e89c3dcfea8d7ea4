//! Arcane Computer Vision Library
//!
//! Classifies fixed screen regions against precomputed reference feature
//! tables: Haar-like feature extraction, nearest-neighbour matching and the
//! detection policies built on top of them.

pub mod candidates;
pub mod detection;
pub mod error;
pub mod features;
pub mod geometry;
pub mod matching;
pub mod pixel;
pub mod region;

// Re-export commonly used types
pub use candidates::CandidateCache;
pub use detection::{ArenaSlotResult, DetectionConfig, Detector};
pub use error::CvError;
pub use features::FeatureExtractor;
pub use geometry::{Layout, RelativeLayout, RelativeRect};
pub use matching::{Hamming, MatchResult, Metric, nearest};
pub use pixel::PixelBuffer;
pub use region::Region;

// Error handling
pub type Result<T> = std::result::Result<T, CvError>;

/// Core traits for the CV system
pub mod traits {
    use super::*;

    /// Distance between two signatures of the same kind.
    ///
    /// Implementations are symmetric and fail only when the inputs cannot be
    /// compared (different lengths).
    pub trait DistanceMetric<T: ?Sized> {
        fn distance(&self, a: &T, b: &T) -> Result<f64>;
    }

    /// Geometry service: where each detection region sits for a frame size
    pub trait RegionProvider {
        fn layout(&self, width: u32, height: u32) -> Result<Layout>;
    }
}
