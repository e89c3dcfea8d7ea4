//! Feature extraction
//!
//! Turns a region of a frame into a fixed-length [`FeatureVector`]. The
//! reference tables were generated with the same scheme, so any change to an
//! extractor silently invalidates them.

pub mod haar;
mod integral;

use arcane_core::FeatureVector;
use serde::{Deserialize, Serialize};

use crate::pixel::PixelBuffer;
use crate::region::Region;
use crate::Result;

/// Extraction scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureExtractor {
    /// Multi-scale Haar-like edge responses over luma
    #[default]
    Haar,
}

impl FeatureExtractor {
    pub fn extract(&self, buffer: &PixelBuffer<'_>, region: Region) -> Result<FeatureVector> {
        match self {
            FeatureExtractor::Haar => haar::extract(buffer, region),
        }
    }

    /// Length of every vector this extractor produces
    pub fn feature_len(&self) -> usize {
        match self {
            FeatureExtractor::Haar => haar::FEATURE_LEN,
        }
    }

    /// Smallest region (width, height) the extractor accepts
    pub fn min_region_size(&self) -> (u32, u32) {
        match self {
            FeatureExtractor::Haar => (haar::MIN_REGION_SIDE, haar::MIN_REGION_SIDE),
        }
    }
}
