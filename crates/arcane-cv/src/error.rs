use arcane_core::ReferenceKind;
use thiserror::Error;

use crate::region::Region;

/// Precondition failures. A low-confidence match is not one of these; it
/// surfaces as `None` from the detector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CvError {
    #[error("Region {region} lies outside the {width}x{height} buffer")]
    RegionOutOfBounds { region: Region, width: u32, height: u32 },

    #[error("Region {region} is smaller than the {min_width}x{min_height} minimum")]
    RegionTooSmall {
        region: Region,
        min_width: u32,
        min_height: u32,
    },

    #[error("Cannot compare signatures of length {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Candidate index {index} is out of range for {len} candidates")]
    CandidateOutOfRange { index: usize, len: usize },

    #[error("Unsupported resolution {width}x{height}")]
    UnsupportedResolution { width: u32, height: u32 },

    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("Reference table {kind} is malformed: {reason}")]
    MalformedReference { kind: ReferenceKind, reason: String },
}
