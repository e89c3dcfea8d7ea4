use arcane_core::FeatureVector;

use super::{Hamming, Metric};
use crate::error::CvError;
use crate::traits::DistanceMetric;
use crate::Result;

fn check_len(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(CvError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Sum of squared differences (no square root; only used for ranking)
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    check_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum())
}

pub fn manhattan(a: &[f64], b: &[f64]) -> Result<f64> {
    check_len(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

/// Number of differing bits, in 0..=64
pub fn hamming(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

impl DistanceMetric<[f64]> for Metric {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
        }
    }
}

impl DistanceMetric<FeatureVector> for Metric {
    fn distance(&self, a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
        DistanceMetric::<[f64]>::distance(self, a.as_slice(), b.as_slice())
    }
}

impl DistanceMetric<u64> for Hamming {
    fn distance(&self, a: &u64, b: &u64) -> Result<f64> {
        Ok(hamming(*a, *b) as f64)
    }
}
