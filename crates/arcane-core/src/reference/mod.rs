//! Precomputed reference feature tables
//!
//! Each detection kind owns an ordered table of feature vectors; the
//! position of a vector in its table is the label it stands for (rank
//! tier, format id, raw mode id or arena card).

pub mod data;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

pub use data::{ArenaData, FormatModeRankData, ReferenceDatabase};

/// Fixed-length numeric summary of a region
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for FeatureVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for FeatureVector {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "=[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:3.2}", value)?;
        }
        write!(f, "]")
    }
}

/// Which reference table a detection matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Rank,
    Format,
    Mode,
    ModeTablet,
    Arena,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 5] = [
        ReferenceKind::Rank,
        ReferenceKind::Format,
        ReferenceKind::Mode,
        ReferenceKind::ModeTablet,
        ReferenceKind::Arena,
    ];
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Rank => "RANKS",
            ReferenceKind::Format => "FORMATS",
            ReferenceKind::Mode => "MODES",
            ReferenceKind::ModeTablet => "MODES_TABLET",
            ReferenceKind::Arena => "arena",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_display() {
        let v = FeatureVector::new(vec![1.0, -2.5, 10.126]);
        assert_eq!(v.to_string(), "=[1.00 -2.50 10.13]");
        assert_eq!(FeatureVector::default().to_string(), "=[]");
    }

    #[test]
    fn test_feature_vector_is_transparent() {
        let v: FeatureVector = serde_json::from_str("[0.5, 1.5]").unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[0.5,1.5]");
    }
}
