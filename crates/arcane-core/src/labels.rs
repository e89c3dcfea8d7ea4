//! Labels detections resolve to
//!
//! A reference table's indices map onto these. An unrecognised screen is
//! `None` at the call site; there is no "unknown" variant.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Wild,
    Standard,
}

impl Format {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Format::Wild),
            1 => Some(Format::Standard),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Wild => f.write_str("WILD"),
            Format::Standard => f.write_str("STANDARD"),
        }
    }
}

/// Mode category as stored in the mode reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawMode {
    CasualStandard,
    CasualWild,
    RankedStandard,
    RankedWild,
}

impl RawMode {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(RawMode::CasualStandard),
            1 => Some(RawMode::CasualWild),
            2 => Some(RawMode::RankedStandard),
            3 => Some(RawMode::RankedWild),
            _ => None,
        }
    }

    /// Drop the wild/standard distinction; format has its own detection.
    pub fn collapse(self) -> Mode {
        match self {
            RawMode::CasualStandard | RawMode::CasualWild => Mode::Casual,
            RawMode::RankedStandard | RawMode::RankedWild => Mode::Ranked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Casual,
    Ranked,
}

impl Mode {
    /// Collapse a raw mode table index into the externally visible mode
    pub fn from_raw_index(index: usize) -> Option<Self> {
        RawMode::from_index(index).map(RawMode::collapse)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Casual => f.write_str("MODE_CASUAL"),
            Mode::Ranked => f.write_str("MODE_RANKED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_collapsing() {
        assert_eq!(Mode::from_raw_index(0), Some(Mode::Casual));
        assert_eq!(Mode::from_raw_index(1), Some(Mode::Casual));
        assert_eq!(Mode::from_raw_index(2), Some(Mode::Ranked));
        assert_eq!(Mode::from_raw_index(3), Some(Mode::Ranked));
        assert_eq!(Mode::from_raw_index(4), None);
        assert_eq!(Mode::from_raw_index(usize::MAX), None);
    }

    #[test]
    fn test_format_from_index() {
        assert_eq!(Format::from_index(0), Some(Format::Wild));
        assert_eq!(Format::from_index(1), Some(Format::Standard));
        assert_eq!(Format::from_index(2), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::Wild.to_string(), "WILD");
        assert_eq!(Format::Standard.to_string(), "STANDARD");
        assert_eq!(Mode::Casual.to_string(), "MODE_CASUAL");
        assert_eq!(Mode::Ranked.to_string(), "MODE_RANKED");
    }
}
