//! Pixel rectangles designated for one detection check

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check that the rectangle lies entirely inside a `width` x `height` frame
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_within() {
        let region = Region::new(10, 10, 20, 20);
        assert!(region.fits_within(30, 30));
        assert!(!region.fits_within(29, 30));
        assert!(!region.fits_within(30, 29));
    }

    #[test]
    fn test_edges_do_not_overflow() {
        let region = Region::new(u32::MAX, 0, 1, 1);
        assert_eq!(region.right(), u32::MAX as u64 + 1);
        assert!(!region.fits_within(u32::MAX, 1));
    }

    #[test]
    fn test_area_and_empty() {
        assert_eq!(Region::new(0, 0, 4, 5).area(), 20);
        assert!(Region::new(3, 3, 0, 5).is_empty());
    }
}
