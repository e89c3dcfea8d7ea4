//! Layout expressed as fractions of the frame

use serde::{Deserialize, Serialize};

use super::{Layout, ARENA_SLOTS};
use crate::error::CvError;
use crate::region::Region;
use crate::traits::RegionProvider;
use crate::Result;

fn default_tablet_max_aspect() -> f64 {
    1.6
}

/// Rectangle in frame fractions: `x = 0.5` is the horizontal centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RelativeRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Scale to pixels, rounding each edge to the nearest pixel
    pub fn scale(&self, width: u32, height: u32) -> Option<Region> {
        let to_px = |fraction: f64, extent: u32| {
            let value = (fraction * extent as f64).round();
            (value.is_finite() && value >= 0.0 && value <= extent as f64).then_some(value as u32)
        };

        let x0 = to_px(self.x, width)?;
        let y0 = to_px(self.y, height)?;
        let x1 = to_px(self.x + self.width, width)?;
        let y1 = to_px(self.y + self.height, height)?;
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(Region::new(x0, y0, x1 - x0, y1 - y0))
    }
}

/// Geometry provider for screens that scale their UI with the frame.
///
/// Frames whose aspect ratio (width / height) is at most
/// `tablet_max_aspect` are treated as tablets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeLayout {
    pub rank: RelativeRect,
    pub format: RelativeRect,
    pub mode: RelativeRect,
    pub arena: [[RelativeRect; ARENA_SLOTS]; 3],
    #[serde(default = "default_tablet_max_aspect")]
    pub tablet_max_aspect: f64,
}

impl RelativeLayout {
    pub fn is_tablet(&self, width: u32, height: u32) -> bool {
        height > 0 && (width as f64 / height as f64) <= self.tablet_max_aspect
    }
}

impl RegionProvider for RelativeLayout {
    fn layout(&self, width: u32, height: u32) -> Result<Layout> {
        let unsupported = || CvError::UnsupportedResolution { width, height };
        if width == 0 || height == 0 {
            return Err(unsupported());
        }

        let scale = |rect: &RelativeRect| rect.scale(width, height).ok_or_else(unsupported);

        let mut arena = [[Region::default(); ARENA_SLOTS]; 3];
        for (rects, regions) in self.arena.iter().zip(arena.iter_mut()) {
            for (rect, region) in rects.iter().zip(regions.iter_mut()) {
                *region = scale(rect)?;
            }
        }

        let layout = Layout {
            rank: scale(&self.rank)?,
            format: scale(&self.format)?,
            mode: scale(&self.mode)?,
            arena,
            is_tablet: self.is_tablet(width, height),
        };

        tracing::debug!("Resolved layout for {}x{} (tablet: {})", width, height, layout.is_tablet);
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative() -> RelativeLayout {
        let slot = |i: usize| RelativeRect::new(0.2 + 0.25 * i as f64, 0.3, 0.1, 0.1);
        RelativeLayout {
            rank: RelativeRect::new(0.5, 0.1, 0.05, 0.08),
            format: RelativeRect::new(0.8, 0.1, 0.05, 0.05),
            mode: RelativeRect::new(0.1, 0.1, 0.2, 0.05),
            arena: [[slot(0), slot(1), slot(2)]; 3],
            tablet_max_aspect: 1.6,
        }
    }

    #[test]
    fn test_scale() {
        let rect = RelativeRect::new(0.25, 0.5, 0.5, 0.25);
        assert_eq!(rect.scale(200, 100), Some(Region::new(50, 50, 100, 25)));
        assert_eq!(RelativeRect::new(0.9, 0.0, 0.2, 0.1).scale(100, 100), None);
        assert_eq!(RelativeRect::new(0.5, 0.5, 0.0, 0.1).scale(100, 100), None);
        assert_eq!(RelativeRect::new(-0.1, 0.0, 0.2, 0.1).scale(100, 100), None);
    }

    #[test]
    fn test_layout_scales_with_frame() -> Result<()> {
        let layout = relative().layout(1920, 1080)?;
        assert_eq!(layout.rank, Region::new(960, 108, 96, 86));
        assert!(!layout.is_tablet);
        assert!(layout.regions().all(|r| r.fits_within(1920, 1080)));

        let tablet = relative().layout(2048, 1536)?;
        assert!(tablet.is_tablet);
        Ok(())
    }

    #[test]
    fn test_unsupported_resolution() {
        assert_eq!(
            relative().layout(0, 1080),
            Err(CvError::UnsupportedResolution { width: 0, height: 1080 })
        );

        let mut broken = relative();
        broken.arena[2][1] = RelativeRect::new(0.95, 0.3, 0.1, 0.1);
        assert!(broken.layout(1920, 1080).is_err());
    }

    #[test]
    fn test_deserialize_default_aspect() {
        let json = r#"{
            "rank": {"x": 0.5, "y": 0.1, "width": 0.05, "height": 0.08},
            "format": {"x": 0.8, "y": 0.1, "width": 0.05, "height": 0.05},
            "mode": {"x": 0.1, "y": 0.1, "width": 0.2, "height": 0.05},
            "arena": [
                [{"x": 0.1, "y": 0.3, "width": 0.1, "height": 0.1}, {"x": 0.4, "y": 0.3, "width": 0.1, "height": 0.1}, {"x": 0.7, "y": 0.3, "width": 0.1, "height": 0.1}],
                [{"x": 0.1, "y": 0.3, "width": 0.1, "height": 0.1}, {"x": 0.4, "y": 0.3, "width": 0.1, "height": 0.1}, {"x": 0.7, "y": 0.3, "width": 0.1, "height": 0.1}],
                [{"x": 0.1, "y": 0.3, "width": 0.1, "height": 0.1}, {"x": 0.4, "y": 0.3, "width": 0.1, "height": 0.1}, {"x": 0.7, "y": 0.3, "width": 0.1, "height": 0.1}]
            ]
        }"#;

        let layout: RelativeLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.tablet_max_aspect, 1.6);
        assert!(!layout.is_tablet(1920, 1080));
        assert!(layout.is_tablet(1024, 768));
    }
}
