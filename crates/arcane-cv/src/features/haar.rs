//! Haar-like features over a grid pyramid
//!
//! The region is split into 1x1, 2x2 and 4x4 grids of cells. Each cell
//! yields three responses from the mean luma of its halves and quadrants:
//!
//! ```text
//! horizontal = left - right
//! vertical   = top - bottom
//! diagonal   = (top_left + bottom_right - top_right - bottom_left) / 2
//! ```
//!
//! Cells are visited level by level, row-major inside a level.

use arcane_core::FeatureVector;

use super::integral::IntegralImage;
use crate::error::CvError;
use crate::pixel::PixelBuffer;
use crate::region::Region;
use crate::Result;

/// Grid sizes, coarsest first
pub const LEVELS: [usize; 3] = [1, 2, 4];

const FEATURES_PER_CELL: usize = 3;

/// 3 * (1 + 4 + 16)
pub const FEATURE_LEN: usize = FEATURES_PER_CELL * (1 + 4 + 16);

/// Finest cells must split into two non-empty halves on both axes
pub const MIN_REGION_SIDE: u32 = 2 * 4;

pub fn extract(buffer: &PixelBuffer<'_>, region: Region) -> Result<FeatureVector> {
    if !buffer.contains(&region) {
        return Err(CvError::RegionOutOfBounds {
            region,
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    if region.width < MIN_REGION_SIDE || region.height < MIN_REGION_SIDE {
        return Err(CvError::RegionTooSmall {
            region,
            min_width: MIN_REGION_SIDE,
            min_height: MIN_REGION_SIDE,
        });
    }

    let integral = IntegralImage::from_region(buffer, region);
    let width = region.width as usize;
    let height = region.height as usize;

    let mut features = Vec::with_capacity(FEATURE_LEN);
    for n in LEVELS {
        for row in 0..n {
            let y0 = height * row / n;
            let y1 = height * (row + 1) / n;
            for col in 0..n {
                let x0 = width * col / n;
                let x1 = width * (col + 1) / n;
                cell_features(&integral, x0, y0, x1, y1, &mut features);
            }
        }
    }

    debug_assert_eq!(features.len(), FEATURE_LEN);
    Ok(FeatureVector::new(features))
}

fn cell_features(integral: &IntegralImage, x0: usize, y0: usize, x1: usize, y1: usize, out: &mut Vec<f64>) {
    let xm = (x0 + x1) / 2;
    let ym = (y0 + y1) / 2;

    let left = integral.mean(x0, y0, xm, y1);
    let right = integral.mean(xm, y0, x1, y1);
    let top = integral.mean(x0, y0, x1, ym);
    let bottom = integral.mean(x0, ym, x1, y1);

    let top_left = integral.mean(x0, y0, xm, ym);
    let top_right = integral.mean(xm, y0, x1, ym);
    let bottom_left = integral.mean(x0, ym, xm, y1);
    let bottom_right = integral.mean(xm, ym, x1, y1);

    out.push(left - right);
    out.push(top - bottom);
    out.push((top_left + bottom_right - top_right - bottom_left) / 2.0);
}
