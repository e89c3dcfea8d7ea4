use crate::pixel::PixelBuffer;
use crate::region::Region;

/// Summed-area table of region luma.
///
/// `sums[y * (width + 1) + x]` holds the luma total of the `x` by `y` block
/// anchored at the region origin; row and column 0 are zero.
pub(crate) struct IntegralImage {
    width: usize,
    sums: Vec<f64>,
}

impl IntegralImage {
    /// Caller guarantees `region` lies inside `buffer`.
    pub(crate) fn from_region(buffer: &PixelBuffer<'_>, region: Region) -> Self {
        let width = region.width as usize;
        let height = region.height as usize;
        let stride = width + 1;
        let mut sums = vec![0.0f64; stride * (height + 1)];

        for y in 0..height {
            let mut row_sum = 0.0;
            let dst = (y + 1) * stride;
            for x in 0..width {
                row_sum += buffer.luminance(region.x + x as u32, region.y + y as u32);
                sums[dst + x + 1] = sums[dst - stride + x + 1] + row_sum;
            }
        }

        Self { width, sums }
    }

    /// Luma total over `[x0, x1) x [y0, y1)`, in region coordinates
    pub(crate) fn sum(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> f64 {
        let stride = self.width + 1;
        let idx = |x: usize, y: usize| y * stride + x;
        self.sums[idx(x1, y1)] - self.sums[idx(x0, y1)] - self.sums[idx(x1, y0)] + self.sums[idx(x0, y0)]
    }

    /// Mean luma over `[x0, x1) x [y0, y1)`; an empty block has mean 0
    pub(crate) fn mean(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> f64 {
        let area = (x1 - x0) * (y1 - y0);
        if area == 0 {
            return 0.0;
        }
        self.sum(x0, y0, x1, y1) / area as f64
    }
}
