//! Borrowed RGBA frame buffers

use image::RgbaImage;

use crate::error::CvError;
use crate::region::Region;
use crate::Result;

/// Packed RGBA pixels owned by the caller.
///
/// Rows start every `stride` bytes; the stride may exceed `width * 4` when the
/// capture source pads its rows.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    stride: usize,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Wrap raw RGBA bytes, checking that every row fits in `data`
    pub fn new(width: u32, height: u32, stride: usize, data: &'a [u8]) -> Result<Self> {
        let overflow = || CvError::InvalidBuffer(format!("{}x{} pixels with stride {} overflow usize", width, height, stride));

        let row_bytes = (width as usize).checked_mul(Self::BYTES_PER_PIXEL).ok_or_else(overflow)?;
        if stride < row_bytes {
            return Err(CvError::InvalidBuffer(format!(
                "stride {} is shorter than a {}-pixel row",
                stride, width
            )));
        }

        let required = match height {
            0 => 0,
            h => stride
                .checked_mul(h as usize - 1)
                .and_then(|bytes| bytes.checked_add(row_bytes))
                .ok_or_else(overflow)?,
        };
        if data.len() < required {
            return Err(CvError::InvalidBuffer(format!(
                "{} bytes cannot hold {}x{} pixels with stride {}",
                data.len(),
                width,
                height,
                stride
            )));
        }

        Ok(Self { width, height, stride, data })
    }

    /// Borrow an `image` RGBA buffer (rows are tightly packed)
    pub fn from_rgba_image(image: &'a RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            stride: width as usize * Self::BYTES_PER_PIXEL,
            data: image.as_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn contains(&self, region: &Region) -> bool {
        region.fits_within(self.width, self.height)
    }

    /// Pixel bytes of row `y`, without padding
    pub fn row(&self, y: u32) -> &'a [u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * Self::BYTES_PER_PIXEL]
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = x as usize * Self::BYTES_PER_PIXEL;
        let row = self.row(y);
        [row[offset], row[offset + 1], row[offset + 2], row[offset + 3]]
    }

    /// Luma of one pixel in 0..=255, alpha ignored
    pub fn luminance(&self, x: u32, y: u32) -> f64 {
        let [r, g, b, _] = self.pixel(x, y);
        luma(r, g, b)
    }
}

/// Rec. 601 luma: 0.299*R + 0.587*G + 0.114*B
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_rejects_short_stride() {
        let data = vec![0u8; 64];
        let err = PixelBuffer::new(4, 4, 12, &data).unwrap_err();
        assert!(matches!(err, CvError::InvalidBuffer(_)));
    }

    #[test]
    fn test_rejects_short_data() {
        let data = vec![0u8; 10];
        assert!(PixelBuffer::new(2, 2, 8, &data).is_err());
    }

    #[test]
    fn test_rejects_overflowing_stride() {
        let data = vec![0u8; 64];
        let err = PixelBuffer::new(2, 3, usize::MAX, &data).unwrap_err();
        assert!(matches!(err, CvError::InvalidBuffer(ref reason) if reason.contains("overflow")));

        let err = PixelBuffer::new(1, 3, usize::MAX / 2 + 1, &data).unwrap_err();
        assert!(matches!(err, CvError::InvalidBuffer(_)));
    }

    #[test]
    fn test_padded_rows() -> Result<()> {
        // 2x2 pixels, 4 bytes of padding per row; the last row needs no padding
        let mut data = vec![0u8; 12 + 8];
        data[12..16].copy_from_slice(&[10, 20, 30, 255]);
        data[16..20].copy_from_slice(&[255, 255, 255, 255]);

        let buffer = PixelBuffer::new(2, 2, 12, &data)?;
        assert_eq!(buffer.pixel(0, 1), [10, 20, 30, 255]);
        assert_eq!(buffer.pixel(1, 1), [255, 255, 255, 255]);
        assert_eq!(buffer.row(1).len(), 8);
        Ok(())
    }

    #[test]
    fn test_from_rgba_image() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([0, 0, 0, 255]));
        img.put_pixel(2, 1, Rgba([255, 255, 255, 255]));

        let buffer = PixelBuffer::from_rgba_image(&img);
        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.stride(), 12);
        assert!((buffer.luminance(2, 1) - 255.0).abs() < 1e-9);
        assert_eq!(buffer.luminance(0, 0), 0.0);
    }

    #[test]
    fn test_luma_weights() {
        assert!((luma(255, 0, 0) - 76.245).abs() < 1e-9);
        assert!((luma(0, 255, 0) - 149.685).abs() < 1e-9);
        assert!((luma(0, 0, 255) - 29.07).abs() < 1e-9);
    }
}
