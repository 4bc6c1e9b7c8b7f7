use crate::error::{Error, Result};
use crate::util::unpack_argb;

/// Owned storage for one frame of packed `0xAARRGGBB` pixels.
///
/// The buffer is sized to the drawable in physical pixels. A zero-sized axis
/// is clamped to one pixel so a minimized window still yields a valid frame.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut buffer = Self::default();
        buffer.resize(width, height)?;
        Ok(buffer)
    }

    /// Reallocates the pixel storage if the size changed.
    ///
    /// Returns `true` when the buffer was resized. Must be called between
    /// frames; the previous contents are discarded on resize.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool> {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return Ok(false);
        }

        let pixel_count = (width as usize).saturating_mul(height as usize);
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(pixel_count)
            .map_err(|source| Error::Allocation {
                width,
                height,
                source,
            })?;
        pixels.resize(pixel_count, 0);

        log::debug!(
            "Frame buffer resized from {}x{} to {width}x{height}",
            self.width,
            self.height
        );

        self.pixels = pixels;
        self.width = width;
        self.height = height;
        Ok(true)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// The packed pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    /// The pixel at `(x, y)` split into `[r, g, b, a]`.
    pub fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixel(x, y).map(unpack_argb)
    }

    /// Raw bytes of the frame in native endianness, ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fills the whole frame with one packed pixel.
    pub fn fill(&mut self, pixel: u32) {
        self.pixels.fill(pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_clamped_to_one_pixel() {
        let buffer = FrameBuffer::new(0, 0).unwrap();
        assert_eq!(buffer.size(), (1, 1));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn resize_reports_whether_size_changed() {
        let mut buffer = FrameBuffer::new(4, 3).unwrap();
        assert_eq!(buffer.len(), 12);
        assert!(!buffer.resize(4, 3).unwrap());
        assert!(buffer.resize(8, 2).unwrap());
        assert_eq!(buffer.size(), (8, 2));
        assert_eq!(buffer.len(), 16);
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let mut buffer = FrameBuffer::new(3, 2).unwrap();
        buffer.pixels_mut()[4] = 0xFF11_2233;
        assert_eq!(buffer.pixel(1, 1), Some(0xFF11_2233));
        assert_eq!(buffer.rgba(1, 1), Some([0x11, 0x22, 0x33, 0xFF]));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }

    #[test]
    fn byte_view_covers_every_pixel() {
        let mut buffer = FrameBuffer::new(5, 5).unwrap();
        buffer.fill(0xFF00_00FF);
        assert_eq!(buffer.as_bytes().len(), 5 * 5 * 4);
    }
}
