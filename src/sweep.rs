//! The frame-counter driven gray sweep used before the color animator existed.
//!
//! Diagonal bands of a triangle wave scroll across the frame one pixel per
//! frame. Band crests flash green, blue or red in turn, switching color every
//! [`PHASE_FRAMES`] frames.

use crate::buffer::FrameBuffer;
use crate::util::pack_argb;

/// Width in pixels of one repetition of the diagonal band.
pub const BAND_PERIOD: i64 = 128;
/// Frames spent on each flash color.
pub const PHASE_FRAMES: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashChannel {
    Green,
    Blue,
    Red,
}

impl FlashChannel {
    pub fn for_frame(frame: u64) -> Self {
        match (frame / PHASE_FRAMES) % 3 {
            0 => FlashChannel::Green,
            1 => FlashChannel::Blue,
            _ => FlashChannel::Red,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiagonalSweep {
    frame: u64,
}

impl DiagonalSweep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn render(&self, buffer: &mut FrameBuffer) {
        let width = buffer.width() as usize;
        if width == 0 {
            return;
        }
        let flash = FlashChannel::for_frame(self.frame);
        let offset = (self.frame % BAND_PERIOD as u64) as i64;

        for (y, row) in buffer.pixels_mut().chunks_exact_mut(width).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = shade(x as i64 + y as i64 - offset, flash);
            }
        }
    }
}

fn shade(diagonal: i64, flash: FlashChannel) -> u32 {
    let raw = diagonal.rem_euclid(BAND_PERIOD);
    let tri = (raw - BAND_PERIOD / 2).abs();
    let level = (tri / 4) as u8;

    let (mut r, mut g, mut b) = (level, level, level);
    // Crests sit where the triangle wave peaks.
    if tri % (BAND_PERIOD / 2) == 0 {
        let boosted = level.wrapping_mul(7);
        match flash {
            FlashChannel::Green => g = boosted,
            FlashChannel::Blue => b = boosted,
            FlashChannel::Red => r = boosted,
        }
    }

    pack_argb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::unpack_argb;

    #[test]
    fn flash_channel_rotates_every_phase() {
        assert_eq!(FlashChannel::for_frame(0), FlashChannel::Green);
        assert_eq!(FlashChannel::for_frame(59), FlashChannel::Green);
        assert_eq!(FlashChannel::for_frame(60), FlashChannel::Blue);
        assert_eq!(FlashChannel::for_frame(120), FlashChannel::Red);
        assert_eq!(FlashChannel::for_frame(180), FlashChannel::Green);
    }

    #[test]
    fn origin_sits_on_a_crest() {
        assert_eq!(unpack_argb(shade(0, FlashChannel::Green)), [16, 112, 16, 255]);
        assert_eq!(unpack_argb(shade(0, FlashChannel::Red)), [112, 16, 16, 255]);
    }

    #[test]
    fn trough_is_black() {
        assert_eq!(shade(64, FlashChannel::Blue), 0xFF00_0000);
    }

    #[test]
    fn bands_scroll_one_pixel_per_frame() {
        let mut sweep = DiagonalSweep::new();
        let mut first = FrameBuffer::new(8, 8).unwrap();
        sweep.render(&mut first);

        sweep.advance();
        let mut second = FrameBuffer::new(8, 8).unwrap();
        sweep.render(&mut second);

        assert_eq!(second.pixel(3, 2), first.pixel(2, 2));
        assert_eq!(second.pixel(5, 7), first.pixel(4, 7));
    }

    #[test]
    fn negative_diagonals_wrap_into_the_band() {
        assert_eq!(shade(-1, FlashChannel::Green), shade(127, FlashChannel::Green));
    }
}
