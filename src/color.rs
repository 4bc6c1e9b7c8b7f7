use crate::util::{channel_to_u8, lerp, pack_argb};

/// Represents a color as three linear floating point channels.
///
/// Channels are expected to lie in `[0.0, 1.0]`; nothing enforces it, values
/// are only clamped when converted to 8-bit output.
///
/// # Examples
///
/// ```
/// use idle_sweep::Color;
///
/// let gray = Color::GRAY;
/// assert_eq!(gray.to_array(), [0.5, 0.5, 0.5]);
///
/// let blue = Color::rgb(0.0, 0.0, 1.0);
/// assert_eq!(blue.to_argb32(), 0xFF00_00FF);
///
/// let halfway = Color::BLACK.lerp(Color::WHITE, 0.5);
/// assert_eq!(halfway, Color::GRAY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(pub [f32; 3]);

impl Color {
    /// A black color.
    pub const BLACK: Self = Self([0.0, 0.0, 0.0]);
    /// A white color.
    pub const WHITE: Self = Self([1.0, 1.0, 1.0]);
    /// Mid-gray, the starting point of every animation track.
    pub const GRAY: Self = Self([0.5, 0.5, 0.5]);

    /// Creates a new color from red, green and blue channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use idle_sweep::Color;
    ///
    /// let accent = Color::rgb(0.43, 0.70, 1.0);
    /// assert_eq!(accent.g(), 0.70);
    /// ```
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Creates a color from 8-bit channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use idle_sweep::Color;
    ///
    /// let white = Color::from_rgb8(255, 255, 255);
    /// assert_eq!(white, Color::WHITE);
    /// ```
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    /// Linear blend toward `other`. `t = 0` returns `self`, `t = 1` returns `other`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color([
            lerp(self.0[0], other.0[0], t),
            lerp(self.0[1], other.0[1], t),
            lerp(self.0[2], other.0[2], t),
        ])
    }

    /// Returns the channels as 8-bit values, clamped and rounded.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_u8(self.0[0]),
            channel_to_u8(self.0[1]),
            channel_to_u8(self.0[2]),
        ]
    }

    /// Packs the color as a fully opaque `0xAARRGGBB` pixel.
    pub fn to_argb32(&self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        pack_argb(r, g, b)
    }

    pub fn to_array(&self) -> [f32; 3] {
        self.0
    }
}

impl From<[f32; 3]> for Color {
    fn from(channels: [f32; 3]) -> Self {
        Self(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_from_black_to_white_is_linear() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.25), Color::rgb(0.25, 0.25, 0.25));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn argb_packing_clamps_out_of_range_channels() {
        assert_eq!(Color::rgb(2.0, -1.0, 0.5).to_argb32(), 0xFFFF_0080);
    }
}
