pub(crate) const TAU: f32 = std::f32::consts::TAU;

#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-in/ease-out on `[0, 1]`. Inputs outside the range saturate.
#[inline(always)]
pub fn smoothstep(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    t * t * (3.0 - 2.0 * t)
}

/// Converts a normalized channel to 8 bits, rounding half up.
#[inline(always)]
pub fn channel_to_u8(value: f32) -> u8 {
    // NaN maps to 0
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    (clamped * 255.0 + 0.5) as u8
}

#[inline(always)]
pub fn pack_argb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline(always)]
pub fn unpack_argb(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
        (pixel >> 24) as u8,
    ]
}

/// Divisor used to map a pixel index on an axis of `extent` pixels into `[0, 1]`.
///
/// A single-pixel axis has no span, so it is treated as `1` to keep the
/// coordinate at zero instead of dividing by zero.
#[inline(always)]
pub(crate) fn axis_span(extent: u32) -> f32 {
    extent.saturating_sub(1).max(1) as f32
}

/// Replaces a non-finite or negative time step with zero.
#[inline(always)]
pub(crate) fn sanitize_delta(delta_seconds: f32) -> f32 {
    if delta_seconds.is_finite() && delta_seconds > 0.0 {
        delta_seconds
    } else {
        0.0
    }
}
