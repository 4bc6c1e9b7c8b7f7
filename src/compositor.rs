//! Per-pixel synthesis of the idle sweep.
//!
//! Every frame is recomputed from scratch: three sine waves whose phases are
//! fed by the animator's own colors are blended with those colors, tinted
//! toward the palette accent, scaled by the palette intensity and lifted by a
//! diagonal brightness pulse.

use crate::buffer::FrameBuffer;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::theme::{Palette, ThemeKind};
use crate::util::{axis_span, channel_to_u8, lerp, pack_argb, TAU};

/// Fraction of the accent color mixed into the sweep.
pub const DEFAULT_ACCENT_MIX: f32 = 0.18;
/// Peak brightness of the pulse before `idle_gain` is applied.
pub const DEFAULT_PULSE_AMPLITUDE: f32 = 0.06;

/// Which animator track feeds each of the red, green and blue roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRoles {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
}

impl ChannelRoles {
    pub const IDENTITY: ChannelRoles = ChannelRoles {
        red: 0,
        green: 1,
        blue: 2,
    };

    pub const REVERSED: ChannelRoles = ChannelRoles {
        red: 2,
        green: 1,
        blue: 0,
    };

    /// The Dark theme reads the tracks in reverse order, the Light theme in order.
    pub fn for_theme(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::REVERSED,
            ThemeKind::Light => Self::IDENTITY,
        }
    }

    /// Picks the three role colors out of the animator samples. Missing
    /// tracks read as mid-gray.
    pub fn select(&self, samples: &[Color]) -> [Color; 3] {
        let pick = |index: usize| samples.get(index).copied().unwrap_or(Color::GRAY);
        [pick(self.red), pick(self.green), pick(self.blue)]
    }
}

/// Fills frames with the animated sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCompositor {
    accent_mix: f32,
    pulse_amplitude: f32,
}

impl Default for FrameCompositor {
    fn default() -> Self {
        Self::new(DEFAULT_ACCENT_MIX, DEFAULT_PULSE_AMPLITUDE)
    }
}

impl FrameCompositor {
    pub fn new(accent_mix: f32, pulse_amplitude: f32) -> Self {
        Self {
            accent_mix,
            pulse_amplitude,
        }
    }

    pub fn accent_mix(&self) -> f32 {
        self.accent_mix
    }

    pub fn pulse_amplitude(&self) -> f32 {
        self.pulse_amplitude
    }

    /// Overwrites every pixel of `buffer` with the current frame.
    pub fn render(
        &self,
        samples: &[Color],
        palette: &Palette,
        kind: ThemeKind,
        buffer: &mut FrameBuffer,
    ) {
        let (width, height) = buffer.size();
        self.fill(samples, palette, kind, buffer.pixels_mut(), width, height);
    }

    /// Like [`render`](Self::render), for a caller-owned row-major slice of
    /// exactly `width * height` pixels.
    pub fn render_into(
        &self,
        samples: &[Color],
        palette: &Palette,
        kind: ThemeKind,
        pixels: &mut [u32],
        width: u32,
        height: u32,
    ) -> Result<()> {
        let expected = (width as usize).saturating_mul(height as usize);
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        self.fill(samples, palette, kind, pixels, width, height);
        Ok(())
    }

    /// Computes a single pixel at normalized coordinates `(fx, fy)`.
    pub fn shade(
        &self,
        fx: f32,
        fy: f32,
        samples: &[Color],
        palette: &Palette,
        kind: ThemeKind,
    ) -> u32 {
        let roles = ChannelRoles::for_theme(kind);
        let inputs = ShadeInputs::new(self, roles.select(samples), palette);
        inputs.shade(fx, fy)
    }

    fn fill(
        &self,
        samples: &[Color],
        palette: &Palette,
        kind: ThemeKind,
        pixels: &mut [u32],
        width: u32,
        height: u32,
    ) {
        if width == 0 || height == 0 {
            return;
        }

        let roles = ChannelRoles::for_theme(kind);
        let inputs = ShadeInputs::new(self, roles.select(samples), palette);
        let span_x = axis_span(width);
        let span_y = axis_span(height);

        for (y, row) in pixels.chunks_exact_mut(width as usize).enumerate() {
            let fy = y as f32 / span_y;
            for (x, pixel) in row.iter_mut().enumerate() {
                let fx = x as f32 / span_x;
                *pixel = inputs.shade(fx, fy);
            }
        }
    }
}

/// Everything the per-pixel formula reads, resolved once per frame.
struct ShadeInputs {
    red: [f32; 3],
    green: [f32; 3],
    blue: [f32; 3],
    accent: [f32; 3],
    accent_mix: f32,
    intensity: f32,
    pulse_scale: f32,
}

impl ShadeInputs {
    fn new(compositor: &FrameCompositor, roles: [Color; 3], palette: &Palette) -> Self {
        let [red, green, blue] = roles;
        Self {
            red: red.0,
            green: green.0,
            blue: blue.0,
            accent: palette.accent.0,
            accent_mix: compositor.accent_mix,
            intensity: palette.idle_intensity,
            pulse_scale: compositor.pulse_amplitude * palette.idle_gain,
        }
    }

    #[inline(always)]
    fn shade(&self, fx: f32, fy: f32) -> u32 {
        let (red, green, blue) = (&self.red, &self.green, &self.blue);

        // The animated colors double as phase offsets for their own waves.
        let v0 = wave((fx + red[0] * 0.5 + fy * 0.3) * TAU + red[1] * 2.0);
        let v1 = wave((fx * 1.2 + green[1] * 0.6 + fy * 0.2) * TAU + green[2] * 1.5);
        let v2 = wave((fx * 0.8 + blue[2] * 0.4 + fy * 0.1) * TAU + blue[0] * 2.2);

        let pulse = wave((fx + fy) * 12.0 + red[0] * 6.0) * self.pulse_scale;

        let mut channels = [0u8; 3];
        for (channel, out) in channels.iter_mut().enumerate() {
            let base = (v0 * red[channel] + v1 * green[channel] + v2 * blue[channel]) / 3.0;
            let tinted = lerp(base, self.accent[channel], self.accent_mix) * self.intensity;
            *out = channel_to_u8(tinted + pulse);
        }

        pack_argb(channels[0], channels[1], channels[2])
    }
}

/// A sine remapped to `[0, 1]`.
#[inline(always)]
fn wave(phase: f32) -> f32 {
    0.5 + 0.5 * phase.sin()
}
