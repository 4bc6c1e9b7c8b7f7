//! Animated idle background for emulator-style front ends.
//!
//! The crate fills CPU pixel buffers with a procedural color sweep driven by
//! a handful of drifting color tracks, tinted by a Dark or Light palette that
//! morphs smoothly when the theme is switched. Windowing, input and
//! presentation are left to the caller.

mod animator;
mod buffer;
mod color;
mod compositor;
mod config;
mod error;
#[cfg(feature = "render_metrics")]
mod metrics;
mod state;
mod sweep;
mod theme;
mod util;

pub use animator::{
    random_target, ColorAnimator, ColorTrack, DEFAULT_TRACK_COUNT, DEFAULT_TRACK_DURATION,
};
pub use buffer::FrameBuffer;
pub use color::Color;
pub use compositor::{ChannelRoles, FrameCompositor};
pub use config::AnimationConfig;
pub use error::{Error, Result};
#[cfg(feature = "render_metrics")]
pub use metrics::RenderLoopMetrics;
pub use state::AnimationState;
pub use sweep::{DiagonalSweep, FlashChannel};
pub use theme::{ColorRole, Palette, ThemeKind, ThemeTransitioner, DEFAULT_THEME_TRANSITION};
pub use util::{lerp, smoothstep};

pub use rand;
