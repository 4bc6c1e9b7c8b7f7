use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animator::ColorAnimator;
use crate::buffer::FrameBuffer;
use crate::color::Color;
use crate::compositor::FrameCompositor;
use crate::config::AnimationConfig;
use crate::error::Result;
use crate::theme::{Palette, ThemeKind, ThemeTransitioner};

/// Everything that changes from frame to frame: the color tracks, the theme
/// transition and the compositor settings.
///
/// The caller owns the state and drives it once per frame:
///
/// ```
/// use idle_sweep::{AnimationConfig, AnimationState, FrameBuffer, ThemeKind};
///
/// let mut state = AnimationState::new(AnimationConfig::default());
/// let mut frame = FrameBuffer::new(32, 24)?;
///
/// state.switch_theme(ThemeKind::Light);
/// state.advance(0.016);
/// state.render(&mut frame);
///
/// assert!(frame.pixels().iter().all(|pixel| pixel >> 24 == 0xFF));
/// # Ok::<(), idle_sweep::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnimationState<R = StdRng> {
    config: AnimationConfig,
    animator: ColorAnimator<R>,
    theme: ThemeTransitioner,
    compositor: FrameCompositor,
}

impl AnimationState<StdRng> {
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl Default for AnimationState<StdRng> {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl<R: Rng> AnimationState<R> {
    /// Builds the state with an explicit random source for target selection.
    pub fn with_rng(config: AnimationConfig, rng: R) -> Self {
        let config = config.sanitized();
        let animator = ColorAnimator::with_rng(config.track_count, config.track_duration, rng);
        Self::assemble(config, animator)
    }

    /// Builds the state around an already populated animator.
    pub fn from_parts(config: AnimationConfig, animator: ColorAnimator<R>) -> Self {
        Self::assemble(config.sanitized(), animator)
    }

    fn assemble(config: AnimationConfig, animator: ColorAnimator<R>) -> Self {
        Self {
            theme: ThemeTransitioner::new(config.initial_theme),
            compositor: FrameCompositor::new(config.accent_mix, config.pulse_amplitude),
            config,
            animator,
        }
    }

    /// Moves the animation forward by one frame.
    ///
    /// `delta_seconds` is clamped to `[0, max_frame_delta]`.
    pub fn advance(&mut self, delta_seconds: f32) {
        let delta = if delta_seconds.is_finite() {
            delta_seconds.clamp(0.0, self.config.max_frame_delta)
        } else {
            0.0
        };
        self.animator.update(delta, self.config.speed_multiplier);
        self.theme.update(delta);
    }

    pub fn switch_theme(&mut self, kind: ThemeKind) {
        self.theme.switch_to(kind, self.config.theme_transition);
    }

    /// Switches to the other theme and returns it.
    pub fn toggle_theme(&mut self) -> ThemeKind {
        self.theme.toggle(self.config.theme_transition)
    }

    /// Overwrites `frame` with the sweep for the current state.
    pub fn render(&self, frame: &mut FrameBuffer) {
        self.compositor.render(
            &self.animator.samples(),
            self.theme.current(),
            self.theme.target_kind(),
            frame,
        );
    }

    /// Renders into a caller-owned slice of exactly `width * height` pixels.
    pub fn render_into(&self, pixels: &mut [u32], width: u32, height: u32) -> Result<()> {
        self.compositor.render_into(
            &self.animator.samples(),
            self.theme.current(),
            self.theme.target_kind(),
            pixels,
            width,
            height,
        )
    }

    /// The live, possibly mid-transition palette for UI painters.
    pub fn palette(&self) -> &Palette {
        self.theme.current()
    }

    pub fn theme_kind(&self) -> ThemeKind {
        self.theme.target_kind()
    }

    pub fn theme(&self) -> &ThemeTransitioner {
        &self.theme
    }

    pub fn animator(&self) -> &ColorAnimator<R> {
        &self.animator
    }

    pub fn samples(&self) -> Vec<Color> {
        self.animator.samples()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::ColorTrack;
    use crate::util::smoothstep;

    fn seeded_state() -> AnimationState {
        AnimationState::with_rng(AnimationConfig::default(), StdRng::seed_from_u64(9))
    }

    #[test]
    fn advance_clamps_large_steps() {
        let mut state = seeded_state();
        state.advance(5.0);
        for track in state.animator().tracks() {
            assert!((track.elapsed() - 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn advance_ignores_negative_steps() {
        let mut state = seeded_state();
        state.advance(-1.0);
        for track in state.animator().tracks() {
            assert_eq!(track.elapsed(), 0.0);
        }
    }

    #[test]
    fn theme_switch_settles_after_transition_time() {
        let mut state = seeded_state();
        assert_eq!(state.toggle_theme(), ThemeKind::Light);
        for _ in 0..5 {
            state.advance(0.1);
        }
        assert_eq!(state.palette(), &Palette::LIGHT);
        assert_eq!(state.theme_kind(), ThemeKind::Light);
    }

    #[test]
    fn fixed_tracks_render_identical_frames() {
        let tracks = vec![ColorTrack::fixed(Color::GRAY, 3.0); 3];
        let animator = ColorAnimator::from_tracks(tracks, StdRng::seed_from_u64(1));
        let state = AnimationState::from_parts(AnimationConfig::default(), animator);

        let mut first = FrameBuffer::new(4, 4).unwrap();
        let mut second = FrameBuffer::new(4, 4).unwrap();
        state.render(&mut first);
        state.render(&mut second);
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn mid_transition_render_uses_blended_palette() {
        let tracks = vec![ColorTrack::fixed(Color::GRAY, 3.0); 3];
        let animator = ColorAnimator::from_tracks(tracks, StdRng::seed_from_u64(1));
        let mut state = AnimationState::from_parts(AnimationConfig::default(), animator);
        state.switch_theme(ThemeKind::Light);
        state.advance(0.1);
        state.advance(0.1);
        assert!(state.theme().is_transitioning());

        let blended = Palette::DARK.lerp(&Palette::LIGHT, smoothstep(state.theme().progress()));
        assert_eq!(state.palette(), &blended);

        let mut frame = FrameBuffer::new(4, 4).unwrap();
        state.render(&mut frame);
        let mut expected = FrameBuffer::new(4, 4).unwrap();
        FrameCompositor::default().render(
            &state.samples(),
            &blended,
            ThemeKind::Light,
            &mut expected,
        );
        assert_eq!(frame.pixels(), expected.pixels());

        let mut settled = FrameBuffer::new(4, 4).unwrap();
        FrameCompositor::default().render(
            &state.samples(),
            &Palette::LIGHT,
            ThemeKind::Light,
            &mut settled,
        );
        assert_ne!(frame.pixels(), settled.pixels());
    }

    #[test]
    fn too_few_tracks_are_topped_up() {
        let state = AnimationState::with_rng(
            AnimationConfig::default().with_track_count(1),
            StdRng::seed_from_u64(3),
        );
        assert_eq!(state.animator().len(), 3);
    }
}
