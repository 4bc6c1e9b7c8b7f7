use crate::animator::{DEFAULT_TRACK_COUNT, DEFAULT_TRACK_DURATION};
use crate::compositor::{DEFAULT_ACCENT_MIX, DEFAULT_PULSE_AMPLITUDE};
use crate::theme::{ThemeKind, DEFAULT_THEME_TRANSITION};

/// Longest time step a single frame may advance the animation by.
pub const DEFAULT_MAX_FRAME_DELTA: f32 = 0.1;

/// Tunables for an [`AnimationState`](crate::AnimationState).
///
/// ```
/// use idle_sweep::{AnimationConfig, ThemeKind};
///
/// let config = AnimationConfig::default()
///     .with_initial_theme(ThemeKind::Light)
///     .with_speed_multiplier(1.5);
/// assert_eq!(config.track_count, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub track_count: usize,
    /// Seconds each color track takes to reach its target.
    pub track_duration: f32,
    pub speed_multiplier: f32,
    /// Seconds a theme switch takes.
    pub theme_transition: f32,
    /// Upper bound on the delta accepted by a single `advance`, so a stalled
    /// frame does not make the animation jump.
    pub max_frame_delta: f32,
    pub initial_theme: ThemeKind,
    pub accent_mix: f32,
    pub pulse_amplitude: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            track_count: DEFAULT_TRACK_COUNT,
            track_duration: DEFAULT_TRACK_DURATION,
            speed_multiplier: 1.0,
            theme_transition: DEFAULT_THEME_TRANSITION,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            initial_theme: ThemeKind::Dark,
            accent_mix: DEFAULT_ACCENT_MIX,
            pulse_amplitude: DEFAULT_PULSE_AMPLITUDE,
        }
    }
}

impl AnimationConfig {
    pub fn with_track_count(mut self, track_count: usize) -> Self {
        self.track_count = track_count;
        self
    }

    pub fn with_track_duration(mut self, seconds: f32) -> Self {
        self.track_duration = seconds;
        self
    }

    pub fn with_speed_multiplier(mut self, speed_multiplier: f32) -> Self {
        self.speed_multiplier = speed_multiplier;
        self
    }

    pub fn with_theme_transition(mut self, seconds: f32) -> Self {
        self.theme_transition = seconds;
        self
    }

    pub fn with_max_frame_delta(mut self, seconds: f32) -> Self {
        self.max_frame_delta = seconds;
        self
    }

    pub fn with_initial_theme(mut self, kind: ThemeKind) -> Self {
        self.initial_theme = kind;
        self
    }

    pub fn with_accent_mix(mut self, accent_mix: f32) -> Self {
        self.accent_mix = accent_mix;
        self
    }

    pub fn with_pulse_amplitude(mut self, amplitude: f32) -> Self {
        self.pulse_amplitude = amplitude;
        self
    }

    /// Replaces out-of-range values with their defaults, logging each fix.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut config = self;

        if config.track_count < DEFAULT_TRACK_COUNT {
            log::warn!(
                "track_count {} is below the {DEFAULT_TRACK_COUNT} tracks the compositor reads",
                config.track_count
            );
            config.track_count = DEFAULT_TRACK_COUNT;
        }
        config.track_duration =
            positive_or("track_duration", config.track_duration, defaults.track_duration);
        config.theme_transition = positive_or(
            "theme_transition",
            config.theme_transition,
            defaults.theme_transition,
        );
        config.max_frame_delta =
            positive_or("max_frame_delta", config.max_frame_delta, defaults.max_frame_delta);

        if !config.speed_multiplier.is_finite() || config.speed_multiplier < 0.0 {
            log::warn!(
                "speed_multiplier {} is invalid, using {}",
                config.speed_multiplier,
                defaults.speed_multiplier
            );
            config.speed_multiplier = defaults.speed_multiplier;
        }
        if !(0.0..=1.0).contains(&config.accent_mix) {
            log::warn!("accent_mix {} is outside [0, 1], clamping", config.accent_mix);
            config.accent_mix = if config.accent_mix.is_nan() {
                defaults.accent_mix
            } else {
                config.accent_mix.clamp(0.0, 1.0)
            };
        }
        if !config.pulse_amplitude.is_finite() || config.pulse_amplitude < 0.0 {
            log::warn!(
                "pulse_amplitude {} is invalid, using {}",
                config.pulse_amplitude,
                defaults.pulse_amplitude
            );
            config.pulse_amplitude = defaults.pulse_amplitude;
        }

        config
    }
}

fn positive_or(name: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{name} {value} must be positive, using {fallback}");
        fallback
    }
}
