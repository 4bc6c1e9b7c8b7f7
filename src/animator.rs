//! Perpetually drifting color tracks.
//!
//! Each [`ColorTrack`] eases from a start color toward a random target over a
//! fixed duration. When a track arrives, the target becomes the new start, a
//! fresh target is drawn and any time left over from the step is carried into
//! the next leg, so the motion never pauses.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::util::{sanitize_delta, smoothstep};

/// Number of tracks the compositor reads.
pub const DEFAULT_TRACK_COUNT: usize = 3;
/// Seconds a track takes to reach its target.
pub const DEFAULT_TRACK_DURATION: f32 = 3.0;

/// Lower bound for randomly chosen target channels. Keeps targets away from
/// near-black so the sweep stays visible.
pub const MIN_TARGET_CHANNEL: f32 = 0.15;
pub const MAX_TARGET_CHANNEL: f32 = 1.0;

/// One looping color transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTrack {
    start: Color,
    target: Color,
    elapsed: f32,
    duration: f32,
}

impl ColorTrack {
    /// Creates a track at the beginning of a leg from `start` to `target`.
    pub fn new(start: Color, target: Color, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: sanitize_duration(duration),
        }
    }

    /// A track whose start and target are the same color.
    ///
    /// The track still re-targets when its leg completes; it only stays fixed
    /// while nothing advances it.
    pub fn fixed(color: Color, duration: f32) -> Self {
        Self::new(color, color, duration)
    }

    pub fn start(&self) -> Color {
        self.start
    }

    pub fn target(&self) -> Color {
        self.target
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Fraction of the current leg that has elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// The eased color for the current point of the leg.
    pub fn sample(&self) -> Color {
        self.start.lerp(self.target, smoothstep(self.progress()))
    }

    /// Advances the leg by `step` seconds. Returns `true` when the track
    /// re-targeted.
    fn advance<R: Rng>(&mut self, step: f32, rng: &mut R) -> bool {
        self.elapsed += step;
        if self.elapsed < self.duration {
            return false;
        }

        let leftover = self.elapsed - self.duration;
        self.start = self.target;
        self.target = random_target(rng);
        self.elapsed = leftover.min(self.duration);
        true
    }
}

fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        log::warn!(
            "Invalid track duration {duration}, using {DEFAULT_TRACK_DURATION}s instead"
        );
        DEFAULT_TRACK_DURATION
    }
}

/// Draws a color with every channel uniform in `[MIN_TARGET_CHANNEL, MAX_TARGET_CHANNEL]`.
pub fn random_target<R: Rng>(rng: &mut R) -> Color {
    Color([
        rng.gen_range(MIN_TARGET_CHANNEL..=MAX_TARGET_CHANNEL),
        rng.gen_range(MIN_TARGET_CHANNEL..=MAX_TARGET_CHANNEL),
        rng.gen_range(MIN_TARGET_CHANNEL..=MAX_TARGET_CHANNEL),
    ])
}

/// A fixed set of independent color tracks sharing one random source.
///
/// The random source is a type parameter so tests can drive target selection
/// with a seeded generator.
///
/// # Examples
///
/// ```
/// use idle_sweep::{ColorAnimator, Color};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut animator = ColorAnimator::with_rng(3, 3.0, StdRng::seed_from_u64(1));
/// assert_eq!(animator.sample(0), Some(Color::GRAY));
///
/// animator.update(1.5, 1.0);
/// assert!(animator.samples().iter().all(|color| color.0.iter().all(|c| (0.0..=1.0).contains(c))));
/// ```
#[derive(Debug, Clone)]
pub struct ColorAnimator<R = StdRng> {
    tracks: Vec<ColorTrack>,
    rng: R,
}

impl ColorAnimator<StdRng> {
    /// Creates `count` tracks seeded from operating system entropy.
    pub fn new(count: usize, base_duration: f32) -> Self {
        Self::with_rng(count, base_duration, StdRng::from_entropy())
    }
}

impl Default for ColorAnimator<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_TRACK_COUNT, DEFAULT_TRACK_DURATION)
    }
}

impl<R: Rng> ColorAnimator<R> {
    /// Creates `count` tracks starting at mid-gray, each with a fresh random target.
    pub fn with_rng(count: usize, base_duration: f32, mut rng: R) -> Self {
        let tracks = (0..count)
            .map(|_| ColorTrack::new(Color::GRAY, random_target(&mut rng), base_duration))
            .collect();
        Self { tracks, rng }
    }

    /// Wraps explicitly constructed tracks.
    pub fn from_tracks(tracks: Vec<ColorTrack>, rng: R) -> Self {
        Self { tracks, rng }
    }

    /// Advances every track by `delta_seconds * speed_multiplier`.
    ///
    /// Callers are expected to bound `delta_seconds` (see
    /// [`AnimationConfig::max_frame_delta`](crate::AnimationConfig::max_frame_delta));
    /// a single call re-targets each track at most once.
    pub fn update(&mut self, delta_seconds: f32, speed_multiplier: f32) {
        let step = sanitize_delta(delta_seconds * speed_multiplier);
        if step == 0.0 {
            return;
        }

        for (index, track) in self.tracks.iter_mut().enumerate() {
            if track.advance(step, &mut self.rng) {
                log::trace!(
                    "Track {index} re-targeted to {:?} with {:.4}s carried over",
                    track.target,
                    track.elapsed
                );
            }
        }
    }

    /// Eased color of track `index`, or `None` if there is no such track.
    pub fn sample(&self, index: usize) -> Option<Color> {
        self.tracks.get(index).map(ColorTrack::sample)
    }

    /// Eased colors of all tracks, in track order.
    pub fn samples(&self) -> Vec<Color> {
        self.tracks.iter().map(ColorTrack::sample).collect()
    }

    pub fn track(&self, index: usize) -> Result<&ColorTrack> {
        self.tracks.get(index).ok_or(Error::InvalidTrack(index))
    }

    pub fn tracks(&self) -> &[ColorTrack] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
