use idle_sweep::rand::rngs::StdRng;
use idle_sweep::rand::SeedableRng;
use idle_sweep::{AnimationConfig, AnimationState, Color, ColorAnimator, ColorTrack, ThemeKind};

use crate::expectations::PixelExpectation;

pub const CANVAS_WIDTH: u32 = 4;
pub const CANVAS_HEIGHT: u32 = 4;

const TRACK_DURATION: f32 = 3.0;
const SCENE_SEED: u64 = 0x1d1e;

/// A state settled on `kind` whose tracks are pinned to `colors`.
///
/// Nothing moves until the state is advanced, which makes its frames
/// suitable for snapshot comparison.
pub fn fixed_state(colors: [Color; 3], kind: ThemeKind) -> AnimationState {
    let tracks = colors
        .iter()
        .map(|color| ColorTrack::fixed(*color, TRACK_DURATION))
        .collect();
    let animator = ColorAnimator::from_tracks(tracks, StdRng::seed_from_u64(SCENE_SEED));
    AnimationState::from_parts(config_for(kind), animator)
}

/// All three tracks pinned to mid-gray.
pub fn gray_state(kind: ThemeKind) -> AnimationState {
    fixed_state([Color::GRAY; 3], kind)
}

/// Three pinned tracks with unrelated channels, so every track index the
/// sweep formula reads shows up in the output.
pub const DISTINCT_TRACKS: [Color; 3] = [
    Color::rgb(0.9, 0.3, 0.2),
    Color::rgb(0.25, 0.8, 0.4),
    Color::rgb(0.35, 0.45, 0.95),
];

/// [`DISTINCT_TRACKS`] pinned on a state settled on `kind`.
pub fn distinct_state(kind: ThemeKind) -> AnimationState {
    fixed_state(DISTINCT_TRACKS, kind)
}

/// A regular animated state with reproducible target selection.
pub fn seeded_state(seed: u64, kind: ThemeKind) -> AnimationState {
    AnimationState::with_rng(config_for(kind), StdRng::seed_from_u64(seed))
}

fn config_for(kind: ThemeKind) -> AnimationConfig {
    AnimationConfig::default()
        .with_track_duration(TRACK_DURATION)
        .with_initial_theme(kind)
}

/// Reference pixels of a [`gray_state`] frame on the `CANVAS_WIDTH` ×
/// `CANVAS_HEIGHT` canvas.
pub fn reference_expectations(kind: ThemeKind) -> Vec<PixelExpectation> {
    match kind {
        ThemeKind::Dark => vec![
            PixelExpectation::opaque(0, 0, 86, 94, 104, "dark_top_left"),
            PixelExpectation::opaque(3, 0, 80, 88, 98, "dark_top_right"),
            PixelExpectation::opaque(1, 2, 51, 60, 69, "dark_inner"),
            PixelExpectation::opaque(3, 3, 64, 72, 82, "dark_bottom_right"),
        ],
        ThemeKind::Light => vec![
            PixelExpectation::opaque(0, 0, 118, 131, 142, "light_top_left"),
            PixelExpectation::opaque(3, 0, 112, 125, 136, "light_top_right"),
            PixelExpectation::opaque(1, 2, 71, 84, 95, "light_inner"),
            PixelExpectation::opaque(3, 3, 91, 104, 115, "light_bottom_right"),
        ],
    }
}

/// Reference pixels of a [`distinct_state`] frame on the `CANVAS_WIDTH` ×
/// `CANVAS_HEIGHT` canvas.
///
/// Dark reads the tracks in reverse order and Light in order, so each theme
/// pins its own channel mapping. The chosen pixels sit well away from a
/// rounding boundary and are matched exactly.
pub fn distinct_expectations(kind: ThemeKind) -> Vec<PixelExpectation> {
    let expectations = match kind {
        ThemeKind::Dark => vec![
            PixelExpectation::opaque(0, 0, 92, 89, 112, "dark_distinct_top_left"),
            PixelExpectation::opaque(3, 0, 97, 82, 110, "dark_distinct_top_right"),
            PixelExpectation::opaque(1, 2, 50, 81, 77, "dark_distinct_inner"),
            PixelExpectation::opaque(3, 3, 87, 79, 80, "dark_distinct_bottom_right"),
            PixelExpectation::opaque(0, 3, 64, 58, 69, "dark_distinct_bottom_left"),
        ],
        ThemeKind::Light => vec![
            PixelExpectation::opaque(0, 0, 54, 65, 83, "light_distinct_top_left"),
            PixelExpectation::opaque(3, 0, 56, 61, 103, "light_distinct_top_right"),
            PixelExpectation::opaque(1, 2, 72, 85, 71, "light_distinct_inner"),
            PixelExpectation::opaque(2, 1, 99, 102, 113, "light_distinct_upper_inner"),
            PixelExpectation::opaque(0, 3, 20, 31, 48, "light_distinct_bottom_left"),
        ],
    };

    expectations
        .into_iter()
        .map(|expectation| expectation.with_tolerance(0))
        .collect()
}
