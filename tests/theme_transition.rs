use idle_sweep::rand::rngs::StdRng;
use idle_sweep::rand::{Rng, SeedableRng};
use idle_sweep::{ColorAnimator, ColorRole, Palette, ThemeKind, ThemeTransitioner};

fn assert_palette_eq(actual: &Palette, expected: &Palette) {
    for role in ColorRole::ALL {
        assert_eq!(actual.color(role), expected.color(role), "{role:?} differs");
    }
    assert_eq!(actual.idle_gain, expected.idle_gain);
    assert_eq!(actual.idle_intensity, expected.idle_intensity);
}

#[test]
fn switching_mid_transition_converges_exactly() {
    let mut theme = ThemeTransitioner::new(ThemeKind::Dark);
    theme.switch_to(ThemeKind::Dark, 1.0);
    theme.update(0.7);

    theme.switch_to(ThemeKind::Light, 0.45);
    theme.update(0.45);

    assert!(!theme.is_transitioning());
    assert_palette_eq(theme.current(), &Palette::LIGHT);
}

#[test]
fn round_trip_returns_to_dark_without_drift() {
    let mut theme = ThemeTransitioner::new(ThemeKind::Dark);
    for _ in 0..25 {
        theme.switch_to(ThemeKind::Light, 0.45);
        theme.update(0.2);
        theme.switch_to(ThemeKind::Dark, 0.45);
        theme.update(0.1);
    }

    theme.update(1.0);
    assert_palette_eq(theme.current(), &Palette::DARK);
}

#[test]
fn settled_theme_ignores_further_updates() {
    let mut theme = ThemeTransitioner::new(ThemeKind::Dark);
    theme.switch_to(ThemeKind::Light, 0.45);
    theme.update(10.0);
    let settled = *theme.current();

    for _ in 0..100 {
        theme.update(0.016);
    }
    assert_palette_eq(theme.current(), &settled);
}

#[test]
fn mid_transition_palette_lies_between_endpoints() {
    let mut theme = ThemeTransitioner::new(ThemeKind::Dark);
    theme.switch_to(ThemeKind::Light, 0.45);
    theme.update(0.15);

    let gain = theme.current().idle_gain;
    assert!(gain > Palette::DARK.idle_gain && gain < Palette::LIGHT.idle_gain);
    assert_eq!(theme.target_kind(), ThemeKind::Light);
}

#[test]
fn animator_elapsed_stays_bounded_under_random_frame_times() {
    let mut animator = ColorAnimator::with_rng(3, 3.0, StdRng::seed_from_u64(99));
    let mut frame_times = StdRng::seed_from_u64(100);

    for _ in 0..10_000 {
        animator.update(frame_times.gen_range(0.0..0.1), 1.0);
        for track in animator.tracks() {
            assert!((0.0..=track.duration()).contains(&track.elapsed()));
        }
        for sample in animator.samples() {
            assert!(sample.0.iter().all(|channel| (0.0..=1.0).contains(channel)));
        }
    }
}

#[test]
fn fresh_track_retargets_once_on_full_duration_step() {
    let mut animator = ColorAnimator::with_rng(3, 3.0, StdRng::seed_from_u64(5));
    let prior_targets: Vec<_> = animator.tracks().iter().map(|track| track.target()).collect();

    animator.update(3.0, 1.0);

    for (track, prior_target) in animator.tracks().iter().zip(prior_targets) {
        assert_eq!(track.elapsed(), 0.0);
        assert_eq!(track.start(), prior_target);
    }
}
