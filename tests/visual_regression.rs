/// Visual regression tests for the idle sweep compositor.
///
/// These tests render deterministic states into a frame buffer, then validate
/// specific pixel locations against reference colors.
///
/// Run with:   cargo test --test visual_regression
use idle_sweep::{FrameBuffer, FrameCompositor, Palette, ThemeKind};
use idle_sweep_test_scenes::{
    check_pixels, distinct_expectations, distinct_state, gray_state, reference_expectations,
    seeded_state, PixelExpectation, CANVAS_HEIGHT, CANVAS_WIDTH,
};

fn assert_expectations(frame: &FrameBuffer, kind: ThemeKind) {
    assert_pixels(frame, &reference_expectations(kind));
}

fn assert_pixels(frame: &FrameBuffer, expectations: &[PixelExpectation]) {
    let failures = check_pixels(frame, expectations);
    if !failures.is_empty() {
        panic!(
            "{} pixel expectation(s) failed:\n{}",
            failures.len(),
            failures.join("\n"),
        );
    }
}

#[test]
fn gray_tracks_dark_reference_frame() {
    let state = gray_state(ThemeKind::Dark);
    let mut frame = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    state.render(&mut frame);
    assert_expectations(&frame, ThemeKind::Dark);
}

#[test]
fn gray_tracks_light_reference_frame() {
    let state = gray_state(ThemeKind::Light);
    let mut frame = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    state.render(&mut frame);
    assert_expectations(&frame, ThemeKind::Light);
}

/// Two independently built states with the same pinned tracks must produce
/// byte-identical frames.
#[test]
fn pinned_tracks_are_snapshot_stable() {
    let mut first = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    let mut second = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    gray_state(ThemeKind::Dark).render(&mut first);
    gray_state(ThemeKind::Dark).render(&mut second);
    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn single_pixel_frame_is_opaque() {
    let state = seeded_state(7, ThemeKind::Dark);
    let mut frame = FrameBuffer::new(1, 1).unwrap();
    state.render(&mut frame);

    assert_eq!(frame.len(), 1);
    assert_eq!(frame.pixels()[0] & 0xFF00_0000, 0xFF00_0000);
}

#[test]
fn zero_sized_drawable_renders_one_pixel() {
    let state = seeded_state(7, ThemeKind::Light);
    let mut frame = FrameBuffer::new(0, 0).unwrap();
    state.render(&mut frame);
    assert_eq!(frame.size(), (1, 1));
}

#[test]
fn single_row_and_column_frames_render() {
    let state = seeded_state(11, ThemeKind::Dark);
    for (width, height) in [(17, 1), (1, 9)] {
        let mut frame = FrameBuffer::new(width, height).unwrap();
        state.render(&mut frame);
        assert!(frame.pixels().iter().all(|pixel| pixel >> 24 == 0xFF));
    }
}

#[test]
fn every_frame_is_fully_overwritten() {
    let mut state = seeded_state(21, ThemeKind::Dark);
    let mut frame = FrameBuffer::new(40, 30).unwrap();
    for _ in 0..10 {
        frame.fill(0);
        state.advance(0.05);
        state.render(&mut frame);
        assert!(frame.pixels().iter().all(|pixel| pixel >> 24 == 0xFF));
    }
}

#[test]
fn distinct_tracks_dark_reference_frame() {
    let state = distinct_state(ThemeKind::Dark);
    let mut frame = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    state.render(&mut frame);
    assert_pixels(&frame, &distinct_expectations(ThemeKind::Dark));
}

#[test]
fn distinct_tracks_light_reference_frame() {
    let state = distinct_state(ThemeKind::Light);
    let mut frame = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    state.render(&mut frame);
    assert_pixels(&frame, &distinct_expectations(ThemeKind::Light));
}

/// Partway through a Dark -> Light switch the sweep is shaded with the
/// blended palette, so every channel lies strictly between the two settled
/// reference frames.
#[test]
fn mid_transition_frame_uses_blended_palette() {
    let mut state = gray_state(ThemeKind::Dark);
    state.switch_theme(ThemeKind::Light);
    state.advance(0.1);
    state.advance(0.1);
    assert!(state.theme().is_transitioning());
    assert_ne!(state.palette(), &Palette::DARK);
    assert_ne!(state.palette(), &Palette::LIGHT);

    let mut frame = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    state.render(&mut frame);

    let [r, g, b, a] = frame.rgba(0, 0).unwrap();
    assert_eq!(a, 0xFF);
    let channels = [("r", r, 86u8, 118u8), ("g", g, 94, 131), ("b", b, 104, 142)];
    for (label, actual, dark, light) in channels {
        assert!(
            actual > dark && actual < light,
            "{label} = {actual} is not strictly between {dark} and {light}"
        );
    }

    let blended = FrameCompositor::default().shade(
        0.0,
        0.0,
        &state.samples(),
        state.palette(),
        ThemeKind::Light,
    );
    assert_eq!(frame.pixel(0, 0), Some(blended));
}

#[test]
fn caller_owned_slice_matches_frame_buffer() {
    let state = gray_state(ThemeKind::Dark);
    let mut frame = FrameBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    state.render(&mut frame);

    let mut pixels = vec![0u32; (CANVAS_WIDTH * CANVAS_HEIGHT) as usize];
    state
        .render_into(&mut pixels, CANVAS_WIDTH, CANVAS_HEIGHT)
        .unwrap();
    assert_eq!(pixels.as_slice(), frame.pixels());
}
