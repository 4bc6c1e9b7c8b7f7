//! Renders a few seconds of the idle sweep offscreen and writes PNG snapshots.
//!
//! Run with:   cargo run --example snapshot -- [output_dir]

use std::path::PathBuf;

use idle_sweep::rand::rngs::StdRng;
use idle_sweep::rand::SeedableRng;
use idle_sweep::{AnimationConfig, AnimationState, FrameBuffer, ThemeKind};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const FRAME_DELTA: f32 = 1.0 / 60.0;

fn save_png(frame: &FrameBuffer, path: &PathBuf) -> Result<(), image::ImageError> {
    let image = image::RgbaImage::from_fn(frame.width(), frame.height(), |x, y| {
        image::Rgba(frame.rgba(x, y).unwrap_or([0, 0, 0, 0xFF]))
    });
    image.save(path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut state = AnimationState::with_rng(
        AnimationConfig::default().with_initial_theme(ThemeKind::Dark),
        StdRng::seed_from_u64(2024),
    );
    let mut frame = FrameBuffer::new(WIDTH, HEIGHT)?;

    for (index, kind) in [ThemeKind::Dark, ThemeKind::Light].into_iter().enumerate() {
        state.switch_theme(kind);
        for _ in 0..120 {
            state.advance(FRAME_DELTA);
        }
        state.render(&mut frame);

        let path = output_dir.join(format!("idle_sweep_{index}_{}.png", kind.name().to_lowercase()));
        save_png(&frame, &path)?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
