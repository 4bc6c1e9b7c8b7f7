//! Resizable window showing the animated idle sweep under a themed menu strip.
//!
//! Click anywhere to toggle between the Dark and Light themes.
//!
//! Run with:   RUST_LOG=debug cargo run --example idle_sweep

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use idle_sweep::{AnimationConfig, AnimationState, FrameBuffer, Palette};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const FRAME_INTERVAL: Duration = Duration::from_millis(8);
/// Menu strip height in logical pixels.
const MENU_BAR_HEIGHT: f64 = 28.0;

struct App {
    window: Option<Arc<Window>>,
    softbuffer_context: Option<softbuffer::Context<Arc<Window>>>,
    softbuffer_surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    state: AnimationState,
    frame: FrameBuffer,
    pending_resize: Option<(u32, u32)>,
    last_frame_at: Instant,
    #[cfg(feature = "render_metrics")]
    metrics: idle_sweep::RenderLoopMetrics,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            softbuffer_context: None,
            softbuffer_surface: None,
            state: AnimationState::new(AnimationConfig::default()),
            frame: FrameBuffer::default(),
            pending_resize: Some((DEFAULT_WIDTH, DEFAULT_HEIGHT)),
            last_frame_at: Instant::now(),
            #[cfg(feature = "render_metrics")]
            metrics: idle_sweep::RenderLoopMetrics::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else { return };
        let Some(surface) = &mut self.softbuffer_surface else {
            return;
        };

        let frame_started_at = Instant::now();
        let delta = frame_started_at
            .saturating_duration_since(self.last_frame_at)
            .as_secs_f32();
        self.last_frame_at = frame_started_at;

        // Resizing happens between frames, before the fill.
        if let Some((width, height)) = self.pending_resize.take() {
            if let Err(error) = self.frame.resize(width, height) {
                log::error!("{error}");
                event_loop.exit();
                return;
            }
            let (width, height) = self.frame.size();
            if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height))
            {
                if let Err(error) = surface.resize(width, height) {
                    log::error!("Failed to resize surface: {error}");
                    event_loop.exit();
                    return;
                }
            }
        }

        self.state.advance(delta);
        self.state.render(&mut self.frame);
        paint_menu_bar(&mut self.frame, self.state.palette(), window.scale_factor());

        let mut buffer = match surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(error) => {
                log::error!("Failed to acquire surface buffer: {error}");
                event_loop.exit();
                return;
            }
        };
        let count = buffer.len().min(self.frame.len());
        for (destination, source) in buffer[..count].iter_mut().zip(self.frame.pixels()) {
            // softbuffer expects the top byte to be zero.
            *destination = source & 0x00FF_FFFF;
        }
        if let Err(error) = buffer.present() {
            log::error!("Failed to present frame: {error}");
            event_loop.exit();
            return;
        }

        #[cfg(feature = "render_metrics")]
        {
            self.metrics.record_frame(frame_started_at, Instant::now());
            if self.metrics.total_frame_count() % 240 == 0 {
                log::info!(
                    "{:.1} fps, {:?} per frame",
                    self.metrics.rolling_frames_per_second(),
                    self.metrics.rolling_average_frame_duration()
                );
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Idle Sweep RGB")
            .with_inner_size(winit::dpi::LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT))
            .with_resizable(true);
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                log::error!("Failed to create window: {error}");
                event_loop.exit();
                return;
            }
        };

        let context = match softbuffer::Context::new(window.clone()) {
            Ok(context) => context,
            Err(error) => {
                log::error!("Failed to create softbuffer context: {error}");
                event_loop.exit();
                return;
            }
        };
        let surface = match softbuffer::Surface::new(&context, window.clone()) {
            Ok(surface) => surface,
            Err(error) => {
                log::error!("Failed to create softbuffer surface: {error}");
                event_loop.exit();
                return;
            }
        };

        // The drawable is sized in physical pixels, so HiDPI displays get a
        // full-resolution sweep.
        let physical_size = window.inner_size();
        self.pending_resize = Some((physical_size.width, physical_size.height));
        log::info!(
            "Window created at {}x{} physical pixels (scale factor {})",
            physical_size.width,
            physical_size.height,
            window.scale_factor()
        );

        self.softbuffer_context = Some(context);
        self.softbuffer_surface = Some(surface);
        self.last_frame_at = Instant::now();
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else { return };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                self.pending_resize = Some((physical_size.width, physical_size.height));
                window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let physical_size = window.inner_size();
                self.pending_resize = Some((physical_size.width, physical_size.height));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                let theme = self.state.toggle_theme();
                log::info!("Theme switched to {theme}");
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
    }
}

/// Paints the top menu strip with the live palette.
fn paint_menu_bar(frame: &mut FrameBuffer, palette: &Palette, scale_factor: f64) {
    let width = frame.width() as usize;
    let bar_rows = ((MENU_BAR_HEIGHT * scale_factor).round() as usize).min(frame.height() as usize);
    let background = palette.menu_background.to_argb32();
    let underline = palette.accent.to_argb32();

    for (row_index, row) in frame
        .pixels_mut()
        .chunks_exact_mut(width)
        .take(bar_rows)
        .enumerate()
    {
        let color = if row_index + 1 == bar_rows {
            underline
        } else {
            background
        };
        row.fill(color);
    }
}

fn main() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(error) => {
            log::error!("Failed to start event loop: {error}");
            std::process::exit(1);
        }
    };

    let mut app = App::new();
    if let Err(error) = event_loop.run_app(&mut app) {
        log::error!("Event loop terminated: {error}");
        std::process::exit(1);
    }
}
