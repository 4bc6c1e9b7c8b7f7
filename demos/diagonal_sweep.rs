//! The earlier gray diagonal sweep with rotating colored crests.
//!
//! Run with:   cargo run --example diagonal_sweep

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use idle_sweep::{DiagonalSweep, FrameBuffer};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Default)]
struct App {
    window: Option<Arc<Window>>,
    softbuffer_context: Option<softbuffer::Context<Arc<Window>>>,
    softbuffer_surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    sweep: DiagonalSweep,
    frame: FrameBuffer,
}

impl App {
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else { return };
        let Some(surface) = &mut self.softbuffer_surface else {
            return;
        };

        let size = window.inner_size();
        match self.frame.resize(size.width, size.height) {
            Ok(true) => {
                let (width, height) = self.frame.size();
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(width), NonZeroU32::new(height))
                {
                    if let Err(error) = surface.resize(width, height) {
                        log::error!("Failed to resize surface: {error}");
                        event_loop.exit();
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(error) => {
                log::error!("{error}");
                event_loop.exit();
                return;
            }
        }

        self.sweep.render(&mut self.frame);
        self.sweep.advance();

        let mut buffer = match surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(error) => {
                log::error!("Failed to acquire surface buffer: {error}");
                event_loop.exit();
                return;
            }
        };
        for (destination, source) in buffer.iter_mut().zip(self.frame.pixels()) {
            *destination = source & 0x00FF_FFFF;
        }
        if let Err(error) = buffer.present() {
            log::error!("Failed to present frame: {error}");
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Idle - Gray Sweep RGB")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
            .with_resizable(false);
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

        self.window = Some(window);
        self.softbuffer_context = Some(context);
        self.softbuffer_surface = Some(surface);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
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

fn main() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(error) => {
            log::error!("Failed to start event loop: {error}");
            std::process::exit(1);
        }
    };

    let mut app = App::default();
    if let Err(error) = event_loop.run_app(&mut app) {
        log::error!("Event loop terminated: {error}");
        std::process::exit(1);
    }
}
