use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    window::WindowId,
};

use scene_view::cli::Cli;
use scene_view::core::{FrameClock, WinitController};
use scene_view::traits::WindowContext;
use scene_view::window::DisplayWindow;
use scene_view::{ViewConfig, ViewController, ViewUniforms};

/// Pixels per line for trackpads that report pixel scroll deltas
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

// === Application ===

struct App {
    config: ViewConfig,
    window: Option<DisplayWindow>,
    view: ViewController,
    keys: WinitController,
    clock: FrameClock,
    uniforms: ViewUniforms,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewConfig) -> Self {
        Self {
            view: ViewController::new(config.clone()),
            config,
            window: None,
            keys: WinitController::new(),
            clock: FrameClock::new(),
            uniforms: ViewUniforms::new(),
            startup_error: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &mut self.window else {
            return;
        };

        let delta = self.view.on_frame_tick(self.clock.now());
        self.view.poll_keyboard(&self.keys, &mut *window, delta);

        if window.close_requested() {
            event_loop.exit();
            return;
        }

        self.view.prepare_scene_view(Some(&mut self.uniforms));
        log::trace!(
            "frame dt={:.4}s view={:?}",
            delta,
            self.uniforms.view_matrix()
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match DisplayWindow::create(event_loop, &self.config) {
            Ok(window) => {
                let dims = window.dimensions();
                self.view.on_resize(dims.width, dims.height);
                self.window = Some(window);
            }
            Err(e) => {
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.keys.process_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.view.on_resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.view.on_pointer_move(position.x, position.y);
            }
            WindowEvent::CursorEntered { .. } => self.view.on_pointer_enter(),
            WindowEvent::CursorLeft { .. } => self.view.on_pointer_leave(),
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                self.view.on_scroll(lines);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.view_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!("Scene View - Controls: WASD move, Q/E down/up, mouse look, scroll zoom, P/O projection, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
