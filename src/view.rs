// view.rs - Translates raw window input into camera motion and per-frame matrices
use glam::Mat4;

use crate::camera::{Camera, Direction};
use crate::config::ViewConfig;
use crate::traits::controller::{Button, Controller};
use crate::traits::uniform::{UniformSink, PROJECTION_UNIFORM, VIEW_UNIFORM};
use crate::traits::window::{WindowContext, WindowDimensions};

/// Held keys and the axis each one moves along
const MOVEMENT_KEYS: [(Button, Direction); 6] = [
    (Button::KeyW, Direction::Forward),
    (Button::KeyS, Direction::Backward),
    (Button::KeyA, Direction::Left),
    (Button::KeyD, Direction::Right),
    (Button::KeyE, Direction::Up),
    (Button::KeyQ, Direction::Down),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

/// Last pointer sample, used to turn absolute cursor positions into deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    last_x: f32,
    last_y: f32,
    first_sample: bool,
}

impl PointerTracker {
    /// Start centered in the window, waiting for a first sample
    pub fn new(dimensions: WindowDimensions) -> Self {
        Self {
            last_x: dimensions.width as f32 / 2.0,
            last_y: dimensions.height as f32 / 2.0,
            first_sample: true,
        }
    }

    /// Record a sample and return the (x, y) offset since the previous one.
    /// Y is flipped because screen rows grow downward. The first sample only seeds.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let offset = if self.first_sample {
            self.first_sample = false;
            None
        } else {
            Some((x - self.last_x, self.last_y - y))
        };
        self.last_x = x;
        self.last_y = y;
        offset
    }

    /// Treat the next sample as a first sample again
    pub fn rearm(&mut self) {
        self.first_sample = true;
    }

    pub fn last_position(&self) -> (f32, f32) {
        (self.last_x, self.last_y)
    }

    pub fn awaiting_first_sample(&self) -> bool {
        self.first_sample
    }
}

/// Owns the camera and the input bookkeeping for one viewport
#[derive(Debug, Clone)]
pub struct ViewController {
    camera: Camera,
    config: ViewConfig,
    dimensions: WindowDimensions,
    pointer: PointerTracker,
    delta_time: f32,
    last_frame_time: f32,
    projection_mode: ProjectionMode,
}

impl ViewController {
    pub fn new(config: ViewConfig) -> Self {
        let dimensions = config.dimensions();
        Self {
            camera: Camera::new(config.pose),
            pointer: PointerTracker::new(dimensions),
            dimensions,
            config,
            delta_time: 0.0,
            last_frame_time: 0.0,
            projection_mode: ProjectionMode::default(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn dimensions(&self) -> WindowDimensions {
        self.dimensions
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Seconds between the two most recent frame ticks
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        if self.projection_mode != mode {
            log::debug!("Projection mode: {:?}", mode);
            self.projection_mode = mode;
        }
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        log::debug!("Viewport resized to {}x{}", width, height);
        self.dimensions = WindowDimensions::new(width, height);
    }

    /// Cursor moved to (x, y) in window pixels.
    /// Returns true when the camera orientation changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        let (x, y) = (x as f32, y as f32);
        if !x.is_finite() || !y.is_finite() {
            log::trace!("Ignoring non-finite pointer sample ({x}, {y})");
            return false;
        }

        let Some((dx, dy)) = self.pointer.sample(x, y) else {
            return false;
        };

        let sensitivity = self.config.sensitivity;
        self.camera.apply_orientation_delta(dx * sensitivity, dy * sensitivity);
        log::trace!(
            "yaw={:.2} pitch={:.2}",
            self.camera.yaw(),
            self.camera.pitch()
        );
        true
    }

    /// Cursor entered the window; its first position must not cause a jump
    pub fn on_pointer_enter(&mut self) {
        self.pointer.rearm();
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.rearm();
    }

    /// Scroll wheel moved by `delta_lines`; positive scrolls narrow the field of view
    pub fn on_scroll(&mut self, delta_lines: f32) {
        if !delta_lines.is_finite() {
            return;
        }
        self.camera.apply_zoom_delta(delta_lines * self.config.zoom_speed);
    }

    /// Advance frame timing to `current_time` seconds and return the elapsed delta
    pub fn on_frame_tick(&mut self, current_time: f32) -> f32 {
        self.delta_time = (current_time - self.last_frame_time).max(0.0);
        self.last_frame_time = current_time;
        self.delta_time
    }

    /// Apply held movement keys for this frame.
    ///
    /// Escape asks the window to close; P and O switch projection mode.
    pub fn poll_keyboard(
        &mut self,
        keys: &dyn Controller,
        window: &mut dyn WindowContext,
        delta_time: f32,
    ) {
        if keys.is_down(Button::Escape) {
            log::info!("Exit key held, requesting window close");
            window.request_close();
        }

        let speed = self.config.move_speed * delta_time;
        for (button, direction) in MOVEMENT_KEYS {
            if keys.is_down(button) {
                self.camera.apply_translation(direction, speed);
            }
        }

        if keys.is_down(Button::KeyP) {
            self.set_projection_mode(ProjectionMode::Perspective);
        }
        if keys.is_down(Button::KeyO) {
            self.set_projection_mode(ProjectionMode::Orthographic);
        }
    }

    pub fn current_view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn current_projection_matrix(&self) -> Mat4 {
        let aspect = self.dimensions.aspect_ratio();
        let (near, far) = (self.config.near_plane, self.config.far_plane);
        match self.projection_mode {
            ProjectionMode::Perspective => self.camera.projection_matrix(aspect, near, far),
            ProjectionMode::Orthographic => {
                self.camera
                    .orthographic_matrix(aspect, self.config.ortho_half_height, near, far)
            }
        }
    }

    /// Upload this frame's view and projection matrices. No-op without a sink.
    pub fn prepare_scene_view(&self, sink: Option<&mut dyn UniformSink>) {
        let Some(sink) = sink else {
            return;
        };
        sink.set_mat4(VIEW_UNIFORM, self.current_view_matrix());
        sink.set_mat4(PROJECTION_UNIFORM, self.current_projection_matrix());
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
