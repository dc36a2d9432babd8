use glam::{Mat4, Vec3};

use crate::config::CameraPose;

/// Pitch is held strictly inside +/-90 degrees so the look-at basis never flips
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 120.0;

/// Movement axis for `Camera::apply_translation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-fly camera: world position plus a yaw/pitch orientation in degrees.
///
/// `front` and `right` are unit length and only change in `apply_orientation_delta`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
}

impl Camera {
    /// Build a camera from a starting pose.
    ///
    /// Yaw and pitch are recovered from the pose's facing direction so the
    /// first pointer delta continues smoothly from it.
    pub fn new(pose: CameraPose) -> Self {
        let front = pose.front.try_normalize().unwrap_or(Vec3::NEG_Z);
        let up = pose.up.try_normalize().unwrap_or(Vec3::Y);

        let yaw = front.z.atan2(front.x).to_degrees();
        let pitch = front
            .y
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        Self {
            position: pose.position,
            front,
            up,
            right: strafe_axis(front, up),
            yaw,
            pitch,
            zoom: pose.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the field of view, clamped to [`MIN_ZOOM`, `MAX_ZOOM`]
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Narrow (positive delta) or widen (negative delta) the field of view
    pub fn apply_zoom_delta(&mut self, delta: f32) {
        self.set_zoom(self.zoom - delta);
    }

    /// World-to-camera transform looking from `position` along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection with `zoom` as the vertical field of view
    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, near, far)
    }

    /// Orthographic projection spanning `half_height` world units above and below center
    pub fn orthographic_matrix(&self, aspect_ratio: f32, half_height: f32, near: f32, far: f32) -> Mat4 {
        let half_width = half_height * aspect_ratio;
        Mat4::orthographic_rh_gl(-half_width, half_width, -half_height, half_height, near, far)
    }

    /// Rotate by the given yaw/pitch deltas in degrees.
    ///
    /// Pitch is clamped to +/-[`PITCH_LIMIT`] before `front` is rebuilt.
    pub fn apply_orientation_delta(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Move along one camera axis by `speed` world units.
    ///
    /// Callers pass `base_speed * delta_time` so motion is frame-rate independent.
    pub fn apply_translation(&mut self, direction: Direction, speed: f32) {
        match direction {
            Direction::Forward => self.position += self.front * speed,
            Direction::Backward => self.position -= self.front * speed,
            Direction::Left => self.position -= self.right * speed,
            Direction::Right => self.position += self.right * speed,
            Direction::Up => self.position += self.up * speed,
            Direction::Down => self.position -= self.up * speed,
        }
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = strafe_axis(self.front, self.up);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraPose::default())
    }
}

// front x up; falls back to +X when looking straight along the up axis
fn strafe_axis(front: Vec3, up: Vec3) -> Vec3 {
    front.cross(up).try_normalize().unwrap_or(Vec3::X)
}
