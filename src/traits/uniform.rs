use glam::Mat4;

/// Uniform name the view matrix is uploaded under
pub const VIEW_UNIFORM: &str = "view";
/// Uniform name the projection matrix is uploaded under
pub const PROJECTION_UNIFORM: &str = "projection";

/// Shader collaborator - receives named 4x4 matrices once per frame
pub trait UniformSink {
    fn set_mat4(&mut self, name: &str, value: Mat4);
}
