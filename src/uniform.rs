use glam::Mat4;

use crate::traits::uniform::{UniformSink, PROJECTION_UNIFORM, VIEW_UNIFORM};

/// View uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl ViewUniforms {
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.projection)
    }

    /// Raw bytes ready for a uniform buffer write
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSink for ViewUniforms {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        match name {
            VIEW_UNIFORM => self.view = value.to_cols_array_2d(),
            PROJECTION_UNIFORM => self.projection = value.to_cols_array_2d(),
            other => log::debug!("ViewUniforms has no slot for uniform '{other}'"),
        }
    }
}
