//! # Vertex Formats
//!
//! GPU vertex layouts for mesh objects and for the batched particle field.
//! Both types are `#[repr(C)]` and [`bytemuck::Pod`] so vertex slices can be
//! uploaded with `bytemuck::cast_slice` directly.

use std::mem;

/// Mesh vertex with position, normal and texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

impl Vertex3D {
    /// Vertex buffer layout
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Normal (Float32x3)
    /// - Attribute 2: UV (Float32x2)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRIBUTES,
        }
    }
}

/// A single point of the particle field
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    /// Point size in world units
    pub size: f32,
    /// RGBA, alpha carries the field opacity
    pub color: [f32; 4],
}

const PARTICLE_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x4];

impl ParticleVertex {
    /// Vertex buffer layout of the point batch
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Size (Float32)
    /// - Attribute 2: Color (Float32x4)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ParticleVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &PARTICLE_ATTRIBUTES,
        }
    }

    /// Particles are drawn as one point list
    pub const TOPOLOGY: wgpu::PrimitiveTopology = wgpu::PrimitiveTopology::PointList;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_layout_stride() {
        let layout = Vertex3D::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[2].offset, 24);
    }

    #[test]
    fn test_particle_layout_stride() {
        let layout = ParticleVertex::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 16);
    }
}
