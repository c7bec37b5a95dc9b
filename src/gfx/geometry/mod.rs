//! # Procedural Geometry Generation
//!
//! Mesh generators for the shapes floating behind the page content. No model
//! files are involved; every mesh is built from its size parameters.
//!
//! ## Supported Primitives
//!
//! - **Sphere**: UV sphere with configurable resolution
//! - **Box**: Axis-aligned box with per-face normals
//! - **Torus**: Ring with configurable radial and tubular resolution
//! - **Icosahedron**: Regular 20-faced polyhedron, flat shaded
//!
//! ## Usage
//!
//! ```rust
//! use folio::gfx::geometry::{generate_box, generate_sphere, generate_torus};
//!
//! let sphere = generate_sphere(1.5, 64, 64);
//! let cube = generate_box(0.4, 0.4, 0.4);
//! let ring = generate_torus(1.0, 0.3, 16, 32);
//! assert_eq!(cube.triangle_count(), 12);
//! ```

pub mod primitives;

pub use primitives::*;

use super::vertex::Vertex3D;

/// Generated geometry ready for GPU upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.tex_coords.push(uv);
        index
    }

    /// Interleave into the renderer's vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex3D {
                position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                uv: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
            })
            .collect()
    }

    /// Largest distance of any vertex from the origin
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt())
            .fold(0.0, f32::max)
    }
}
