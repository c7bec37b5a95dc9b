//! # Particle Field
//!
//! A fixed number of points scattered in a cube around the camera target,
//! uploaded once and drawn with a single point-list draw call.

use rand::Rng;

use super::color::{Color, CYAN};
use super::vertex::ParticleVertex;

/// Half extent of the cube the particles are scattered in
pub const FIELD_HALF_EXTENT: f32 = 10.0;
/// World-space point size
pub const PARTICLE_SIZE: f32 = 0.02;
/// Opacity of every point
pub const PARTICLE_OPACITY: f32 = 0.6;

/// Batched point cloud with static positions
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    vertices: Vec<ParticleVertex>,
}

impl ParticleField {
    /// Scatter `count` points uniformly in `[-10, 10]³`
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        Self::generate_with(count, CYAN, rng)
    }

    pub fn generate_with<R: Rng>(count: usize, color: Color, rng: &mut R) -> Self {
        let rgba = color.with_alpha(PARTICLE_OPACITY);
        let vertices = (0..count)
            .map(|_| ParticleVertex {
                position: [
                    rng.random_range(-FIELD_HALF_EXTENT..=FIELD_HALF_EXTENT),
                    rng.random_range(-FIELD_HALF_EXTENT..=FIELD_HALF_EXTENT),
                    rng.random_range(-FIELD_HALF_EXTENT..=FIELD_HALF_EXTENT),
                ],
                size: PARTICLE_SIZE,
                color: rgba,
            })
            .collect();
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of draw calls the field needs
    pub fn draw_calls(&self) -> u32 {
        u32::from(!self.vertices.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::generate(400, &mut rng);
        assert_eq!(field.len(), 400);
        assert_eq!(field.draw_calls(), 1);
        assert!(field
            .vertices()
            .iter()
            .all(|v| v.position.iter().all(|c| c.abs() <= FIELD_HALF_EXTENT)));
    }

    #[test]
    fn test_bytes_match_layout() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::generate(10, &mut rng);
        assert_eq!(field.as_bytes().len(), 10 * std::mem::size_of::<ParticleVertex>());
    }

    #[test]
    fn test_empty_field_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::generate(0, &mut rng);
        assert!(field.is_empty());
        assert_eq!(field.draw_calls(), 0);
    }
}
