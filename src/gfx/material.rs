//! Material system for the floating objects
//!
//! Standard metal/roughness materials with emissive glow, transparency and a
//! wireframe switch. [`Material::to_uniform`] packs a material for the GPU.

use super::color::{Color, BLACK, WHITE};

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub metallic: f32,
    pub roughness: f32,
    pub distort_amount: f32,
    pub distort_speed: f32,
    pub wireframe: u32,
}

/// Animated vertex displacement of the hero sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distort {
    /// Displacement strength
    pub amount: f32,
    /// Noise scroll speed
    pub speed: f32,
}

/// Surface description of a scene object
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub metalness: f32,
    pub roughness: f32,
    pub wireframe: bool,
    pub distort: Option<Distort>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: WHITE,
            emissive: BLACK,
            emissive_intensity: 1.0,
            opacity: 1.0,
            transparent: false,
            metalness: 0.0,
            roughness: 1.0,
            wireframe: false,
            distort: None,
        }
    }
}

impl Material {
    /// Opaque material of the given color
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Builder pattern: Glow in `color` at `intensity`
    pub fn with_emissive(mut self, color: Color, intensity: f32) -> Self {
        self.emissive = color;
        self.emissive_intensity = intensity;
        self
    }

    /// Builder pattern: Self-colored glow
    pub fn glowing(self, intensity: f32) -> Self {
        let color = self.color;
        self.with_emissive(color, intensity)
    }

    /// Builder pattern: Make transparent with `opacity`
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    /// Builder pattern: Set metal/roughness
    pub fn with_pbr(mut self, metalness: f32, roughness: f32) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }

    pub fn with_wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    pub fn with_distort(mut self, amount: f32, speed: f32) -> Self {
        self.distort = Some(Distort { amount, speed });
        self
    }

    /// Whether the renderer must sort and blend this material
    pub fn needs_blending(&self) -> bool {
        self.transparent && self.opacity < 1.0
    }

    pub fn to_uniform(&self) -> MaterialUniform {
        let distort = self.distort.unwrap_or(Distort { amount: 0.0, speed: 0.0 });
        MaterialUniform {
            base_color: self.color.with_alpha(if self.transparent { self.opacity } else { 1.0 }),
            emissive: self.emissive.scaled(self.emissive_intensity).to_array(),
            metallic: self.metalness,
            roughness: self.roughness,
            distort_amount: distort.amount,
            distort_speed: distort.speed,
            wireframe: self.wireframe as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::color::{CYAN, VIOLET};

    #[test]
    fn test_uniform_packs_emissive_and_alpha() {
        let material = Material::new(VIOLET)
            .glowing(0.3)
            .with_pbr(0.9, 0.1)
            .with_opacity(0.7);
        let uniform = material.to_uniform();
        assert_eq!(uniform.base_color[3], 0.7);
        assert!((uniform.emissive[2] - VIOLET.b * 0.3).abs() < 1e-6);
        assert_eq!(uniform.metallic, 0.9);
        assert_eq!(uniform.wireframe, 0);
        assert!(material.needs_blending());
    }

    #[test]
    fn test_uniform_size_is_aligned() {
        assert_eq!(std::mem::size_of::<MaterialUniform>() % 16, 0);
    }

    #[test]
    fn test_opaque_material_ignores_opacity() {
        let mut material = Material::new(CYAN).with_wireframe();
        material.opacity = 0.2;
        assert_eq!(material.to_uniform().base_color[3], 1.0);
        assert_eq!(material.to_uniform().wireframe, 1);
        assert!(!material.needs_blending());
    }
}
