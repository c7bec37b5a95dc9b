//! # Lighting and Fog
//!
//! Static light rig and distance fog of the backdrop. Nothing here changes at
//! runtime; the renderer uploads [`Lighting::to_uniforms`] once.

use cgmath::{InnerSpace, Vector3};

use super::color::{Color, BLUE, CYAN, FOG, VIOLET, WHITE};

/// A light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Point {
        position: Vector3<f32>,
        color: Color,
        intensity: f32,
    },
    Spot {
        position: Vector3<f32>,
        target: Vector3<f32>,
        /// Cone half-angle in radians
        angle: f32,
        /// Fraction of the cone that fades out, `0..=1`
        penumbra: f32,
        color: Color,
        intensity: f32,
    },
}

/// Light packed for a uniform buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// xyz position, w = kind (0 ambient, 1 point, 2 spot)
    pub position: [f32; 4],
    /// rgb color premultiplied by intensity, w = cone angle
    pub color: [f32; 4],
    /// xyz spot direction, w = penumbra
    pub direction: [f32; 4],
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity, .. }
            | Light::Point { intensity, .. }
            | Light::Spot { intensity, .. } => *intensity,
        }
    }

    pub fn to_uniform(&self) -> LightUniform {
        match *self {
            Light::Ambient { color, intensity } => LightUniform {
                position: [0.0, 0.0, 0.0, 0.0],
                color: color.scaled(intensity).with_alpha(0.0),
                direction: [0.0; 4],
            },
            Light::Point {
                position,
                color,
                intensity,
            } => LightUniform {
                position: [position.x, position.y, position.z, 1.0],
                color: color.scaled(intensity).with_alpha(0.0),
                direction: [0.0; 4],
            },
            Light::Spot {
                position,
                target,
                angle,
                penumbra,
                color,
                intensity,
            } => {
                let dir = target - position;
                let dir = if dir.magnitude2() > 0.0 { dir.normalize() } else { -Vector3::unit_y() };
                LightUniform {
                    position: [position.x, position.y, position.z, 2.0],
                    color: color.scaled(intensity).with_alpha(angle),
                    direction: [dir.x, dir.y, dir.z, penumbra],
                }
            }
        }
    }
}

/// Linear distance fog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: FOG,
            near: 10.0,
            far: 50.0,
        }
    }
}

impl Fog {
    /// Fog amount at `distance` from the camera, `0` before `near`, `1` past `far`
    pub fn factor(&self, distance: f32) -> f32 {
        if self.far <= self.near {
            return if distance >= self.far { 1.0 } else { 0.0 };
        }
        ((distance - self.near) / (self.far - self.near)).clamp(0.0, 1.0)
    }

    /// Clear color matching the fog so distant objects dissolve into the background
    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.color.r as f64,
            g: self.color.g as f64,
            b: self.color.b as f64,
            a: 0.0,
        }
    }
}

/// Complete light rig
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    pub lights: Vec<Light>,
    pub fog: Fog,
}

impl Lighting {
    /// The page backdrop rig: dim ambient, cyan and violet points, blue spot from above
    pub fn portfolio() -> Self {
        Self {
            lights: vec![
                Light::Ambient {
                    color: WHITE,
                    intensity: 0.2,
                },
                Light::Point {
                    position: Vector3::new(10.0, 10.0, 10.0),
                    color: CYAN,
                    intensity: 0.5,
                },
                Light::Point {
                    position: Vector3::new(-10.0, -10.0, -10.0),
                    color: VIOLET,
                    intensity: 0.3,
                },
                Light::Spot {
                    position: Vector3::new(0.0, 10.0, 0.0),
                    target: Vector3::new(0.0, 0.0, 0.0),
                    angle: 0.3,
                    penumbra: 1.0,
                    color: BLUE,
                    intensity: 0.5,
                },
            ],
            fog: Fog::default(),
        }
    }

    pub fn to_uniforms(&self) -> Vec<LightUniform> {
        self.lights.iter().map(Light::to_uniform).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_rig() {
        let rig = Lighting::portfolio();
        assert_eq!(rig.lights.len(), 4);
        assert!(matches!(rig.lights[0], Light::Ambient { intensity, .. } if intensity == 0.2));
        assert_eq!(rig.lights.iter().filter(|l| matches!(l, Light::Point { .. })).count(), 2);
        assert_eq!(rig.fog.near, 10.0);
        assert_eq!(rig.fog.far, 50.0);
    }

    #[test]
    fn test_fog_factor() {
        let fog = Fog::default();
        assert_eq!(fog.factor(5.0), 0.0);
        assert_eq!(fog.factor(30.0), 0.5);
        assert_eq!(fog.factor(80.0), 1.0);
    }

    #[test]
    fn test_spot_points_down() {
        let uniform = Lighting::portfolio().lights[3].to_uniform();
        assert_eq!(uniform.position[3], 2.0);
        assert_eq!(&uniform.direction[..3], &[0.0, -1.0, 0.0]);
        assert_eq!(uniform.direction[3], 1.0);
    }

    #[test]
    fn test_clear_color_is_fog() {
        let clear = Fog::default().clear_color();
        assert!((clear.b - 26.0 / 255.0).abs() < 1e-6);
    }
}
