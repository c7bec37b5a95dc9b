//! # Scene Objects
//!
//! A floating mesh: shape, resting placement, material and motion profile.
//! The world transform at any moment is derived on demand from elapsed time
//! via [`SceneObject::transform_at`]; objects hold no per-frame state.

use cgmath::{Euler, Matrix4, Quaternion, Rad, Rotation3, Vector3};

use super::geometry::{self, GeometryData};
use super::material::Material;
use super::motion::MotionProfile;

/// Tessellation of the hero sphere
pub const SPHERE_SEGMENTS: (u32, u32) = (64, 64);
/// Tessellation of small spheres
pub const ACCENT_SPHERE_SEGMENTS: (u32, u32) = (32, 16);
/// Tessellation of tori (radial, tubular)
pub const TORUS_SEGMENTS: (u32, u32) = (16, 32);

/// Shape and size of a scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Icosahedron { radius: f32 },
    Torus { radius: f32, tube: f32 },
    Cube { size: f32 },
}

impl Shape {
    /// Build the mesh for this shape
    pub fn geometry(&self) -> GeometryData {
        match *self {
            Shape::Sphere { radius } => {
                let (w, h) = if radius >= 1.0 {
                    SPHERE_SEGMENTS
                } else {
                    ACCENT_SPHERE_SEGMENTS
                };
                geometry::generate_sphere(radius, w, h)
            }
            Shape::Icosahedron { radius } => geometry::generate_icosahedron(radius),
            Shape::Torus { radius, tube } => {
                geometry::generate_torus(radius, tube, TORUS_SEGMENTS.0, TORUS_SEGMENTS.1)
            }
            Shape::Cube { size } => geometry::generate_box(size, size, size),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Icosahedron { .. } => "icosahedron",
            Shape::Torus { .. } => "torus",
            Shape::Cube { .. } => "cube",
        }
    }
}

/// Which batch an object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Hand-placed hero objects
    Signature,
    /// Small randomly placed glowing spheres
    Accent,
    /// Randomly placed wireframe cubes
    DataCube,
}

/// A floating mesh in the backdrop
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub role: Role,
    pub shape: Shape,
    /// Resting position in group space
    pub position: Vector3<f32>,
    /// Resting orientation
    pub rotation: Euler<Rad<f32>>,
    pub material: Material,
    pub motion: MotionProfile,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, role: Role, shape: Shape, position: Vector3<f32>) -> Self {
        Self {
            name: name.into(),
            role,
            shape,
            position,
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
            material: Material::default(),
            motion: MotionProfile::new(1.0, 1.0, 1.0),
        }
    }

    /// Builder pattern: Set resting orientation
    pub fn with_rotation(mut self, rotation: Euler<Rad<f32>>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Builder pattern: Set motion profile
    pub fn with_motion(mut self, motion: MotionProfile) -> Self {
        self.motion = motion;
        self
    }

    /// Group-space transform at `elapsed` seconds
    ///
    /// The float wrapper bobs and rotates around the object's own resting
    /// position; the resting orientation is applied inside it.
    pub fn transform_at(&self, elapsed: f32) -> Matrix4<f32> {
        let motion = self.motion.sample(elapsed);
        let float = Quaternion::from(motion.wobble) * Quaternion::from_angle_y(motion.spin);
        let rest = Quaternion::from(self.rotation);

        Matrix4::from_translation(self.position + Vector3::new(0.0, motion.offset_y, 0.0))
            * Matrix4::from(float * rest)
    }

    pub fn geometry(&self) -> GeometryData {
        self.shape.geometry()
    }
}
