//! # Scene Composition
//!
//! Builds the floating-object backdrop: three hand-placed signature objects,
//! a batch of small glowing accent spheres, a batch of wireframe data cubes,
//! a particle field, the light rig and the camera.
//!
//! Placement of the random batches uses independent uniform draws over fixed
//! ranges. Without a seed every build differs; with a seed the build is
//! reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use folio::config::SceneSettings;
//! use folio::gfx::scene::build_scene;
//!
//! let scene = build_scene(&SceneSettings::default().with_seed(7));
//! let frame = scene.frame(1.5);
//! assert_eq!(frame.transforms.len(), scene.objects.len());
//! ```

use std::f32::consts::{FRAC_PI_4, PI};

use cgmath::{Euler, Matrix4, Rad, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SceneSettings;

use super::camera::Camera;
use super::color::{ACCENT_PALETTE, BLUE, CYAN, VIOLET};
use super::lighting::Lighting;
use super::material::Material;
use super::motion::MotionProfile;
use super::object::{Role, SceneObject, Shape};
use super::particles::ParticleField;

/// Number of accent spheres
pub const ACCENT_COUNT: usize = 8;
/// Number of wireframe cubes
pub const CUBE_COUNT: usize = 5;
/// Number of signature objects
pub const SIGNATURE_COUNT: usize = 3;
/// Upper bound of the random motion phase, in seconds
pub const MAX_PHASE: f32 = 100.0;

/// GPU uniform with one object's model matrix
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
}

/// The whole backdrop
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    pub objects: Vec<SceneObject>,
    pub particles: ParticleField,
    pub lighting: Lighting,
    pub camera: Camera,
    /// Rotation rate of the object group about Y, in rad/s
    pub group_rotation_rate: f32,
    /// Seed the scene was built from, if any
    pub seed: Option<u64>,
}

/// Object counts of a scene, per batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCounts {
    pub signature: usize,
    pub accent: usize,
    pub cubes: usize,
    pub particles: usize,
}

/// Transforms of every object at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub elapsed: f32,
    pub group_rotation: Rad<f32>,
    /// World transforms in the order of [`SceneGraph::objects`]
    pub transforms: Vec<Matrix4<f32>>,
}

impl FrameState {
    pub fn to_uniforms(&self) -> Vec<ObjectUniform> {
        self.transforms
            .iter()
            .map(|m| ObjectUniform { model: (*m).into() })
            .collect()
    }
}

/// Build the backdrop scene
pub fn build_scene(settings: &SceneSettings) -> SceneGraph {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut objects = signature_objects();
    objects.extend(accent_spheres(&mut rng));
    objects.extend(data_cubes(&mut rng));
    for object in &mut objects {
        object.motion.phase = rng.random_range(0.0..MAX_PHASE);
    }

    let particles = ParticleField::generate(settings.particle_count, &mut rng);

    let scene = SceneGraph {
        objects,
        particles,
        lighting: Lighting::portfolio(),
        camera: Camera::default(),
        group_rotation_rate: settings.group_rotation_rate,
        seed: settings.seed,
    };

    let counts = scene.counts();
    log::info!(
        "built scene (seed {:?}): {} signature, {} accent, {} cubes, {} particles",
        settings.seed,
        counts.signature,
        counts.accent,
        counts.cubes,
        counts.particles
    );
    scene
}

/// Hero sphere, data-node icosahedron and connectivity torus
fn signature_objects() -> Vec<SceneObject> {
    vec![
        SceneObject::new("cloud", Role::Signature, Shape::Sphere { radius: 1.5 }, Vector3::new(4.0, 2.0, -5.0))
            .with_material(
                Material::new(CYAN)
                    .with_distort(0.3, 2.0)
                    .with_pbr(0.8, 0.1)
                    .with_opacity(0.6),
            )
            .with_motion(MotionProfile::new(2.0, 0.5, 1.0)),
        SceneObject::new(
            "data-nodes",
            Role::Signature,
            Shape::Icosahedron { radius: 0.8 },
            Vector3::new(-5.0, -1.0, -8.0),
        )
        .with_material(
            Material::new(VIOLET)
                .glowing(0.3)
                .with_pbr(0.9, 0.1)
                .with_opacity(0.7),
        )
        .with_motion(MotionProfile::new(1.5, 1.0, 0.8)),
        SceneObject::new(
            "connectivity",
            Role::Signature,
            Shape::Torus { radius: 1.0, tube: 0.3 },
            Vector3::new(-4.0, 3.0, -6.0),
        )
        .with_rotation(Euler::new(Rad(FRAC_PI_4), Rad(0.0), Rad(0.0)))
        .with_material(
            Material::new(BLUE)
                .glowing(0.2)
                .with_pbr(0.8, 0.2)
                .with_opacity(0.5),
        )
        .with_motion(MotionProfile::new(1.8, 0.8, 0.6)),
    ]
}

fn accent_spheres(rng: &mut StdRng) -> Vec<SceneObject> {
    (0..ACCENT_COUNT)
        .map(|i| {
            let radius = 0.15 + rng.random::<f32>() * 0.2;
            let position = Vector3::new(
                (rng.random::<f32>() - 0.5) * 15.0,
                (rng.random::<f32>() - 0.5) * 10.0,
                -5.0 - rng.random::<f32>() * 10.0,
            );
            let color = ACCENT_PALETTE[i % ACCENT_PALETTE.len()];
            SceneObject::new(format!("accent-{i}"), Role::Accent, Shape::Sphere { radius }, position)
                .with_material(Material::new(color).glowing(0.5).with_pbr(0.9, 0.1))
                .with_motion(MotionProfile::new(1.0 + i as f32 * 0.2, 0.3, 0.5))
        })
        .collect()
}

fn data_cubes(rng: &mut StdRng) -> Vec<SceneObject> {
    (0..CUBE_COUNT)
        .map(|i| {
            let position = Vector3::new(
                (rng.random::<f32>() - 0.5) * 12.0,
                (rng.random::<f32>() - 0.5) * 8.0,
                -8.0 - rng.random::<f32>() * 5.0,
            );
            let rotation = Euler::new(
                Rad(rng.random::<f32>() * PI),
                Rad(rng.random::<f32>() * PI),
                Rad(0.0),
            );
            SceneObject::new(format!("cube-{i}"), Role::DataCube, Shape::Cube { size: 0.4 }, position)
                .with_rotation(rotation)
                .with_material(
                    Material::new(CYAN)
                        .glowing(0.3)
                        .with_pbr(0.8, 0.2)
                        .with_opacity(0.4)
                        .with_wireframe(),
                )
                .with_motion(MotionProfile::new(0.8 + i as f32 * 0.1, 1.0, 0.4))
        })
        .collect()
}

impl SceneGraph {
    pub fn counts(&self) -> SceneCounts {
        let count = |role: Role| self.objects.iter().filter(|o| o.role == role).count();
        SceneCounts {
            signature: count(Role::Signature),
            accent: count(Role::Accent),
            cubes: count(Role::DataCube),
            particles: self.particles.len(),
        }
    }

    /// Rotation of the whole object group at `elapsed` seconds
    pub fn group_rotation(&self, elapsed: f32) -> Rad<f32> {
        Rad(elapsed * self.group_rotation_rate)
    }

    /// Transforms of every object at `elapsed` seconds
    ///
    /// Pure in `elapsed`: the same input always yields the same frame.
    pub fn frame(&self, elapsed: f32) -> FrameState {
        let group_rotation = self.group_rotation(elapsed);
        let group = Matrix4::from_angle_y(group_rotation);
        FrameState {
            elapsed,
            group_rotation,
            transforms: self
                .objects
                .iter()
                .map(|object| group * object.transform_at(elapsed))
                .collect(),
        }
    }

    /// Draw calls needed for one frame: one per object plus the particle batch
    pub fn draw_calls(&self) -> u32 {
        self.objects.len() as u32 + self.particles.draw_calls()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SceneGraph {
        build_scene(&SceneSettings::default().with_seed(seed))
    }

    #[test]
    fn test_object_counts() {
        for seed in 0..5 {
            let counts = seeded(seed).counts();
            assert_eq!(
                counts,
                SceneCounts {
                    signature: 3,
                    accent: 8,
                    cubes: 5,
                    particles: 400
                }
            );
        }
        let unseeded = build_scene(&SceneSettings::default().with_particle_count(50));
        assert_eq!(unseeded.objects.len(), 16);
        assert_eq!(unseeded.particles.len(), 50);
        assert_eq!(unseeded.draw_calls(), 17);
    }

    #[test]
    fn test_seed_reproducible() {
        assert_eq!(seeded(42), seeded(42));
        assert_ne!(seeded(42).objects, seeded(43).objects);
    }

    #[test]
    fn test_signature_objects_are_fixed() {
        let a = seeded(1);
        let b = seeded(2);
        for i in 0..SIGNATURE_COUNT {
            assert_eq!(a.objects[i].position, b.objects[i].position);
            assert_eq!(a.objects[i].shape, b.objects[i].shape);
            assert_eq!(a.objects[i].material, b.objects[i].material);
        }
        assert_eq!(a.objects[0].position, Vector3::new(4.0, 2.0, -5.0));
    }

    #[test]
    fn test_random_batches_within_ranges() {
        for seed in 0..20 {
            let scene = seeded(seed);
            for object in scene.objects.iter().filter(|o| o.role == Role::Accent) {
                let p = object.position;
                assert!(p.x >= -7.5 && p.x <= 7.5);
                assert!(p.y >= -5.0 && p.y <= 5.0);
                assert!(p.z <= -5.0 && p.z >= -15.0);
                match object.shape {
                    Shape::Sphere { radius } => assert!((0.15..=0.35).contains(&radius)),
                    other => panic!("accent with shape {other:?}"),
                }
            }
            for object in scene.objects.iter().filter(|o| o.role == Role::DataCube) {
                let p = object.position;
                assert!(p.x >= -6.0 && p.x <= 6.0);
                assert!(p.y >= -4.0 && p.y <= 4.0);
                assert!(p.z <= -8.0 && p.z >= -13.0);
                assert!(object.material.wireframe);
            }
        }
    }

    #[test]
    fn test_accent_palette_cycles() {
        let scene = seeded(3);
        let accents: Vec<_> = scene.objects.iter().filter(|o| o.role == Role::Accent).collect();
        assert_eq!(accents[0].material.color, accents[4].material.color);
        assert_eq!(accents[1].material.color, VIOLET);
    }

    #[test]
    fn test_frame_is_pure_in_time() {
        let scene = seeded(9);
        assert_eq!(scene.frame(12.5), scene.frame(12.5));
        let _ = scene.frame(99.0);
        assert_eq!(scene.frame(12.5), scene.frame(12.5));
    }

    #[test]
    fn test_group_rotation_rate() {
        let scene = seeded(9);
        assert_eq!(scene.group_rotation(0.0), Rad(0.0));
        assert!((scene.group_rotation(20.0).0 - 1.0).abs() < 1e-6);
        assert_eq!(scene.frame(3.0).to_uniforms().len(), 16);
    }
}
