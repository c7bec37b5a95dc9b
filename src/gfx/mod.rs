//! # Graphics Module
//!
//! The 3D backdrop of the page: procedurally placed floating objects, a
//! particle field, static lighting and fog, described as plain data that an
//! external wgpu renderer uploads and draws each frame.
//!
//! ## Architecture Overview
//!
//! - **Scene Composition** ([`scene`]) - Builds the object graph and samples frames
//! - **Objects and Motion** ([`object`], [`motion`]) - Shapes with time-driven float motion
//! - **Geometry** ([`geometry`]) - Procedural meshes for spheres, boxes, tori and icosahedra
//! - **Materials and Lighting** ([`material`], [`lighting`]) - Static shading parameters
//! - **Particles** ([`particles`]) - Batched point cloud
//! - **Camera** ([`camera`]) - Perspective camera and render target sizing
//! - **Frame Scheduling** ([`frame`]) - Per-frame callbacks with explicit teardown
//!
//! All motion is a pure function of elapsed time. Nothing in this module
//! accumulates state from one frame to the next.

pub mod camera;
pub mod color;
pub mod frame;
pub mod geometry;
pub mod lighting;
pub mod material;
pub mod motion;
pub mod object;
pub mod particles;
pub mod scene;
pub mod vertex;

// Re-export commonly used types
pub use camera::{Camera, RenderTarget};
pub use color::Color;
pub use frame::{FrameHandle, FrameScheduler, SceneMount};
pub use lighting::{Fog, Light, Lighting};
pub use material::Material;
pub use motion::MotionProfile;
pub use object::{Role, SceneObject, Shape};
pub use particles::ParticleField;
pub use scene::{build_scene, FrameState, SceneGraph};
