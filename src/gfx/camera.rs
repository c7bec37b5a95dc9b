use cgmath::{perspective, Deg, Matrix4, Point3, SquareMatrix, Vector3};
use winit::dpi::{LogicalSize, PhysicalSize};

/// Converts from OpenGL clip space (z in -1..1) to wgpu clip space (z in 0..1)
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Fixed perspective camera looking down -Z at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    /// Vertical field of view
    pub fov: Deg<f32>,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 10.0),
            target: Point3::new(0.0, 0.0, 0.0),
            fov: Deg(60.0),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn resize(&mut self, target: &RenderTarget) {
        let size = target.physical_size();
        if size.height > 0 {
            self.aspect = size.width as f32 / size.height as f32;
        }
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.position, self.target, Vector3::unit_y());
        let proj = perspective(self.fov, self.aspect, self.near, self.far);
        OPENGL_TO_WGPU_MATRIX * proj * view
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_position: [self.position.x, self.position.y, self.position.z, 1.0],
            view_proj: self.build_view_projection_matrix().into(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::<f32>::identity().into(),
        }
    }
}

/// Canvas the scene renders into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    pub logical: LogicalSize<f64>,
    /// Device pixel ratio reported by the display
    pub device_pixel_ratio: f64,
    /// Upper bound applied to the pixel ratio
    pub max_pixel_ratio: f64,
}

impl RenderTarget {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            logical: LogicalSize::new(width, height),
            device_pixel_ratio,
            max_pixel_ratio: 2.0,
        }
    }

    pub fn with_max_pixel_ratio(mut self, max: f64) -> Self {
        self.max_pixel_ratio = max;
        self
    }

    /// Pixel ratio clamped to `[1, max_pixel_ratio]`
    pub fn pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.clamp(1.0, self.max_pixel_ratio.max(1.0))
    }

    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.logical.to_physical(self.pixel_ratio())
    }
}
