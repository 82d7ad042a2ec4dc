use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Minimum angle kept between the view direction and the poles (radians).
const POLE_EPSILON: f32 = 1e-3;

/// Perspective camera with orbit-style controls around a look target.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Dolly limits for the eye-to-target distance.
    pub min_distance: f32,
    pub max_distance: f32,
}

/// GPU-side uniform data for the camera.
/// 16 + 16 + 4 = 36 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    /// Eye position, w = 1.
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 36;
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

impl Camera3D {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
            min_distance: near,
            max_distance: far,
        }
    }

    /// Place the eye and look target in one step.
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Update the aspect ratio after a viewport resize.
    /// Degenerate sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Right-handed perspective projection, depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }

    /// Eye-to-target distance.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Rotate the eye around the target on a sphere.
    /// `d_azimuth` spins around world Y, `d_polar` tilts toward/away from the pole.
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let azimuth = offset.x.atan2(offset.z) + d_azimuth;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() + d_polar)
            .clamp(POLE_EPSILON, std::f32::consts::PI - POLE_EPSILON);

        self.position = self.target + spherical_offset(radius, polar, azimuth);
    }

    /// Scale the eye-to-target distance, clamped to the dolly limits.
    pub fn dolly(&mut self, factor: f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON || factor <= 0.0 {
            return;
        }
        let new_radius = (radius * factor).clamp(self.min_distance, self.max_distance);
        self.position = self.target + offset * (new_radius / radius);
    }
}

fn spherical_offset(radius: f32, polar: f32, azimuth: f32) -> Vec3 {
    let sin_polar = polar.sin();
    Vec3::new(
        radius * sin_polar * azimuth.sin(),
        radius * polar.cos(),
        radius * sin_polar * azimuth.cos(),
    )
}
