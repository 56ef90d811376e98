use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera for the 3D scene.
/// Produces a view-projection matrix mapping world units to clip space.
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Look-at target.
    pub target: Vec3,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl PerspectiveCamera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            fov_y_deg: 75.0,
            aspect: viewport_width / viewport_height,
            near: 0.1,
            far: 1000.0,
            eye: Vec3::new(0.0, 30.0, 100.0),
            target: Vec3::ZERO,
        }
    }

    /// Build the combined view-projection matrix. Y-up, right-handed.
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
        }
    }

    /// Recompute the aspect ratio from new viewport dimensions.
    /// Called on initial mount and on every host resize event.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn aspect_matches_viewport_exactly() {
        let mut cam = PerspectiveCamera::new(800.0, 600.0);
        assert_eq!(cam.aspect, 800.0 / 600.0);
        cam.set_viewport(1920.0, 1080.0);
        assert_eq!(cam.aspect, 1920.0 / 1080.0);
    }

    #[test]
    fn projection_is_perspective() {
        let cam = PerspectiveCamera::new(800.0, 600.0);
        let cols = cam.view_proj().to_cols_array_2d();
        // Perspective: the w row carries -z, so cols[3][3] is not 1
        assert!((cols[3][3] - 1.0).abs() > 1e-6);
    }

    #[test]
    fn origin_projects_in_front_of_camera() {
        let cam = PerspectiveCamera::new(800.0, 600.0);
        let clip = cam.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        // The look-at target must be visible: positive w, depth inside [0, w]
        assert!(clip.w > 0.0);
        assert!(clip.z > 0.0 && clip.z < clip.w);
    }
}
