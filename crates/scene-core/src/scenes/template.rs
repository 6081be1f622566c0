//! Minimal scene: a single lit plane in front of a perspective camera.

use crate::camera::Camera;
use crate::constants::{TEMPLATE_CAMERA_Z, TEMPLATE_PLANE_SIDE};
use crate::mesh::{plane_face, Face};
use crate::pointer::Viewport;
use glam::{Mat4, Vec3};

pub struct TemplateScene {
    pub plane: Face,
}

impl Default for TemplateScene {
    fn default() -> Self {
        Self {
            plane: plane_face(Mat4::IDENTITY, TEMPLATE_PLANE_SIDE),
        }
    }
}

impl TemplateScene {
    pub fn camera(viewport: Viewport) -> Camera {
        let mut cam = Camera::perspective(
            75.0,
            Vec3::new(0.0, 0.0, TEMPLATE_CAMERA_Z),
            Vec3::ZERO,
            viewport.aspect(),
        );
        cam.zfar = 1000.0;
        cam
    }
}
