//! Camera description and world-to-screen projection.
//!
//! The scenes draw onto 2D canvases, so projection happens on the CPU: a
//! world point goes through the view-projection matrix and the resulting
//! NDC is mapped to canvas pixels with `y` pointing down.

use crate::pointer::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective { fovy_radians: f32 },
    /// Half extents of the view volume before `zoom` is applied.
    Orthographic { half_width: f32, half_height: f32 },
}

/// Right-handed camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Orthographic magnification; larger values show less of the world.
    pub zoom: f32,
}

/// A point mapped into canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// NDC depth in `[-1, 1]`; smaller values are nearer.
    pub depth: f32,
}

impl Camera {
    pub fn perspective(fovy_degrees: f32, eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            projection: Projection::Perspective {
                fovy_radians: fovy_degrees.to_radians(),
            },
            aspect,
            znear: 1.0,
            zfar: 2500.0,
            zoom: 1.0,
        }
    }

    pub fn orthographic(half_width: f32, half_height: f32, eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            projection: Projection::Orthographic {
                half_width,
                half_height,
            },
            aspect: half_width / half_height.max(f32::EPSILON),
            znear: 1.0,
            zfar: 1000.0,
            zoom: 1.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fovy_radians } => {
                Mat4::perspective_rh(fovy_radians, self.aspect, self.znear, self.zfar)
            }
            Projection::Orthographic {
                half_width,
                half_height,
            } => {
                let z = self.zoom.max(f32::EPSILON);
                Mat4::orthographic_rh(
                    -half_width / z,
                    half_width / z,
                    -half_height / z,
                    half_height / z,
                    self.znear,
                    self.zfar,
                )
            }
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project with a precomputed view-projection matrix.
    pub fn project_with(view_proj: &Mat4, world: Vec3, viewport: Viewport) -> Option<Projected> {
        let clip = *view_proj * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(Projected {
            screen: Vec2::new(
                (ndc.x + 1.0) * 0.5 * viewport.width,
                (1.0 - ndc.y) * 0.5 * viewport.height,
            ),
            depth: ndc.z,
        })
    }

    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Projected> {
        Self::project_with(&self.view_projection(), world, viewport)
    }

    /// Approximate on-screen radius of a sphere at `center`.
    pub fn project_radius(&self, center: Vec3, radius: f32, viewport: Viewport) -> Option<f32> {
        match self.projection {
            Projection::Perspective { fovy_radians } => {
                let view = self.view_matrix().transform_point3(center);
                let dist = -view.z;
                if dist <= self.znear {
                    return None;
                }
                let focal = viewport.height * 0.5 / (fovy_radians * 0.5).tan();
                Some(radius * focal / dist)
            }
            Projection::Orthographic { half_height, .. } => {
                let visible = 2.0 * half_height / self.zoom.max(f32::EPSILON);
                Some(radius * viewport.height / visible)
            }
        }
    }
}

/// Twice the signed area of a screen-space polygon (canvas `y` down).
pub fn screen_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Whether a face wound counter-clockwise in world space faces the viewer
/// once projected onto a `y`-down canvas.
#[inline]
pub fn faces_viewer(points: &[Vec2]) -> bool {
    screen_area(points) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_viewport_center() {
        let cam = Camera::perspective(75.0, Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 2.0);
        let vp = Viewport::new(800.0, 400.0);
        let p = cam.project(Vec3::ZERO, vp).unwrap();
        assert!((p.screen - Vec2::new(400.0, 200.0)).length() < 1e-3);
    }

    #[test]
    fn points_behind_the_eye_are_rejected() {
        let cam = Camera::perspective(75.0, Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0);
        let vp = Viewport::new(100.0, 100.0);
        assert!(cam.project(Vec3::new(0.0, 0.0, 10.0), vp).is_none());
    }

    #[test]
    fn up_in_world_is_up_on_screen() {
        let cam = Camera::perspective(60.0, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.0);
        let vp = Viewport::new(100.0, 100.0);
        let p = cam.project(Vec3::new(0.0, 1.0, 0.0), vp).unwrap();
        assert!(p.screen.y < 50.0);
    }

    #[test]
    fn front_face_of_a_box_is_visible() {
        use crate::mesh::BoxMesh;
        let cam = Camera::perspective(60.0, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.0);
        let vp = Viewport::new(200.0, 200.0);
        let faces = BoxMesh::new(2.0, 2.0, 2.0).faces(Mat4::IDENTITY);
        let visible: Vec<Vec3> = faces
            .iter()
            .filter(|f| {
                let pts: Vec<Vec2> = f
                    .corners
                    .iter()
                    .map(|c| cam.project(*c, vp).unwrap().screen)
                    .collect();
                faces_viewer(&pts)
            })
            .map(|f| f.normal)
            .collect();
        assert_eq!(visible.len(), 1);
        assert!((visible[0] - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn nearer_spheres_look_bigger() {
        let cam = Camera::perspective(30.0, Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO, 1.0);
        let vp = Viewport::new(500.0, 500.0);
        let near = cam.project_radius(Vec3::new(0.0, 0.0, 50.0), 1.0, vp).unwrap();
        let far = cam.project_radius(Vec3::ZERO, 1.0, vp).unwrap();
        assert!(near > far);
    }
}
