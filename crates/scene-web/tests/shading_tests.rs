// Host-side tests for projection and color helpers used by the painters.

#![allow(dead_code)]
mod shading {
    include!("../src/shading.rs");
}

use glam::{Mat4, Vec3};
use scene_core::{plane_face, Camera, Viewport};
use shading::*;

fn front_camera() -> Camera {
    Camera::perspective(60.0, Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0)
}

#[test]
fn plane_facing_the_camera_is_projected() {
    let cam = front_camera();
    let vp = Viewport::new(200.0, 200.0);
    let face = plane_face(Mat4::IDENTITY, 2.0);
    let q = project_face(&cam.view_projection(), &face, vp, Vec3::Z, 0.2)
        .expect("front face visible");
    assert!((q.shade - 1.0).abs() < 1e-5);
    assert!(q.points.iter().all(|p| p.x > 0.0 && p.x < 200.0));
}

#[test]
fn plane_facing_away_is_culled() {
    let cam = front_camera();
    let vp = Viewport::new(200.0, 200.0);
    let face = plane_face(Mat4::from_rotation_y(std::f32::consts::PI), 2.0);
    assert!(project_face(&cam.view_projection(), &face, vp, Vec3::Z, 0.2).is_none());
}

#[test]
fn painter_order_draws_far_first() {
    let mut depths = vec![0.2_f32, 0.9, 0.5];
    sort_back_to_front(&mut depths, |d| *d);
    assert_eq!(depths, vec![0.9, 0.5, 0.2]);
}

#[test]
fn colors_are_clamped_css() {
    assert_eq!(shade_rgb([1.0, 0.0, 0.5], 1.0), "rgb(255, 0, 128)");
    assert_eq!(shade_rgb([1.0, 1.0, 1.0], 2.0), "rgb(255, 255, 255)");
    assert_eq!(rgba([0.0, 0.0, 0.0], 0.5), "rgba(0, 0, 0, 0.500)");
    assert_eq!(rgba([0.0, 0.0, 0.0], -1.0), "rgba(0, 0, 0, 0.000)");
}

#[test]
fn height_shade_spans_contrast() {
    assert!((height_shade(20.0, 20.0, 0.4) - 1.0).abs() < 1e-6);
    assert!((height_shade(-20.0, 20.0, 0.4) - 0.6).abs() < 1e-6);
    assert!((height_shade(0.0, 20.0, 0.4) - 0.8).abs() < 1e-6);
    assert_eq!(height_shade(5.0, 0.0, 0.4), 1.0);
}
