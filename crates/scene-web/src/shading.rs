use glam::{Mat4, Vec2, Vec3};
use scene_core::{faces_viewer, lambert, Camera, Face, Viewport};

/// A projected, lit quad ready to be filled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenQuad {
    pub points: [Vec2; 4],
    pub depth: f32,
    pub shade: f32,
}

/// Project `face`, dropping it when clipped or facing away.
pub fn project_face(
    view_proj: &Mat4,
    face: &Face,
    viewport: Viewport,
    light_dir: Vec3,
    ambient: f32,
) -> Option<ScreenQuad> {
    let mut points = [Vec2::ZERO; 4];
    let mut depth = 0.0;
    for (slot, corner) in points.iter_mut().zip(face.corners) {
        let p = Camera::project_with(view_proj, corner, viewport)?;
        *slot = p.screen;
        depth += p.depth;
    }
    if !faces_viewer(&points) {
        return None;
    }
    Some(ScreenQuad {
        points,
        depth: depth / 4.0,
        shade: lambert(face.normal, light_dir, ambient),
    })
}

/// Painter's order: farthest first.
pub fn sort_back_to_front<T>(items: &mut [T], depth: impl Fn(&T) -> f32) {
    items.sort_by(|a, b| depth(b).total_cmp(&depth(a)));
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// CSS color for `rgb` darkened by `shade`.
pub fn shade_rgb(rgb: [f32; 3], shade: f32) -> String {
    let s = shade.clamp(0.0, 1.0);
    format!(
        "rgb({}, {}, {})",
        channel(rgb[0] * s),
        channel(rgb[1] * s),
        channel(rgb[2] * s)
    )
}

pub fn rgba(rgb: [f32; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        channel(rgb[0]),
        channel(rgb[1]),
        channel(rgb[2]),
        alpha.clamp(0.0, 1.0)
    )
}

/// Shade for a sphere at height `z` inside a field spanning `±strength`.
#[inline]
pub fn height_shade(z: f32, strength: f32, contrast: f32) -> f32 {
    if !(strength > 0.0) {
        return 1.0;
    }
    let t = (z / strength).clamp(-1.0, 1.0) * 0.5 + 0.5;
    1.0 - contrast + contrast * t
}
