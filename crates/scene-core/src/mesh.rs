use glam::{Mat4, Vec3};

/// One quad of a mesh in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    /// Counter-clockwise when seen from outside.
    pub corners: [Vec3; 4],
    pub normal: Vec3,
}

impl Face {
    pub fn center(&self) -> Vec3 {
        (self.corners[0] + self.corners[1] + self.corners[2] + self.corners[3]) * 0.25
    }
}

/// Axis-aligned box of the given extents, centered on its local origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMesh {
    pub size: Vec3,
}

const L: f32 = -1.0;
const H: f32 = 1.0;

// Local unit-cube faces as (normal, four corners in CCW order from outside).
const UNIT_FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    ([H, 0.0, 0.0], [[H, L, H], [H, L, L], [H, H, L], [H, H, H]]),
    ([L, 0.0, 0.0], [[L, L, L], [L, L, H], [L, H, H], [L, H, L]]),
    ([0.0, H, 0.0], [[L, H, H], [H, H, H], [H, H, L], [L, H, L]]),
    ([0.0, L, 0.0], [[L, L, L], [H, L, L], [H, L, H], [L, L, H]]),
    ([0.0, 0.0, H], [[L, L, H], [H, L, H], [H, H, H], [L, H, H]]),
    ([0.0, 0.0, L], [[H, L, L], [L, L, L], [L, H, L], [H, H, L]]),
];

impl BoxMesh {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            size: Vec3::new(width, height, depth),
        }
    }

    /// All six faces transformed by `model`.
    pub fn faces(&self, model: Mat4) -> [Face; 6] {
        let half = self.size * 0.5;
        let normal_matrix = model.inverse().transpose();
        UNIT_FACES.map(|(n, quad)| Face {
            corners: quad.map(|c| model.transform_point3(Vec3::from(c) * half)),
            normal: normal_matrix
                .transform_vector3(Vec3::from(n))
                .normalize_or_zero(),
        })
    }
}

/// A flat square in the local XY plane facing +Z.
pub fn plane_face(model: Mat4, side: f32) -> Face {
    let h = side * 0.5;
    let corners = [
        Vec3::new(-h, -h, 0.0),
        Vec3::new(h, -h, 0.0),
        Vec3::new(h, h, 0.0),
        Vec3::new(-h, h, 0.0),
    ]
    .map(|c| model.transform_point3(c));
    Face {
        corners,
        normal: model.transform_vector3(Vec3::Z).normalize_or_zero(),
    }
}

/// Diffuse shade in `[0, 1]` for a surface lit from `light_dir`.
#[inline]
pub fn lambert(normal: Vec3, light_dir: Vec3, ambient: f32) -> f32 {
    let diffuse = normal.dot(light_dir.normalize_or_zero()).max(0.0);
    (ambient + (1.0 - ambient) * diffuse).clamp(0.0, 1.0)
}
