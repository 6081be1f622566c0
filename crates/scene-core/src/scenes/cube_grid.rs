//! A square grid of cubes each tumbling to its own slice of a noise field.

use crate::camera::Camera;
use crate::config::{param_or, ParamSource, PARAM_SEED};
use crate::constants::{
    CUBE_CAMERA_Z, CUBE_COLS, CUBE_NOISE_Y_SHIFT, CUBE_NOISE_ZOOM, CUBE_OFFSET, CUBE_ROWS,
    CUBE_SCENE_SCALE, CUBE_SIZE, CUBE_TICKER_STEP,
};
use crate::layout::square_grid;
use crate::mesh::BoxMesh;
use crate::noise::Simplex3;
use crate::pointer::Viewport;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use std::f32::consts::TAU;

pub struct CubeGrid {
    pub mesh: BoxMesh,
    bases: Vec<Vec3>,
    rotations: Vec<Vec2>,
    noise: Simplex3,
    ticker: f32,
}

impl CubeGrid {
    pub fn new(source: &dyn ParamSource) -> Self {
        let bases = square_grid(CUBE_ROWS, CUBE_COLS, CUBE_SIZE, CUBE_OFFSET);
        let rotations = vec![Vec2::ZERO; bases.len()];
        Self {
            mesh: BoxMesh::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE),
            bases,
            rotations,
            noise: Simplex3::new(param_or(source, PARAM_SEED, 0xC10D_u64)),
            ticker: 0.0,
        }
    }

    pub fn frame(&mut self, delta_ratio: f32) {
        for (base, rot) in self.bases.iter().zip(self.rotations.iter_mut()) {
            let nx = base.x / CUBE_NOISE_ZOOM;
            let ny = base.y / CUBE_NOISE_ZOOM;
            rot.x = self.noise.sample(nx, ny, self.ticker) * TAU;
            rot.y = self.noise.sample(nx, ny, self.ticker + CUBE_NOISE_Y_SHIFT) * TAU;
        }
        if delta_ratio > 0.0 {
            self.ticker += CUBE_TICKER_STEP * delta_ratio;
        }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn rotation(&self, index: usize) -> Vec2 {
        self.rotations[index]
    }

    pub fn cube_matrix(&self, index: usize) -> Mat4 {
        let r = self.rotations[index];
        Mat4::from_scale(Vec3::splat(CUBE_SCENE_SCALE))
            * Mat4::from_translation(self.bases[index])
            * Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, r.x, r.y, 0.0))
    }

    pub fn camera(viewport: Viewport) -> Camera {
        let mut cam = Camera::perspective(
            75.0,
            Vec3::new(0.0, 0.0, CUBE_CAMERA_Z),
            Vec3::ZERO,
            viewport.aspect(),
        );
        cam.zfar = 1000.0;
        cam
    }
}
