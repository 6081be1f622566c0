//! A diagonal row of bricks rising and falling in a staggered wave, with the
//! whole scene tilting toward the pointer.

use crate::camera::Camera;
use crate::config::{speed_or, ParamSource};
use crate::constants::{
    BRICKS_COUNT, BRICK_CAMERA_EYE, BRICK_CAMERA_SCALE, BRICK_DEPTH, BRICK_HEIGHT, BRICK_LIFT,
    BRICK_REPEAT_DELAY_FACTOR, BRICK_STAGGER_DIVISOR, BRICK_STEP, BRICK_TILT_SPEED,
    BRICK_TILT_X_DEG, BRICK_TILT_Y_DEG, BRICK_WAVE_SEC, BRICK_WIDTH,
};
use crate::ease::Ease;
use crate::follow::Follower;
use crate::layout::diagonal_row;
use crate::mesh::BoxMesh;
use crate::pointer::Viewport;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Stagger timing of the wave.
#[derive(Clone, Copy, Debug)]
pub struct WaveTiming {
    pub duration: f32,
    pub stagger: f32,
    pub repeat_delay: f32,
    pub rest: f32,
    pub lift: f32,
}

impl Default for WaveTiming {
    fn default() -> Self {
        Self {
            duration: BRICK_WAVE_SEC,
            stagger: BRICK_WAVE_SEC / BRICK_STAGGER_DIVISOR,
            repeat_delay: BRICK_WAVE_SEC * BRICK_REPEAT_DELAY_FACTOR,
            rest: BRICK_HEIGHT / 2.0,
            lift: BRICK_LIFT,
        }
    }
}

impl WaveTiming {
    /// One rise plus its repeat delay.
    #[inline]
    pub fn period(&self) -> f32 {
        self.duration + self.repeat_delay
    }

    /// Height of brick `index` at `time` seconds into the timeline.
    ///
    /// Each brick rises over `duration`, falls over the next `duration` and
    /// then rests until the cycle repeats.
    pub fn height(&self, index: usize, time: f32) -> f32 {
        let local = time - index as f32 * self.stagger;
        if local < 0.0 || self.duration <= 0.0 {
            return self.rest;
        }
        let phase = local.rem_euclid(self.period());
        let ease = Ease::SineInOut;
        if phase < self.duration {
            self.rest + (self.lift - self.rest) * ease.apply(phase / self.duration)
        } else if phase < 2.0 * self.duration {
            let t = (phase - self.duration) / self.duration;
            self.lift + (self.rest - self.lift) * ease.apply(t)
        } else {
            self.rest
        }
    }
}

pub struct BrickWave {
    pub timing: WaveTiming,
    pub mesh: BoxMesh,
    bases: Vec<Vec3>,
    tilt: Follower,
    tilt_speed: f32,
    time: f32,
}

impl BrickWave {
    pub fn new(source: &dyn ParamSource) -> Self {
        let timing = WaveTiming::default();
        Self {
            bases: diagonal_row(BRICKS_COUNT, BRICK_STEP, timing.rest),
            timing,
            mesh: BoxMesh::new(BRICK_WIDTH, BRICK_HEIGHT, BRICK_DEPTH),
            tilt: Follower::default(),
            tilt_speed: speed_or(source, BRICK_TILT_SPEED),
            time: 0.0,
        }
    }

    /// Scene rotation target for a pointer in `[-1, 1]` centered coordinates.
    pub fn tilt_target(centered: Vec2) -> Vec2 {
        Vec2::new(
            (centered.y * BRICK_TILT_X_DEG).to_radians(),
            -(centered.x * BRICK_TILT_Y_DEG).to_radians(),
        )
    }

    pub fn frame(&mut self, centered_pointer: Vec2, dt_sec: f32, delta_ratio: f32) {
        if dt_sec > 0.0 {
            self.time += dt_sec;
        }
        let target = Self::tilt_target(centered_pointer);
        self.tilt.step(target, delta_ratio, self.tilt_speed);
    }

    /// Current scene rotation `(x, y)` in radians.
    pub fn tilt(&self) -> Vec2 {
        self.tilt.position()
    }

    pub fn scene_matrix(&self) -> Mat4 {
        let t = self.tilt();
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, t.x, t.y, 0.0))
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn brick_height(&self, index: usize) -> f32 {
        self.timing.height(index, self.time)
    }

    /// World matrix of brick `index`, scene tilt included.
    pub fn brick_matrix(&self, index: usize) -> Mat4 {
        let base = self.bases[index];
        let pos = Vec3::new(base.x, self.brick_height(index), base.z);
        self.scene_matrix()
            * Mat4::from_translation(pos)
            * Mat4::from_rotation_y(45.0_f32.to_radians())
    }

    /// Floor plane lying in XZ.
    pub fn floor_matrix(&self) -> Mat4 {
        self.scene_matrix()
            * Mat4::from_translation(Vec3::new(1.0, 0.0, 1.0))
            * Mat4::from_rotation_x(-90.0_f32.to_radians())
    }

    pub fn camera(viewport: Viewport) -> Camera {
        let half_w = viewport.width / 15.0 / 5.0;
        let half_h = viewport.height / 15.0 / 5.0;
        let eye = Vec3::from(BRICK_CAMERA_EYE);
        let mut cam = Camera::orthographic(half_w, half_h, eye, Vec3::ZERO);
        cam.zfar = 1000.0;
        // A scaled-up camera sees a proportionally larger volume.
        cam.zoom = 1.0 / BRICK_CAMERA_SCALE;
        cam
    }
}
