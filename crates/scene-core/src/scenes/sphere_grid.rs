//! A wide grid of small spheres rippling on simplex noise. A soft kernel
//! around the pointer swells nearby spheres; the wheel dollies the camera.

use crate::camera::Camera;
use crate::config::{param_or, ParamSource, PARAM_SEED};
use crate::constants::{
    SPHERE_CAMERA_Z, SPHERE_CELL_OFFSET, SPHERE_CELL_SIZE, SPHERE_COLS, SPHERE_GROW_SEC,
    SPHERE_KERNEL_INTERVAL_MS, SPHERE_KERNEL_RADIUS, SPHERE_KERNEL_SCALE, SPHERE_NOISE_STRENGTH,
    SPHERE_NOISE_ZOOM, SPHERE_ROWS, SPHERE_SHRINK_SEC, SPHERE_SIZE, SPHERE_TICKER_STEP,
    SPHERE_ZOOM_MAX, SPHERE_ZOOM_MIN, SPHERE_ZOOM_PER_WHEEL, SPHERE_ZOOM_SPEED,
};
use crate::ease::Ease;
use crate::follow::Follower1;
use crate::layout::centered_grid;
use crate::noise::Simplex3;
use crate::pointer::Viewport;
use crate::ticker::{FrameTick, IntervalTimer};
use crate::tween::Tween;
use fnv::FnvHashSet;
use glam::{Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct SphereCell {
    pub base: Vec3,
    pub z: f32,
    scale: Tween<f32>,
}

impl SphereCell {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.base.x, self.base.y, self.z)
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }
}

/// Rounds half toward positive infinity, matching browser `Math.round`.
#[inline]
fn round_half_up(v: f32) -> f32 {
    (v + 0.5).floor()
}

#[inline]
fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Scale targets for the cells under a `radius` kernel centered on
/// `pointer_unit` (both axes in `[0, 1]`, `y` down).
///
/// Indices are computed on the flat row-major array, so a kernel touching
/// the left or right border wraps into the neighbouring row.
pub fn kernel_targets(
    pointer_unit: Vec2,
    rows: usize,
    cols: usize,
    radius: i32,
    scale_size: f32,
) -> Vec<(usize, f32)> {
    let total = (rows * cols) as i64;
    let half = radius as f32 / 2.0;
    let mut out = Vec::with_capacity((radius * radius).max(0) as usize);
    for i in 0..radius {
        for j in 1..=radius {
            let col = round_half_up(cols as f32 * pointer_unit.x + j as f32) - half;
            let row = round_half_up((1.0 - pointer_unit.y) * rows as f32 + i as f32) - half;
            let index = (col + cols as f32 * row) as i64;
            if index < 0 || index >= total {
                continue;
            }
            let hx = (half - (j as f32 - half).abs()) / half;
            let hy = (half - (i as f32 - half).abs()) / half;
            let value = 1.0 + round2(hx * hy + hx * hy) * scale_size;
            out.push((index as usize, value));
        }
    }
    out
}

pub struct SphereGrid {
    cells: Vec<SphereCell>,
    noise: Simplex3,
    ticker: f32,
    kernel_timer: IntervalTimer,
    active: FnvHashSet<usize>,
    zoom: Follower1,
    zoom_target: f32,
}

impl SphereGrid {
    pub fn new(source: &dyn ParamSource) -> Self {
        let seed = param_or(source, PARAM_SEED, 0x5EED_u64);
        let cells = centered_grid(SPHERE_ROWS, SPHERE_COLS, SPHERE_CELL_SIZE, SPHERE_CELL_OFFSET)
            .into_iter()
            .map(|base| SphereCell {
                base,
                z: 0.0,
                scale: Tween::settled(1.0),
            })
            .collect();
        Self {
            cells,
            noise: Simplex3::new(seed),
            ticker: 0.0,
            kernel_timer: IntervalTimer::new(SPHERE_KERNEL_INTERVAL_MS),
            active: FnvHashSet::default(),
            zoom: Follower1::new(SPHERE_CAMERA_Z),
            zoom_target: SPHERE_CAMERA_Z,
        }
    }

    pub fn cells(&self) -> &[SphereCell] {
        &self.cells
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn sphere_radius(&self) -> f32 {
        SPHERE_SIZE
    }

    /// Accumulate a wheel delta; positive values dolly the camera out.
    pub fn scroll(&mut self, wheel: f32) {
        if wheel != 0.0 && wheel.is_finite() {
            self.zoom_target = (self.zoom_target + wheel * SPHERE_ZOOM_PER_WHEEL)
                .clamp(SPHERE_ZOOM_MIN, SPHERE_ZOOM_MAX);
        }
    }

    pub fn zoom_target(&self) -> f32 {
        self.zoom_target
    }

    pub fn camera_distance(&self) -> f32 {
        self.zoom.value()
    }

    /// Swell the cells under the pointer and let the rest ease back.
    pub fn apply_kernel(&mut self, pointer_unit: Vec2) {
        let targets = kernel_targets(
            pointer_unit,
            SPHERE_ROWS,
            SPHERE_COLS,
            SPHERE_KERNEL_RADIUS,
            SPHERE_KERNEL_SCALE,
        );
        let mut next = FnvHashSet::default();
        for (index, value) in targets {
            self.cells[index]
                .scale
                .retarget(value, SPHERE_GROW_SEC, Ease::Power1Out);
            next.insert(index);
        }
        for &index in self.active.difference(&next) {
            self.cells[index]
                .scale
                .retarget(1.0, SPHERE_SHRINK_SEC, Ease::Power3Out);
        }
        self.active = next;
    }

    pub fn frame(&mut self, tick: &FrameTick, pointer_unit: Vec2) {
        let dt = tick.delta_sec();
        for cell in &mut self.cells {
            cell.z = self.noise.sample(
                cell.base.x / SPHERE_NOISE_ZOOM,
                cell.base.y / SPHERE_NOISE_ZOOM,
                self.ticker,
            ) * SPHERE_NOISE_STRENGTH;
            cell.scale.advance(dt);
        }
        self.ticker += SPHERE_TICKER_STEP * tick.delta_ratio;

        if self.kernel_timer.advance(tick.delta_ms) > 0 {
            self.apply_kernel(pointer_unit);
        }
        self.zoom.step(self.zoom_target, tick.delta_ratio, SPHERE_ZOOM_SPEED);
    }

    pub fn camera(&self, viewport: Viewport) -> Camera {
        Camera::perspective(
            30.0,
            Vec3::new(0.0, 0.0, self.zoom.value()),
            Vec3::ZERO,
            viewport.aspect(),
        )
    }
}
