//! Tiles fading out at random, faster as the animation progresses.

use crate::constants::{PRELOADER_BOX_SIZE, PRELOADER_DURATION_MS, PRELOADER_FADE_STEP};
use crate::layout::box_grid;
use crate::pointer::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub origin: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PreloadPhase {
    Running { progress: f32 },
    Finished,
}

pub struct BrickPreloader {
    tiles: Vec<Tile>,
    size: f32,
    duration_ms: f64,
    elapsed_ms: f64,
    rng: StdRng,
}

impl BrickPreloader {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let tiles = box_grid(viewport.width, viewport.height, PRELOADER_BOX_SIZE)
            .into_iter()
            .map(|origin| Tile { origin, alpha: 1.0 })
            .collect();
        Self {
            tiles,
            size: PRELOADER_BOX_SIZE,
            duration_ms: PRELOADER_DURATION_MS,
            elapsed_ms: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_size(&self) -> f32 {
        self.size
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn frame(&mut self, delta_ms: f64) -> PreloadPhase {
        if self.is_finished() {
            return PreloadPhase::Finished;
        }
        if delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }
        if self.is_finished() {
            return PreloadPhase::Finished;
        }
        let progress = (self.elapsed_ms / self.duration_ms) as f32;
        for tile in &mut self.tiles {
            if self.rng.gen::<f32>() < progress {
                tile.alpha = (tile.alpha - PRELOADER_FADE_STEP).max(0.0);
            }
        }
        PreloadPhase::Running { progress }
    }
}
