use crate::config::{color_or, count_or, ParamSource};
use crate::constants::{
    CIRCLES_COUNT, CIRCLES_EASE_MULTIPLIER, CIRCLES_MIN_RADIUS, CIRCLES_STROKE_WIDTH,
};
use crate::follow::Follower;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct CirclesParams {
    pub count: usize,
    pub min_radius: f32,
    pub stroke_width: f32,
    pub ease_multiplier: f32,
    pub color: String,
}

impl Default for CirclesParams {
    fn default() -> Self {
        Self {
            count: CIRCLES_COUNT,
            min_radius: CIRCLES_MIN_RADIUS,
            stroke_width: CIRCLES_STROKE_WIDTH,
            ease_multiplier: CIRCLES_EASE_MULTIPLIER,
            color: "#fff".to_string(),
        }
    }
}

impl CirclesParams {
    pub fn from_source(source: &dyn ParamSource) -> Self {
        let d = Self::default();
        Self {
            count: count_or(source, d.count),
            color: color_or(source, &d.color),
            ..d
        }
    }
}

/// Concentric rings that trail the pointer, outer rings lagging more.
pub struct ConcentricCircles {
    pub params: CirclesParams,
    rings: Vec<Follower>,
}

impl ConcentricCircles {
    pub fn new(params: CirclesParams, center: Vec2) -> Self {
        let rings = (0..params.count).map(|_| Follower::new(center)).collect();
        Self { params, rings }
    }

    /// Chase speed of ring `index`: `multiplier / (index / 2)`, at most 1.
    ///
    /// The innermost ring would divide by zero; it tracks the pointer directly.
    pub fn ring_speed(&self, index: usize) -> f32 {
        if index == 0 {
            return 1.0;
        }
        (self.params.ease_multiplier / (index as f32 / 2.0)).min(1.0)
    }

    pub fn frame(&mut self, target: Vec2, delta_ratio: f32) {
        for i in 0..self.rings.len() {
            let speed = self.ring_speed(i);
            self.rings[i].step(target, delta_ratio, speed);
        }
    }

    /// `(center, radius)` of every ring, innermost first.
    pub fn rings(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.rings
            .iter()
            .enumerate()
            .map(|(i, f)| (f.position(), (i + 1) as f32 * self.params.min_radius))
    }
}
