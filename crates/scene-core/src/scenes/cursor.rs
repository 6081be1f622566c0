use crate::config::{speed_or, ParamSource};
use crate::constants::{CURSOR_LIMITER_DIVISOR, CURSOR_SCALE_CAP, CURSOR_SPEED};
use crate::follow::{CursorTrail, TrailParams, TrailTransform};
use crate::pointer::Viewport;
use glam::Vec2;

/// Limiter scales with the viewport so the squash feels the same on any screen.
pub fn trail_params(viewport: Viewport, source: &dyn ParamSource) -> TrailParams {
    TrailParams {
        speed: speed_or(source, CURSOR_SPEED),
        velocity_limiter: viewport.width / CURSOR_LIMITER_DIVISOR,
        scale_cap: CURSOR_SCALE_CAP,
    }
}

pub struct CursorScene {
    trail: CursorTrail,
}

impl CursorScene {
    pub fn new(viewport: Viewport, source: &dyn ParamSource) -> Self {
        Self {
            trail: CursorTrail::new(trail_params(viewport, source)),
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.trail.params.velocity_limiter = viewport.width / CURSOR_LIMITER_DIVISOR;
    }

    /// `pointer` is `None` until the first move; the trail then holds the origin.
    pub fn frame(&mut self, pointer: Option<Vec2>, delta_ratio: f32) -> TrailTransform {
        self.trail.update(pointer.unwrap_or(Vec2::ZERO), delta_ratio)
    }
}

/// CSS transform for the cursor element.
pub fn css_transform(t: &TrailTransform) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) rotate({:.2}deg) scale({:.4}, {:.4})",
        t.position.x, t.position.y, t.rotation_deg, t.scale_x, t.scale_y
    )
}
