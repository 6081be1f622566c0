//! A curtain of vertical lines the pointer can grab and drag sideways.
//!
//! A line is pinned when the pointer passes within `pin_offset` of its
//! anchor. While pinned its middle point tracks the pointer; once stretched
//! beyond `stretching` it is released and springs back elastically.

use crate::config::{color_or, count_or, ParamSource};
use crate::constants::{
    LINES_AMOUNT, LINES_PIN_OFFSET, LINES_RELEASE_AMPLITUDE, LINES_RELEASE_PERIOD,
    LINES_RELEASE_SEC, LINES_SMOOTH_FACTOR, LINES_STRETCHING, LINES_VERTICAL_LIMITER,
    LINES_WIDTH,
};
use crate::ease::Ease;
use crate::layout::line_anchors;
use crate::pointer::Viewport;
use crate::tween::Tween;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct LinesParams {
    pub amount: usize,
    pub stretching: f32,
    pub vertical_limiter: f32,
    pub pin_offset: f32,
    pub release_sec: f32,
    pub smooth_factor: f32,
    pub width: f32,
    pub color: String,
}

impl Default for LinesParams {
    fn default() -> Self {
        Self {
            amount: LINES_AMOUNT,
            stretching: LINES_STRETCHING,
            vertical_limiter: LINES_VERTICAL_LIMITER,
            pin_offset: LINES_PIN_OFFSET,
            release_sec: LINES_RELEASE_SEC,
            smooth_factor: LINES_SMOOTH_FACTOR,
            width: LINES_WIDTH,
            color: "#333333".to_string(),
        }
    }
}

impl LinesParams {
    pub fn from_source(source: &dyn ParamSource) -> Self {
        let d = Self::default();
        Self {
            amount: count_or(source, d.amount),
            color: color_or(source, &d.color),
            ..d
        }
    }
}

#[derive(Clone, Debug)]
pub struct LineState {
    /// Top, middle and bottom points; only the middle one moves.
    pub points: SmallVec<[Vec2; 3]>,
    pub pinned: bool,
    release: Option<Tween<Vec2>>,
}

impl LineState {
    #[inline]
    pub fn anchor_x(&self) -> f32 {
        self.points[0].x
    }

    #[inline]
    pub fn bend(&self) -> Vec2 {
        self.points[1]
    }

    pub fn is_releasing(&self) -> bool {
        self.release.is_some()
    }
}

pub struct LineField {
    pub params: LinesParams,
    viewport: Viewport,
    lines: Vec<LineState>,
}

impl LineField {
    pub fn new(params: LinesParams, viewport: Viewport) -> Self {
        let mut field = Self {
            params,
            viewport,
            lines: Vec::new(),
        };
        field.layout();
        field
    }

    fn layout(&mut self) {
        self.lines = line_anchors(self.params.amount, self.viewport.width, self.viewport.height)
            .into_iter()
            .map(|points| LineState {
                points,
                pinned: false,
                release: None,
            })
            .collect();
    }

    /// Lines are rebuilt from scratch on resize; any grab is dropped.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout();
    }

    pub fn lines(&self) -> &[LineState] {
        &self.lines
    }

    /// Run pin/drag/release against the latest pointer position.
    pub fn on_pointer(&mut self, mouse: Vec2) {
        let p = &self.params;
        let h = self.viewport.height;
        let rest_y = h / 2.0;
        let min_y = h * p.vertical_limiter;
        let max_y = h * (1.0 - p.vertical_limiter);
        for line in &mut self.lines {
            let anchor = line.anchor_x().ceil();
            if anchor + p.pin_offset > mouse.x && anchor - p.pin_offset < mouse.x {
                line.pinned = true;
            }
            if !line.pinned {
                continue;
            }
            let bend = line.bend();
            if (line.anchor_x() - bend.x).abs() > p.stretching {
                line.release = Some(Tween::new(
                    bend,
                    Vec2::new(line.anchor_x(), rest_y),
                    p.release_sec,
                    Ease::ElasticOut {
                        amplitude: LINES_RELEASE_AMPLITUDE,
                        period: LINES_RELEASE_PERIOD,
                    },
                ));
                line.pinned = false;
            } else {
                line.release = None;
                let x = if mouse.x + 1.0 > bend.x {
                    mouse.x - p.pin_offset
                } else {
                    mouse.x + p.pin_offset
                };
                line.points[1] = Vec2::new(x, mouse.y.clamp(min_y, max_y));
            }
        }
    }

    /// Advance release springs.
    pub fn frame(&mut self, dt_sec: f32) {
        for line in &mut self.lines {
            if let Some(tween) = line.release.as_mut() {
                line.points[1] = tween.advance(dt_sec);
                if tween.is_finished() {
                    line.release = None;
                }
            }
        }
    }
}

/// Bezier handles `(in, out)` for the middle point of a three-point path,
/// relative to that point. Handles follow the chord between the outer
/// points and are split by the neighbouring segment lengths.
pub fn smooth_handles(points: &[Vec2], factor: f32) -> (Vec2, Vec2) {
    if points.len() < 3 {
        return (Vec2::ZERO, Vec2::ZERO);
    }
    let (prev, mid, next) = (points[0], points[1], points[2]);
    let d1 = (mid - prev).length();
    let d2 = (next - mid).length();
    let total = d1 + d2;
    if total <= f32::EPSILON {
        return (Vec2::ZERO, Vec2::ZERO);
    }
    let chord = next - prev;
    (-chord * factor * d1 / total, chord * factor * d2 / total)
}
