//! Click-and-drag panning over a single plane.

use crate::camera::Camera;
use crate::config::{speed_or, ParamSource};
use crate::constants::{DRAG_CAMERA_Z, DRAG_FOLLOW_SPEED, DRAG_SENSITIVITY};
use crate::follow::Follower;
use crate::pointer::Viewport;
use glam::{Vec2, Vec3};

pub struct DragPan {
    target: Vec2,
    camera: Follower,
    last: Option<Vec2>,
    dragging: bool,
    speed: f32,
}

impl DragPan {
    pub fn new(source: &dyn ParamSource) -> Self {
        Self {
            target: Vec2::ZERO,
            camera: Follower::default(),
            last: None,
            dragging: false,
            speed: speed_or(source, DRAG_FOLLOW_SPEED),
        }
    }

    /// Start dragging from `at`, in the same units as [`DragPan::on_move`].
    /// Movement before the press never reaches the pan.
    pub fn begin_drag(&mut self, at: Vec2) {
        self.dragging = true;
        self.last = Some(at);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed a pointer move in half-centered units (`[-0.5, 0.5]`).
    ///
    /// Moves are always remembered so a drag starts from the latest position.
    pub fn on_move(&mut self, half_centered: Vec2) {
        if let (true, Some(prev)) = (self.dragging, self.last) {
            self.target.x += (prev.x - half_centered.x) * DRAG_SENSITIVITY;
            self.target.y -= (prev.y - half_centered.y) * DRAG_SENSITIVITY;
        }
        self.last = Some(half_centered);
    }

    pub fn frame(&mut self, delta_ratio: f32) -> Vec2 {
        self.camera.step(self.target, delta_ratio, self.speed)
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn offset(&self) -> Vec2 {
        self.camera.position()
    }

    /// Camera looking straight down -Z from the panned offset.
    pub fn camera_at(&self, viewport: Viewport) -> Camera {
        let o = self.offset();
        Camera::perspective(
            30.0,
            Vec3::new(o.x, o.y, DRAG_CAMERA_Z),
            Vec3::new(o.x, o.y, 0.0),
            viewport.aspect(),
        )
    }
}
