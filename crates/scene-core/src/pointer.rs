use glam::Vec2;

/// Size of the area pointer coordinates are measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// `[0, 1]` on both axes.
    #[inline]
    pub fn to_unit(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x / self.width, p.y / self.height)
    }

    /// `[-1, 1]` on both axes, zero at the center.
    #[inline]
    pub fn to_centered(&self, p: Vec2) -> Vec2 {
        let c = self.center();
        Vec2::new((p.x - c.x) / c.x, (p.y - c.y) / c.y)
    }

    /// `[-0.5, 0.5]` on both axes, zero at the center.
    #[inline]
    pub fn to_half_centered(&self, p: Vec2) -> Vec2 {
        let c = self.center();
        Vec2::new((p.x - c.x) / self.width, (p.y - c.y) / self.height)
    }

    /// Device-pixel size of a canvas backing store covering this viewport.
    pub fn backing_size(&self, pixel_ratio: f64) -> (u32, u32) {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let w = (self.width as f64 * ratio).round().max(1.0) as u32;
        let h = (self.height as f64 * ratio).round().max(1.0) as u32;
        (w, h)
    }
}

/// Latest pointer observation, shared by every mounted scene.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    position: Vec2,
    pressed_at: Option<Vec2>,
    wheel: f32,
    seen: bool,
    events: u64,
}

impl PointerState {
    pub fn new(initial: Vec2) -> Self {
        Self {
            position: initial,
            ..Self::default()
        }
    }

    pub fn observe(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.position = Vec2::new(x, y);
        self.seen = true;
        self.events += 1;
    }

    /// Starts a press at the current position. A press already held keeps
    /// its origin.
    pub fn press(&mut self) {
        if self.pressed_at.is_none() {
            self.pressed_at = Some(self.position);
        }
    }

    pub fn release(&mut self) {
        self.pressed_at = None;
    }

    pub fn scroll(&mut self, delta: f32) {
        if delta.is_finite() {
            self.wheel += delta;
        }
    }

    /// Returns and clears the wheel delta accumulated since the last call.
    pub fn take_wheel(&mut self) -> f32 {
        std::mem::take(&mut self.wheel)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Where the held press started.
    #[inline]
    pub fn press_position(&self) -> Option<Vec2> {
        self.pressed_at
    }

    /// Whether any move event has been observed yet.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.seen
    }

    /// Count of accepted move events; scenes use it to skip redundant work.
    #[inline]
    pub fn event_count(&self) -> u64 {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_store_tracks_css_size_times_ratio() {
        let vp = Viewport::new(300.0, 150.0);
        assert_eq!(vp.backing_size(2.0), (600, 300));
        assert_eq!(vp.backing_size(1.5), (450, 225));
        assert_eq!(vp.backing_size(0.0), (300, 150));
        assert_eq!(vp.backing_size(f64::NAN), (300, 150));
        assert_eq!(Viewport::new(0.0, 0.0).backing_size(3.0), (3, 3));
    }

    #[test]
    fn normalisers_cover_the_viewport() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.to_unit(Vec2::new(200.0, 50.0)), Vec2::new(1.0, 0.5));
        assert_eq!(vp.to_centered(Vec2::new(0.0, 100.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_half_centered(Vec2::new(150.0, 50.0)), Vec2::new(0.25, 0.0));
    }

    #[test]
    fn press_remembers_where_it_started() {
        let mut p = PointerState::new(Vec2::new(5.0, 5.0));
        assert!(!p.has_moved());
        p.observe(10.0, 20.0);
        p.press();
        p.observe(30.0, 40.0);
        p.press();
        assert!(p.is_pressed());
        assert_eq!(p.press_position(), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(p.position(), Vec2::new(30.0, 40.0));
        p.release();
        assert_eq!(p.press_position(), None);
    }

    #[test]
    fn non_finite_moves_are_ignored() {
        let mut p = PointerState::default();
        p.observe(f32::NAN, 1.0);
        assert!(!p.has_moved());
        assert_eq!(p.event_count(), 0);
        p.scroll(f32::INFINITY);
        p.scroll(12.0);
        assert_eq!(p.take_wheel(), 12.0);
        assert_eq!(p.take_wheel(), 0.0);
    }
}
