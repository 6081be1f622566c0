use crate::ease::Ease;
use glam::Vec2;

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// A single eased transition owned by whoever drives it.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// A finished tween resting at `value`.
    pub fn settled(value: T) -> Self {
        Self::new(value, value, 0.0, Ease::Linear)
    }

    pub fn advance(&mut self, dt_sec: f32) -> T {
        if dt_sec > 0.0 {
            self.elapsed = (self.elapsed + dt_sec).min(self.duration);
        }
        self.value()
    }

    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from
            .lerp_to(self.to, self.ease.apply(self.elapsed / self.duration))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Restart toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: T, duration: f32, ease: Ease) {
        *self = Self::new(self.value(), to, duration, ease);
    }

    pub fn target(&self) -> T {
        self.to
    }
}
