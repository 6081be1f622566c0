//! Frame-rate independent pointer following.
//!
//! A follower covers the same fraction of its remaining distance per unit of
//! wall-clock time regardless of the display refresh rate: each frame it
//! moves by `1 - (1 - speed)^delta_ratio` of the gap to its target.

use glam::Vec2;

/// Per-frame interpolation weight for a follower with the given `speed`.
///
/// `speed` is clamped into `[0, 1]`; a non-positive or non-finite
/// `delta_ratio` yields `0.0` so a stalled clock never moves anything.
#[inline]
pub fn damping_factor(speed: f32, delta_ratio: f32) -> f32 {
    if !(delta_ratio > 0.0) || !delta_ratio.is_finite() {
        return 0.0;
    }
    let speed = if speed.is_finite() {
        speed.clamp(0.0, 1.0)
    } else {
        0.0
    };
    1.0 - (1.0 - speed).powf(delta_ratio)
}

/// Scale distortion derived from the chase distance, capped at `cap`.
#[inline]
pub fn stretch_scale(distance: f32, limiter: f32, cap: f32) -> f32 {
    if !(limiter > 0.0) || !distance.is_finite() {
        return cap.max(0.0);
    }
    (distance.abs() / limiter).min(cap)
}

/// Heading of `velocity` in degrees, as `atan(vy / vx)`.
///
/// A zero horizontal component resolves to the limit of `atan`: `±90`
/// following the sign of `vy`, and `0` when the velocity is zero.
#[inline]
pub fn heading_degrees(velocity: Vec2) -> f32 {
    if velocity.x == 0.0 {
        if velocity.y == 0.0 || velocity.y.is_nan() {
            return 0.0;
        }
        return 90.0_f32.copysign(velocity.y);
    }
    let deg = (velocity.y / velocity.x).atan().to_degrees();
    if deg.is_finite() {
        deg
    } else {
        0.0
    }
}

/// Two-dimensional follower state owned by a scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
    pos: Vec2,
    velocity: Vec2,
}

impl Follower {
    pub fn new(initial: Vec2) -> Self {
        Self {
            pos: initial,
            velocity: Vec2::ZERO,
        }
    }

    /// Move toward `target`; the velocity becomes the remaining gap.
    pub fn step(&mut self, target: Vec2, delta_ratio: f32, speed: f32) -> Vec2 {
        let dt = damping_factor(speed, delta_ratio);
        self.pos += (target - self.pos) * dt;
        self.velocity = target - self.pos;
        self.pos
    }

    /// Jump straight to `to`, discarding any pending chase.
    pub fn snap(&mut self, to: Vec2) {
        self.pos = to;
        self.velocity = Vec2::ZERO;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

/// Scalar follower, used for zoom distances and single angles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower1 {
    value: f32,
}

impl Follower1 {
    pub fn new(initial: f32) -> Self {
        Self { value: initial }
    }

    pub fn step(&mut self, target: f32, delta_ratio: f32, speed: f32) -> f32 {
        self.value += (target - self.value) * damping_factor(speed, delta_ratio);
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Visual transform written to the cursor element each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailTransform {
    pub position: Vec2,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation_deg: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct TrailParams {
    pub speed: f32,
    pub velocity_limiter: f32,
    pub scale_cap: f32,
}

/// Cursor trail: a follower that squashes and turns toward where it is going.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    pub params: TrailParams,
    follower: Follower,
}

impl CursorTrail {
    pub fn new(params: TrailParams) -> Self {
        Self {
            params,
            follower: Follower::default(),
        }
    }

    pub fn update(&mut self, target: Vec2, delta_ratio: f32) -> TrailTransform {
        let position = self.follower.step(target, delta_ratio, self.params.speed);
        let velocity = self.follower.velocity();
        let scale = stretch_scale(
            velocity.length(),
            self.params.velocity_limiter,
            self.params.scale_cap,
        );
        TrailTransform {
            position,
            scale_x: 1.0 + scale,
            scale_y: 1.0 - scale,
            rotation_deg: heading_degrees(velocity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_factor_matches_speed_at_nominal_ratio() {
        assert!((damping_factor(0.15, 1.0) - 0.15).abs() < 1e-6);
        assert_eq!(damping_factor(0.15, 0.0), 0.0);
        assert_eq!(damping_factor(0.15, -2.0), 0.0);
        assert_eq!(damping_factor(0.15, f32::NAN), 0.0);
        assert_eq!(damping_factor(1.5, 1.0), 1.0);
    }

    #[test]
    fn heading_handles_vertical_velocity() {
        assert_eq!(heading_degrees(Vec2::new(0.0, 5.0)), 90.0);
        assert_eq!(heading_degrees(Vec2::new(0.0, -5.0)), -90.0);
        assert_eq!(heading_degrees(Vec2::ZERO), 0.0);
        assert!((heading_degrees(Vec2::new(1.0, 1.0)) - 45.0).abs() < 1e-4);
        // atan folds the left half-plane onto the right one
        assert!((heading_degrees(Vec2::new(-1.0, 1.0)) + 45.0).abs() < 1e-4);
    }
}
