// Host-side tests for the pointer-following core.

use approx::assert_abs_diff_eq;
use glam::Vec2;
use scene_core::{
    damping_factor, heading_degrees, stretch_scale, CursorTrail, Follower, TrailParams,
};

fn run(speed: f32, delta_ratio: f32, steps: usize, target: Vec2) -> Vec2 {
    let mut f = Follower::new(Vec2::ZERO);
    for _ in 0..steps {
        f.step(target, delta_ratio, speed);
    }
    f.position()
}

#[test]
fn converges_for_any_speed_and_ratio() {
    let target = Vec2::new(-34.0, 125.0);
    for &speed in &[0.01_f32, 0.091, 0.15, 0.5, 0.99] {
        for &ratio in &[0.25_f32, 1.0, 2.0, 4.5] {
            let mut f = Follower::new(Vec2::new(10.0, -10.0));
            let mut steps = 0;
            while (f.position() - target).length() > 1e-2 {
                f.step(target, ratio, speed);
                steps += 1;
                assert!(steps < 100_000, "speed {speed} ratio {ratio} did not converge");
            }
        }
    }
}

#[test]
fn same_wall_clock_time_same_position() {
    let target = Vec2::new(100.0, -50.0);
    // one second at 30, 60, 120 and 240 Hz
    let at_30 = run(0.05, 2.0, 30, target);
    let at_60 = run(0.05, 1.0, 60, target);
    let at_120 = run(0.05, 0.5, 120, target);
    let at_240 = run(0.05, 0.25, 240, target);
    for p in [at_30, at_120, at_240] {
        assert_abs_diff_eq!(p.x, at_60.x, epsilon = 1e-2);
        assert_abs_diff_eq!(p.y, at_60.y, epsilon = 1e-2);
    }
}

#[test]
fn fixed_target_settles_without_oscillation() {
    let target = Vec2::new(42.0, 7.0);
    let mut f = Follower::new(Vec2::new(-100.0, 300.0));
    let mut gap = (f.position() - target).length();
    for _ in 0..400 {
        f.step(target, 1.0, 0.3);
        let next = (f.position() - target).length();
        assert!(next <= gap + 1e-5, "gap grew from {gap} to {next}");
        gap = next;
    }
    // once there, it stays there
    let settled = f.position();
    for _ in 0..100 {
        f.step(target, 1.0, 0.3);
    }
    assert_abs_diff_eq!(f.position().x, settled.x, epsilon = 1e-4);
    assert_abs_diff_eq!(f.position().y, settled.y, epsilon = 1e-4);
}

#[test]
fn thirty_frames_at_speed_015_reach_target() {
    let pos = run(0.15, 1.0, 30, Vec2::new(100.0, 100.0));
    assert!((pos.x - 100.0).abs() < 1.0);
    assert!((pos.y - 100.0).abs() < 1.0);
}

#[test]
fn step_is_convex_interpolation() {
    let mut f = Follower::new(Vec2::new(0.0, 0.0));
    let target = Vec2::new(10.0, -10.0);
    let p = f.step(target, 3.0, 0.4);
    assert!(p.x >= 0.0 && p.x <= 10.0);
    assert!(p.y <= 0.0 && p.y >= -10.0);
    assert_abs_diff_eq!(f.velocity().x, target.x - p.x, epsilon = 1e-6);
}

#[test]
fn scale_never_exceeds_cap() {
    for d in [0.0_f32, 1.0, 500.0, 1e9, f32::MAX] {
        assert!(stretch_scale(d, 300.0, 0.35) <= 0.35);
    }
    assert_eq!(stretch_scale(150.0, 300.0, 0.35), 0.35);
    assert_abs_diff_eq!(stretch_scale(30.0, 300.0, 0.35), 0.1, epsilon = 1e-6);
}

#[test]
fn heading_is_always_finite() {
    for v in [
        Vec2::ZERO,
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(1e-30, 1e30),
        Vec2::new(-3.0, 0.0),
    ] {
        assert!(heading_degrees(v).is_finite(), "{v:?}");
    }
}

#[test]
fn damping_factor_compounds_across_ratios() {
    // two half-ratio steps equal one full step
    let half = damping_factor(0.2, 0.5);
    let combined = 1.0 - (1.0 - half) * (1.0 - half);
    assert_abs_diff_eq!(combined, damping_factor(0.2, 1.0), epsilon = 1e-6);
}

#[test]
fn cursor_trail_squashes_while_chasing() {
    let mut trail = CursorTrail::new(TrailParams {
        speed: 0.15,
        velocity_limiter: 1920.0 / 3.5,
        scale_cap: 0.35,
    });
    let t = trail.update(Vec2::new(800.0, 0.0), 1.0);
    assert!(t.scale_x > 1.0);
    assert!(t.scale_y < 1.0);
    assert_abs_diff_eq!(t.scale_x - 1.0, 1.0 - t.scale_y, epsilon = 1e-6);
    assert_abs_diff_eq!(t.rotation_deg, 0.0, epsilon = 1e-6);

    for _ in 0..200 {
        trail.update(Vec2::new(800.0, 0.0), 1.0);
    }
    let rest = trail.update(Vec2::new(800.0, 0.0), 1.0);
    assert_abs_diff_eq!(rest.scale_x, 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(rest.position.x, 800.0, epsilon = 1e-2);
}
