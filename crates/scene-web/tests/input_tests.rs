// Host-side tests for pure input helpers.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_coordinates_become_element_local() {
    let local = client_to_local(Vec2::new(120.0, 80.0), Vec2::new(20.0, 30.0));
    assert_eq!(local, Vec2::new(100.0, 50.0));
}

#[test]
fn wheel_deltas_are_normalized_to_pixels() {
    assert_eq!(wheel_pixels(120.0, 0), 120.0);
    assert_eq!(wheel_pixels(3.0, DOM_DELTA_LINE), 48.0);
    assert_eq!(wheel_pixels(-1.0, DOM_DELTA_PAGE), -800.0);
    assert_eq!(wheel_pixels(f64::NAN, 0), 0.0);
}

#[test]
fn touch_centroid_averages_fingers() {
    assert_eq!(touch_centroid(&[]), None);
    let c = touch_centroid(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0)]);
    assert_eq!(c, Some(Vec2::new(5.0, 10.0)));
}

#[test]
fn bounds_cover_all_points() {
    assert_eq!(bounds(&[]), None);
    let pts = [
        Vec2::new(3.0, 9.0),
        Vec2::new(-1.0, 4.0),
        Vec2::new(7.0, 2.0),
    ];
    assert_eq!(bounds(&pts), Some((Vec2::new(-1.0, 2.0), Vec2::new(7.0, 9.0))));
}
