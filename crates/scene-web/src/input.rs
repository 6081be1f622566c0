use glam::Vec2;

// WheelEvent.deltaMode values; 0 is pixels
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

const LINE_PX: f32 = 16.0;
const PAGE_PX: f32 = 800.0;

/// Client coordinates relative to an element whose top-left sits at `origin`.
#[inline]
pub fn client_to_local(client: Vec2, origin: Vec2) -> Vec2 {
    client - origin
}

/// Wheel delta converted to pixels whatever unit the browser reported.
#[inline]
pub fn wheel_pixels(delta_y: f64, delta_mode: u32) -> f32 {
    let dy = delta_y as f32;
    if !dy.is_finite() {
        return 0.0;
    }
    match delta_mode {
        DOM_DELTA_LINE => dy * LINE_PX,
        DOM_DELTA_PAGE => dy * PAGE_PX,
        _ => dy,
    }
}

/// Mean position of the active touches.
pub fn touch_centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let sum: Vec2 = points.iter().copied().sum();
    Some(sum / points.len() as f32)
}

/// Axis-aligned bounds `(min, max)` of projected corners.
pub fn bounds(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}
