//! Procedural placement of scene primitives.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

/// Row-major cell centers of a grid centered near the origin.
///
/// Cells are `size + offset` apart. The grid is shifted by half of its
/// extent on each axis, exactly `pitch * cols / 2` horizontally and
/// `pitch * rows / 2` vertically.
pub fn centered_grid(rows: usize, cols: usize, size: f32, offset: f32) -> Vec<Vec3> {
    let pitch = size + offset;
    let shift_x = pitch * cols as f32 / 2.0;
    let shift_y = pitch * rows as f32 / 2.0;
    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            cells.push(Vec3::new(
                -shift_x + col as f32 * pitch,
                -shift_y + row as f32 * pitch,
                0.0,
            ));
        }
    }
    cells
}

/// Square variant of [`centered_grid`] where both axes shift by the column extent.
pub fn square_grid(rows: usize, cols: usize, size: f32, offset: f32) -> Vec<Vec3> {
    let pitch = size + offset;
    let shift = pitch * cols as f32 / 2.0;
    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            cells.push(Vec3::new(
                -shift + col as f32 * pitch,
                -shift + row as f32 * pitch,
                0.0,
            ));
        }
    }
    cells
}

/// Positions along the `x = z` diagonal, centered on the origin.
pub fn diagonal_row(count: usize, step: f32, y: f32) -> Vec<Vec3> {
    let shift = step * count as f32 / 2.0;
    (0..count)
        .map(|i| {
            let d = -shift + i as f32 * step;
            Vec3::new(d, y, d)
        })
        .collect()
}

/// Horizontal slot centers for `count` squares of `side` separated by `gap`.
pub fn carousel_slots(count: usize, side: f32, gap: f32) -> Vec<f32> {
    let pitch = side + gap;
    let half = count.saturating_sub(1) as f32 / 2.0;
    (0..count).map(|i| pitch * i as f32 - half * pitch).collect()
}

/// Vertical three-point paths, evenly spaced across `width`.
pub fn line_anchors(amount: usize, width: f32, height: f32) -> Vec<SmallVec<[Vec2; 3]>> {
    let amount = amount.max(1);
    (0..amount)
        .map(|j| {
            let x = width / amount as f32 * j as f32;
            (0..=2)
                .map(|i| Vec2::new(x, height * i as f32 / 2.0))
                .collect()
        })
        .collect()
}

/// Top-left corners of `size` tiles covering a `width` x `height` area.
pub fn box_grid(width: f32, height: f32, size: f32) -> Vec<Vec2> {
    if !(size > 0.0) || !(width > 0.0) || !(height > 0.0) {
        return Vec::new();
    }
    let nx = (width / size).ceil() as usize;
    let ny = (height / size).ceil() as usize;
    let mut tiles = Vec::with_capacity(nx * ny);
    for y in 0..ny {
        for x in 0..nx {
            tiles.push(Vec2::new(x as f32 * size, y as f32 * size));
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_slots_are_symmetric() {
        let xs = carousel_slots(5, 2.0, 1.0);
        assert_eq!(xs, vec![-6.0, -3.0, 0.0, 3.0, 6.0]);
    }

    #[test]
    fn box_grid_covers_partial_tiles() {
        let tiles = box_grid(25.0, 10.0, 10.0);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[2], Vec2::new(20.0, 0.0));
        assert!(box_grid(0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn lines_span_full_height() {
        let lines = line_anchors(4, 400.0, 300.0);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1][0], Vec2::new(100.0, 0.0));
        assert_eq!(lines[1][1], Vec2::new(100.0, 150.0));
        assert_eq!(lines[1][2], Vec2::new(100.0, 300.0));
    }
}
