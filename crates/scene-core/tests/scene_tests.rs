// Host-side tests for the per-scene models.

use approx::assert_abs_diff_eq;
use glam::{Mat4, Vec2};
use scene_core::scenes::brick_wave::{BrickWave, WaveTiming};
use scene_core::scenes::carousel::{AssetState, Carousel};
use scene_core::scenes::circles::{CirclesParams, ConcentricCircles};
use scene_core::scenes::cube_grid::CubeGrid;
use scene_core::scenes::cursor::CursorScene;
use scene_core::scenes::drag_grid::DragPan;
use scene_core::scenes::lines::{smooth_handles, LineField, LinesParams};
use scene_core::scenes::preloader::{BrickPreloader, PreloadPhase};
use scene_core::scenes::sphere_grid::{kernel_targets, SphereGrid};
use scene_core::{FrameClock, NoParams, ParamSource, Viewport};

struct Images(&'static str);

impl ParamSource for Images {
    fn param(&self, key: &str) -> Option<String> {
        (key == "images").then(|| self.0.to_string())
    }
}

fn line_field() -> LineField {
    LineField::new(LinesParams::default(), Viewport::new(1200.0, 800.0))
}

#[test]
fn lines_pin_only_within_offset() {
    let mut field = line_field();
    field.on_pointer(Vec2::new(505.0, 100.0));
    let pinned: Vec<f32> = field
        .lines()
        .iter()
        .filter(|l| l.pinned)
        .map(|l| l.anchor_x())
        .collect();
    assert_eq!(pinned, vec![500.0, 510.0]);
}

#[test]
fn pinned_bend_trails_pointer_and_is_clamped() {
    let mut field = line_field();
    field.on_pointer(Vec2::new(505.0, 100.0));
    let line = &field.lines()[50];
    assert_eq!(line.bend(), Vec2::new(495.0, 200.0));

    field.on_pointer(Vec2::new(530.0, 790.0));
    let line = &field.lines()[50];
    assert_eq!(line.bend(), Vec2::new(520.0, 600.0));
}

#[test]
fn overstretched_line_springs_back() {
    let mut field = line_field();
    field.on_pointer(Vec2::new(505.0, 300.0));
    field.on_pointer(Vec2::new(600.0, 300.0));
    field.on_pointer(Vec2::new(700.0, 300.0));
    let line = &field.lines()[50];
    assert!(!line.pinned);
    assert!(line.is_releasing());

    // halfway through the spring the line may overshoot, never run away
    field.frame(1.0);
    let mid = field.lines()[50].bend();
    assert!((mid.x - 500.0).abs() < 80.0);

    field.frame(5.0);
    let line = &field.lines()[50];
    assert!(!line.is_releasing());
    assert_eq!(line.bend(), Vec2::new(500.0, 400.0));
}

#[test]
fn regrabbing_a_released_line_stops_the_spring() {
    let mut field = line_field();
    for x in [505.0, 600.0, 700.0] {
        field.on_pointer(Vec2::new(x, 300.0));
    }
    field.frame(1.0);
    field.on_pointer(Vec2::new(502.0, 300.0));
    let line = &field.lines()[50];
    assert!(line.pinned);
    assert!(!line.is_releasing());
}

#[test]
fn straight_line_handles_run_along_it() {
    let pts = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 50.0),
        Vec2::new(0.0, 100.0),
    ];
    let (h_in, h_out) = smooth_handles(&pts, 0.55);
    assert_abs_diff_eq!(h_in.x, 0.0);
    assert_abs_diff_eq!(h_in.y, -27.5, epsilon = 1e-4);
    assert_abs_diff_eq!(h_out.y, 27.5, epsilon = 1e-4);
}

#[test]
fn wave_heights_stay_in_range() {
    let timing = WaveTiming::default();
    for step in 0..2000 {
        let t = step as f32 * 0.01;
        for i in [0, 7, 33, 64] {
            let h = timing.height(i, t);
            assert!(h >= timing.rest - 1e-4 && h <= timing.lift + 1e-4, "{h}");
        }
    }
}

#[test]
fn wave_is_staggered_and_periodic() {
    let timing = WaveTiming::default();
    assert_abs_diff_eq!(timing.height(0, 0.0), 1.75, epsilon = 1e-5);
    assert_abs_diff_eq!(timing.height(0, 0.225), (1.75 + 7.0) / 2.0, epsilon = 1e-4);
    assert_abs_diff_eq!(timing.height(0, 0.45), 7.0, epsilon = 1e-4);
    assert_abs_diff_eq!(timing.height(0, 1.2), 1.75, epsilon = 1e-5);
    // brick 8 starts exactly one wave duration later
    assert_abs_diff_eq!(timing.height(8, 0.45), 1.75, epsilon = 1e-4);
    assert_abs_diff_eq!(timing.height(8, 0.9), 7.0, epsilon = 1e-3);
    assert_abs_diff_eq!(
        timing.height(3, 0.5),
        timing.height(3, 0.5 + timing.period()),
        epsilon = 1e-3
    );
}

#[test]
fn brick_scene_tilts_toward_pointer() {
    let mut wave = BrickWave::new(&NoParams);
    for _ in 0..300 {
        wave.frame(Vec2::new(1.0, -1.0), 1.0 / 60.0, 1.0);
    }
    let tilt = wave.tilt();
    assert_abs_diff_eq!(tilt.x, (-7.0_f32).to_radians(), epsilon = 1e-4);
    assert_abs_diff_eq!(tilt.y, (-12.0_f32).to_radians(), epsilon = 1e-4);
    assert_eq!(wave.len(), 65);
}

#[test]
fn kernel_peaks_under_pointer() {
    let targets = kernel_targets(Vec2::new(0.5, 0.5), 40, 70, 24, 2.0);
    assert_eq!(targets.len(), 24 * 24);
    let peak = targets.iter().map(|t| t.1).fold(f32::MIN, f32::max);
    assert_abs_diff_eq!(peak, 5.0, epsilon = 1e-5);
    assert!(targets.iter().all(|t| t.1 >= 1.0));
}

#[test]
fn kernel_at_border_stays_in_bounds() {
    let targets = kernel_targets(Vec2::new(0.0, 0.0), 40, 70, 24, 2.0);
    assert!(!targets.is_empty());
    assert!(targets.len() < 24 * 24);
    assert!(targets.iter().all(|(i, _)| *i < 40 * 70));
}

#[test]
fn kernel_cells_grow_then_relax() {
    let mut grid = SphereGrid::new(&NoParams);
    grid.apply_kernel(Vec2::new(0.5, 0.5));
    assert_eq!(grid.active_len(), 576);

    let mut clock = FrameClock::new();
    let mut now = 0.0;
    for _ in 0..60 {
        now += 1000.0 / 60.0;
        let tick = clock.tick(now);
        // pointer far away: the kernel moves off the first cells
        grid.frame(&tick, Vec2::new(0.95, 0.05));
    }
    let center = 20 * 70 + 35;
    let relaxed = grid.cells()[center].scale();
    assert!(relaxed < 1.5, "scale {relaxed}");
}

#[test]
fn wheel_zoom_is_clamped_and_followed() {
    let mut grid = SphereGrid::new(&NoParams);
    grid.scroll(1e6);
    assert_eq!(grid.zoom_target(), 400.0);
    grid.scroll(-1e6);
    assert_eq!(grid.zoom_target(), 40.0);

    let mut clock = FrameClock::new();
    let mut now = 0.0;
    for _ in 0..240 {
        now += 1000.0 / 60.0;
        let tick = clock.tick(now);
        grid.frame(&tick, Vec2::splat(0.5));
    }
    assert_abs_diff_eq!(grid.camera_distance(), 40.0, epsilon = 0.5);
}

#[test]
fn sphere_heights_follow_noise_strength() {
    let mut grid = SphereGrid::new(&NoParams);
    let mut clock = FrameClock::new();
    let tick = clock.tick(0.0);
    grid.frame(&tick, Vec2::splat(0.5));
    assert!(grid.cells().iter().all(|c| c.z.abs() <= 22.0));
    assert!(grid.cells().iter().any(|c| c.z != 0.0));
}

#[test]
fn cube_rotations_change_over_time() {
    let mut cubes = CubeGrid::new(&NoParams);
    assert_eq!(cubes.len(), 900);
    cubes.frame(1.0);
    let before = cubes.rotation(123);
    for _ in 0..200 {
        cubes.frame(1.0);
    }
    assert_ne!(before, cubes.rotation(123));
}

#[test]
fn rings_lag_by_index() {
    let mut circles = ConcentricCircles::new(CirclesParams::default(), Vec2::ZERO);
    assert_eq!(circles.ring_speed(0), 1.0);
    assert_abs_diff_eq!(circles.ring_speed(1), 0.6, epsilon = 1e-6);
    assert_abs_diff_eq!(circles.ring_speed(6), 0.1, epsilon = 1e-6);

    circles.frame(Vec2::new(100.0, 0.0), 1.0);
    let xs: Vec<f32> = circles.rings().map(|(c, _)| c.x).collect();
    assert_eq!(xs[0], 100.0);
    assert!(xs.windows(2).all(|w| w[0] >= w[1]));
    let radii: Vec<f32> = circles.rings().take(3).map(|(_, r)| r).collect();
    assert_eq!(radii, vec![40.0, 80.0, 120.0]);
}

#[test]
fn drag_only_pans_while_pressed() {
    let mut pan = DragPan::new(&NoParams);
    pan.on_move(Vec2::new(0.0, 0.0));
    pan.on_move(Vec2::new(0.2, 0.2));
    assert_eq!(pan.target(), Vec2::ZERO);

    pan.begin_drag(Vec2::new(0.2, 0.2));
    pan.on_move(Vec2::new(0.3, 0.4));
    pan.end_drag();
    pan.on_move(Vec2::new(-0.4, -0.4));

    assert_abs_diff_eq!(pan.target().x, -0.3, epsilon = 1e-5);
    assert_abs_diff_eq!(pan.target().y, 0.6, epsilon = 1e-5);

    for _ in 0..200 {
        pan.frame(1.0);
    }
    assert_abs_diff_eq!(pan.offset().x, -0.3, epsilon = 1e-4);
    assert_abs_diff_eq!(pan.offset().y, 0.6, epsilon = 1e-4);
}

#[test]
fn drag_counts_from_the_press_position() {
    let mut pan = DragPan::new(&NoParams);
    pan.on_move(Vec2::new(0.0, 0.0));
    // the pointer travelled to 0.1 before the button went down
    pan.begin_drag(Vec2::new(0.1, 0.0));
    pan.on_move(Vec2::new(0.2, 0.0));
    assert_abs_diff_eq!(pan.target().x, -0.3, epsilon = 1e-5);
    assert_abs_diff_eq!(pan.target().y, 0.0, epsilon = 1e-6);

    pan.end_drag();
    pan.begin_drag(Vec2::new(0.5, 0.0));
    assert_abs_diff_eq!(pan.target().x, -0.3, epsilon = 1e-5);
}

#[test]
fn cursor_holds_the_origin_until_the_first_move() {
    let mut cursor = CursorScene::new(Viewport::new(1920.0, 1080.0), &NoParams);
    for _ in 0..10 {
        let t = cursor.frame(None, 1.0);
        assert_eq!(t.position, Vec2::ZERO);
        assert_eq!(t.scale_x, 1.0);
    }
    let t = cursor.frame(Some(Vec2::new(400.0, 300.0)), 1.0);
    assert!(t.position.x > 0.0 && t.position.x < 400.0);
}

#[test]
fn carousel_tracks_asset_outcomes() {
    let mut carousel = Carousel::new(&Images(" a.png , ,b.png"));
    let states: Vec<AssetState> = carousel.slots().iter().map(|s| s.state).collect();
    assert_eq!(
        states,
        vec![
            AssetState::Pending,
            AssetState::Pending,
            AssetState::Empty,
            AssetState::Empty,
            AssetState::Empty
        ]
    );
    carousel.set_state(0, AssetState::Ready);
    carousel.set_state(1, AssetState::Failed);
    carousel.set_state(3, AssetState::Ready);
    carousel.set_state(42, AssetState::Ready);
    // a late duplicate report does not flip a settled slot
    carousel.set_state(1, AssetState::Ready);

    let states: Vec<AssetState> = carousel.slots().iter().map(|s| s.state).collect();
    assert_eq!(states[0], AssetState::Ready);
    assert_eq!(states[1], AssetState::Failed);
    assert_eq!(states[3], AssetState::Empty);
    assert_eq!(carousel.slots()[1].url.as_deref(), Some("b.png"));
}

#[test]
fn carousel_slots_stay_put_while_time_runs() {
    let mut carousel = Carousel::new(&NoParams);
    let before: Vec<Mat4> = (0..carousel.slots().len())
        .map(|i| carousel.slot_matrix(i))
        .collect();
    for _ in 0..90 {
        carousel.frame(1.0 / 60.0);
    }
    for (i, m) in before.iter().enumerate() {
        assert_eq!(carousel.slot_matrix(i), *m);
        assert_eq!(m.w_axis.y, 0.0);
    }
    assert_abs_diff_eq!(carousel.slots()[0].uniforms.time, 2.5, epsilon = 1e-4);
}

#[test]
fn preloader_fades_and_finishes() {
    let mut pre = BrickPreloader::new(Viewport::new(100.0, 50.0), 9);
    assert_eq!(pre.tiles().len(), 50);
    let mut last_phase = PreloadPhase::Running { progress: 0.0 };
    let mut prev: Vec<f32> = pre.tiles().iter().map(|t| t.alpha).collect();
    for _ in 0..200 {
        last_phase = pre.frame(1000.0 / 60.0);
        let now: Vec<f32> = pre.tiles().iter().map(|t| t.alpha).collect();
        assert!(now.iter().zip(&prev).all(|(n, p)| n <= p && *n >= 0.0));
        prev = now;
    }
    assert_eq!(last_phase, PreloadPhase::Finished);
    assert!(pre.is_finished());
    let mean = prev.iter().sum::<f32>() / prev.len() as f32;
    assert!(mean < 0.9, "mean alpha {mean}");
}
