// Shared tuning constants for every scene model.

// Frame timing
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0; // reference frame for delta ratios
pub const LAG_THRESHOLD_MS: f64 = 500.0; // deltas above this are treated as lag
pub const LAG_ADJUSTED_MS: f64 = 33.0; // replacement delta after a lag spike

// Cursor trail
pub const CURSOR_SPEED: f32 = 0.15;
pub const CURSOR_LIMITER_DIVISOR: f32 = 3.5; // limiter = viewport width / divisor
pub const CURSOR_SCALE_CAP: f32 = 0.35;

// Concentric circles
pub const CIRCLES_COUNT: usize = 69;
pub const CIRCLES_MIN_RADIUS: f32 = 40.0;
pub const CIRCLES_STROKE_WIDTH: f32 = 4.0;
pub const CIRCLES_EASE_MULTIPLIER: f32 = 0.3;

// Lines
pub const LINES_AMOUNT: usize = 120;
pub const LINES_WIDTH: f32 = 1.0;
pub const LINES_STRETCHING: f32 = 80.0; // max horizontal bend before release
pub const LINES_VERTICAL_LIMITER: f32 = 0.25; // bend y stays inside [l, 1 - l] * height
pub const LINES_PIN_OFFSET: f32 = 10.0;
pub const LINES_RELEASE_SEC: f32 = 3.7;
pub const LINES_RELEASE_AMPLITUDE: f32 = 1.0;
pub const LINES_RELEASE_PERIOD: f32 = 0.31;
pub const LINES_SMOOTH_FACTOR: f32 = 0.55;

// Brick wave
pub const BRICK_WIDTH: f32 = 5.5;
pub const BRICK_HEIGHT: f32 = 3.5;
pub const BRICK_DEPTH: f32 = 0.35;
pub const BRICK_STEP: f32 = 1.0;
pub const BRICKS_COUNT: usize = 65;
pub const BRICK_LIFT: f32 = 7.0;
pub const BRICK_WAVE_SEC: f32 = 0.45;
pub const BRICK_STAGGER_DIVISOR: f32 = 8.0; // stagger each = duration / divisor
pub const BRICK_REPEAT_DELAY_FACTOR: f32 = 3.0; // repeat delay = duration * factor
pub const BRICK_TILT_SPEED: f32 = 0.091;
pub const BRICK_TILT_X_DEG: f32 = 7.0;
pub const BRICK_TILT_Y_DEG: f32 = 12.0;
pub const BRICK_FLOOR_SIDE: f32 = 220.0;
pub const BRICK_CAMERA_EYE: [f32; 3] = [-100.0, 315.0, 585.0];
pub const BRICK_CAMERA_SCALE: f32 = 1.7;

// Sphere grid
pub const SPHERE_ROWS: usize = 40;
pub const SPHERE_COLS: usize = 70;
pub const SPHERE_SIZE: f32 = 0.3;
pub const SPHERE_CELL_SIZE: f32 = 1.25;
pub const SPHERE_CELL_OFFSET: f32 = 1.99;
pub const SPHERE_NOISE_ZOOM: f32 = 50.0;
pub const SPHERE_NOISE_STRENGTH: f32 = 20.0;
pub const SPHERE_TICKER_STEP: f32 = 0.0032; // per nominal frame
pub const SPHERE_KERNEL_RADIUS: i32 = 24;
pub const SPHERE_KERNEL_SCALE: f32 = 2.0;
pub const SPHERE_KERNEL_INTERVAL_MS: f64 = 150.0;
pub const SPHERE_GROW_SEC: f32 = 0.55;
pub const SPHERE_SHRINK_SEC: f32 = 1.1;
pub const SPHERE_CAMERA_Z: f32 = 180.0;
pub const SPHERE_ZOOM_SPEED: f32 = 0.12;
pub const SPHERE_ZOOM_PER_WHEEL: f32 = 0.1; // world units per wheel delta unit
pub const SPHERE_ZOOM_MIN: f32 = 40.0;
pub const SPHERE_ZOOM_MAX: f32 = 400.0;

// Cube grid
pub const CUBE_ROWS: usize = 30;
pub const CUBE_COLS: usize = 30;
pub const CUBE_SIZE: f32 = 0.95;
pub const CUBE_OFFSET: f32 = -0.21;
pub const CUBE_NOISE_ZOOM: f32 = 100.0;
pub const CUBE_NOISE_Y_SHIFT: f32 = 8000.0;
pub const CUBE_TICKER_STEP: f32 = 0.002;
pub const CUBE_SCENE_SCALE: f32 = 0.25;
pub const CUBE_CAMERA_Z: f32 = 15.0;

// Drag grid
pub const DRAG_SENSITIVITY: f32 = 3.0;
pub const DRAG_FOLLOW_SPEED: f32 = 0.2;
pub const DRAG_PLANE_SIDE: f32 = 5.0;
pub const DRAG_CAMERA_Z: f32 = 50.0;

// Image carousel
pub const CAROUSEL_ITEMS: usize = 5;
pub const CAROUSEL_SIDE: f32 = 2.0;
pub const CAROUSEL_GAP: f32 = 1.0;
pub const CAROUSEL_CAMERA_Z: f32 = 5.0;

// Brick preloader
pub const PRELOADER_BOX_SIZE: f32 = 10.0;
pub const PRELOADER_DURATION_MS: f64 = 3000.0;
pub const PRELOADER_FADE_STEP: f32 = 0.01;

// Template
pub const TEMPLATE_PLANE_SIDE: f32 = 2.0;
pub const TEMPLATE_CAMERA_Z: f32 = 5.0;
