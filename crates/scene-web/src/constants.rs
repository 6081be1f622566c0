// Painting and input tuning for the browser front-end

// Lighting for the projected scenes
pub const LIGHT_DIR: [f32; 3] = [0.4, 1.0, 0.7];
pub const AMBIENT: f32 = 0.35;

// Scene palettes (rgb in 0..1)
pub const BRICK_RGB: [f32; 3] = [0.93, 0.42, 0.29];
pub const BRICK_FLOOR_RGB: [f32; 3] = [0.16, 0.16, 0.18];
pub const BRICK_BACKGROUND: &str = "#111";
pub const SPHERE_RGB: [f32; 3] = [0.92, 0.92, 0.95];
pub const SPHERE_BACKGROUND: &str = "#0b0b10";
pub const CUBE_RGB: [f32; 3] = [0.55, 0.7, 0.95];
pub const CUBE_BACKGROUND: &str = "#0d1020";
pub const DRAG_PLANE_RGB: [f32; 3] = [0.3, 0.8, 0.6];
pub const DRAG_BACKGROUND: &str = "#101010";
pub const CAROUSEL_BACKGROUND: &str = "#000";
pub const PLACEHOLDER_FILL: &str = "#2a2a2a";
pub const TEMPLATE_PLANE_RGB: [f32; 3] = [0.2, 0.4, 1.0];
pub const TEMPLATE_BACKGROUND: &str = "#fff";
pub const PRELOADER_TILE_RGB: [f32; 3] = [0.0, 0.0, 0.0];

// Sphere shade contrast across the noise height range
pub const SPHERE_DEPTH_SHADE: f32 = 0.45;
