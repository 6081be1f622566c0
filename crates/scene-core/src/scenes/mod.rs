//! Pure models behind each mounted scene.
//!
//! A model owns all per-frame state of its scene (followers, tweens,
//! timelines) and exposes what the painter needs. None of them touch the
//! DOM.

pub mod brick_wave;
pub mod carousel;
pub mod circles;
pub mod cube_grid;
pub mod cursor;
pub mod drag_grid;
pub mod lines;
pub mod preloader;
pub mod sphere_grid;
pub mod template;
