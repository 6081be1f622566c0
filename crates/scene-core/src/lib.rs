//! Platform-independent core of drift-scenes.
//!
//! Everything here is pure Rust: follower smoothing, frame timing, easing,
//! noise, layout and the per-scene models. The web front-end owns the DOM
//! and canvas; it feeds input into these models and paints what they expose.

pub mod camera;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod follow;
pub mod layout;
pub mod mesh;
pub mod noise;
pub mod pointer;
pub mod registry;
pub mod scenes;
pub mod ticker;
pub mod tween;

pub use camera::*;
pub use config::*;
pub use ease::*;
pub use error::*;
pub use follow::*;
pub use layout::*;
pub use mesh::*;
pub use noise::*;
pub use pointer::*;
pub use registry::*;
pub use ticker::*;
pub use tween::*;
