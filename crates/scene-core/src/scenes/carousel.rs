//! A row of image slots loaded asynchronously.

use crate::camera::Camera;
use crate::config::{url_list, ParamSource, PARAM_IMAGES};
use crate::constants::{CAROUSEL_CAMERA_Z, CAROUSEL_GAP, CAROUSEL_ITEMS, CAROUSEL_SIDE};
use crate::layout::carousel_slots;
use crate::pointer::Viewport;
use glam::{Mat4, Vec3};

/// Per-slot values a material would receive as uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotUniforms {
    pub time: f32,
    pub x: f32,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetState {
    /// No image configured for this slot.
    Empty,
    Pending,
    Ready,
    Failed,
}

#[derive(Clone, Debug)]
pub struct Slot {
    pub url: Option<String>,
    pub uniforms: SlotUniforms,
    pub state: AssetState,
}

pub struct Carousel {
    slots: Vec<Slot>,
    side: f32,
}

impl Carousel {
    pub fn new(source: &dyn ParamSource) -> Self {
        let urls = url_list(source, PARAM_IMAGES);
        let slots = carousel_slots(CAROUSEL_ITEMS, CAROUSEL_SIDE, CAROUSEL_GAP)
            .into_iter()
            .enumerate()
            .map(|(i, x)| {
                let url = urls.get(i).cloned();
                Slot {
                    state: if url.is_some() {
                        AssetState::Pending
                    } else {
                        AssetState::Empty
                    },
                    url,
                    uniforms: SlotUniforms {
                        time: 1.0,
                        x,
                        radius: CAROUSEL_SIDE / 2.0,
                    },
                }
            })
            .collect();
        Self {
            slots,
            side: CAROUSEL_SIDE,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    /// Record the outcome of a load; stale or out-of-range reports are ignored.
    pub fn set_state(&mut self, index: usize, state: AssetState) {
        if let Some(slot) = self.slots.get_mut(index) {
            if slot.state == AssetState::Pending {
                slot.state = state;
            }
        }
    }

    pub fn frame(&mut self, dt_sec: f32) {
        if dt_sec <= 0.0 {
            return;
        }
        for slot in &mut self.slots {
            slot.uniforms.time += dt_sec;
        }
    }

    /// Slots sit side by side along X.
    pub fn slot_matrix(&self, index: usize) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.slots[index].uniforms.x, 0.0, 0.0))
    }

    pub fn camera(viewport: Viewport) -> Camera {
        let mut cam = Camera::perspective(
            75.0,
            Vec3::new(0.0, 0.0, CAROUSEL_CAMERA_Z),
            Vec3::ZERO,
            viewport.aspect(),
        );
        cam.zfar = 1000.0;
        cam
    }
}
