use crate::events::InputTracker;
use crate::scenes::{FrameInput, Scene};
use instant::Instant;
use scene_core::FrameClock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive every mounted scene from one requestAnimationFrame loop.
///
/// Listeners only record input; all drawing happens here.
pub fn start_loop(mut scenes: Vec<Box<dyn Scene>>, input: InputTracker) {
    let Some(window) = web::window() else {
        log::error!("[frame] no window; animation loop not started");
        return;
    };
    let started = Instant::now();
    let mut clock = FrameClock::new();
    let mut seen_resizes = input.resize_generation();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        let frame = clock.tick(now_ms);

        let generation = input.resize_generation();
        let resized = generation != seen_resizes;
        seen_resizes = generation;

        let wheel = input.pointer_mut().take_wheel();
        let frame_input = FrameInput {
            pointer: *input.pointer(),
            wheel,
        };
        for scene in scenes.iter_mut() {
            if resized {
                scene.resize();
            }
            scene.frame(&frame, &frame_input);
        }

        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
