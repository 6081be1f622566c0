use crate::input::{touch_centroid, wheel_pixels};
use glam::Vec2;
use scene_core::PointerState;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level input shared by every mounted scene.
///
/// Listeners are registered by [`InputTracker::attach`], which the index
/// calls once something has mounted; a page without mounts gets none.
#[derive(Clone)]
pub struct InputTracker {
    pointer: Rc<RefCell<PointerState>>,
    resizes: Rc<Cell<u64>>,
    attached: Rc<Cell<bool>>,
}

impl InputTracker {
    pub fn new(initial: Vec2) -> Self {
        Self {
            pointer: Rc::new(RefCell::new(PointerState::new(initial))),
            resizes: Rc::new(Cell::new(0)),
            attached: Rc::new(Cell::new(false)),
        }
    }

    pub fn pointer(&self) -> Ref<'_, PointerState> {
        self.pointer.borrow()
    }

    pub fn pointer_mut(&self) -> RefMut<'_, PointerState> {
        self.pointer.borrow_mut()
    }

    /// Bumped by every window resize.
    pub fn resize_generation(&self) -> u64 {
        self.resizes.get()
    }

    /// Presses on `target` (mouse or touch) start a press on the shared
    /// pointer, recorded at the press position.
    pub fn press_on(&self, target: &web::EventTarget) {
        {
            let pointer = self.pointer.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                let mut p = pointer.borrow_mut();
                p.observe(ev.client_x() as f32, ev.client_y() as f32);
                p.press();
            }) as Box<dyn FnMut(_)>);
            target
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }
        {
            let pointer = self.pointer.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
                let mut p = pointer.borrow_mut();
                observe_touches(&mut p, &ev);
                p.press();
            }) as Box<dyn FnMut(_)>);
            target
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }
    }

    pub fn attach(&self) {
        if self.attached.get() {
            return;
        }
        let Some(window) = web::window() else {
            log::warn!("[input] no window; pointer tracking disabled");
            return;
        };
        self.attached.set(true);

        // Pointer move
        {
            let pointer = self.pointer.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                pointer
                    .borrow_mut()
                    .observe(ev.client_x() as f32, ev.client_y() as f32);
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }

        // Presses start on a scene's own element but may end anywhere
        {
            let pointer = self.pointer.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
                pointer.borrow_mut().release();
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }

        // Touch moves
        for event in ["touchstart", "touchmove"] {
            let pointer = self.pointer.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
                observe_touches(&mut pointer.borrow_mut(), &ev);
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }
        {
            let pointer = self.pointer.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
                if ev.touches().length() == 0 {
                    pointer.borrow_mut().release();
                }
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }

        // Wheel
        {
            let pointer = self.pointer.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
                pointer
                    .borrow_mut()
                    .scroll(wheel_pixels(ev.delta_y(), ev.delta_mode()));
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }

        // Resize only flags; scenes re-layout on the next frame
        {
            let resizes = self.resizes.clone();
            let closure = Closure::wrap(Box::new(move || {
                resizes.set(resizes.get() + 1);
            }) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
        }

        log::info!("[input] window listeners attached");
    }
}

/// Touches act as one pointer at their centroid.
fn observe_touches(pointer: &mut PointerState, ev: &web::TouchEvent) {
    let list = ev.touches();
    let points: Vec<Vec2> = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect();
    if let Some(c) = touch_centroid(&points) {
        pointer.observe(c.x, c.y);
    }
}
