use super::{FrameInput, Scene};
use crate::dom::{self, DataAttrs};
use scene_core::scenes::cursor::{css_transform, CursorScene};
use scene_core::FrameTick;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Moves the `[data-cursor]` element with a squashing trail.
pub struct CursorView {
    el: web::HtmlElement,
    model: CursorScene,
}

impl CursorView {
    pub fn mount(target: web::Element, params: &DataAttrs) -> anyhow::Result<Self> {
        let el = target
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            el,
            model: CursorScene::new(dom::window_viewport(), params),
        })
    }
}

impl Scene for CursorView {
    fn resize(&mut self) {
        self.model.resize(dom::window_viewport());
    }

    fn frame(&mut self, tick: &FrameTick, input: &FrameInput) {
        let pointer = input.pointer.has_moved().then(|| input.pointer.position());
        let t = self.model.frame(pointer, tick.delta_ratio);
        _ = self.el.style().set_property("transform", &css_transform(&t));
    }
}
