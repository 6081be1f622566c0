use super::{FrameInput, Scene};
use crate::dom::DataAttrs;
use crate::paint;
use crate::surface::{CanvasFit, Surface};
use scene_core::scenes::lines::{smooth_handles, LineField, LinesParams};
use scene_core::FrameTick;
use web_sys as web;

pub struct LinesView {
    surface: Surface,
    model: LineField,
    seen_events: u64,
}

impl LinesView {
    pub fn mount(canvas: web::HtmlCanvasElement, params: &DataAttrs) -> anyhow::Result<Self> {
        let surface = Surface::new(canvas, CanvasFit::Window)?;
        let model = LineField::new(LinesParams::from_source(params), surface.viewport);
        Ok(Self {
            surface,
            model,
            seen_events: 0,
        })
    }
}

impl Scene for LinesView {
    fn resize(&mut self) {
        self.surface.resize();
        self.model.resize(self.surface.viewport);
    }

    fn frame(&mut self, tick: &FrameTick, input: &FrameInput) {
        let events = input.pointer.event_count();
        if events != self.seen_events {
            self.seen_events = events;
            let local = self.surface.local_pointer(input.pointer.position());
            self.model.on_pointer(local);
        }
        self.model.frame(tick.delta_sec());

        let ctx = &self.surface.ctx;
        let params = &self.model.params;
        paint::clear(ctx, self.surface.viewport);
        ctx.set_stroke_style_str(&params.color);
        ctx.set_line_width(params.width as f64);
        for line in self.model.lines() {
            let (h_in, h_out) = smooth_handles(&line.points, params.smooth_factor);
            paint::stroke_smooth_path(ctx, &line.points, h_in, h_out);
        }
    }
}
