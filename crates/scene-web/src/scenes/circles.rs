use super::{FrameInput, Scene};
use crate::dom::DataAttrs;
use crate::paint;
use crate::surface::{CanvasFit, Surface};
use scene_core::scenes::circles::{CirclesParams, ConcentricCircles};
use scene_core::FrameTick;
use web_sys as web;

pub struct CirclesView {
    surface: Surface,
    model: ConcentricCircles,
}

impl CirclesView {
    pub fn mount(canvas: web::HtmlCanvasElement, params: &DataAttrs) -> anyhow::Result<Self> {
        let surface = Surface::new(canvas, CanvasFit::Window)?;
        let model = ConcentricCircles::new(
            CirclesParams::from_source(params),
            surface.viewport.center(),
        );
        Ok(Self { surface, model })
    }
}

impl Scene for CirclesView {
    fn resize(&mut self) {
        self.surface.resize();
    }

    fn frame(&mut self, tick: &FrameTick, input: &FrameInput) {
        let target = if input.pointer.has_moved() {
            self.surface.local_pointer(input.pointer.position())
        } else {
            self.surface.viewport.center()
        };
        self.model.frame(target, tick.delta_ratio);

        let ctx = &self.surface.ctx;
        paint::clear(ctx, self.surface.viewport);
        ctx.set_stroke_style_str(&self.model.params.color);
        ctx.set_line_width(self.model.params.stroke_width as f64);
        for (center, radius) in self.model.rings() {
            paint::stroke_circle(ctx, center, radius);
        }
    }
}
