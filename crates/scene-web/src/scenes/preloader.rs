use super::{FrameInput, Scene};
use crate::constants::PRELOADER_TILE_RGB;
use crate::dom::DataAttrs;
use crate::paint;
use crate::shading::rgba;
use crate::surface::{CanvasFit, Surface};
use scene_core::scenes::preloader::{BrickPreloader, PreloadPhase};
use scene_core::{param_or, FrameTick, PARAM_SEED};
use web_sys as web;

/// Black tiles over the page that fade away at random, then stop drawing.
pub struct PreloaderView {
    surface: Surface,
    model: BrickPreloader,
    done: bool,
}

impl PreloaderView {
    pub fn mount(canvas: web::HtmlCanvasElement, params: &DataAttrs) -> anyhow::Result<Self> {
        let surface = Surface::new(canvas, CanvasFit::Window)?;
        let seed = param_or(params, PARAM_SEED, rand::random::<u64>());
        let model = BrickPreloader::new(surface.viewport, seed);
        Ok(Self {
            surface,
            model,
            done: false,
        })
    }
}

impl Scene for PreloaderView {
    fn frame(&mut self, tick: &FrameTick, _input: &FrameInput) {
        if self.done {
            return;
        }
        let ctx = &self.surface.ctx;
        match self.model.frame(tick.delta_ms) {
            PreloadPhase::Finished => {
                paint::clear(ctx, self.surface.viewport);
                self.done = true;
                log::info!("[brick-preloader] finished");
            }
            PreloadPhase::Running { .. } => {
                paint::clear(ctx, self.surface.viewport);
                let size = self.model.tile_size() as f64;
                for tile in self.model.tiles() {
                    ctx.set_fill_style_str(&rgba(PRELOADER_TILE_RGB, tile.alpha));
                    ctx.fill_rect(tile.origin.x as f64, tile.origin.y as f64, size, size);
                }
            }
        }
    }
}
