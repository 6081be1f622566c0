use crate::dom;
use crate::input::client_to_local;
use glam::Vec2;
use scene_core::Viewport;
use web_sys as web;

/// What a canvas's CSS size follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasFit {
    /// Page-provided canvases cover the window.
    Window,
    /// Appended canvases fill their mount through CSS.
    Element,
}

/// A canvas, its 2D context and its size in CSS pixels.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub viewport: Viewport,
    fit: CanvasFit,
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement, fit: CanvasFit) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let mut surface = Self {
            canvas,
            ctx,
            viewport: Viewport::default(),
            fit,
        };
        surface.resize();
        Ok(surface)
    }

    /// A fresh canvas appended to `mount`.
    pub fn appended(document: &web::Document, mount: &web::Element) -> anyhow::Result<Self> {
        Self::new(dom::append_canvas(document, mount)?, CanvasFit::Element)
    }

    /// Resizing the backing store resets the context transform, so the
    /// pixel ratio is applied again afterwards.
    pub fn resize(&mut self) {
        let css = match self.fit {
            CanvasFit::Window => {
                let vp = dom::window_viewport();
                dom::pin_css_size(&self.canvas, vp);
                vp
            }
            CanvasFit::Element => dom::canvas_viewport(&self.canvas),
        };
        dom::sync_canvas_backing_size(&self.canvas, css);
        dom::apply_pixel_ratio(&self.ctx);
        self.viewport = css;
    }

    /// Client coordinates mapped onto this canvas.
    pub fn local_pointer(&self, client: Vec2) -> Vec2 {
        let (left, top) = dom::client_origin(&self.canvas);
        client_to_local(client, Vec2::new(left, top))
    }
}
