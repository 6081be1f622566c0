use super::{FrameInput, Scene};
use crate::constants::{AMBIENT, LIGHT_DIR, TEMPLATE_BACKGROUND, TEMPLATE_PLANE_RGB};
use crate::paint;
use crate::shading::project_face;
use crate::surface::Surface;
use glam::Vec3;
use scene_core::scenes::template::TemplateScene;
use scene_core::{Camera, FrameTick};
use web_sys as web;

/// Starting point for a new scene: one plane, one camera, nothing moving.
pub struct TemplateView {
    surface: Surface,
    model: TemplateScene,
    camera: Camera,
}

impl TemplateView {
    pub fn mount(document: &web::Document, mount: &web::Element) -> anyhow::Result<Self> {
        let surface = Surface::appended(document, mount)?;
        let camera = TemplateScene::camera(surface.viewport);
        Ok(Self {
            surface,
            model: TemplateScene::default(),
            camera,
        })
    }
}

impl Scene for TemplateView {
    fn resize(&mut self) {
        self.surface.resize();
        self.camera = TemplateScene::camera(self.surface.viewport);
    }

    fn frame(&mut self, _tick: &FrameTick, _input: &FrameInput) {
        let vp = self.surface.viewport;
        let ctx = &self.surface.ctx;
        paint::fill_background(ctx, vp, TEMPLATE_BACKGROUND);
        let view_proj = self.camera.view_projection();
        let light = Vec3::from(LIGHT_DIR);
        if let Some(q) = project_face(&view_proj, &self.model.plane, vp, light, AMBIENT) {
            paint::fill_quads(ctx, &[q], TEMPLATE_PLANE_RGB);
        }
    }
}
