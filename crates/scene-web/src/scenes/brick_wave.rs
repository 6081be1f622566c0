use super::{FrameInput, Scene};
use crate::constants::{AMBIENT, BRICK_BACKGROUND, BRICK_FLOOR_RGB, BRICK_RGB, LIGHT_DIR};
use crate::dom::{self, DataAttrs};
use crate::paint;
use crate::shading::{project_face, sort_back_to_front, ScreenQuad};
use crate::surface::Surface;
use glam::Vec3;
use scene_core::constants::BRICK_FLOOR_SIDE;
use scene_core::scenes::brick_wave::BrickWave;
use scene_core::{plane_face, Camera, FrameTick};
use web_sys as web;

pub struct BrickWaveView {
    surface: Surface,
    model: BrickWave,
    camera: Camera,
    quads: Vec<ScreenQuad>,
}

impl BrickWaveView {
    pub fn mount(
        document: &web::Document,
        mount: &web::Element,
        params: &DataAttrs,
    ) -> anyhow::Result<Self> {
        let surface = Surface::appended(document, mount)?;
        let model = BrickWave::new(params);
        let camera = BrickWave::camera(surface.viewport);
        Ok(Self {
            quads: Vec::with_capacity(model.len() * 3),
            surface,
            model,
            camera,
        })
    }
}

impl Scene for BrickWaveView {
    fn resize(&mut self) {
        self.surface.resize();
        self.camera = BrickWave::camera(self.surface.viewport);
    }

    fn frame(&mut self, tick: &FrameTick, input: &FrameInput) {
        let centered = dom::window_viewport().to_centered(input.pointer.position());
        self.model
            .frame(centered, tick.delta_sec(), tick.delta_ratio);

        let vp = self.surface.viewport;
        let view_proj = self.camera.view_projection();
        let light = Vec3::from(LIGHT_DIR);
        let ctx = &self.surface.ctx;
        paint::fill_background(ctx, vp, BRICK_BACKGROUND);

        let floor = plane_face(self.model.floor_matrix(), BRICK_FLOOR_SIDE);
        if let Some(q) = project_face(&view_proj, &floor, vp, light, AMBIENT) {
            paint::fill_quads(ctx, &[q], BRICK_FLOOR_RGB);
        }

        self.quads.clear();
        for i in 0..self.model.len() {
            for face in self.model.mesh.faces(self.model.brick_matrix(i)) {
                if let Some(q) = project_face(&view_proj, &face, vp, light, AMBIENT) {
                    self.quads.push(q);
                }
            }
        }
        sort_back_to_front(&mut self.quads, |q| q.depth);
        paint::fill_quads(ctx, &self.quads, BRICK_RGB);
    }
}
