use super::{FrameInput, Scene};
use crate::constants::{AMBIENT, CUBE_BACKGROUND, CUBE_RGB, LIGHT_DIR};
use crate::dom::DataAttrs;
use crate::paint;
use crate::shading::{project_face, sort_back_to_front, ScreenQuad};
use crate::surface::Surface;
use glam::Vec3;
use scene_core::scenes::cube_grid::CubeGrid;
use scene_core::{Camera, FrameTick};
use web_sys as web;

pub struct CubeGridView {
    surface: Surface,
    model: CubeGrid,
    camera: Camera,
    quads: Vec<ScreenQuad>,
}

impl CubeGridView {
    pub fn mount(
        document: &web::Document,
        mount: &web::Element,
        params: &DataAttrs,
    ) -> anyhow::Result<Self> {
        let surface = Surface::appended(document, mount)?;
        let model = CubeGrid::new(params);
        let camera = CubeGrid::camera(surface.viewport);
        Ok(Self {
            quads: Vec::with_capacity(model.len() * 3),
            surface,
            model,
            camera,
        })
    }
}

impl Scene for CubeGridView {
    fn resize(&mut self) {
        self.surface.resize();
        self.camera = CubeGrid::camera(self.surface.viewport);
    }

    fn frame(&mut self, tick: &FrameTick, _input: &FrameInput) {
        self.model.frame(tick.delta_ratio);

        let vp = self.surface.viewport;
        let view_proj = self.camera.view_projection();
        let light = Vec3::from(LIGHT_DIR);
        self.quads.clear();
        for i in 0..self.model.len() {
            for face in self.model.mesh.faces(self.model.cube_matrix(i)) {
                if let Some(q) = project_face(&view_proj, &face, vp, light, AMBIENT) {
                    self.quads.push(q);
                }
            }
        }
        sort_back_to_front(&mut self.quads, |q| q.depth);

        let ctx = &self.surface.ctx;
        paint::fill_background(ctx, vp, CUBE_BACKGROUND);
        paint::fill_quads(ctx, &self.quads, CUBE_RGB);
    }
}
