use super::{FrameInput, Scene};
use crate::constants::{SPHERE_BACKGROUND, SPHERE_DEPTH_SHADE, SPHERE_RGB};
use crate::dom::{self, DataAttrs};
use crate::paint;
use crate::shading::{height_shade, shade_rgb, sort_back_to_front};
use crate::surface::Surface;
use glam::Vec2;
use scene_core::constants::SPHERE_NOISE_STRENGTH;
use scene_core::scenes::sphere_grid::SphereGrid;
use scene_core::{Camera, FrameTick};
use web_sys as web;

struct Disc {
    center: Vec2,
    radius: f32,
    depth: f32,
    shade: f32,
}

pub struct SphereGridView {
    surface: Surface,
    model: SphereGrid,
    discs: Vec<Disc>,
}

impl SphereGridView {
    pub fn mount(
        document: &web::Document,
        mount: &web::Element,
        params: &DataAttrs,
    ) -> anyhow::Result<Self> {
        let surface = Surface::appended(document, mount)?;
        let model = SphereGrid::new(params);
        Ok(Self {
            discs: Vec::with_capacity(model.cells().len()),
            surface,
            model,
        })
    }
}

impl Scene for SphereGridView {
    fn resize(&mut self) {
        self.surface.resize();
    }

    fn frame(&mut self, tick: &FrameTick, input: &FrameInput) {
        let vp = self.surface.viewport;
        self.model.scroll(input.wheel);
        let unit = dom::window_viewport().to_unit(input.pointer.position());
        self.model.frame(tick, unit);

        // Distance follows the wheel.
        let camera = self.model.camera(vp);
        let view_proj = camera.view_projection();
        let radius = self.model.sphere_radius();
        self.discs.clear();
        for cell in self.model.cells() {
            let pos = cell.position();
            let Some(p) = Camera::project_with(&view_proj, pos, vp) else {
                continue;
            };
            let Some(r) = camera.project_radius(pos, radius * cell.scale(), vp) else {
                continue;
            };
            self.discs.push(Disc {
                center: p.screen,
                radius: r,
                depth: p.depth,
                shade: height_shade(cell.z, SPHERE_NOISE_STRENGTH, SPHERE_DEPTH_SHADE),
            });
        }
        sort_back_to_front(&mut self.discs, |d| d.depth);

        let ctx = &self.surface.ctx;
        paint::fill_background(ctx, vp, SPHERE_BACKGROUND);
        for d in &self.discs {
            paint::fill_disc(ctx, d.center, d.radius, &shade_rgb(SPHERE_RGB, d.shade));
        }
    }
}
