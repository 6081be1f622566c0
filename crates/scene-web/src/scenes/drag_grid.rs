use super::{FrameInput, Scene};
use crate::constants::{AMBIENT, DRAG_BACKGROUND, DRAG_PLANE_RGB, LIGHT_DIR};
use crate::dom::DataAttrs;
use crate::events::InputTracker;
use crate::paint;
use crate::shading::{project_face, shade_rgb};
use crate::surface::Surface;
use glam::{Mat4, Vec3};
use scene_core::constants::DRAG_PLANE_SIDE;
use scene_core::scenes::drag_grid::DragPan;
use scene_core::{plane_face, Face, FrameTick};
use web_sys as web;

/// Checkerboard cells making up the draggable plane.
fn plane_cells(side: f32) -> Vec<(Face, bool)> {
    let n = side.round().max(1.0) as i32;
    let cell = side / n as f32;
    let start = -side / 2.0 + cell / 2.0;
    let mut cells = Vec::with_capacity((n * n) as usize);
    for row in 0..n {
        for col in 0..n {
            let center = Vec3::new(start + col as f32 * cell, start + row as f32 * cell, 0.0);
            cells.push((
                plane_face(Mat4::from_translation(center), cell),
                (row + col) % 2 == 0,
            ));
        }
    }
    cells
}

pub struct DragGridView {
    surface: Surface,
    model: DragPan,
    seen_events: u64,
    cells: Vec<(Face, bool)>,
}

impl DragGridView {
    pub fn mount(
        document: &web::Document,
        mount: &web::Element,
        params: &DataAttrs,
        input: &InputTracker,
    ) -> anyhow::Result<Self> {
        let surface = Surface::appended(document, mount)?;
        input.press_on(&surface.canvas);
        Ok(Self {
            surface,
            model: DragPan::new(params),
            seen_events: 0,
            cells: plane_cells(DRAG_PLANE_SIDE),
        })
    }
}

impl Scene for DragGridView {
    fn resize(&mut self) {
        self.surface.resize();
    }

    fn frame(&mut self, tick: &FrameTick, input: &FrameInput) {
        let vp = self.surface.viewport;
        match (input.pointer.press_position(), self.model.is_dragging()) {
            (Some(at), false) => {
                let local = self.surface.local_pointer(at);
                self.model.begin_drag(vp.to_half_centered(local));
            }
            (None, true) => self.model.end_drag(),
            _ => {}
        }
        let events = input.pointer.event_count();
        if events != self.seen_events {
            self.seen_events = events;
            let local = self.surface.local_pointer(input.pointer.position());
            self.model.on_move(vp.to_half_centered(local));
        }
        self.model.frame(tick.delta_ratio);

        let view_proj = self.model.camera_at(vp).view_projection();
        let light = Vec3::from(LIGHT_DIR);
        let ctx = &self.surface.ctx;
        paint::fill_background(ctx, vp, DRAG_BACKGROUND);
        for (face, light_cell) in &self.cells {
            let Some(q) = project_face(&view_proj, face, vp, light, AMBIENT) else {
                continue;
            };
            let shade = if *light_cell { q.shade } else { q.shade * 0.6 };
            paint::fill_polygon(ctx, &q.points, &shade_rgb(DRAG_PLANE_RGB, shade));
        }
    }
}
