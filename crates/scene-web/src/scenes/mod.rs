use crate::dom::{self, DataAttrs};
use crate::events::InputTracker;
use scene_core::{FrameTick, MountReport, PointerState, SceneKind};
use web_sys as web;

mod brick_wave;
mod carousel;
mod circles;
mod cube_grid;
mod cursor;
mod drag_grid;
mod lines;
mod preloader;
mod sphere_grid;
mod template;

/// Input snapshot taken once per frame, before any scene runs.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Window client coordinates.
    pub pointer: PointerState,
    /// Wheel pixels accumulated since the previous frame.
    pub wheel: f32,
}

pub trait Scene {
    fn resize(&mut self) {}
    fn frame(&mut self, tick: &FrameTick, input: &FrameInput);
}

/// Mount every scene whose element exists on the page.
///
/// Window listeners are attached only when at least one scene mounted.
pub fn mount_all(document: &web::Document, input: &InputTracker) -> Vec<Box<dyn Scene>> {
    let report = MountReport::collect(|kind| mount(kind, document, input));
    for kind in &report.absent {
        log::debug!("[scene] {} not on page", kind.selector());
    }
    for (kind, e) in &report.failed {
        log::error!("[scene] {kind} disabled: {e:?}");
    }
    if report.needs_input() {
        input.attach();
    }
    report
        .mounted
        .into_iter()
        .map(|(kind, scene)| {
            log::info!("[scene] mounted {kind}");
            scene
        })
        .collect()
}

fn mount(
    kind: SceneKind,
    document: &web::Document,
    input: &InputTracker,
) -> anyhow::Result<Option<Box<dyn Scene>>> {
    let Some(target) = dom::query(document, &kind.selector()) else {
        return Ok(None);
    };
    let params = DataAttrs(
        dom::query(document, &kind.mount_selector()).unwrap_or_else(|| target.clone()),
    );
    let scene: Box<dyn Scene> = match kind {
        SceneKind::Cursor => Box::new(cursor::CursorView::mount(target, &params)?),
        SceneKind::Circles => {
            Box::new(circles::CirclesView::mount(dom::as_canvas(target)?, &params)?)
        }
        SceneKind::Lines => Box::new(lines::LinesView::mount(dom::as_canvas(target)?, &params)?),
        SceneKind::Preloader => {
            Box::new(preloader::PreloaderView::mount(dom::as_canvas(target)?, &params)?)
        }
        SceneKind::BrickWave => {
            Box::new(brick_wave::BrickWaveView::mount(document, &target, &params)?)
        }
        SceneKind::SphereGrid => {
            Box::new(sphere_grid::SphereGridView::mount(document, &target, &params)?)
        }
        SceneKind::CubeGrid => {
            Box::new(cube_grid::CubeGridView::mount(document, &target, &params)?)
        }
        SceneKind::DragGrid => {
            Box::new(drag_grid::DragGridView::mount(document, &target, &params, input)?)
        }
        SceneKind::Carousel => {
            Box::new(carousel::CarouselView::mount(document, &target, &params)?)
        }
        SceneKind::Template => Box::new(template::TemplateView::mount(document, &target)?),
    };
    Ok(Some(scene))
}
