use super::{FrameInput, Scene};
use crate::constants::{CAROUSEL_BACKGROUND, PLACEHOLDER_FILL};
use crate::dom::DataAttrs;
use crate::input::bounds;
use crate::paint;
use crate::surface::Surface;
use scene_core::scenes::carousel::{AssetState, Carousel};
use scene_core::{plane_face, Camera, FrameTick, SceneError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type Images = Rc<RefCell<Vec<Option<web::HtmlImageElement>>>>;

/// A row of image slots; images stream in as they decode.
pub struct CarouselView {
    surface: Surface,
    model: Rc<RefCell<Carousel>>,
    images: Images,
    camera: Camera,
}

impl CarouselView {
    pub fn mount(
        document: &web::Document,
        mount: &web::Element,
        params: &DataAttrs,
    ) -> anyhow::Result<Self> {
        let surface = Surface::appended(document, mount)?;
        let carousel = Carousel::new(params);
        let camera = Carousel::camera(surface.viewport);
        let images: Images = Rc::new(RefCell::new(vec![None; carousel.slots().len()]));
        let urls: Vec<(usize, String)> = carousel
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.url.clone().map(|u| (i, u)))
            .collect();
        let model = Rc::new(RefCell::new(carousel));
        for (index, url) in urls {
            load_slot(model.clone(), images.clone(), index, url);
        }
        Ok(Self {
            surface,
            model,
            images,
            camera,
        })
    }
}

fn load_slot(model: Rc<RefCell<Carousel>>, images: Images, index: usize, url: String) {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::warn!("[img-slider] cannot create image for {url}: {:?}", e);
            model.borrow_mut().set_state(index, AssetState::Failed);
            return;
        }
    };
    img.set_cross_origin(Some("anonymous"));
    img.set_src(&url);
    let decoded: js_sys::Promise = img.decode();
    spawn_local(async move {
        match JsFuture::from(decoded).await {
            Ok(_) => {
                images.borrow_mut()[index] = Some(img);
                model.borrow_mut().set_state(index, AssetState::Ready);
                log::info!("[img-slider] loaded {url}");
            }
            Err(e) => {
                let err = SceneError::AssetLoad { url };
                log::warn!("[img-slider] {err}: {:?}", e);
                model.borrow_mut().set_state(index, AssetState::Failed);
            }
        }
    });
}

impl Scene for CarouselView {
    fn resize(&mut self) {
        self.surface.resize();
        self.camera = Carousel::camera(self.surface.viewport);
    }

    fn frame(&mut self, tick: &FrameTick, _input: &FrameInput) {
        let mut model = self.model.borrow_mut();
        model.frame(tick.delta_sec());

        let vp = self.surface.viewport;
        let view_proj = self.camera.view_projection();
        let ctx = &self.surface.ctx;
        let images = self.images.borrow();
        paint::fill_background(ctx, vp, CAROUSEL_BACKGROUND);
        for (i, slot) in model.slots().iter().enumerate() {
            let face = plane_face(model.slot_matrix(i), model.side());
            let mut points = Vec::with_capacity(4);
            for corner in face.corners {
                if let Some(p) = Camera::project_with(&view_proj, corner, vp) {
                    points.push(p.screen);
                }
            }
            if points.len() < 4 {
                continue;
            }
            match (slot.state, images.get(i).and_then(Option::as_ref)) {
                (AssetState::Ready, Some(img)) => {
                    let Some((lo, hi)) = bounds(&points) else {
                        continue;
                    };
                    let size = hi - lo;
                    _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        img,
                        lo.x as f64,
                        lo.y as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                _ => paint::fill_polygon(ctx, &points, PLACEHOLDER_FILL),
            }
        }
    }
}
