use scene_core::{ParamSource, SceneError, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector`. Invalid selectors count as absent.
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn as_canvas(el: web::Element) -> anyhow::Result<web::HtmlCanvasElement> {
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?} is not a canvas", e))
}

/// Append a canvas filling `mount` and return it.
pub fn append_canvas(
    document: &web::Document,
    mount: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    mount
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::Error::new(SceneError::MissingContext("2d")))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Size the backing store for a `css` box at the device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css: Viewport) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let (w, h) = css.backing_size(dpr);
    canvas.set_width(w);
    canvas.set_height(h);
}

/// Fix the displayed size so it no longer depends on the backing store.
pub fn pin_css_size(canvas: &web::HtmlCanvasElement, css: Viewport) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css.width));
    _ = style.set_property("height", &format!("{}px", css.height));
}

/// Canvas size in CSS pixels, the space scenes lay themselves out in.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width() as f32, rect.height() as f32)
}

/// Scale the context so drawing in CSS pixels fills the device-pixel backing store.
pub fn apply_pixel_ratio(ctx: &web::CanvasRenderingContext2d) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Viewport::new(width as f32, height as f32)
}

/// Top-left corner of `el` in client coordinates.
pub fn client_origin(el: &web::Element) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.left() as f32, rect.top() as f32)
}

/// Scene overrides read from the mount's `data-*` attributes.
pub struct DataAttrs(pub web::Element);

impl ParamSource for DataAttrs {
    fn param(&self, key: &str) -> Option<String> {
        self.0.get_attribute(&format!("data-{key}"))
    }
}
