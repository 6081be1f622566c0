#![cfg(target_arch = "wasm32")]
use events::InputTracker;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod paint;
mod scenes;
mod shading;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let input = InputTracker::new(dom::window_viewport().center());
    let scenes = scenes::mount_all(&document, &input);
    if scenes.is_empty() {
        log::info!("no scene mounts on this page");
        return Ok(());
    }
    log::info!("{} scene(s) running", scenes.len());
    frame::start_loop(scenes, input);
    Ok(())
}
