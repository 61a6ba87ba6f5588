//! Browser side: DOM wiring, canvas painting and the animation-frame loop.

mod app;
pub mod canvas;
pub mod dom;
pub mod frame;
pub mod style;
pub mod widget;

use wasm_bindgen::prelude::*;

use crate::error::VizError;

pub use frame::FrameScheduler;
pub use widget::CanvasWidget;

impl From<VizError> for JsValue {
    fn from(e: VizError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // The level is narrowed once the page config has been read.
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    let document = dom::document()?;
    let config = app::read_config(&document);
    log::set_max_level(config.level().to_level_filter());

    if document.get_element_by_id(app::ROOT_ID).is_none() {
        log::debug!("no #{} on this page, nothing to mount", app::ROOT_ID);
        return Ok(());
    }
    app::mount(config)?;
    Ok(())
}
