use web_sys::Document;

use super::dom::js_err;
use crate::error::{Result, VizError};
use crate::style::{FONT_URL, STYLESHEET, STYLES_LOADED, STYLE_MARKER};

/// Append the stylesheet and font link to `<head>`.
///
/// Returns `false` when another caller already did so in this page.
pub fn ensure_styles(document: &Document) -> Result<bool> {
    if !STYLES_LOADED.claim() {
        return Ok(false);
    }
    let head = document.head().ok_or(VizError::MissingGlobal("document.head"))?;

    let font = document.create_element("link").map_err(js_err)?;
    font.set_attribute("rel", "stylesheet").map_err(js_err)?;
    font.set_attribute("href", FONT_URL).map_err(js_err)?;
    font.set_attribute(STYLE_MARKER, "font").map_err(js_err)?;
    head.append_child(&font).map_err(js_err)?;

    let style = document.create_element("style").map_err(js_err)?;
    style.set_attribute(STYLE_MARKER, "main").map_err(js_err)?;
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style).map_err(js_err)?;

    log::debug!("stylesheet injected");
    Ok(true)
}
