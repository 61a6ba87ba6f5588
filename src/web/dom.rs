use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlCanvasElement, HtmlInputElement, Window};

use crate::error::{Result, VizError};

pub fn js_err(e: JsValue) -> VizError {
    VizError::Js(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(VizError::MissingGlobal("window"))
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(VizError::MissingGlobal("document"))
}

pub fn element(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| VizError::MissingElement(id.to_string()))
}

fn typed<T: JsCast>(id: &str, expected: &'static str) -> Result<T> {
    element(id)?.dyn_into::<T>().map_err(|_| VizError::WrongElement {
        id: id.to_string(),
        expected,
    })
}

pub fn canvas(id: &str) -> Result<HtmlCanvasElement> {
    typed(id, "canvas")
}

pub fn input(id: &str) -> Result<HtmlInputElement> {
    typed(id, "input")
}

pub fn set_text(id: &str, text: &str) {
    if let Ok(el) = element(id) {
        el.set_text_content(Some(text));
    }
}

/// Add or remove `class` on the element with `id`; missing elements are skipped.
pub fn toggle_class(id: &str, class: &str, on: bool) {
    if let Ok(el) = element(id) {
        el.class_list().toggle_with_force(class, on).ok();
    }
}

/// Attach a listener that lives as long as the page.
pub fn on(target: &EventTarget, event: &str, f: impl FnMut(web_sys::Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(f);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

pub fn on_id(id: &str, event: &str, f: impl FnMut(web_sys::Event) + 'static) -> Result<()> {
    on(&element(id)?, event, f)
}
