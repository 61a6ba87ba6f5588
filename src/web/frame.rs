//! `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::dom::{self, js_err};
use crate::error::Result;
use crate::frame::LoopState;

struct Inner {
    state: LoopState,
    // `callback` holds the animation-frame closure so each frame can request
    // the next one with the same closure.
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// Calls `on_frame(timestamp_ms)` once per display refresh while running.
///
/// Dropping the scheduler stops it.
pub struct FrameScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl FrameScheduler {
    pub fn new(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            state: LoopState::new(),
            callback: None,
        }));
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.borrow_mut().state.on_callback() {
                return;
            }
            on_frame(timestamp);
            if let Err(e) = request(&inner) {
                log::warn!("frame loop halted: {e}");
                inner.borrow_mut().state.stop();
            }
        });
        inner.borrow_mut().callback = Some(callback);
        Self { inner }
    }

    /// Begin requesting frames. Calling it while running does nothing.
    pub fn start(&self) -> Result<()> {
        let first = self.inner.borrow_mut().state.start();
        if first {
            request(&self.inner)?;
        }
        Ok(())
    }

    /// Cancel the pending frame; no callback runs after this returns.
    pub fn stop(&self) {
        let pending = self.inner.borrow_mut().state.stop();
        if let (Some(handle), Some(window)) = (pending, web_sys::window()) {
            window.cancel_animation_frame(handle).ok();
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().state.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.inner.borrow().state.frames()
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(inner: &Rc<RefCell<Inner>>) -> Result<()> {
    let mut guard = inner.borrow_mut();
    let Inner { state, callback } = &mut *guard;
    if !state.is_running() {
        return Ok(());
    }
    let Some(callback) = callback.as_ref() else {
        return Ok(());
    };
    let handle = dom::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    state.scheduled(handle);
    Ok(())
}
