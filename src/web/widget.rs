//! A scene bound to a canvas, a clock and its own frame scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::HtmlCanvasElement;

use super::canvas;
use super::frame::FrameScheduler;
use crate::clock::AnimationClock;
use crate::error::{Result, VizError};
use crate::scene::{self, Scene};
use crate::theme::Theme;

pub struct WidgetState<S> {
    pub scene: S,
    pub clock: AnimationClock,
    canvas: Option<HtmlCanvasElement>,
    theme: Rc<Cell<Theme>>,
}

impl<S: Scene> WidgetState<S> {
    fn paint(&self) {
        let Some(canvas_el) = &self.canvas else {
            return;
        };
        let ctx = match canvas::context_2d(canvas_el).ok_or_else(|| VizError::NoContext(canvas_el.id())) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::debug!("{e}; frame skipped");
                return;
            }
        };
        canvas::fit(canvas_el, self.scene.size());
        let list = scene::render(&self.scene, self.clock.time(), self.theme.get().palette());
        canvas::paint(&ctx, &list);
    }
}

pub struct CanvasWidget<S: Scene + 'static> {
    state: Rc<RefCell<WidgetState<S>>>,
    scheduler: FrameScheduler,
}

impl<S: Scene + 'static> CanvasWidget<S> {
    /// `canvas` may be `None`; the widget then keeps time but draws nothing.
    pub fn new(
        canvas: Option<HtmlCanvasElement>,
        scene: S,
        clock: AnimationClock,
        theme: Rc<Cell<Theme>>,
    ) -> Self {
        let state = Rc::new(RefCell::new(WidgetState { scene, clock, canvas, theme }));
        let weak = Rc::downgrade(&state);
        let scheduler = FrameScheduler::new(move |now| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            state.clock.tick(now);
            state.paint();
        });
        Self { state, scheduler }
    }

    /// Start the loop. A stopped widget resumes from the time it stopped at.
    pub fn start(&self) -> Result<()> {
        if !self.scheduler.is_running() {
            self.state.borrow_mut().clock.reanchor();
        }
        self.scheduler.start()
    }

    pub fn stop(&self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.scheduler.frames()
    }

    /// Draw the current state immediately, outside the frame loop.
    pub fn repaint(&self) {
        self.state.borrow().paint();
    }

    /// Mutate the widget's scene and clock, then repaint.
    pub fn update<R>(&self, f: impl FnOnce(&mut WidgetState<S>) -> R) -> R {
        let out = f(&mut self.state.borrow_mut());
        self.repaint();
        out
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&WidgetState<S>) -> R) -> R {
        f(&self.state.borrow())
    }
}
