#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use ttt_viz::clock::{AnimationClock, REALTIME_RATE};
use ttt_viz::scene::process::ProcessScene;
use ttt_viz::scene::render;
use ttt_viz::style::{STYLES_LOADED, STYLE_MARKER};
use ttt_viz::theme::Theme;
use ttt_viz::web::{canvas, style, CanvasWidget, FrameScheduler};

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn new_canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("canvas").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el.dyn_into().unwrap()
}

#[wasm_bindgen_test(async)]
async fn scheduler_runs_until_stopped() {
    let calls = Rc::new(Cell::new(0u32));
    let seen = calls.clone();
    let scheduler = FrameScheduler::new(move |_| seen.set(seen.get() + 1));

    scheduler.start().unwrap();
    scheduler.start().unwrap();
    sleep_ms(200).await;
    assert!(calls.get() > 0, "no frames delivered");
    assert_eq!(scheduler.frames(), calls.get() as u64);

    scheduler.stop();
    assert!(!scheduler.is_running());
    let at_stop = calls.get();
    sleep_ms(200).await;
    assert_eq!(calls.get(), at_stop);
}

#[wasm_bindgen_test(async)]
async fn dropped_scheduler_never_fires() {
    let calls = Rc::new(Cell::new(0u32));
    let seen = calls.clone();
    let scheduler = FrameScheduler::new(move |_| seen.set(seen.get() + 1));
    scheduler.start().unwrap();
    drop(scheduler);
    sleep_ms(150).await;
    assert_eq!(calls.get(), 0);
}

#[wasm_bindgen_test(async)]
async fn widget_advances_its_clock_while_running() {
    let widget = CanvasWidget::new(
        Some(new_canvas()),
        ProcessScene::default(),
        AnimationClock::new(REALTIME_RATE),
        Rc::new(Cell::new(Theme::Dark)),
    );
    widget.start().unwrap();
    sleep_ms(200).await;
    widget.stop();
    let t = widget.with_state(|s| s.clock.time());
    assert!(t > 0.0);
    sleep_ms(100).await;
    assert_eq!(widget.with_state(|s| s.clock.time()), t);
}

#[wasm_bindgen_test(async)]
async fn restarted_widget_skips_the_stopped_interval() {
    let widget = CanvasWidget::new(
        None,
        ProcessScene::default(),
        AnimationClock::new(REALTIME_RATE),
        Rc::new(Cell::new(Theme::Dark)),
    );
    widget.start().unwrap();
    sleep_ms(100).await;
    widget.stop();
    let before = widget.with_state(|s| s.clock.time());

    sleep_ms(500).await;
    widget.start().unwrap();
    sleep_ms(100).await;
    widget.stop();
    let gained = widget.with_state(|s| s.clock.time()) - before;
    assert!(gained < 0.4, "clock jumped by {gained}");
}

#[wasm_bindgen_test]
fn painting_sizes_and_draws_the_canvas() {
    let el = new_canvas();
    let ctx = canvas::context_2d(&el).expect("2d context");
    let scene = ProcessScene::default();
    canvas::fit(&el, (700.0, 260.0));
    canvas::paint(&ctx, &render(&scene, 1.0, Theme::Light.palette()));
    assert_eq!((el.width(), el.height()), (700, 260));

    // The background rect fills the whole surface.
    let pixel = ctx.get_image_data(5.0, 5.0, 1.0, 1.0).unwrap().data();
    assert_eq!(pixel[3], 255);
}

#[wasm_bindgen_test]
fn styles_are_injected_once() {
    let document = web_sys::window().unwrap().document().unwrap();
    let first = style::ensure_styles(&document).unwrap();
    let second = style::ensure_styles(&document).unwrap();
    assert!(!second);
    assert!(first || STYLES_LOADED.is_done());

    let nodes = document
        .query_selector_all(&format!("style[{STYLE_MARKER}]"))
        .unwrap();
    assert_eq!(nodes.length(), 1);
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_quiet_no_op() {
    let widget = CanvasWidget::new(
        None,
        ProcessScene::default(),
        AnimationClock::new(REALTIME_RATE),
        Rc::new(Cell::new(Theme::Light)),
    );
    widget.repaint();
    let paused = widget.update(|s| s.clock.toggle_paused());
    assert!(paused);
    assert_eq!(widget.frames(), 0);
}
