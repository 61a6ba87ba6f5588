//! Replays display lists onto a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::draw::{DisplayList, DrawCmd, Paint, Point, Rect};

/// The canvas's 2D context, or `None` if it cannot be acquired.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Size the backing store to the scene's pixel dimensions.
pub fn fit(canvas: &HtmlCanvasElement, (w, h): (f64, f64)) {
    let (w, h) = (w.max(1.0) as u32, h.max(1.0) as u32);
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
}

pub fn paint(ctx: &CanvasRenderingContext2d, list: &DisplayList) {
    for cmd in list.commands() {
        match cmd {
            DrawCmd::Clear { w, h } => ctx.clear_rect(0.0, 0.0, *w, *h),
            DrawCmd::Rect { rect, paint } => {
                if let Some(fill) = paint.fill {
                    ctx.set_fill_style_str(&fill.css());
                    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
                }
                if let Some((stroke, width)) = paint.stroke {
                    ctx.set_stroke_style_str(&stroke.css());
                    ctx.set_line_width(width);
                    ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
                }
            }
            DrawCmd::RoundRect { rect, radius, paint } => {
                round_rect_path(ctx, rect, *radius);
                apply(ctx, paint);
            }
            DrawCmd::Circle { center, radius, paint } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, TAU).ok();
                apply(ctx, paint);
            }
            DrawCmd::Line { from, to, color, width, dash } => {
                if let Some([on, off]) = dash {
                    set_dash(ctx, &[*on, *off]);
                }
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width);
                ctx.stroke();
                if dash.is_some() {
                    set_dash(ctx, &[]);
                }
            }
            DrawCmd::QuadCurve { from, ctrl, to, color, width } => {
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y);
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width);
                ctx.stroke();
            }
            DrawCmd::Polygon { points, paint } => {
                trace(ctx, points);
                ctx.close_path();
                apply(ctx, paint);
            }
            DrawCmd::Polyline { points, color, width } => {
                trace(ctx, points);
                ctx.set_stroke_style_str(&color.css());
                ctx.set_line_width(*width);
                ctx.stroke();
            }
            DrawCmd::Text { at, text, font, color, align } => {
                ctx.set_font(font);
                ctx.set_text_align(align.as_str());
                ctx.set_fill_style_str(&color.css());
                ctx.fill_text(text, at.x, at.y).ok();
            }
            DrawCmd::Translate { dx, dy } => {
                ctx.translate(*dx, *dy).ok();
            }
            DrawCmd::Save => ctx.save(),
            DrawCmd::Restore => ctx.restore(),
        }
    }
}

fn apply(ctx: &CanvasRenderingContext2d, paint: &Paint) {
    if let Some(fill) = paint.fill {
        ctx.set_fill_style_str(&fill.css());
        ctx.fill();
    }
    if let Some((stroke, width)) = paint.stroke {
        ctx.set_stroke_style_str(&stroke.css());
        ctx.set_line_width(width);
        ctx.stroke();
    }
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for p in iter {
        ctx.line_to(p.x, p.y);
    }
}

fn round_rect_path(ctx: &CanvasRenderingContext2d, r: &Rect, radius: f64) {
    let radius = radius.min(r.w / 2.0).min(r.h / 2.0).max(0.0);
    let (x0, y0, x1, y1) = (r.x, r.y, r.x + r.w, r.y + r.h);
    ctx.begin_path();
    ctx.move_to(x0 + radius, y0);
    ctx.arc_to(x1, y0, x1, y1, radius).ok();
    ctx.arc_to(x1, y1, x0, y1, radius).ok();
    ctx.arc_to(x0, y1, x0, y0, radius).ok();
    ctx.arc_to(x0, y0, x1, y0, radius).ok();
    ctx.close_path();
}

fn set_dash(ctx: &CanvasRenderingContext2d, segments: &[f64]) {
    let array = js_sys::Array::new();
    for s in segments {
        array.push(&JsValue::from_f64(*s));
    }
    ctx.set_line_dash(&array).ok();
}
