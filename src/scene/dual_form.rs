//! Primal (sequential) versus dual (batched matmul) computation.

use super::Scene;
use crate::draw::{Color, DisplayList, Paint, Point, Rect, TextAlign};
use crate::theme::Palette;

pub const PRIMAL_STEPS: usize = 5;
/// Primal steps advanced per simulated second.
pub const STEP_RATE: f64 = 1.5;

const TOP: f64 = 50.0;
const BOX_H: f64 = 120.0;
const MATRIX_PX: f64 = 40.0;
const MATRIX_SPACING: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualFormScene {
    pub width: f64,
    pub height: f64,
}

impl Default for DualFormScene {
    fn default() -> Self {
        Self { width: 700.0, height: 250.0 }
    }
}

/// One of the three matrices on the dual side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixFrame {
    pub label: &'static str,
    /// Cell alphas, row-major.
    pub alphas: [[f64; 4]; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct DualFormFrame {
    pub active_step: usize,
    pub matrices: [MatrixFrame; 3],
}

pub fn active_step(t: f64) -> usize {
    if !t.is_finite() || t < 0.0 {
        return 0;
    }
    ((t * STEP_RATE).floor() as u64 % PRIMAL_STEPS as u64) as usize
}

fn matrix(label: &'static str, phase: f64) -> MatrixFrame {
    let mut alphas = [[0.0; 4]; 4];
    for (i, row) in alphas.iter_mut().enumerate() {
        for (j, a) in row.iter_mut().enumerate() {
            let v = (phase + i as f64 * 0.5 + j as f64 * 0.3).sin();
            *a = 0.4 + v.abs() * 0.5;
        }
    }
    MatrixFrame { label, alphas }
}

impl Scene for DualFormScene {
    type Frame = DualFormFrame;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn frame(&self, t: f64) -> DualFormFrame {
        DualFormFrame {
            active_step: active_step(t),
            matrices: [matrix("X", t * 2.0), matrix("W", t * 1.5), matrix("Z", t * 2.5)],
        }
    }

    fn draw(&self, f: &DualFormFrame, p: &Palette, out: &mut DisplayList) {
        let (w, h) = self.size();
        let box_w = w * 0.4;
        let primal_x = w * 0.25;
        let dual_x = w * 0.75;

        out.rect(Rect::new(0.0, 0.0, w, h), Paint::fill(p.base));

        // Primal panel.
        out.round_rect(
            Rect::new(primal_x - box_w / 2.0, TOP, box_w, BOX_H),
            8.0,
            Paint::both(p.mantle, p.surface1, 1.0),
        );
        out.text(
            Point::new(primal_x, TOP + 25.0),
            "Primal Form (Sequential)",
            "bold 14px sans-serif",
            p.text,
            TextAlign::Center,
        );

        let step_w = box_w / (PRIMAL_STEPS + 1) as f64;
        let step_y = TOP + 70.0;
        for i in 0..PRIMAL_STEPS {
            let x = primal_x - box_w / 2.0 + step_w * (i as f64 + 0.5);
            let active = i == f.active_step;
            let fill = if active { p.step_active } else { p.step_idle };
            out.round_rect(
                Rect::new(x - step_w * 0.4, step_y - 15.0, step_w * 0.8, 30.0),
                4.0,
                Paint::both(fill, p.overlay0, 0.5),
            );
            let label = if i % 2 == 0 {
                format!("\u{2207}\u{2113}(W{i})")
            } else {
                format!("W{}", i + 1)
            };
            let text_color = if active { p.crust } else { p.subtext0 };
            out.text(Point::new(x, step_y), label, "10px monospace", text_color, TextAlign::Center);

            if i + 1 < PRIMAL_STEPS {
                let start = x + step_w * 0.4;
                let end = start + step_w * 0.2;
                out.line(Point::new(start, step_y), Point::new(end, step_y), p.overlay0, 1.0);
                out.polygon(
                    vec![
                        Point::new(end, step_y),
                        Point::new(end - 4.0, step_y - 3.0),
                        Point::new(end - 4.0, step_y + 3.0),
                    ],
                    Paint::fill(p.overlay0),
                );
            }
        }
        out.text(
            Point::new(primal_x, TOP + BOX_H + 20.0),
            "Bottleneck: Sequential Ops",
            "12px sans-serif",
            p.warning,
            TextAlign::Center,
        );

        // Dual panel.
        out.round_rect(
            Rect::new(dual_x - box_w / 2.0, TOP, box_w, BOX_H),
            8.0,
            Paint::both(p.dual_fill, p.dual_stroke, 1.0),
        );
        out.text(
            Point::new(dual_x, TOP + 25.0),
            "Dual Form (Parallel Matmuls)",
            "bold 14px sans-serif",
            p.text,
            TextAlign::Center,
        );

        let my = TOP + 70.0;
        let colors = [p.matrix_x, p.matrix_w, p.matrix_z];
        for (k, (m, color)) in f.matrices.iter().zip(colors).enumerate() {
            let cx = dual_x + MATRIX_SPACING * (k as f64 - 1.5);
            draw_matrix(out, Point::new(cx, my), m, color);
            out.text(
                Point::new(cx, my + MATRIX_PX + 10.0),
                m.label,
                "bold 14px sans-serif",
                p.text,
                TextAlign::Center,
            );
        }
        out.text(
            Point::new(dual_x - MATRIX_SPACING, my + MATRIX_PX / 2.0),
            "\u{2297}",
            "bold 20px sans-serif",
            p.subtext0,
            TextAlign::Center,
        );
        out.text(
            Point::new(dual_x, my + MATRIX_PX / 2.0),
            "=",
            "bold 20px sans-serif",
            p.subtext0,
            TextAlign::Center,
        );
        out.text(
            Point::new(dual_x, TOP + BOX_H + 20.0),
            "Advantage: Parallel & Hardware Optimized",
            "12px sans-serif",
            p.good,
            TextAlign::Center,
        );

        // Connecting arrow.
        let y = TOP + BOX_H / 2.0;
        let start = Point::new(primal_x + box_w / 2.0 + 10.0, y);
        let end = Point::new(dual_x - box_w / 2.0 - 10.0, y);
        let ctrl_y = y - 40.0;
        out.quad_curve(start, Point::new((start.x + end.x) / 2.0, ctrl_y), end, p.link, 2.0);
        out.arrowhead(end, 0.0, 8.0, p.link);
        out.text(
            Point::new(w / 2.0, ctrl_y + 10.0),
            "Equivalent Result, Faster Execution",
            "italic 12px sans-serif",
            p.link,
            TextAlign::Center,
        );
    }
}

fn draw_matrix(out: &mut DisplayList, center: Point, m: &MatrixFrame, color: Color) {
    let cell = MATRIX_PX / 4.0;
    out.translated(center.x - MATRIX_PX / 2.0, center.y - MATRIX_PX / 2.0, |out| {
        for (i, row) in m.alphas.iter().enumerate() {
            for (j, &a) in row.iter().enumerate() {
                out.rect(
                    Rect::new(j as f64 * cell, i as f64 * cell, cell - 1.0, cell - 1.0),
                    Paint::fill(color.with_alpha(a)),
                );
            }
        }
        out.rect(Rect::new(0.0, 0.0, MATRIX_PX, MATRIX_PX), Paint::stroke(color, 0.5));
    });
}
