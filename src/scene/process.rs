//! One token through a TTT layer, in five stages.

use super::Scene;
use crate::draw::{Color, DisplayList, Paint, Point, Rect, TextAlign};
use crate::stage::{StageCycle, StagePosition};
use crate::theme::Palette;

pub const STAGES: [&str; 5] = [
    "1. Process Input Token",
    "2. Calculate Loss & Gradient",
    "3. Update Hidden State Weights",
    "4. Apply Updated Weights",
    "5. Generate Output",
];

pub const MATRIX_SIZE: usize = 4;

const TOKEN_RADIUS: f64 = 25.0;
const STATE_W: f64 = 100.0;
const STATE_H: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessScene {
    pub width: f64,
    pub height: f64,
    pub cycle: StageCycle,
}

impl Default for ProcessScene {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 260.0,
            cycle: StageCycle::new(5.0, STAGES.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessFrame {
    pub stage: StagePosition,
    pub input_offset: f64,
    pub output_offset: f64,
    /// Hidden-state box displacement while it is being updated.
    pub shake: f64,
    /// Row-major cell values in `[-1, 1]`.
    pub cells: [[f64; MATRIX_SIZE]; MATRIX_SIZE],
    /// Gradient bubble radius, present in the loss and update stages.
    pub gradient: Option<f64>,
}

impl ProcessFrame {
    pub fn is_updating(&self) -> bool {
        (2..=3).contains(&self.stage.index)
    }
}

impl Scene for ProcessScene {
    type Frame = ProcessFrame;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn frame(&self, t: f64) -> ProcessFrame {
        let stage = self.cycle.at(t);
        let emphasis = |active: bool| if active { 1.0 } else { 0.3 };
        let updating = (2..=3).contains(&stage.index);

        let mut cells = [[0.0; MATRIX_SIZE]; MATRIX_SIZE];
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let phase = i as f64 * 0.7 + j as f64 * 0.5;
                *cell = if updating {
                    (t * 3.0 + phase).sin() * stage.progress
                } else {
                    (t * 0.5 + phase).sin() * 0.5
                };
            }
        }

        ProcessFrame {
            stage,
            input_offset: 20.0 * (t * 2.0).sin() * emphasis(stage.index == 0),
            output_offset: 20.0 * (t * 2.0).sin() * emphasis(stage.index == 4),
            shake: if updating { 2.0 * (t * 20.0).sin() * stage.progress } else { 0.0 },
            cells,
            gradient: matches!(stage.index, 1 | 2)
                .then(|| 40.0 + 10.0 * (t * 4.0).sin() * stage.progress),
        }
    }

    fn draw(&self, f: &ProcessFrame, p: &Palette, out: &mut DisplayList) {
        let (w, h) = self.size();
        let cy = h / 2.0;
        let token = Point::new(80.0, cy);
        let state = Point::new(w / 2.0, cy);
        let output = Point::new(w - 80.0, cy);
        let idx = f.stage.index;

        out.rect(Rect::new(0.0, 0.0, w, h), Paint::fill(p.slate_bg));

        let (c, lw) = if idx == 0 { (p.accent, 3.0) } else { (p.slate_muted, 2.0) };
        out.line(
            Point::new(token.x + TOKEN_RADIUS, cy),
            Point::new(state.x - STATE_W / 2.0, cy + f.input_offset),
            c,
            lw,
        );
        let (c, lw) = if idx == 4 { (p.highlight, 3.0) } else { (p.slate_muted, 2.0) };
        out.line(
            Point::new(state.x + STATE_W / 2.0, cy + f.output_offset),
            Point::new(output.x - TOKEN_RADIUS, cy),
            c,
            lw,
        );

        out.translated(f.shake, f.shake, |out| {
            let border = if f.is_updating() { p.accent } else { p.primary };
            out.round_rect(
                Rect::centered(state, STATE_W, STATE_H),
                10.0,
                Paint::both(p.slate_bg, border, 2.0),
            );
            draw_cells(out, state, &f.cells, p);
            out.text(
                Point::new(state.x, cy - STATE_H / 2.0 - 10.0),
                "Hidden State (W)",
                "bold 14px Arial",
                p.slate_fg,
                TextAlign::Center,
            );
        });

        token_circle(out, token, p.accent, idx == 0, "Input Token", "x\u{209c}", p);
        token_circle(out, output, p.highlight, idx == 4, "Output", "z\u{209c}", p);

        if let Some(radius) = f.gradient {
            let at = Point::new((state.x + token.x) / 2.0, cy + 60.0);
            out.circle(at, radius, Paint::fill(p.accent.with_alpha(0.15)));
            let size = 16.0 + 4.0 * f.stage.progress;
            out.text(
                Point::new(at.x, at.y + 6.0),
                "\u{2207}\u{2113}",
                &format!("bold {size:.1}px monospace"),
                p.accent,
                TextAlign::Center,
            );
            out.dashed_line(
                Point::new(at.x, at.y - radius * 0.7),
                Point::new(state.x, cy + STATE_H / 2.0 - 10.0),
                p.accent,
                1.5,
                [3.0, 3.0],
            );
        }

        out.text(
            Point::new(w / 2.0, h - 20.0),
            STAGES[idx.min(STAGES.len() - 1)],
            "14px Arial",
            p.slate_fg,
            TextAlign::Center,
        );
    }
}

fn draw_cells(out: &mut DisplayList, center: Point, cells: &[[f64; MATRIX_SIZE]; MATRIX_SIZE], p: &Palette) {
    let n = MATRIX_SIZE as f64;
    let cell = STATE_W.min(STATE_H) * 0.6 / n;
    let x0 = center.x - cell * n / 2.0;
    let y0 = center.y - cell * n / 2.0;
    for (i, row) in cells.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            let base = if v > 0.0 { p.primary } else { p.accent };
            out.rect(
                Rect::new(x0 + j as f64 * cell, y0 + i as f64 * cell, cell - 1.0, cell - 1.0),
                Paint::fill(base.with_alpha(0.3 + v.abs().min(1.0) * 0.7)),
            );
        }
    }
}

fn token_circle(
    out: &mut DisplayList,
    at: Point,
    color: Color,
    active: bool,
    label: &str,
    symbol: &str,
    p: &Palette,
) {
    let alpha = if active { 0.7 } else { 0.4 };
    out.circle(at, TOKEN_RADIUS, Paint::both(color.with_alpha(alpha), color, 2.0));
    out.text(
        Point::new(at.x, at.y - TOKEN_RADIUS - 10.0),
        label,
        "bold 14px Arial",
        p.slate_fg,
        TextAlign::Center,
    );
    out.text(Point::new(at.x, at.y + 5.0), symbol, "bold 18px monospace", p.slate_fg, TextAlign::Center);
}

/// Time at the middle of `stage` in the first cycle.
pub fn stage_midpoint(cycle: &StageCycle, stage: usize) -> f64 {
    cycle.cycle_length / cycle.stage_count as f64 * (stage as f64 + 0.5)
}
