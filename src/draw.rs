//! Display lists: the drawing commands a scene emits for one frame.
//!
//! Scenes never touch a canvas directly. They push [`DrawCmd`]s into a
//! [`DisplayList`], which the browser side replays onto a 2D context. This
//! keeps every scene testable on the host and makes frames comparable.

use std::fmt;

/// An sRGB colour with a straight alpha channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same colour with a new alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, a: f64) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
        Self { a, ..self }
    }

    /// CSS colour string accepted by `fillStyle` / `strokeStyle`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            // Three decimals is below what a canvas can resolve in 8-bit alpha.
            let a = (self.a * 1000.0).round() / 1000.0;
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centred on `c`.
    pub fn centered(c: Point, w: f64, h: f64) -> Self {
        Self::new(c.x - w / 2.0, c.y - h / 2.0, w, h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Fill and/or stroke for closed shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<(Color, f64)>,
}

impl Paint {
    pub const fn fill(c: Color) -> Self {
        Self { fill: Some(c), stroke: None }
    }

    pub const fn stroke(c: Color, width: f64) -> Self {
        Self { fill: None, stroke: Some((c, width)) }
    }

    pub const fn both(fill: Color, stroke: Color, width: f64) -> Self {
        Self { fill: Some(fill), stroke: Some((stroke, width)) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the whole surface. Always the first command of a frame.
    Clear { w: f64, h: f64 },
    Rect { rect: Rect, paint: Paint },
    RoundRect { rect: Rect, radius: f64, paint: Paint },
    Circle { center: Point, radius: f64, paint: Paint },
    Line { from: Point, to: Point, color: Color, width: f64, dash: Option<[f64; 2]> },
    QuadCurve { from: Point, ctrl: Point, to: Point, color: Color, width: f64 },
    Polygon { points: Vec<Point>, paint: Paint },
    Polyline { points: Vec<Point>, color: Color, width: f64 },
    Text { at: Point, text: String, font: String, color: Color, align: TextAlign },
    /// Shift all following commands until the matching `Restore`.
    Translate { dx: f64, dy: f64 },
    Save,
    Restore,
}

/// Ordered commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    cmds: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn clear(&mut self, w: f64, h: f64) {
        self.push(DrawCmd::Clear { w, h });
    }

    pub fn rect(&mut self, rect: Rect, paint: Paint) {
        self.push(DrawCmd::Rect { rect, paint });
    }

    pub fn round_rect(&mut self, rect: Rect, radius: f64, paint: Paint) {
        self.push(DrawCmd::RoundRect { rect, radius, paint });
    }

    pub fn circle(&mut self, center: Point, radius: f64, paint: Paint) {
        // Negative radii throw in the canvas API.
        let radius = radius.max(0.0);
        self.push(DrawCmd::Circle { center, radius, paint });
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.push(DrawCmd::Line { from, to, color, width, dash: None });
    }

    pub fn dashed_line(&mut self, from: Point, to: Point, color: Color, width: f64, dash: [f64; 2]) {
        self.push(DrawCmd::Line { from, to, color, width, dash: Some(dash) });
    }

    pub fn quad_curve(&mut self, from: Point, ctrl: Point, to: Point, color: Color, width: f64) {
        self.push(DrawCmd::QuadCurve { from, ctrl, to, color, width });
    }

    pub fn polygon(&mut self, points: Vec<Point>, paint: Paint) {
        if points.len() >= 3 {
            self.push(DrawCmd::Polygon { points, paint });
        }
    }

    pub fn polyline(&mut self, points: Vec<Point>, color: Color, width: f64) {
        if points.len() >= 2 {
            self.push(DrawCmd::Polyline { points, color, width });
        }
    }

    pub fn text(&mut self, at: Point, text: impl Into<String>, font: &str, color: Color, align: TextAlign) {
        self.push(DrawCmd::Text {
            at,
            text: text.into(),
            font: font.to_string(),
            color,
            align,
        });
    }

    pub fn translated(&mut self, dx: f64, dy: f64, f: impl FnOnce(&mut Self)) {
        self.push(DrawCmd::Save);
        self.push(DrawCmd::Translate { dx, dy });
        f(self);
        self.push(DrawCmd::Restore);
    }

    /// Filled arrowhead with its tip at `tip`, pointing along `angle` radians.
    pub fn arrowhead(&mut self, tip: Point, angle: f64, size: f64, color: Color) {
        let spread = std::f64::consts::PI / 6.0;
        let a = Point::new(
            tip.x - size * (angle - spread).cos(),
            tip.y - size * (angle - spread).sin(),
        );
        let b = Point::new(
            tip.x - size * (angle + spread).cos(),
            tip.y - size * (angle + spread).sin(),
        );
        self.polygon(vec![tip, a, b], Paint::fill(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(Color::rgb(0x1e, 0x1e, 0x2e).css(), "#1e1e2e");
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        let c = Color::rgb(137, 180, 250).with_alpha(0.45);
        assert_eq!(c.css(), "rgba(137, 180, 250, 0.45)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(3.0).a, 1.0);
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(-1.0).a, 0.0);
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(f64::NAN).a, 0.0);
    }

    #[test]
    fn translated_wraps_in_save_restore() {
        let mut list = DisplayList::new();
        list.translated(2.0, 3.0, |l| l.clear(1.0, 1.0));
        assert_eq!(list.commands().first(), Some(&DrawCmd::Save));
        assert_eq!(list.commands().last(), Some(&DrawCmd::Restore));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn degenerate_shapes_are_dropped() {
        let mut list = DisplayList::new();
        list.polygon(vec![Point::new(0.0, 0.0)], Paint::fill(Color::rgb(0, 0, 0)));
        list.polyline(vec![], Color::rgb(0, 0, 0), 1.0);
        assert!(list.is_empty());
    }
}
