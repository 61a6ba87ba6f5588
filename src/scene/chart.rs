//! Perplexity-versus-context line chart.
//!
//! Static: the frame ignores time and only depends on the context slider.

use super::Scene;
use crate::dataset::{
    self, format_tick, Series, ILLUSTRATIVE_NOTICE, PERPLEXITY_DOMAIN, ROWS, TOKEN_DOMAIN,
};
use crate::draw::{DisplayList, Paint, Point, Rect, TextAlign};
use crate::theme::Palette;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICK_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceChart {
    pub width: f64,
    pub height: f64,
    pub max_context: u32,
}

impl Default for PerformanceChart {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 350.0,
            max_context: dataset::DEFAULT_CONTEXT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
    pub series: Series,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub plot: Rect,
    pub lines: Vec<SeriesLine>,
    /// `(pixel x, label)` for every dataset row.
    pub x_ticks: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
}

impl PerformanceChart {
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            MARGIN_LEFT,
            MARGIN_TOP,
            (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        )
    }

    /// Log-scale x position of a token count.
    pub fn x_of(&self, tokens: f64) -> f64 {
        let plot = self.plot_area();
        let (lo, hi) = (TOKEN_DOMAIN.0.ln(), TOKEN_DOMAIN.1.ln());
        let t = (tokens.max(TOKEN_DOMAIN.0).ln() - lo) / (hi - lo);
        plot.x + t.clamp(0.0, 1.0) * plot.w
    }

    pub fn y_of(&self, perplexity: f64) -> f64 {
        let plot = self.plot_area();
        let (lo, hi) = PERPLEXITY_DOMAIN;
        let t = ((hi - perplexity) / (hi - lo)).clamp(0.0, 1.0);
        plot.y + t * plot.h
    }
}

impl Scene for PerformanceChart {
    type Frame = ChartFrame;

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn frame(&self, _time: f64) -> ChartFrame {
        let lines = Series::ALL
            .into_iter()
            .map(|series| SeriesLine {
                series,
                points: dataset::visible_rows(self.max_context)
                    .map(|r| Point::new(self.x_of(r.tokens as f64), self.y_of(r.value(series))))
                    .collect(),
            })
            .collect();

        let x_ticks = ROWS
            .iter()
            .map(|r| (self.x_of(r.tokens as f64), format_tick(r.tokens)))
            .collect();

        let (lo, hi) = PERPLEXITY_DOMAIN;
        let steps = ((hi - lo) / Y_TICK_STEP).round() as usize;
        let y_ticks = (0..=steps)
            .map(|i| {
                let v = lo + i as f64 * Y_TICK_STEP;
                (self.y_of(v), format!("{v:.1}"))
            })
            .collect();

        ChartFrame { plot: self.plot_area(), lines, x_ticks, y_ticks }
    }

    fn draw(&self, f: &ChartFrame, p: &Palette, out: &mut DisplayList) {
        let (w, h) = self.size();
        let plot = f.plot;
        out.rect(Rect::new(0.0, 0.0, w, h), Paint::fill(p.base));

        for (x, label) in &f.x_ticks {
            out.dashed_line(Point::new(*x, plot.y), Point::new(*x, plot.y + plot.h), p.surface0, 1.0, [3.0, 3.0]);
            out.text(
                Point::new(*x, plot.y + plot.h + 16.0),
                label.as_str(),
                "11px Inter, sans-serif",
                p.subtext1,
                TextAlign::Center,
            );
        }
        for (y, label) in &f.y_ticks {
            out.dashed_line(Point::new(plot.x, *y), Point::new(plot.x + plot.w, *y), p.surface0, 1.0, [3.0, 3.0]);
            out.text(
                Point::new(plot.x - 8.0, *y + 4.0),
                label.as_str(),
                "11px Inter, sans-serif",
                p.subtext1,
                TextAlign::Right,
            );
        }
        out.line(
            Point::new(plot.x, plot.y + plot.h),
            Point::new(plot.x + plot.w, plot.y + plot.h),
            p.subtext1,
            1.0,
        );
        out.line(Point::new(plot.x, plot.y), Point::new(plot.x, plot.y + plot.h), p.subtext1, 1.0);

        out.text(
            Point::new(plot.x + plot.w / 2.0, h - 22.0),
            "Context Length (Tokens, log scale)",
            "12px Inter, sans-serif",
            p.text,
            TextAlign::Center,
        );
        out.text(
            Point::new(plot.x, plot.y - 12.0),
            "Perplexity",
            "12px Inter, sans-serif",
            p.text,
            TextAlign::Center,
        );

        for line in &f.lines {
            let color = p.series[line.series.index()];
            out.polyline(line.points.clone(), color, 2.5);
            for pt in &line.points {
                out.circle(*pt, 3.0, Paint::fill(color));
            }
        }

        // Legend along the top edge.
        let mut x = plot.x + 80.0;
        for series in Series::ALL {
            let color = p.series[series.index()];
            out.rect(Rect::new(x, 14.0, 10.0, 10.0), Paint::fill(color));
            out.text(Point::new(x + 14.0, 23.0), series.label(), "12px Inter, sans-serif", p.text, TextAlign::Left);
            x += 110.0;
        }

        out.text(
            Point::new(w - MARGIN_RIGHT, h - 6.0),
            ILLUSTRATIVE_NOTICE,
            "italic 11px Inter, sans-serif",
            p.subtext0,
            TextAlign::Right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::scene::render;
    use crate::theme::Theme;

    #[test]
    fn domain_ends_map_to_plot_edges() {
        let chart = PerformanceChart::default();
        let plot = chart.plot_area();
        assert!((chart.x_of(128.0) - plot.x).abs() < 1e-9);
        assert!((chart.x_of(32000.0) - (plot.x + plot.w)).abs() < 1e-9);
        assert!((chart.y_of(11.5) - plot.y).abs() < 1e-9);
        assert!((chart.y_of(8.5) - (plot.y + plot.h)).abs() < 1e-9);
    }

    #[test]
    fn context_limits_points_per_series() {
        let chart = PerformanceChart { max_context: 2000, ..PerformanceChart::default() };
        let frame = chart.frame(0.0);
        assert_eq!(frame.lines.len(), 4);
        for line in &frame.lines {
            assert_eq!(line.points.len(), 5);
        }
        // Ticks cover the whole domain regardless of the slider.
        assert_eq!(frame.x_ticks.len(), ROWS.len());
        assert_eq!(frame.y_ticks.len(), 7);
    }

    #[test]
    fn time_does_not_change_the_chart() {
        let chart = PerformanceChart::default();
        let p = Theme::Dark.palette();
        assert_eq!(render(&chart, 0.0, p), render(&chart, 99.0, p));
    }

    #[test]
    fn notice_is_always_drawn() {
        let chart = PerformanceChart { max_context: 512, ..PerformanceChart::default() };
        let list = render(&chart, 0.0, Theme::Light.palette());
        assert!(list.commands().iter().any(
            |c| matches!(c, DrawCmd::Text { text, .. } if text == ILLUSTRATIVE_NOTICE)
        ));
    }
}
