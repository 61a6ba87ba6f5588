//! Perplexity-versus-context dataset for the performance chart.
//!
//! These numbers are illustrative. They approximate the shape of published
//! long-context curves for teaching purposes and were never measured by this
//! crate; the chart always renders [`ILLUSTRATIVE_NOTICE`] next to them.

pub const ILLUSTRATIVE_NOTICE: &str = "Illustrative values for teaching, not benchmark results";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Transformer,
    Mamba,
    TttLinear,
    TttMlp,
}

impl Series {
    pub const ALL: [Series; 4] = [Series::Transformer, Series::Mamba, Series::TttLinear, Series::TttMlp];

    pub fn label(self) -> &'static str {
        match self {
            Series::Transformer => "Transformer",
            Series::Mamba => "Mamba",
            Series::TttLinear => "TTT-Linear",
            Series::TttMlp => "TTT-MLP",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerplexityRow {
    pub tokens: u32,
    /// One value per [`Series`], in `Series::ALL` order.
    pub values: [f64; 4],
}

impl PerplexityRow {
    pub fn value(&self, series: Series) -> f64 {
        self.values[series.index()]
    }
}

const fn row(tokens: u32, values: [f64; 4]) -> PerplexityRow {
    PerplexityRow { tokens, values }
}

pub const ROWS: [PerplexityRow; 9] = [
    row(128, [11.0, 10.8, 10.7, 10.5]),
    row(256, [10.8, 10.6, 10.5, 10.3]),
    row(512, [10.6, 10.4, 10.3, 10.1]),
    row(1000, [10.4, 10.2, 10.1, 9.9]),
    row(2000, [10.2, 10.0, 9.9, 9.8]),
    row(4000, [9.9, 9.8, 9.7, 9.6]),
    row(8000, [9.6, 9.6, 9.5, 9.4]),
    // Mamba plateaus from here on.
    row(16000, [9.2, 9.5, 9.2, 9.1]),
    row(32000, [8.8, 9.5, 9.0, 8.9]),
];

pub const TOKEN_DOMAIN: (f64, f64) = (128.0, 32000.0);
pub const PERPLEXITY_DOMAIN: (f64, f64) = (8.5, 11.5);

/// Rows the chart plots for a given maximum context length.
pub fn visible_rows(max_context: u32) -> impl Iterator<Item = &'static PerplexityRow> {
    ROWS.iter().filter(move |r| r.tokens <= max_context)
}

/// Context-length slider bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSlider {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

pub const CONTEXT_SLIDER: ContextSlider = ContextSlider { min: 512, max: 32000, step: 128 };
pub const DEFAULT_CONTEXT: u32 = 32000;

impl ContextSlider {
    /// Clamp and snap an arbitrary value onto the slider grid.
    pub fn snap(&self, value: f64) -> u32 {
        if !value.is_finite() {
            return self.max;
        }
        let clamped = value.clamp(self.min as f64, self.max as f64);
        let steps = ((clamped - self.min as f64) / self.step as f64).round() as u32;
        (self.min + steps * self.step).min(self.max)
    }
}

/// Slider readout: `"32.0k"`, `"896"`.
pub fn format_context(tokens: u32) -> String {
    if tokens >= 1000 {
        format!("{:.1}k", tokens as f64 / 1000.0)
    } else {
        tokens.to_string()
    }
}

/// Axis tick label: `"16k"`, `"512"`.
pub fn format_tick(tokens: u32) -> String {
    if tokens >= 1000 {
        let k = tokens as f64 / 1000.0;
        if k.fract() == 0.0 {
            format!("{}k", k as u32)
        } else {
            format!("{k}k")
        }
    } else {
        tokens.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtering_keeps_rows_up_to_context() {
        let tokens: Vec<u32> = visible_rows(4000).map(|r| r.tokens).collect();
        assert_eq!(tokens, vec![128, 256, 512, 1000, 2000, 4000]);
        assert_eq!(visible_rows(DEFAULT_CONTEXT).count(), ROWS.len());
        assert_eq!(visible_rows(100).count(), 0);
    }

    #[test]
    fn slider_snaps_to_grid() {
        assert_eq!(CONTEXT_SLIDER.snap(0.0), 512);
        assert_eq!(CONTEXT_SLIDER.snap(700.0), 640);
        assert_eq!(CONTEXT_SLIDER.snap(1e9), 32000);
        assert_eq!(CONTEXT_SLIDER.snap(f64::NAN), 32000);
    }

    #[test]
    fn labels() {
        assert_eq!(format_context(32000), "32.0k");
        assert_eq!(format_context(1536), "1.5k");
        assert_eq!(format_context(896), "896");
        assert_eq!(format_tick(16000), "16k");
        assert_eq!(format_tick(128), "128");
    }

    #[test]
    fn values_sit_inside_the_plot_domain() {
        for row in ROWS {
            for s in Series::ALL {
                let v = row.value(s);
                assert!(v >= PERPLEXITY_DOMAIN.0 && v <= PERPLEXITY_DOMAIN.1);
            }
        }
    }
}
