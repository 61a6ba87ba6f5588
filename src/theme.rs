//! Dark/light palettes.
//!
//! Every colour a scene needs lives in one [`Palette`]; a frame looks the
//! palette up once from the current [`Theme`] and passes it down.

use serde::Deserialize;

use crate::draw::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Class applied to `<body>` while this theme is active.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    // Catppuccin surfaces and text.
    pub base: Color,
    pub mantle: Color,
    pub crust: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub overlay0: Color,
    pub subtext0: Color,
    pub subtext1: Color,
    pub text: Color,

    /// Node fills by layer, cycled.
    pub layers: [Color; 3],
    pub weight_positive: Color,
    pub weight_negative: Color,
    pub pulse: Color,

    // Dual-form panels.
    pub step_idle: Color,
    pub step_active: Color,
    pub warning: Color,
    pub dual_fill: Color,
    pub dual_stroke: Color,
    pub good: Color,
    pub link: Color,
    pub matrix_x: Color,
    pub matrix_w: Color,
    pub matrix_z: Color,

    // Process diagram.
    pub slate_bg: Color,
    pub slate_fg: Color,
    pub slate_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub highlight: Color,

    /// Line colours for the performance chart, indexed by `Series`.
    pub series: [Color; 4],
}

pub static DARK: Palette = Palette {
    base: Color::rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::rgb(0x18, 0x18, 0x25),
    crust: Color::rgb(0x11, 0x11, 0x1b),
    surface0: Color::rgb(0x31, 0x32, 0x44),
    surface1: Color::rgb(0x45, 0x47, 0x5a),
    overlay0: Color::rgb(0x6c, 0x70, 0x86),
    subtext0: Color::rgb(0xa6, 0xad, 0xc8),
    subtext1: Color::rgb(0xba, 0xc2, 0xde),
    text: Color::rgb(0xcd, 0xd6, 0xf4),

    layers: [
        Color::rgb(0x74, 0xc7, 0xec),
        Color::rgb(0x89, 0xb4, 0xfa),
        Color::rgb(0xb4, 0xbe, 0xfe),
    ],
    weight_positive: Color::rgb(137, 180, 250),
    weight_negative: Color::rgb(243, 139, 168),
    pulse: Color::rgb(205, 214, 244),

    step_idle: Color::rgb(0x45, 0x47, 0x5a),
    step_active: Color::rgb(0xf3, 0x8b, 0xa8),
    warning: Color::rgb(0xf3, 0x8b, 0xa8),
    dual_fill: Color::rgb(0x31, 0x32, 0x44),
    dual_stroke: Color::rgb(0x89, 0xb4, 0xfa),
    good: Color::rgb(0xa6, 0xe3, 0xa1),
    link: Color::rgb(0x94, 0xe2, 0xd5),
    matrix_x: Color::rgb(0xfa, 0xb3, 0x87),
    matrix_w: Color::rgb(0xcb, 0xa6, 0xf7),
    matrix_z: Color::rgb(0xa6, 0xe3, 0xa1),

    slate_bg: Color::rgb(0x1e, 0x29, 0x3b),
    slate_fg: Color::rgb(0xf8, 0xfa, 0xfc),
    slate_muted: Color::rgb(0x94, 0xa3, 0xb8),
    primary: Color::rgb(67, 97, 238),
    accent: Color::rgb(247, 37, 133),
    highlight: Color::rgb(6, 214, 160),

    series: [
        Color::rgb(0xfa, 0xb3, 0x87),
        Color::rgb(0xcb, 0xa6, 0xf7),
        Color::rgb(0x89, 0xdc, 0xeb),
        Color::rgb(0x74, 0xc7, 0xec),
    ],
};

pub static LIGHT: Palette = Palette {
    base: Color::rgb(0xef, 0xf1, 0xf5),
    mantle: Color::rgb(0xf1, 0xf5, 0xf9),
    crust: Color::rgb(0xdc, 0xe0, 0xe8),
    surface0: Color::rgb(0xcc, 0xd0, 0xda),
    surface1: Color::rgb(0xbc, 0xc0, 0xcc),
    overlay0: Color::rgb(0x9c, 0xa0, 0xb0),
    subtext0: Color::rgb(0x6c, 0x6f, 0x85),
    subtext1: Color::rgb(0x5c, 0x5f, 0x77),
    text: Color::rgb(0x4c, 0x4f, 0x69),

    layers: [
        Color::rgb(0x04, 0xa5, 0xe5),
        Color::rgb(0x1e, 0x66, 0xf5),
        Color::rgb(0x72, 0x87, 0xfd),
    ],
    weight_positive: Color::rgb(30, 102, 245),
    weight_negative: Color::rgb(210, 15, 57),
    pulse: Color::rgb(76, 79, 105),

    step_idle: Color::rgb(0xe2, 0xe8, 0xf0),
    step_active: Color::rgb(0xe1, 0x1d, 0x48),
    warning: Color::rgb(0xdc, 0x26, 0x26),
    dual_fill: Color::rgb(0xef, 0xf6, 0xff),
    dual_stroke: Color::rgb(0x1e, 0x66, 0xf5),
    good: Color::rgb(0x16, 0xa3, 0x4a),
    link: Color::rgb(0x17, 0x92, 0x99),
    matrix_x: Color::rgb(0xfe, 0x64, 0x0b),
    matrix_w: Color::rgb(0x88, 0x39, 0xef),
    matrix_z: Color::rgb(0x40, 0xa0, 0x2b),

    slate_bg: Color::rgb(0xf8, 0xfa, 0xfc),
    slate_fg: Color::rgb(0x1e, 0x29, 0x3b),
    slate_muted: Color::rgb(0x64, 0x74, 0x8b),
    primary: Color::rgb(67, 97, 238),
    accent: Color::rgb(247, 37, 133),
    highlight: Color::rgb(6, 214, 160),

    series: [
        Color::rgb(0xfe, 0x64, 0x0b),
        Color::rgb(0x88, 0x39, 0xef),
        Color::rgb(0x04, 0xa5, 0xe5),
        Color::rgb(0x20, 0x9f, 0xb5),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn palettes_differ_where_theme_matters() {
        assert_ne!(Theme::Dark.palette().base, Theme::Light.palette().base);
        assert_ne!(Theme::Dark.palette().text, Theme::Light.palette().text);
        // Brand colours are shared.
        assert_eq!(Theme::Dark.palette().accent, Theme::Light.palette().accent);
    }

    #[test]
    fn deserializes_lowercase_names() {
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
        assert_eq!(t.body_class(), "light-theme");
    }
}
