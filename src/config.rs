//! Page configuration.
//!
//! The host page may embed a JSON block
//! `<script type="application/json" id="ttt-config">` to override the
//! defaults below. Every field is optional; out-of-range values are clamped.

use serde::Deserialize;

use crate::clock::SPEED_RANGE;
use crate::dataset::{CONTEXT_SLIDER, DEFAULT_CONTEXT};
use crate::error::Result;
use crate::nav::Section;
use crate::scene::network::Variant;
use crate::theme::Theme;

pub const CONFIG_ELEMENT_ID: &str = "ttt-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VizConfig {
    /// Seed for the network layout's random base weights.
    pub seed: u64,
    /// `log` level name for the browser console.
    pub log_level: String,
    pub theme: Theme,
    pub section: Section,
    pub variant: Variant,
    pub speed: f64,
    pub context_length: u32,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            seed: 0x7e57_7137,
            log_level: "info".to_string(),
            theme: Theme::Dark,
            section: Section::Intro,
            variant: Variant::Linear,
            speed: 0.5,
            context_length: DEFAULT_CONTEXT,
        }
    }
}

impl VizConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: VizConfig = serde_json::from_str(text)?;
        Ok(cfg.normalized())
    }

    fn normalized(mut self) -> Self {
        self.speed = if self.speed.is_finite() {
            self.speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end())
        } else {
            Self::default().speed
        };
        self.context_length = CONTEXT_SLIDER.snap(self.context_length as f64);
        self
    }

    /// Falls back to `Info` for unknown names.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(VizConfig::from_json("{}").unwrap(), VizConfig::default());
    }

    #[test]
    fn overrides_and_clamps() {
        let cfg = VizConfig::from_json(
            r#"{"theme":"light","section":"performance","variant":"mlp","speed":9,"context_length":700}"#,
        )
        .unwrap();
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.section, Section::Performance);
        assert_eq!(cfg.variant, Variant::Mlp);
        assert_eq!(cfg.speed, 2.0);
        assert_eq!(cfg.context_length, 640);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_json() {
        assert!(VizConfig::from_json(r#"{"colour":"red"}"#).is_err());
        assert!(VizConfig::from_json("{").is_err());
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let cfg = VizConfig { log_level: "DEBUG".into(), ..VizConfig::default() };
        assert_eq!(cfg.level(), log::Level::Debug);
        let cfg = VizConfig { log_level: "chatty".into(), ..VizConfig::default() };
        assert_eq!(cfg.level(), log::Level::Info);
    }
}
