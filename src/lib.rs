#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Animated explainer for Test-Time Training (TTT) layers.
//!
//! Everything that decides *what* is drawn (clock, scenes, navigation,
//! dataset) is plain Rust and builds on any target. The browser glue lives in
//! [`web`] and only compiles for `wasm32`.

pub mod clock;
pub mod config;
pub mod dataset;
pub mod draw;
pub mod error;
pub mod frame;
pub mod nav;
pub mod prng;
pub mod scene;
pub mod stage;
pub mod style;
pub mod theme;

// Only compile browser-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{Result, VizError};
