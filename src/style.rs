//! Page stylesheet and its load-once guard.

use std::sync::atomic::{AtomicBool, Ordering};

pub const STYLESHEET: &str = include_str!("styles.css");
pub const FONT_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// Marker attribute placed on injected `<style>`/`<link>` elements.
pub const STYLE_MARKER: &str = "data-ttt-style";

/// A flag that lets exactly one caller through.
pub struct InitOnce(AtomicBool);

impl InitOnce {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// `true` for the first caller only.
    pub fn claim(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_done(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for InitOnce {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide: styles persist for the page's lifetime.
pub static STYLES_LOADED: InitOnce = InitOnce::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_claim_wins() {
        let once = InitOnce::new();
        assert!(!once.is_done());
        assert!(once.claim());
        assert!(!once.claim());
        assert!(once.is_done());
    }

    #[test]
    fn stylesheet_defines_both_themes() {
        assert!(STYLESHEET.contains(".dark-theme"));
        assert!(STYLESHEET.contains(".light-theme"));
    }
}
