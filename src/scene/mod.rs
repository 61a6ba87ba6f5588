//! Animated scenes.
//!
//! A [`Scene`] turns simulated time into a frame of plain geometry, then
//! draws that frame into a [`DisplayList`] with a palette. Both steps are
//! pure; the only state a scene keeps is what it was built with.

pub mod chart;
pub mod dual_form;
pub mod network;
pub mod process;

use crate::draw::DisplayList;
use crate::theme::Palette;

pub trait Scene {
    /// Geometry derived for one instant.
    type Frame;

    /// Canvas size in pixels this scene lays itself out for.
    fn size(&self) -> (f64, f64);

    fn frame(&self, time: f64) -> Self::Frame;

    fn draw(&self, frame: &Self::Frame, palette: &Palette, out: &mut DisplayList);
}

/// Build the complete display list for `scene` at `time`.
///
/// The list always starts with a full clear, so nothing from a previous frame
/// survives.
pub fn render<S: Scene + ?Sized>(scene: &S, time: f64, palette: &Palette) -> DisplayList {
    let (w, h) = scene.size();
    let frame = scene.frame(time);
    let mut out = DisplayList::new();
    out.clear(w, h);
    scene.draw(&frame, palette, &mut out);
    out
}

/// `base + amplitude * sin(frequency * time + phase)`.
#[inline]
pub fn oscillate(base: f64, amplitude: f64, frequency: f64, time: f64, phase: f64) -> f64 {
    base + amplitude * (frequency * time + phase).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::prng::Prng;
    use crate::theme::Theme;

    #[test]
    fn oscillation_stays_within_base_plus_amplitude() {
        let mut rng = Prng::new(3);
        for _ in 0..200 {
            let base = rng.gen_range_f64(-0.4, 0.4);
            let mut t = 0.0;
            while t < 20.0 {
                let v = oscillate(base, 0.3, 1.5, t, rng.next_f64_01() * 6.0);
                assert!((-0.7..=0.7).contains(&v), "{v}");
                t += 0.11;
            }
        }
    }

    #[test]
    fn render_starts_with_clear() {
        let scene = process::ProcessScene::default();
        let list = render(&scene, 1.0, Theme::Dark.palette());
        assert!(matches!(list.commands()[0], DrawCmd::Clear { w, h } if w == 700.0 && h == 260.0));
    }
}
