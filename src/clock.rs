//! Simulated time for one animated widget.

use std::ops::RangeInclusive;

/// Speed multipliers the UI slider may produce.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.1..=2.0;

/// Simulated seconds per real millisecond for the network-weight widget.
pub const NETWORK_RATE: f64 = 0.0003;
/// Simulated seconds per real millisecond for the process and dual-form widgets.
pub const REALTIME_RATE: f64 = 0.001;

/// Accumulates simulated time from host frame timestamps.
///
/// `tick` receives the timestamp passed to the frame callback (milliseconds).
/// The first tick after construction or [`reset`](Self::reset) only records
/// the timestamp. While paused timestamps are still tracked so that resuming
/// does not replay the paused interval.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    time: f64,
    speed: f64,
    paused: bool,
    base_rate: f64,
    last: Option<f64>,
}

impl AnimationClock {
    pub fn new(base_rate: f64) -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            paused: false,
            base_rate,
            last: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Clamp into [`SPEED_RANGE`]; non-finite input is ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Back to zero; the next tick re-anchors the timestamp.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.last = None;
    }

    /// Forget the last timestamp but keep the time, so the next tick has a
    /// zero delta. Used when a stopped loop starts again.
    pub fn reanchor(&mut self) {
        self.last = None;
    }

    /// Advance from a host timestamp in milliseconds and return the new time.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last {
            Some(last) if now_ms.is_finite() => (now_ms - last).max(0.0),
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last = Some(now_ms);
        }
        if !self.paused {
            self.time += delta * self.base_rate * self.speed;
        }
        self.time
    }
}
