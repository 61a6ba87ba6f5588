//! Fixed-length cycles split into equal stages.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageCycle {
    pub cycle_length: f64,
    pub stage_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagePosition {
    pub index: usize,
    /// Fraction of the current stage elapsed, in `[0, 1)`.
    pub progress: f64,
}

impl StageCycle {
    pub const fn new(cycle_length: f64, stage_count: usize) -> Self {
        Self { cycle_length, stage_count }
    }

    pub fn at(&self, time: f64) -> StagePosition {
        if self.stage_count == 0 || !(self.cycle_length > 0.0) || !time.is_finite() {
            return StagePosition { index: 0, progress: 0.0 };
        }
        let n = self.stage_count as f64;
        let scaled = time.rem_euclid(self.cycle_length) / self.cycle_length * n;
        // Rounding can land exactly on `n`; fold it back into the last stage.
        let index = (scaled.floor() as usize).min(self.stage_count - 1);
        let progress = (scaled - index as f64).clamp(0.0, 1.0);
        StagePosition { index, progress }
    }
}
