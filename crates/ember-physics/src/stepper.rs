//! Fixed-timestep stepping
//!
//! Two modes, both driven by the host's variable frame delta:
//! - `FixedStepper`: clamp + accumulate + run whole fixed steps, leftover
//!   carries over. A max-steps guard stops runaway catch-up loops after a
//!   frame hitch.
//! - `SubdivideStepper`: divide one delta into N equal sub-steps with no
//!   accumulation, for fast-moving ascent trails where sub-frame smoothness
//!   matters more than exact timestep consistency.

/// Fixed-timestep accumulator
pub struct FixedStepper {
    /// Step size handed to the update closure
    pub fixed_step: f32,
    /// Incoming deltas are clamped to this before accumulating
    pub max_delta: f32,
    /// At most this many steps are run per tick
    pub max_steps: u32,
    accumulator: f32,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self {
            fixed_step: 1.0 / 120.0,
            max_delta: 1.0 / 30.0,
            max_steps: 8,
            accumulator: 0.0,
        }
    }
}

impl FixedStepper {
    pub fn new(fixed_step: f32) -> Self {
        Self {
            fixed_step,
            ..Self::default()
        }
    }

    /// Accumulate `dt` and invoke `step` once per whole fixed step, capped by
    /// `max_steps`. Returns the number of steps run.
    pub fn advance(&mut self, dt: f32, mut step: impl FnMut(f32)) -> u32 {
        self.accumulator += dt.clamp(0.0, self.max_delta);

        let mut steps = 0;
        while self.accumulator >= self.fixed_step && steps < self.max_steps {
            step(self.fixed_step);
            self.accumulator -= self.fixed_step;
            steps += 1;
        }
        // Drop backlog beyond the guard instead of spiraling
        if steps == self.max_steps {
            self.accumulator = self.accumulator.min(self.fixed_step);
        }
        steps
    }

    /// Unconsumed time waiting in the accumulator
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}

/// Equal-subdivision stepping, no accumulation between ticks
pub struct SubdivideStepper;

impl SubdivideStepper {
    /// Run `step` `substeps` times with `dt / substeps` each
    pub fn run(dt: f32, substeps: u32, mut step: impl FnMut(f32)) {
        let n = substeps.max(1);
        let sub_dt = dt / n as f32;
        for _ in 0..n {
            step(sub_dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_whole_steps() {
        let mut stepper = FixedStepper::new(1.0 / 60.0);
        // Two steps' worth of time
        let steps = stepper.advance(2.0 / 60.0, |_| {});
        assert_eq!(steps, 2);
        assert!(stepper.pending() < 1e-6);
    }

    #[test]
    fn leftover_carries_over() {
        let mut stepper = FixedStepper::new(1.0 / 60.0);
        let steps = stepper.advance(1.5 / 60.0, |_| {});
        assert_eq!(steps, 1);
        // The half step runs next tick
        let steps = stepper.advance(0.5 / 60.0, |_| {});
        assert_eq!(steps, 1);
    }

    #[test]
    fn clamps_frame_hitch() {
        let mut stepper = FixedStepper::new(1.0 / 120.0);
        // A one-second hitch is clamped to max_delta, then capped by max_steps
        let steps = stepper.advance(1.0, |_| {});
        assert!(steps <= stepper.max_steps);
        assert!(stepper.pending() <= stepper.fixed_step + 1e-6);
    }

    #[test]
    fn step_receives_fixed_dt() {
        let mut stepper = FixedStepper::new(1.0 / 60.0);
        let mut seen = Vec::new();
        stepper.advance(3.0 / 60.0, |dt| seen.push(dt));
        assert_eq!(seen.len(), 3);
        for dt in seen {
            assert!((dt - 1.0 / 60.0).abs() < 1e-6);
        }
    }

    #[test]
    fn subdivide_splits_evenly() {
        let mut total = 0.0;
        let mut calls = 0;
        SubdivideStepper::run(0.1, 4, |dt| {
            total += dt;
            calls += 1;
        });
        assert_eq!(calls, 4);
        assert!((total - 0.1).abs() < 1e-6);
    }

    #[test]
    fn subdivide_zero_substeps_runs_once() {
        let mut calls = 0;
        SubdivideStepper::run(0.1, 0, |_| calls += 1);
        assert_eq!(calls, 1);
    }
}
