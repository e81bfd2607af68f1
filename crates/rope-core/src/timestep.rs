/// Fixed-timestep accumulator for hosts with a variable frame clock.
///
/// Frame time is banked and paid out in whole ticks of `step` seconds. At
/// most `max_steps_per_frame` ticks are paid per frame; anything beyond that
/// is dropped so a long stall cannot snowball into ever longer frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    max_steps_per_frame: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(1.0 / 50.0, 5)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_steps_per_frame: u32) -> Self {
        debug_assert!(step > 0.0, "step must be > 0, got {step}");
        Self {
            step,
            max_steps_per_frame: max_steps_per_frame.max(1),
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Bank `frame_dt` seconds and return how many ticks to run now.
    ///
    /// Negative or non-finite frame times bank nothing.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_steps_per_frame {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if self.accumulator >= self.step {
            // Drop the backlog, keep the sub-step remainder.
            self.accumulator %= self.step;
        }
        ticks
    }

    /// Leftover fraction of a tick, in `[0, 1)`, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
