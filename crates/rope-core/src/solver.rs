use glam::Vec3;

use crate::chain::ChainState;
use crate::config::RopeConfig;
use crate::constraints::anchor::pin_endpoints;
use crate::constraints::distance::solve_segment_constraints;
use crate::math::{planar, with_planar, GRAVITY_DIRECTION};
use crate::rope::Anchors;

/// Integration and relaxation passes over a [`ChainState`].
///
/// Holds no per-tick state; the same solver can drive any number of chains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solver {
    /// Magnitude of the downward acceleration.
    pub gravity_scale: f32,
    /// Relaxation sweeps per [`Solver::relax`] call. Zero behaves as one.
    pub iterations: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            gravity_scale: 1.5,
            iterations: 1,
        }
    }
}

impl Solver {
    pub fn new(gravity_scale: f32) -> Self {
        Self {
            gravity_scale,
            ..Self::default()
        }
    }

    pub fn from_config(config: &RopeConfig) -> Self {
        Self {
            gravity_scale: config.gravity_scale,
            iterations: config.iterations,
        }
    }

    /// Advance every active node by one Verlet step.
    ///
    /// `pos_now += (pos_now - pos_old) + (0, -gravity_scale) * dt`, with
    /// `pos_old` taking the pre-step position. Nodes are independent here.
    /// A stalled clock (`dt <= 0` or non-finite) leaves the chain untouched.
    pub fn integrate(&self, state: &mut ChainState, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }

        let gravity = GRAVITY_DIRECTION * self.gravity_scale * dt;
        let count = state.active_count();

        for i in 0..count {
            let now = state.pos_now[i];
            let velocity = planar(now) - planar(state.pos_old[i]);
            state.pos_old[i] = now;
            state.pos_now[i] = with_planar(now, planar(now) + velocity + gravity);
        }
    }

    /// Pin both endpoints and run the segment-length sweeps.
    ///
    /// Returns the residual reported by the last sweep (0 when skipped).
    pub fn relax(&self, state: &mut ChainState, start: Vec3, end: Vec3) -> f32 {
        if !state.is_simulatable() {
            return 0.0;
        }

        let mut residual = 0.0;
        for _ in 0..self.iterations.max(1) {
            pin_endpoints(state, start, end);
            residual = solve_segment_constraints(state);
        }
        residual
    }

    /// One full tick: integrate, then relax against freshly integrated positions.
    pub fn step(&self, state: &mut ChainState, anchors: Anchors, dt: f32) -> f32 {
        self.integrate(state, dt);
        self.relax(state, anchors.start, anchors.end)
    }
}
