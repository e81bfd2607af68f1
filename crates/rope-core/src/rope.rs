use glam::Vec3;
use tracing::{debug, trace, warn};

use crate::chain::ChainState;
use crate::config::RopeConfig;
use crate::error::Result;
use crate::solver::Solver;

/// Snapshot of both anchor positions for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchors {
    pub start: Vec3,
    pub end: Vec3,
}

impl Anchors {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }
}

/// Source of anchor positions, sampled once per tick.
///
/// Returning `None` (e.g. the partner entity is gone) freezes the rope for
/// that tick.
pub trait AnchorProvider {
    fn anchors(&self) -> Option<Anchors>;
}

impl AnchorProvider for Anchors {
    fn anchors(&self) -> Option<Anchors> {
        Some(*self)
    }
}

impl AnchorProvider for Option<Anchors> {
    fn anchors(&self) -> Option<Anchors> {
        *self
    }
}

impl<T: AnchorProvider + ?Sized> AnchorProvider for &T {
    fn anchors(&self) -> Option<Anchors> {
        (**self).anchors()
    }
}

/// Consumer of the simulated polyline. Purely visual, no feedback.
pub trait RopeRenderer {
    fn draw(&mut self, positions: &[Vec3], width: f32);
}

/// What happened during [`Rope::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Integrated and relaxed; carries the residual segment error.
    Stepped { residual: f32 },
    /// An anchor was unavailable; state is unchanged.
    SkippedNoAnchors,
}

/// One rope instance: its chain, the solver driving it, and cosmetic width.
pub struct Rope {
    pub state: ChainState,
    pub solver: Solver,
    pub line_width: f32,
}

impl Rope {
    /// Build a rope hanging from `anchors.start`.
    ///
    /// Every node is seeded at the start anchor; the number of simulated
    /// nodes is how many whole segments fit between the two anchors.
    pub fn new(config: RopeConfig, anchors: Anchors) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected rope config");
            return Err(e);
        }

        let mut state = ChainState::new(config.max_size, config.segment_length, anchors.start);
        let active = ChainState::active_count_for_span(
            anchors.start,
            anchors.end,
            config.segment_length,
            config.max_size,
        );
        state.set_active_count(active);

        debug!(
            max_size = config.max_size,
            active_count = active,
            segment_length = config.segment_length,
            "rope created"
        );

        Ok(Self {
            state,
            solver: Solver::from_config(&config),
            line_width: config.line_width,
        })
    }

    /// Run one fixed tick against the provider's current anchors.
    pub fn tick(&mut self, provider: &impl AnchorProvider, dt: f32) -> TickOutcome {
        let Some(anchors) = provider.anchors() else {
            trace!("anchors unavailable, skipping tick");
            return TickOutcome::SkippedNoAnchors;
        };

        let residual = self.solver.step(&mut self.state, anchors, dt);
        trace!(residual, "rope tick");
        TickOutcome::Stepped { residual }
    }

    pub fn render(&self, renderer: &mut impl RopeRenderer) {
        renderer.draw(self.state.positions(), self.line_width);
    }

    /// Tick then render. Skipped ticks still render the last valid state.
    pub fn update(
        &mut self,
        provider: &impl AnchorProvider,
        renderer: &mut impl RopeRenderer,
        dt: f32,
    ) -> TickOutcome {
        let outcome = self.tick(provider, dt);
        self.render(renderer);
        outcome
    }

    pub fn positions(&self) -> &[Vec3] {
        self.state.positions()
    }
}
