#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::rope::{Anchors, Rope, TickOutcome};

/// Many independent ropes ticked together.
///
/// Ropes never interact; each slot carries its own anchor snapshot for the
/// coming tick. With the `parallel` feature the ropes are spread over the
/// rayon pool, one rope per task.
#[derive(Default)]
pub struct RopeBatch {
    ropes: Vec<Rope>,
    anchors: Vec<Option<Anchors>>,
}

impl RopeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rope and return its slot index.
    pub fn push(&mut self, rope: Rope, anchors: Option<Anchors>) -> usize {
        self.ropes.push(rope);
        self.anchors.push(anchors);
        self.ropes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.ropes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ropes.is_empty()
    }

    pub fn rope(&self, index: usize) -> Option<&Rope> {
        self.ropes.get(index)
    }

    /// Update the anchor snapshot used by the next [`RopeBatch::tick`].
    pub fn set_anchors(&mut self, index: usize, anchors: Option<Anchors>) {
        if let Some(slot) = self.anchors.get_mut(index) {
            *slot = anchors;
        }
    }

    /// Tick every rope once, returning outcomes in slot order.
    pub fn tick(&mut self, dt: f32) -> Vec<TickOutcome> {
        let mut outcomes = Vec::with_capacity(self.ropes.len());

        #[cfg(feature = "parallel")]
        {
            self.ropes
                .par_iter_mut()
                .zip(self.anchors.par_iter())
                .map(|(rope, anchors)| rope.tick(anchors, dt))
                .collect_into_vec(&mut outcomes);
        }

        #[cfg(not(feature = "parallel"))]
        {
            outcomes.extend(
                self.ropes
                    .iter_mut()
                    .zip(self.anchors.iter())
                    .map(|(rope, anchors)| rope.tick(anchors, dt)),
            );
        }

        outcomes
    }
}
