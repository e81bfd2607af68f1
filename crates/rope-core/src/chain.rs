use glam::{Vec2, Vec3};

use crate::math::{planar, planar_distance};

/// One chain element: current and previous position.
///
/// Velocity is implicit, `pos_now - pos_old`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos_now: Vec3,
    pub pos_old: Vec3,
}

impl Node {
    /// A node at rest at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            pos_now: position,
            pos_old: position,
        }
    }

    /// Planar displacement over the last tick.
    pub fn velocity(&self) -> Vec2 {
        planar(self.pos_now) - planar(self.pos_old)
    }
}

/// Fixed-capacity node arena (SoA).
///
/// Storage is allocated once for `max_size` nodes. Only the prefix
/// `[0, active_count)` is simulated; the tail stays allocated but inert.
pub struct ChainState {
    /// Current positions.
    pub(crate) pos_now: Box<[Vec3]>,
    /// Positions at the previous tick.
    pub(crate) pos_old: Box<[Vec3]>,
    segment_length: f32,
    active_count: usize,
}

impl ChainState {
    /// Allocate `max_size` nodes at rest on `initial_position`.
    ///
    /// All nodes start active; callers usually follow up with
    /// [`ChainState::set_active_count`] using [`ChainState::active_count_for_span`].
    /// Inputs must already be validated (`max_size >= 2`, `segment_length > 0`).
    pub fn new(max_size: usize, segment_length: f32, initial_position: Vec3) -> Self {
        debug_assert!(max_size >= 2, "max_size must be >= 2, got {max_size}");
        debug_assert!(
            segment_length > 0.0,
            "segment_length must be > 0, got {segment_length}"
        );

        Self {
            pos_now: vec![initial_position; max_size].into_boxed_slice(),
            pos_old: vec![initial_position; max_size].into_boxed_slice(),
            segment_length,
            active_count: max_size,
        }
    }

    /// Number of whole segments that fit between two anchors, clamped to capacity.
    pub fn active_count_for_span(
        start: Vec3,
        end: Vec3,
        segment_length: f32,
        max_size: usize,
    ) -> usize {
        let distance = planar_distance(start, end);
        if !distance.is_finite() || !segment_length.is_finite() || segment_length <= 0.0 {
            return 0;
        }
        let fit = (distance / segment_length).floor();
        if fit >= max_size as f32 {
            max_size
        } else {
            fit as usize
        }
    }

    pub fn max_size(&self) -> usize {
        self.pos_now.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// Change how many nodes are simulated, clamped to capacity.
    ///
    /// Nodes entering the active prefix are not re-seated; they resume from
    /// wherever they were last left.
    pub fn set_active_count(&mut self, count: usize) {
        self.active_count = count.min(self.max_size());
    }

    /// Whether there is at least one segment to constrain.
    pub fn is_simulatable(&self) -> bool {
        self.active_count >= 2
    }

    /// Total rest length of the active chain.
    pub fn rest_length(&self) -> f32 {
        if self.is_simulatable() {
            (self.active_count - 1) as f32 * self.segment_length
        } else {
            0.0
        }
    }

    /// Current positions of the active nodes, in chain order.
    pub fn positions(&self) -> &[Vec3] {
        &self.pos_now[..self.active_count]
    }

    pub fn node(&self, index: usize) -> Option<Node> {
        if index >= self.max_size() {
            return None;
        }
        Some(Node {
            pos_now: self.pos_now[index],
            pos_old: self.pos_old[index],
        })
    }

    /// Overwrite a single node. Out-of-range indices are ignored.
    pub fn set_node(&mut self, index: usize, node: Node) {
        if index < self.max_size() {
            self.pos_now[index] = node.pos_now;
            self.pos_old[index] = node.pos_old;
        }
    }

    /// Re-seat every node, active or not, at rest on `position`.
    pub fn reset(&mut self, position: Vec3) {
        self.pos_now.fill(position);
        self.pos_old.fill(position);
    }
}
