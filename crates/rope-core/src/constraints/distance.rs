use glam::{Vec2, Vec3};

use crate::chain::ChainState;
use crate::math::{planar, with_planar};

/// Below this separation two nodes are treated as coincident.
const COINCIDENT_EPSILON: f32 = 1e-10;

/// One Gauss-Seidel sweep over the segment constraints of the active chain.
///
/// Pairs `(i, i + 1)` are visited in ascending order and each correction
/// sees the positions already moved by the previous pair, so errors are
/// pushed away from the start anchor. For every pair the correction is
///
/// ```text
/// c = (p_i - p_j) / |p_i - p_j| * (|p_i - p_j| - rest)
/// ```
///
/// Interior pairs split it (`p_i -= c/2`, `p_j += c/2`). Both endpoints are
/// kinematic: on the first pair the whole of `c` goes to node 1, on the last
/// pair the whole of `c` is taken from node `n - 2`. Coincident nodes get no
/// correction. Only the planar part of each position is touched.
///
/// Returns the summed `|dist - rest|` over all pairs, measured just before
/// each pair was corrected.
pub fn solve_segment_constraints(state: &mut ChainState) -> f32 {
    let count = state.active_count();
    if count < 2 {
        return 0.0;
    }

    let rest = state.segment_length();
    let last = count - 1;
    let mut residual = 0.0;

    for i in 0..last {
        let j = i + 1;
        let diff = planar(state.pos_now[i]) - planar(state.pos_now[j]);
        let dist = diff.length();
        residual += (dist - rest).abs();

        if dist < COINCIDENT_EPSILON {
            continue;
        }

        let correction = diff / dist * (dist - rest);

        match (i == 0, j == last) {
            // Two-node chain: both ends pinned, nothing free to move.
            (true, true) => {}
            (true, false) => nudge(&mut state.pos_now[j], correction),
            (false, true) => nudge(&mut state.pos_now[i], -correction),
            (false, false) => {
                let half = correction * 0.5;
                nudge(&mut state.pos_now[i], -half);
                nudge(&mut state.pos_now[j], half);
            }
        }
    }

    residual
}

/// Summed `|dist - rest|` over the active segments, without moving anything.
pub fn segment_error(state: &ChainState) -> f32 {
    let rest = state.segment_length();
    state
        .positions()
        .windows(2)
        .map(|pair| (planar(pair[0]).distance(planar(pair[1])) - rest).abs())
        .sum()
}

#[inline]
fn nudge(p: &mut Vec3, delta: Vec2) {
    *p = with_planar(*p, planar(*p) + delta);
}
