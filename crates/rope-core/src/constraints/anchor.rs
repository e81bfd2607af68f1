use glam::Vec3;

use crate::chain::ChainState;

/// Pin the first and last active node to the anchors.
///
/// Endpoints are kinematic: whatever the integrator did to them is
/// overwritten. Chains with fewer than two active nodes are left alone.
pub fn pin_endpoints(state: &mut ChainState, start: Vec3, end: Vec3) {
    if !state.is_simulatable() {
        return;
    }
    let last = state.active_count() - 1;
    state.pos_now[0] = start;
    state.pos_now[last] = end;
}
