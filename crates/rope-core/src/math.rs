use glam::{Vec2, Vec3};

/// Direction of the constant acceleration applied by the integrator.
pub const GRAVITY_DIRECTION: Vec2 = Vec2::new(0.0, -1.0);

/// Simulated sub-vector of a position.
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Replace the planar part of `v`, keeping its z untouched.
#[inline]
pub fn with_planar(v: Vec3, p: Vec2) -> Vec3 {
    Vec3::new(p.x, p.y, v.z)
}

#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar(a).distance(planar(b))
}
