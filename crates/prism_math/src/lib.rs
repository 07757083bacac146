// Re-export glam for convenience
pub use glam::*;

mod interval;
pub use interval::Interval;

/// Squared-length threshold below which a vector counts as zero.
///
/// A squared test avoids the precision loss of comparing a sqrt
/// against an epsilon.
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Returns true if `v` is effectively the zero vector.
pub fn is_near_zero(v: Vec3) -> bool {
    v.length_squared() < NEAR_ZERO_EPSILON
}
