//! Ray type for Whitted-style tracing.
//!
//! A ray carries, besides origin and direction, the number of mirror
//! bounces it may still trigger and the refractive index of the medium
//! it currently travels through.

use prism_math::Vec3;

/// Refractive index of vacuum, the default medium for new rays.
pub const VACUUM_IOR: f32 = 1.0;

/// A ray with origin, direction, bounce budget and current medium.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vec3,
    /// Direction vector (not necessarily normalized)
    direction: Vec3,
    /// Remaining reflection bounces
    bounces: u32,
    /// Refractive index of the medium the ray travels through
    medium_ior: f32,
}

impl Ray {
    /// Create a new ray travelling through vacuum.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, bounces: u32) -> Self {
        Self {
            origin,
            direction,
            bounces,
            medium_ior: VACUUM_IOR,
        }
    }

    /// Create a ray continuing inside a medium with the given
    /// refractive index (used for transmitted rays).
    #[inline]
    pub fn new_in_medium(origin: Vec3, direction: Vec3, bounces: u32, medium_ior: f32) -> Self {
        Self {
            origin,
            direction,
            bounces,
            medium_ior,
        }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Remaining reflection bounces.
    #[inline]
    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    /// Refractive index of the current medium.
    #[inline]
    pub fn medium_ior(&self) -> f32 {
        self.medium_ior
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0);

        assert_eq!(ray.at(0.0), ray.origin());
        assert_eq!(ray.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_ray_at_is_monotonic_along_direction() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 1.0), 3);

        let mut previous = f32::NEG_INFINITY;
        for i in 0..10 {
            let t = i as f32 * 0.5;
            let projection = (ray.at(t) - ray.origin()).dot(ray.direction());
            assert!(projection > previous || t == 0.0);
            previous = projection;
        }
    }

    #[test]
    fn test_ray_defaults_to_vacuum() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 5);
        assert_eq!(ray.medium_ior(), VACUUM_IOR);
        assert_eq!(ray.bounces(), 5);

        let inside = Ray::new_in_medium(Vec3::ZERO, Vec3::Z, 5, 1.5);
        assert_eq!(inside.medium_ior(), 1.5);
    }
}
