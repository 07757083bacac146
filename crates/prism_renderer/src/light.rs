//! Light sources.
//!
//! A closed set of three variants, so an enum rather than a trait
//! object. Point lights sit at a finite position (shadow rays are
//! bounded at t = 1 toward them); directional lights act from
//! infinitely far away along a fixed direction.

use prism_math::Vec3;

/// A light source in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform base illumination, never shadowed.
    Ambient { intensity: f32 },
    /// Light radiating from a point in world space.
    Point { position: Vec3, intensity: f32 },
    /// Parallel light arriving along a fixed direction.
    Directional { direction: Vec3, intensity: f32 },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}
