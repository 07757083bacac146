//! Surface material description.

use prism_math::Vec3;

/// Color type alias (RGB, either 0-255 channels for material base
/// colors or 0-1 for linear shading results).
pub type Color = Vec3;

/// Immutable description of a surface, shared between spheres through
/// an `Arc`.
///
/// Transparency is transmissive weight: 0.0 is fully opaque, 1.0 lets
/// all light pass through.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base surface color, 0-255 per channel
    pub color: Color,
    /// Phong specular exponent; `None` disables the highlight
    pub specular: Option<f32>,
    /// Mirror reflection weight in [0, 1]
    pub reflectiveness: f32,
    /// Transmission weight in [0, 1]
    pub transparency: f32,
    /// Refractive index, >= 1
    pub ior: f32,
}

impl Material {
    /// Create a new material, clamping weights into their valid ranges.
    pub fn new(
        color: Color,
        specular: Option<f32>,
        reflectiveness: f32,
        transparency: f32,
        ior: f32,
    ) -> Self {
        Self {
            color,
            specular: specular.map(|s| s.max(0.0)),
            reflectiveness: reflectiveness.clamp(0.0, 1.0),
            transparency: transparency.clamp(0.0, 1.0),
            ior: ior.max(1.0),
        }
    }

    /// A matte mid-gray surface, used where a placeholder material is
    /// needed (e.g. `HitRecord::default`).
    pub const DEFAULT: Material = Material {
        color: Vec3::new(128.0, 128.0, 128.0),
        specular: None,
        reflectiveness: 0.0,
        transparency: 0.0,
        ior: 1.0,
    };

    /// Base color scaled into linear [0, 1] channels.
    #[inline]
    pub fn linear_color(&self) -> Color {
        self.color / 255.0
    }
}
