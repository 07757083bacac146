//! Wavelength to RGB conversion for the spectrum demo mode.
//!
//! Uses the single-Gaussian-sum approximation of the CIE 1931 color
//! matching functions from Wyman et al. (2013), followed by the
//! XYZ-to-linear-sRGB matrix and sRGB gamma encoding.

use crate::Color;
use prism_math::Vec3;

/// Map a normalized value in [0, 1] onto the visible range 380-740 nm.
fn normalized_to_wavelength(value: f32) -> f32 {
    380.0 + value * (740.0 - 380.0)
}

/// CIE 1931 XYZ approximation (Wyman et al., 2013).
fn wavelength_to_xyz(wavelength: f32) -> Vec3 {
    let gaussian = |center: f32, inv_width_lo: f32, inv_width_hi: f32| {
        let t = (wavelength - center)
            * if wavelength < center {
                inv_width_lo
            } else {
                inv_width_hi
            };
        (-0.5 * t * t).exp()
    };

    let x = 0.362 * gaussian(442.0, 0.0624, 0.0374) + 1.056 * gaussian(599.8, 0.0264, 0.0323)
        - 0.065 * gaussian(501.1, 0.0490, 0.0382);
    let y = 0.821 * gaussian(568.8, 0.0213, 0.0247) + 0.286 * gaussian(530.9, 0.0613, 0.0322);
    let z = 1.217 * gaussian(437.0, 0.0845, 0.0278) + 0.681 * gaussian(459.0, 0.0385, 0.0725);

    Vec3::new(x, y, z)
}

/// Convert XYZ to linear sRGB.
fn xyz_to_linear_rgb(xyz: Vec3) -> Vec3 {
    Vec3::new(
        3.2406255 * xyz.x - 1.537208 * xyz.y - 0.4986286 * xyz.z,
        -0.9689307 * xyz.x + 1.8757561 * xyz.y + 0.0415175 * xyz.z,
        0.0557101 * xyz.x - 0.2040211 * xyz.y + 1.0569959 * xyz.z,
    )
}

/// sRGB gamma encoding (linear to display).
fn gamma_encode(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert a normalized spectral position [0, 1] to a display color
/// with [0, 1] channels.
pub fn spectral_to_rgb(normalized: f32) -> Color {
    let xyz = wavelength_to_xyz(normalized_to_wavelength(normalized));
    let rgb = xyz_to_linear_rgb(xyz);

    Color::new(
        gamma_encode(rgb.x),
        gamma_encode(rgb.y),
        gamma_encode(rgb.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wavelength_range_endpoints() {
        assert_eq!(normalized_to_wavelength(0.0), 380.0);
        assert_eq!(normalized_to_wavelength(1.0), 740.0);
    }

    #[test]
    fn test_spectral_channels_stay_in_range() {
        for i in 0..=100 {
            let color = spectral_to_rgb(i as f32 / 100.0);
            for channel in [color.x, color.y, color.z] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_spectrum_hue_ordering() {
        // Short wavelengths are blue-dominant, long ones red-dominant.
        let violet = spectral_to_rgb(0.05);
        assert!(violet.z > violet.x && violet.z > violet.y);

        let red = spectral_to_rgb(0.75);
        assert!(red.x > red.y && red.x > red.z);

        // Mid-spectrum is green-dominant.
        let green = spectral_to_rgb(0.4);
        assert!(green.y > green.x && green.y > green.z);
    }
}
