//! Reflection and refraction of directions at a surface.

use prism_math::Vec3;

/// Reflect a vector about a normal.
///
/// `v` points away from the surface (toward the light or the viewer);
/// the result is its mirror image on the other side of `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    2.0 * n.dot(v) * n - v
}

/// Refract a unit incident direction through a surface with normal `n`.
///
/// `ratio` is n_incident / n_transmitted (Snell's law). Returns `None`
/// on total internal reflection, where no transmitted direction exists.
#[inline]
pub fn refract(incident: Vec3, n: Vec3, ratio: f32) -> Option<Vec3> {
    let cos_i = -n.dot(incident);
    let sin2_t = ratio * ratio * (1.0 - cos_i * cos_i);
    if sin2_t > 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    Some(ratio * incident + (ratio * cos_i - cos_t) * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_mirrors_about_normal() {
        // 45 degree incidence in the XZ plane.
        let v = Vec3::new(1.0, 0.0, 1.0).normalize();
        let reflected = reflect(v, Vec3::Z);

        assert!((reflected - Vec3::new(-1.0, 0.0, 1.0).normalize()).length() < 1e-6);
        // Reflection preserves length.
        assert!((reflected.length() - v.length()).abs() < 1e-6);
    }

    #[test]
    fn test_refract_straight_through_matched_media() {
        // Equal indices: the direction is unchanged.
        let incident = Vec3::new(0.0, -1.0, 0.0);
        let refracted = refract(incident, Vec3::Y, 1.0).unwrap();
        assert!((refracted - incident).length() < 1e-6);
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_dense_medium() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let refracted = refract(incident, Vec3::Y, 1.0 / 1.5).unwrap();

        // Sideways component shrinks when entering the denser medium.
        assert!(refracted.x.abs() < incident.x.abs());
        assert!(refracted.y < 0.0);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Grazing exit from glass into vacuum: sin^2(theta_t) > 1.
        let incident = Vec3::new(0.9, -0.1, 0.0).normalize();
        assert!(refract(incident, Vec3::Y, 1.5).is_none());
    }
}
