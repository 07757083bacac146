//! Recursive Whitted-style shading.

use crate::{
    hittable::{HitRecord, Hittable},
    optics::{reflect, refract},
    Color, Ray, Scene,
};
use prism_math::{Interval, Vec3};

/// Epsilon lower bound for primary and secondary hits.
const HIT_EPSILON: f32 = 1e-4;

/// Hard cap on total recursion, independent of the per-ray bounce
/// budget. Transmitted rays carry the budget forward unchanged, so
/// mutually transparent or tangent geometry could otherwise recurse
/// without bound.
const MAX_TRACE_DEPTH: u32 = 32;

/// Sky gradient endpoints.
const SKY_TOP: Color = Vec3::ONE;
const SKY_BOTTOM: Color = Vec3::new(0.5, 0.7, 1.0);

/// Compute the color seen by a ray, in linear [0, 1] channels.
///
/// Direct lighting is evaluated at the nearest hit, then transmitted
/// and reflected contributions are traced recursively and blended by
/// the material's transparency and reflectiveness weights.
pub fn trace(ray: &Ray, scene: &Scene) -> Color {
    trace_at_depth(ray, scene, 0)
}

fn trace_at_depth(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    let mut rec = HitRecord::default();
    if !scene.hit(ray, Interval::new(HIT_EPSILON, f32::INFINITY), &mut rec) {
        return sky_gradient(ray);
    }

    let mut local_color = rec.material.linear_color() * scene.light_intensity(ray, &rec);

    if depth >= MAX_TRACE_DEPTH {
        return local_color;
    }

    // Transmission: continue from the hit point, bending the direction
    // when the ray crosses into a medium with a different index.
    let transparency = rec.material.transparency;
    if transparency > 0.0 {
        let transmitted = transmitted_ray(ray, &rec);
        let transmitted_color = trace_at_depth(&transmitted, scene, depth + 1);

        local_color =
            local_color * (1.0 - transparency) + transmitted_color * transparency;
    }

    // Mirror reflection, limited by the ray's bounce budget.
    let reflectiveness = rec.material.reflectiveness;
    if ray.bounces() > 0 && reflectiveness > 0.0 {
        let reflected_direction = reflect(-ray.direction(), rec.normal);
        let reflected = Ray::new(rec.p, reflected_direction, ray.bounces() - 1);
        let reflected_color = trace_at_depth(&reflected, scene, depth + 1);

        return local_color * (1.0 - reflectiveness) + reflected_color * reflectiveness;
    }

    local_color
}

/// Build the ray continuing past a transparent surface.
///
/// Refraction applies only when the ray's medium and the material
/// disagree; the refracted ray then travels in the material's medium.
/// Straight pass-through (matched indices or total internal
/// reflection) keeps the direction and drops back to vacuum, so a ray
/// leaving a glass sphere refracts normally at the next surface.
/// Transmission does not consume the bounce budget.
fn transmitted_ray(ray: &Ray, rec: &HitRecord) -> Ray {
    if ray.medium_ior() != rec.material.ior {
        let ratio = ray.medium_ior() / rec.material.ior;
        let incident = ray.direction().normalize();

        if let Some(refracted) = refract(incident, rec.normal, ratio) {
            return Ray::new_in_medium(rec.p, refracted, ray.bounces(), rec.material.ior);
        }
    }

    Ray::new(rec.p, ray.direction(), ray.bounces())
}

/// Vertical sky gradient, white at the zenith fading to blue below.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    SKY_TOP * t + SKY_BOTTOM * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::{Light, Sphere};
    use std::sync::Arc;

    fn lit_scene_with(material: Arc<Material>, center: Vec3, radius: f32) -> Scene {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(center, radius, material)));
        scene.add_light(Light::Ambient { intensity: 1.0 });
        scene
    }

    #[test]
    fn test_miss_returns_sky_endpoints() {
        let scene = Scene::new();

        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 0);
        assert!((trace(&up, &scene) - Vec3::ONE).length() < 1e-6);

        let down = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), 0);
        assert!((trace(&down, &scene) - Vec3::new(0.5, 0.7, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_opaque_hit_is_local_color_only() {
        let red = Arc::new(Material::new(
            Color::new(255.0, 0.0, 0.0),
            None,
            0.0,
            0.0,
            1.0,
        ));
        let scene = lit_scene_with(red, Vec3::new(0.0, 0.0, 5.0), 1.0);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 3);
        let color = trace(&ray, &scene);

        // Fully ambient-lit: base color / 255 times intensity 1.
        assert!((color - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_reflection_blend_boundaries() {
        // A head-on hit reflects the ray straight back along -Z, where
        // it escapes to the sky midpoint. The blend must be exactly
        // local at rho = 0 and exactly that sky color at rho = 1.
        let local = Vec3::new(1.0, 0.0, 0.0);
        let reflected_sky = Vec3::ONE * 0.5 + Vec3::new(0.5, 0.7, 1.0) * 0.5;

        for (reflectiveness, expected) in [(0.0, local), (1.0, reflected_sky)] {
            let material = Arc::new(Material::new(
                Color::new(255.0, 0.0, 0.0),
                None,
                reflectiveness,
                0.0,
                1.0,
            ));
            let scene = lit_scene_with(material, Vec3::new(0.0, 0.0, 5.0), 1.0);

            let ray = Ray::new(Vec3::ZERO, Vec3::Z, 2);
            let color = trace(&ray, &scene);

            assert!(
                (color - expected).length() < 1e-5,
                "rho={}: got {:?}, want {:?}",
                reflectiveness,
                color,
                expected
            );
        }
    }

    #[test]
    fn test_reflection_stops_when_budget_exhausted() {
        let mirror = Arc::new(Material::new(
            Color::new(255.0, 0.0, 0.0),
            None,
            1.0,
            0.0,
            1.0,
        ));
        let scene = lit_scene_with(mirror, Vec3::new(0.0, 0.0, 5.0), 1.0);

        // Zero budget: the mirror shades as a plain local surface.
        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 0);
        let color = trace(&ray, &scene);
        assert!((color - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_full_transparency_passes_through() {
        // A fully transmissive sphere with matching index: the ray
        // continues straight and picks up the sky behind it.
        let glass = Arc::new(Material::new(
            Color::new(255.0, 255.0, 255.0),
            None,
            0.0,
            1.0,
            1.0,
        ));
        let scene = lit_scene_with(glass, Vec3::new(0.0, 0.0, 5.0), 1.0);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 2);
        let color = trace(&ray, &scene);

        // Horizontal ray: sky midpoint between white and blue.
        let expected = Vec3::ONE * 0.5 + Vec3::new(0.5, 0.7, 1.0) * 0.5;
        assert!((color - expected).length() < 1e-4);
    }

    #[test]
    fn test_pass_through_returns_ray_to_vacuum() {
        // A ray crossing a glass sphere head-on enters at normal
        // incidence (no bend) and leaves by straight pass-through,
        // which must reset its medium to vacuum. A later transparent
        // sphere with ior 1.0, struck off-axis, then matches the
        // medium and passes the ray straight; a ray still claiming
        // ior 1.5 would spuriously refract there and land on a
        // different part of the sky.
        let glass = Arc::new(Material::new(
            Color::new(255.0, 255.0, 255.0),
            None,
            0.0,
            1.0,
            1.5,
        ));
        let veil = Arc::new(Material::new(
            Color::new(255.0, 255.0, 255.0),
            None,
            0.0,
            1.0,
            1.0,
        ));
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0, glass)));
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.5, 8.0), 1.0, veil)));
        scene.add_light(Light::Ambient { intensity: 1.0 });

        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 2);
        let color = trace(&ray, &scene);

        // Straight through everything: the horizontal sky midpoint.
        let expected = Vec3::ONE * 0.5 + Vec3::new(0.5, 0.7, 1.0) * 0.5;
        assert!(
            (color - expected).length() < 1e-4,
            "got {:?}, want {:?}",
            color,
            expected
        );
    }

    #[test]
    fn test_nested_transparency_completes() {
        // Two nested fully transparent spheres spawn a chain of
        // pass-through rays (entry/exit of each shell); the trace must
        // walk the whole chain and land on the sky.
        let glass = Arc::new(Material::new(
            Color::new(255.0, 255.0, 255.0),
            None,
            0.0,
            1.0,
            1.0,
        ));
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, glass.clone())));
        scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, glass)));
        scene.add_light(Light::Ambient { intensity: 1.0 });

        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 2);
        // Completing at all is the assertion here.
        let color = trace(&ray, &scene);
        assert!(color.x.is_finite());
    }

    #[test]
    fn test_sky_gradient_midpoint() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::X, 0);
        let color = trace(&ray, &scene);

        let expected = Vec3::ONE * 0.5 + Vec3::new(0.5, 0.7, 1.0) * 0.5;
        assert!((color - expected).length() < 1e-6);
    }
}
