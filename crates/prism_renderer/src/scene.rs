//! Scene aggregate: geometry plus lights.

use crate::{
    hittable::{HitRecord, Hittable},
    optics::reflect,
    Light, Ray,
};
use prism_math::Interval;

/// Epsilon lower bound on shadow rays, keeping the occlusion test from
/// re-hitting the surface it starts on.
const SHADOW_BIAS: f32 = 1e-3;

/// All geometry and lights of a render.
///
/// Mutable only while it is being populated; rendering takes it by
/// shared reference and may fan out across threads.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Accumulated scalar light intensity at a hit point.
    ///
    /// Ambient lights always contribute. Point and directional lights
    /// contribute a Phong diffuse term, and a specular term when the
    /// material defines an exponent, unless an occluder sits between
    /// the hit point and the light (hard shadows).
    pub fn light_intensity(&self, ray: &Ray, rec: &HitRecord) -> f32 {
        let mut total = 0.0;

        for light in &self.lights {
            let (direction, t_max, intensity) = match *light {
                Light::Ambient { intensity } => {
                    total += intensity;
                    continue;
                }
                // The light sits at t = 1 along the unnormalized
                // direction, which bounds the shadow ray.
                Light::Point {
                    position,
                    intensity,
                } => (position - rec.p, 1.0, intensity),
                Light::Directional {
                    direction,
                    intensity,
                } => (direction, f32::INFINITY, intensity),
            };

            // Shadow check
            let shadow_ray = Ray::new(rec.p, direction, 0);
            let mut shadow_rec = HitRecord::default();
            if self.hit(&shadow_ray, Interval::new(SHADOW_BIAS, t_max), &mut shadow_rec) {
                continue;
            }

            // Diffuse
            let diffusion =
                rec.normal.dot(direction) / (rec.normal.length() * direction.length());
            if diffusion > 0.0 {
                total += intensity * diffusion;
            }

            // Specular
            if let Some(exponent) = rec.material.specular {
                let reflection = reflect(direction, rec.normal);
                let view = -ray.direction();
                let alignment =
                    reflection.dot(view) / (reflection.length() * view.length());

                if alignment > 0.0 {
                    total += intensity * alignment.powf(exponent);
                }
            }
        }

        total
    }
}

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if object.hit(ray, interval, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
