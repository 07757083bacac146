//! Prism renderer - recursive Whitted-style ray tracing on the CPU.
//!
//! Renders a static scene of spheres lit by ambient, point and
//! directional lights. Shading combines Phong diffuse/specular terms
//! with hard shadows, recursive mirror reflection and refraction
//! (Snell's law with total-internal-reflection handling).

mod ray;
mod material;
mod light;
mod hittable;
mod sphere;
mod scene;
mod optics;
mod integrator;
mod camera;
mod bucket;
mod renderer;
mod canvas;
mod spectrum;

pub use ray::Ray;
pub use material::{Color, Material};
pub use light::Light;
pub use hittable::{HitRecord, Hittable};
pub use sphere::Sphere;
pub use scene::Scene;
pub use optics::{reflect, refract};
pub use integrator::trace;
pub use camera::Camera;
pub use bucket::{generate_buckets, render_bucket, Bucket, DEFAULT_BUCKET_SIZE};
pub use renderer::{render, render_pixel, RenderConfig};
pub use canvas::{Canvas, CanvasError};
pub use spectrum::spectral_to_rgb;

/// Re-export common math types from prism_math
pub use prism_math::{Interval, Vec3};
