//! Programmatic scene population for the demo render.

use prism_math::Vec3;
use prism_renderer::{Color, Light, Material, Scene, Sphere};
use std::sync::Arc;

/// The demo scene: three colored spheres on a yellow ground sphere,
/// a refractive glass sphere, a mirror sphere, and one light of each
/// kind.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    let red = Arc::new(Material::new(
        Color::new(255.0, 0.0, 0.0),
        Some(100.0),
        0.5,
        0.1,
        1.0,
    ));
    let blue = Arc::new(Material::new(
        Color::new(0.0, 0.0, 255.0),
        Some(500.0),
        0.5,
        0.1,
        1.0,
    ));
    let green = Arc::new(Material::new(
        Color::new(0.0, 255.0, 0.0),
        Some(10.0),
        0.5,
        0.1,
        1.0,
    ));
    let ground = Arc::new(Material::new(
        Color::new(255.0, 255.0, 0.0),
        Some(1000.0),
        0.0,
        0.1,
        1.0,
    ));
    let glass = Arc::new(Material::new(
        Color::new(255.0, 255.0, 255.0),
        Some(1000.0),
        0.9,
        0.1,
        1.5,
    ));
    let mirror = Arc::new(Material::new(
        Color::new(255.0, 255.0, 255.0),
        Some(1000.0),
        1.0,
        0.0,
        1.0,
    ));

    scene.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, 1.0), 1.0, red)));
    scene.add(Box::new(Sphere::new(Vec3::new(2.3, 1.0, 3.0), 1.0, blue)));
    scene.add(Box::new(Sphere::new(Vec3::new(-2.5, 1.0, 3.5), 1.0, green)));
    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, -5000.0, 0.0),
        5000.0,
        ground,
    )));
    scene.add(Box::new(Sphere::new(Vec3::new(0.0, 2.0, 9.0), 2.0, glass)));
    scene.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 3.5), 0.8, mirror)));

    scene.add_light(Light::Ambient { intensity: 0.2 });
    scene.add_light(Light::Point {
        position: Vec3::new(-4.0, 8.0, -1.0),
        intensity: 0.6,
    });
    scene.add_light(Light::Directional {
        direction: Vec3::new(40.0, 200.0, -15.0),
        intensity: 0.4,
    });

    scene
}
