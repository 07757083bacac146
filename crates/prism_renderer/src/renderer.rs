//! Frame driver: supersampling per pixel, parallel fan-out over
//! buckets, write-back into the canvas.

use crate::bucket::{generate_buckets, render_bucket, DEFAULT_BUCKET_SIZE};
use crate::{trace, Camera, Canvas, Color, Scene};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Supersampling grid factor N: each pixel averages an NxN jitter
    /// grid of sub-samples. 0 traces a single centered ray.
    pub antialiasing: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { antialiasing: 2 }
    }
}

/// Render a single pixel, averaging the supersampling grid.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let n = config.antialiasing;
    if n == 0 {
        let ray = camera.pixel_ray(x, y, 0.0, 0.0);
        return trace(&ray, scene);
    }

    let mut pixel_color = Color::ZERO;

    // Deterministic grid jitter within the pixel, offsets in [-1, 1].
    for i in 0..n {
        for j in 0..n {
            let offset_x = ((i as f32 + 0.5) / n as f32 - 0.5) * 2.0;
            let offset_y = ((j as f32 + 0.5) / n as f32 - 0.5) * 2.0;

            let ray = camera.pixel_ray(x, y, offset_x, offset_y);
            pixel_color += trace(&ray, scene);
        }
    }

    pixel_color / (n * n) as f32
}

/// Render the entire scene into a canvas.
///
/// The image is split into buckets rendered in parallel; each bucket
/// writes its pixels back in one pass, so no two workers touch the
/// same pixel.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Canvas {
    let width = camera.screen_width;
    let height = camera.screen_height;
    let mut canvas = Canvas::new(width, height);

    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

    info!(
        "Rendering {}x{} in {} buckets on {} threads",
        width,
        height,
        buckets.len(),
        rayon::current_num_threads()
    );

    let progress = ProgressBar::new(buckets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .expect("static progress template"),
    );

    let start = std::time::Instant::now();

    let results: Vec<_> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, scene, config);
            progress.inc(1);
            (bucket, pixels)
        })
        .collect();

    progress.finish();

    for (bucket, pixels) in results {
        let mut index = 0;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                canvas.set_pixel(bucket.x + local_x, bucket.y + local_y, pixels[index]);
                index += 1;
            }
        }
    }

    info!("Rendered in {:.2?}", start.elapsed());

    canvas
}
