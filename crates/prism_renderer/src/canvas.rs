//! Raster canvas and image output.
//!
//! Pixels are stored as linear [0, 1] colors in row-major order with
//! the origin at the top-left corner, x growing right and y growing
//! down. Output formats: plain-text PPM (P3) and PNG via the image
//! crate.

use crate::Color;
use image::{ImageBuffer, Rgb};
use prism_math::Vec3;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when writing a canvas out.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// A fixed-size raster of linear colors.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the pixel at (x, y). Out-of-bounds writes are silently
    /// ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Get the pixel at (x, y), or `None` when out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Write the canvas as plain-text PPM (P3): a header with width,
    /// height and max channel value, then one "R G B" triplet per
    /// pixel in row-major order.
    pub fn write_ppm<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "P3")?;
        writeln!(w, "{} {}", self.width, self.height)?;
        writeln!(w, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb8(*color);
            writeln!(w, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Encode the canvas as PNG at the given path.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasError> {
        let mut buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::new(self.width, self.height);

        for (x, y, pixel) in buffer.enumerate_pixels_mut() {
            let color = self.pixels[(y * self.width + x) as usize];
            *pixel = Rgb(color_to_rgb8(color));
        }

        buffer.save(path)?;
        Ok(())
    }
}

/// Convert a linear color to 8-bit RGB, clamped to 0-255.
#[inline]
fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.999 * color.x).clamp(0.0, 255.0) as u8;
    let g = (255.999 * color.y).clamp(0.0, 255.0) as u8;
    let b = (255.999 * color.z).clamp(0.0, 255.0) as u8;
    [r, g, b]
}
