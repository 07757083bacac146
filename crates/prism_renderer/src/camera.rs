//! Camera for ray generation.
//!
//! Screen pixels are centered, Y-flipped (raster rows grow downward,
//! view space Y grows upward), projected onto a viewport one focal
//! length in front of the camera, then rotated by the camera's
//! yaw/pitch/roll orientation.

use crate::Ray;
use prism_math::{EulerRot, Mat3, Vec3};

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub screen_width: u32,
    pub screen_height: u32,

    // Positioning: yaw about Y, pitch about X, roll about Z (radians)
    position: Vec3,
    yaw: f32,
    pitch: f32,
    roll: f32,

    // Projection
    viewport_width: f32,
    viewport_height: f32,
    focal_length: f32,

    // Bounce budget handed to every primary ray
    bounces: u32,

    // Cached computed values (set by initialize())
    rotation: Mat3,
}

impl Camera {
    /// Create a new camera with default settings: a 400x400 image
    /// through a unit-width viewport at focal length 1.
    pub fn new() -> Self {
        Self {
            screen_width: 400,
            screen_height: 400,
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            viewport_width: 1.0,
            viewport_height: 1.0,
            focal_length: 1.0,
            bounces: 3,
            rotation: Mat3::IDENTITY,
        }
    }

    /// Set image resolution. The viewport height follows the aspect
    /// ratio so pixels stay square.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self.viewport_height = self.viewport_width * height as f32 / width as f32;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set camera orientation in radians.
    pub fn with_orientation(mut self, yaw: f32, pitch: f32, roll: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self.roll = roll;
        self
    }

    /// Set viewport width and focal length.
    pub fn with_viewport(mut self, viewport_width: f32, focal_length: f32) -> Self {
        let aspect = self.viewport_height / self.viewport_width;
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_width * aspect;
        self.focal_length = focal_length;
        self
    }

    /// Set the reflection bounce budget for generated rays.
    pub fn with_bounces(mut self, bounces: u32) -> Self {
        self.bounces = bounces;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    ///
    /// Caches the combined intrinsic rotation: yaw about the vertical
    /// axis, then pitch about the horizontal axis, then roll about the
    /// viewing axis.
    pub fn initialize(&mut self) {
        self.rotation = Mat3::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll);
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Generate the world-space ray through pixel (x, y).
    ///
    /// `offset_x` and `offset_y` are sub-pixel jitter in [-1, 1];
    /// (0, 0) samples the pixel center.
    pub fn pixel_ray(&self, x: u32, y: u32, offset_x: f32, offset_y: f32) -> Ray {
        // Center the screen at (0, 0) and flip the Y axis.
        let cx = x as f32 - self.screen_width as f32 / 2.0;
        let cy = self.screen_height as f32 / 2.0 - y as f32;

        let pixel_size_x = self.viewport_width / self.screen_width as f32;
        let pixel_size_y = self.viewport_height / self.screen_height as f32;

        // Viewport coordinates on the projection plane.
        let v = Vec3::new(
            (cx + offset_x) * pixel_size_x,
            (cy + offset_y) * pixel_size_y,
            self.focal_length,
        );

        let direction = self.rotation * v.normalize();

        Ray::new(self.position, direction, self.bounces)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
