use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use prism_renderer::{render, Camera, Canvas, RenderConfig};

mod scenes;

/// Named render routines selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
enum Mode {
    /// Ray trace the demo sphere scene
    Trace,
    /// Visible-spectrum color bands
    Spectrum,
    /// Horizontal grayscale ramp
    Grayscale,
}

/// Log levels accepted on the command line.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "prism")]
#[command(about = "A recursive Whitted-style ray tracer")]
struct Args {
    /// Render routine to run
    #[arg(long, value_enum, default_value = "trace")]
    mode: Mode,

    /// Image width in pixels
    #[arg(long, default_value = "400")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "400")]
    height: u32,

    /// Supersampling grid factor (0 disables antialiasing)
    #[arg(long, short = 'a', default_value = "2")]
    antialiasing: u32,

    /// Reflection bounce budget per ray
    #[arg(long, default_value = "3")]
    bounces: u32,

    /// Output file; .png is encoded, anything else is written as PPM
    #[arg(long, short = 'o', default_value = "image.ppm")]
    output: String,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let canvas = match args.mode {
        Mode::Trace => trace_demo(&args),
        Mode::Spectrum => spectrum_demo(args.width, args.height),
        Mode::Grayscale => grayscale_demo(args.width, args.height),
    };

    save(&canvas, &args.output)?;
    info!("Wrote {}", args.output);

    Ok(())
}

/// Ray trace the demo scene.
fn trace_demo(args: &Args) -> Canvas {
    let scene = scenes::demo_scene();

    let mut camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_position(prism_math::Vec3::new(0.0, 2.0, 1.0))
        .with_orientation(0.0, 22.5_f32.to_radians(), 0.0)
        .with_bounces(args.bounces);
    camera.initialize();

    let config = RenderConfig {
        antialiasing: args.antialiasing,
    };

    render(&camera, &scene, &config)
}

/// Fill each column with the color of one visible wavelength.
fn spectrum_demo(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);

    for x in 0..width {
        let normalized = x as f32 / (width - 1).max(1) as f32;
        let color = prism_renderer::spectral_to_rgb(normalized);

        for y in 0..height {
            canvas.set_pixel(x, y, color);
        }
    }

    canvas
}

/// Horizontal grayscale ramp, dark to light.
fn grayscale_demo(width: u32, height: u32) -> Canvas {
    let mut canvas = Canvas::new(width, height);

    for x in 0..width {
        let value = x as f32 / (width - 1).max(1) as f32;
        let color = prism_math::Vec3::splat(value);

        for y in 0..height {
            canvas.set_pixel(x, y, color);
        }
    }

    canvas
}

/// Write the canvas out, choosing the encoder from the file extension.
fn save(canvas: &Canvas, output: &str) -> Result<()> {
    let path = Path::new(output);

    if path.extension().is_some_and(|ext| ext == "png") {
        canvas
            .save_png(path)
            .with_context(|| format!("failed to encode {}", output))?;
    } else {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", output))?;
        canvas
            .write_ppm(BufWriter::new(file))
            .with_context(|| format!("failed to write {}", output))?;
    }

    Ok(())
}
