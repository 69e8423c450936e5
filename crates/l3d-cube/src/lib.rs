#![no_std]

//! Voxel drawing library for LED cubes
//!
//! An N×N×N cube of addressable LEDs wired as a single chained strip.
//!
//! Architecture layers:
//! - `color` - Color type, named palette, channel packing and the hue ramp
//! - `point` / `layout` - Coordinates and the voxel-to-strip addressing
//! - `raster` - Rasterization algorithms (line, sphere, circle, shell)
//! - `driver` - Hardware abstraction (`[LedDriver]` trait + adapters)
//! - `cube` - Pixel buffer owner and drawing API
//!
//! The cube is generic over `LedDriver`, allowing different hardware backends.

pub mod color;
pub mod config;
pub mod cube;
pub mod driver;
pub mod error;
pub mod layout;
pub mod math8;
pub mod point;
pub mod raster;

// Color exports
pub use color::{ChannelOrder, Color, ColorRamp, lerp_color};

// Config exports
pub use config::{CubeConfig, PIXEL_COUNT};

// Cube exports
pub use cube::{Cube, DEFAULT_SHELL_THICKNESS};

// Driver exports
pub use driver::{LedDriver, SmartLedsDriver};

pub use error::CubeError;
pub use layout::Layout;
pub use point::Point;
