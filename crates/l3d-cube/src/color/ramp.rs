//! Cyclic hue ramp
//!
//! Maps a scalar onto six stops that fade from blue through green and red
//! to magenta and back to blue. Every stop is built from `0` or the cube's
//! maximum brightness, so ramp colors never exceed the brightness cap.

use super::{Color, lerp_color};

/// Number of stops on the ramp
pub const RAMP_STOPS: usize = 6;

/// Width of the rescaled value range
pub const RAMP_RANGE: f32 = 1024.0;

/// Six-stop cyclic color ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    stops: [Color; RAMP_STOPS],
}

impl ColorRamp {
    /// Create the ramp for a given brightness cap
    pub const fn new(max_brightness: u8) -> Self {
        let m = max_brightness;
        Self {
            stops: [
                Color { r: 0, g: 0, b: m },
                Color { r: 0, g: m, b: m },
                Color { r: 0, g: m, b: 0 },
                Color { r: m, g: m, b: 0 },
                Color { r: m, g: 0, b: 0 },
                Color { r: m, g: 0, b: m },
            ],
        }
    }

    /// Ramp stops in order
    pub const fn stops(&self) -> &[Color; RAMP_STOPS] {
        &self.stops
    }

    /// Map a value in `min..=max` to a color
    ///
    /// The value is rescaled to `0..=1024` and split into six equal
    /// segments. A value on a segment boundary belongs to the lower segment.
    /// The last segment interpolates back towards the first stop.
    /// Values outside of the range are clamped. An empty range, or a value
    /// that does not rescale to a number (NaN input, infinite bounds), maps
    /// to the first stop.
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn color_map(&self, value: f32, min: f32, max: f32) -> Color {
        if max == min {
            return self.stops[0];
        }
        let scaled = RAMP_RANGE * (value - min) / (max - min);
        let scaled = if scaled.is_nan() {
            0.0
        } else {
            scaled.clamp(0.0, RAMP_RANGE)
        };

        let index = (0..RAMP_STOPS - 1)
            .find(|&i| scaled <= boundary(i + 1))
            .unwrap_or(RAMP_STOPS - 1);

        let from = self.stops[index];
        let to = self.stops[(index + 1) % RAMP_STOPS];
        let lower = boundary(index) as i32;
        let upper = boundary(index + 1) as i32;

        lerp_color(from, to, scaled as i32, lower, upper)
    }
}

/// Start of the `k`-th ramp segment in rescaled units
#[allow(clippy::cast_precision_loss)]
fn boundary(k: usize) -> f32 {
    RAMP_RANGE * k as f32 / RAMP_STOPS as f32
}
