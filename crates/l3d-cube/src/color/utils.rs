use crate::{
    color::Color,
    math8::{cap8, lerp8},
};

/// Linear interpolation between colors
///
/// When `val` equals `min` the output is `a`, when it equals `max` the
/// output is `b`. Each channel uses truncating integer division, so
/// fractional steps are dropped rather than rounded.
///
/// # Arguments
/// * `a`, `b` - Colors to interpolate between
/// * `val` - Position between `min` and `max`
/// * `min`, `max` - Range of `val`
#[inline]
pub fn lerp_color(a: Color, b: Color, val: i32, min: i32, max: i32) -> Color {
    Color {
        r: lerp8(a.r, b.r, val, min, max),
        g: lerp8(a.g, b.g, val, min, max),
        b: lerp8(a.b, b.b, val, min, max),
    }
}

/// Scale a color so that no channel exceeds `max`
#[inline]
pub fn limit_color(color: Color, max: u8) -> Color {
    Color {
        r: cap8(color.r, max),
        g: cap8(color.g, max),
        b: cap8(color.b, max),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Color {
    Color {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
