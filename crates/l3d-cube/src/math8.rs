/// Linear interpolation of one 8-bit channel
///
/// Integer math with truncating division: `a + (b - a) * (val - min) / (max - min)`.
/// Results outside of the channel range saturate, and a degenerate range
/// (`max == min`) yields `a`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp8(a: u8, b: u8, val: i32, min: i32, max: i32) -> u8 {
    if max == min {
        return a;
    }
    let a = i64::from(a);
    let b = i64::from(b);
    let value = a + (b - a) * (i64::from(val) - i64::from(min)) / (i64::from(max) - i64::from(min));

    value.clamp(0, 255) as u8
}

/// Scale an 8-bit value so that 255 maps exactly to `max`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn cap8(value: u8, max: u8) -> u8 {
    ((u16::from(value) * u16::from(max)) / 255) as u8
}
