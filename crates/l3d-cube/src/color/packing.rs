//! Packed pixel words
//!
//! The pixel buffer holds one `u32` per strip position in `0x00AABBCC`
//! layout, where the slot order is decided by [`ChannelOrder`].

use super::Color;

/// Order of the channels inside a packed pixel word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Red, green, blue
    Rgb,
    /// Green, red, blue (cube wiring)
    #[default]
    Grb,
}

impl ChannelOrder {
    /// Pack a color into a pixel word
    pub const fn pack(self, color: Color) -> u32 {
        let (first, second, third) = match self {
            Self::Rgb => (color.r, color.g, color.b),
            Self::Grb => (color.g, color.r, color.b),
        };
        ((first as u32) << 16) | ((second as u32) << 8) | third as u32
    }

    /// Unpack a pixel word back into a color
    #[allow(clippy::cast_possible_truncation)]
    pub const fn unpack(self, word: u32) -> Color {
        let first = ((word >> 16) & 0xFF) as u8;
        let second = ((word >> 8) & 0xFF) as u8;
        let third = (word & 0xFF) as u8;
        match self {
            Self::Rgb => Color { r: first, g: second, b: third },
            Self::Grb => Color { r: second, g: first, b: third },
        }
    }
}
