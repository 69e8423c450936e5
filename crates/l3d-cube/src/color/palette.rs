//! Common named colors
//!
//! These are full-intensity values. Pass them through [`Cube::limit`] to
//! respect the brightness cap of a cube.
//!
//! [`Cube::limit`]: crate::Cube::limit

use super::Color;

pub const BLACK: Color = Color { r: 0x00, g: 0x00, b: 0x00 };
pub const GREY: Color = Color { r: 0x92, g: 0x95, b: 0x91 };
pub const YELLOW: Color = Color { r: 0xff, g: 0xff, b: 0x14 };
pub const MAGENTA: Color = Color { r: 0xc2, g: 0x00, b: 0x78 };
pub const ORANGE: Color = Color { r: 0xf9, g: 0x73, b: 0x06 };
pub const TEAL: Color = Color { r: 0x02, g: 0x93, b: 0x86 };
pub const RED: Color = Color { r: 0xe5, g: 0x00, b: 0x00 };
pub const BROWN: Color = Color { r: 0x65, g: 0x37, b: 0x00 };
pub const PINK: Color = Color { r: 0xff, g: 0x81, b: 0xc0 };
pub const BLUE: Color = Color { r: 0x03, g: 0x43, b: 0xdf };
pub const GREEN: Color = Color { r: 0x15, g: 0xb0, b: 0x1a };
pub const PURPLE: Color = Color { r: 0x7e, g: 0x1e, b: 0x9c };
pub const WHITE: Color = Color { r: 0xff, g: 0xff, b: 0xff };

/// All named colors, in declaration order
pub const ALL: [(&str, Color); 13] = [
    ("black", BLACK),
    ("grey", GREY),
    ("yellow", YELLOW),
    ("magenta", MAGENTA),
    ("orange", ORANGE),
    ("teal", TEAL),
    ("red", RED),
    ("brown", BROWN),
    ("pink", PINK),
    ("blue", BLUE),
    ("green", GREEN),
    ("purple", PURPLE),
    ("white", WHITE),
];

/// Look up a named color
pub fn by_name(name: &str) -> Option<Color> {
    ALL.iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}
