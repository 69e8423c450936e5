//! LED driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the cube to be hardware-agnostic.

use smart_leds::{RGB8, SmartLedsWrite, brightness};

use crate::color::rgb_from_u32;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The cube is generic over this trait.
pub trait LedDriver {
    /// Error reported by the hardware
    type Error;

    /// One-time hardware setup
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Set the global brightness scaling applied by the hardware layer
    fn set_brightness(&mut self, level: u8);

    /// Transmit packed pixel words to the strip, in strip order
    fn write(&mut self, pixels: &[u32]) -> Result<(), Self::Error>;
}

/// Driver backed by any [`SmartLedsWrite`] implementation
///
/// Packed words are handed to the writer slot by slot (first slot as red,
/// second as green, third as blue). The writer takes care of the wire order
/// of the LED chip.
pub struct SmartLedsDriver<W> {
    writer: W,
    brightness: u8,
}

impl<W> SmartLedsDriver<W> {
    /// Create a new driver wrapping a smart-leds writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: 255,
        }
    }

    /// Current hardware brightness
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Borrow the wrapped writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LedDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn write(&mut self, pixels: &[u32]) -> Result<(), Self::Error> {
        let colors = pixels.iter().map(|&word| rgb_from_u32(word));
        self.writer.write(brightness(colors, self.brightness))
    }
}
