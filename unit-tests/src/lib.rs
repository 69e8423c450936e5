//! Test doubles for the cube drivers.

use l3d_cube::{Color, LedDriver};
use smart_leds::{RGB8, SmartLedsWrite};

/// Driver failure reported by [`MockDriver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Driver that records every call
#[derive(Debug, Default)]
pub struct MockDriver {
    pub init_calls: usize,
    pub brightness: Option<u8>,
    pub frames: Vec<Vec<u32>>,
    pub fail_init: bool,
    pub fail_write: bool,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_write() -> Self {
        Self {
            fail_write: true,
            ..Self::default()
        }
    }

    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&[u32]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl LedDriver for MockDriver {
    type Error = MockError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.init_calls += 1;
        if self.fail_init {
            return Err(MockError);
        }
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = Some(level);
    }

    fn write(&mut self, pixels: &[u32]) -> Result<(), Self::Error> {
        if self.fail_write {
            return Err(MockError);
        }
        self.frames.push(pixels.to_vec());
        Ok(())
    }
}

/// smart-leds writer that keeps the last written colors
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub written: Vec<RGB8>,
    pub writes: usize,
}

impl SmartLedsWrite for RecordingWriter {
    type Error = MockError;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.written = iterator.into_iter().map(Into::into).collect();
        self.writes += 1;
        Ok(())
    }
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b }
}
