use crate::color::ChannelOrder;

/// Cube settings, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeConfig {
    /// Edge length in voxels
    pub size: u8,
    /// Per-channel cap for colors the cube synthesizes.
    /// Keeps the strip from drawing too much current, which distorts colors.
    pub max_brightness: u8,
    /// Global brightness handed to the LED driver on `begin`
    pub strip_brightness: u8,
    /// Channel order inside the packed pixel buffer
    pub channel_order: ChannelOrder,
}

impl CubeConfig {
    pub const fn new(size: u8, max_brightness: u8) -> Self {
        Self {
            size,
            max_brightness,
            strip_brightness: max_brightness,
            channel_order: ChannelOrder::Grb,
        }
    }

    #[must_use]
    pub const fn with_strip_brightness(mut self, level: u8) -> Self {
        self.strip_brightness = level;
        self
    }

    #[must_use]
    pub const fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }

    /// Number of voxels in the cube
    pub const fn voxel_count(&self) -> usize {
        let size = self.size as usize;
        size * size * size
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        CUBE
    }
}

#[cfg(not(feature = "cube8"))]
pub const CUBE: CubeConfig = CubeConfig::new(5, 50);
#[cfg(not(feature = "cube8"))]
pub const PIXEL_COUNT: usize = 125;

#[cfg(feature = "cube8")]
pub const CUBE: CubeConfig = CubeConfig::new(8, 50);
#[cfg(feature = "cube8")]
pub const PIXEL_COUNT: usize = 512;
