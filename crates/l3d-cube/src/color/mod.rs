mod packing;
pub mod palette;
mod ramp;
mod utils;

use smart_leds::RGB8;

pub use packing::ChannelOrder;
pub use ramp::{ColorRamp, RAMP_RANGE, RAMP_STOPS};
pub use utils::{lerp_color, limit_color, rgb_from_u32};

pub type Color = RGB8;
