//! Rasterization algorithms
//!
//! Each primitive yields integer voxel positions (or offsets) and leaves
//! plotting and clipping to the caller.

mod circle;
mod line;
mod shell;
mod sphere;

pub use circle::CircleOffsets;
pub use line::Line;
pub use shell::ShellBounds;
pub use sphere::SphereOffsets;
