//! Spatial coordinates
//!
//! One value type covers both integer voxel positions and fractional
//! positions used for distance math. Conversion to voxel coordinates
//! truncates toward zero.

use core::ops::{Add, Sub};

/// A point in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a point from integer voxel coordinates
    #[allow(clippy::cast_precision_loss)]
    pub fn from_voxel(x: i32, y: i32, z: i32) -> Self {
        Self::new(x as f32, y as f32, z as f32)
    }

    /// Voxel coordinates of the point, truncated toward zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_voxel(self) -> (i32, i32, i32) {
        (self.x as i32, self.y as i32, self.z as i32)
    }

    /// Squared euclidean distance to another point
    pub fn distance_squared(self, other: Self) -> f32 {
        let d = self - other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<(i32, i32, i32)> for Point {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::from_voxel(x, y, z)
    }
}
