//! Voxel to strip addressing
//!
//! The strip runs through the cube layer by layer along `z`; inside a layer
//! it runs column by column along `x`, and `y` varies fastest:
//!
//! `index = z * size * size + x * size + y`
//!
//! This order follows the physical wiring and must not change.

/// Addressing for a cube of a given edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    size: usize,
}

impl Layout {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Edge length in voxels
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of voxels in the cube
    pub const fn voxel_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Check whether the coordinates lie inside the cube
    #[allow(clippy::cast_sign_loss)]
    pub const fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.size
            && (y as usize) < self.size
            && (z as usize) < self.size
    }

    /// Strip index of a voxel, `None` outside of the cube
    #[allow(clippy::cast_sign_loss)]
    pub const fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.contains(x, y, z) {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        Some(z * self.size * self.size + x * self.size + y)
    }

    /// Voxel coordinates of a strip index, `None` past the last voxel
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn coords(&self, index: usize) -> Option<(i32, i32, i32)> {
        if index >= self.voxel_count() {
            return None;
        }
        let layer = self.size * self.size;
        let z = index / layer;
        let x = (index % layer) / self.size;
        let y = index % self.size;
        Some((x as i32, y as i32, z as i32))
    }

    /// All voxel coordinates in strip order
    pub fn voxels(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        (0..self.voxel_count()).filter_map(move |index| self.coords(index))
    }
}
