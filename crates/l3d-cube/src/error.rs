//! Error types for the cube

use core::fmt;

/// Error type for cube operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError<E> {
    /// Cube size is zero or does not fit into the strip
    InvalidSize { size: usize, capacity: usize },
    /// Coordinate or strip index outside of the cube
    OutOfBounds,
    /// LED driver failure
    Driver(E),
}

impl<E: fmt::Debug> fmt::Display for CubeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::InvalidSize { size, capacity } => write!(
                f,
                "Cube of size {} does not fit into {} pixels",
                size, capacity
            ),
            CubeError::OutOfBounds => write!(f, "Coordinate out of bounds"),
            CubeError::Driver(e) => write!(f, "LED driver error: {:?}", e),
        }
    }
}
