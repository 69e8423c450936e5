use crate::point::Point;

/// Membership test for a spherical shell
///
/// A point belongs to the shell when `|distance - radius| < thickness`.
/// The test compares squared distances, `(r - t)^2 < d^2 < (r + t)^2`,
/// dropping the inner bound when `r - t` is not positive.
#[derive(Debug, Clone, Copy)]
pub struct ShellBounds {
    center: Point,
    inner_squared: Option<f32>,
    outer_squared: f32,
}

impl ShellBounds {
    pub fn new(center: Point, radius: f32, thickness: f32) -> Self {
        let inner = radius - thickness;
        let outer = radius + thickness;
        Self {
            center,
            inner_squared: (inner > 0.0).then_some(inner * inner),
            outer_squared: if outer > 0.0 { outer * outer } else { 0.0 },
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        let d2 = self.center.distance_squared(point);
        if d2 >= self.outer_squared {
            return false;
        }
        match self.inner_squared {
            Some(inner) => d2 > inner,
            None => true,
        }
    }
}
