/// Offsets of a filled sphere
///
/// Yields every integer offset `(dx, dy, dz)` in `[-r, r]^3` whose distance
/// from the origin is at most `r`. A radius of zero yields only the origin,
/// a negative radius yields nothing.
#[derive(Debug, Clone)]
pub struct SphereOffsets {
    radius_squared: i128,
    min: [i64; 3],
    max: [i64; 3],
    cursor: Option<[i64; 3]>,
}

impl SphereOffsets {
    pub fn new(radius: i32) -> Self {
        let r = i64::from(radius);
        let mut sphere = Self {
            radius_squared: i128::from(r) * i128::from(r),
            min: [-r; 3],
            max: [r; 3],
            cursor: None,
        };
        if radius >= 0 {
            sphere.cursor = Some(sphere.min);
        }
        sphere
    }

    /// Keep only offsets that land inside `lo..hi` on every axis when added
    /// to `center`
    #[must_use]
    pub fn within(mut self, center: (i32, i32, i32), lo: i32, hi: i32) -> Self {
        let center = [center.0, center.1, center.2].map(i64::from);
        for i in 0..3 {
            self.min[i] = self.min[i].max(i64::from(lo) - center[i]);
            self.max[i] = self.max[i].min(i64::from(hi) - 1 - center[i]);
        }
        let empty = (0..3).any(|i| self.min[i] > self.max[i]);
        self.cursor = if empty {
            None
        } else {
            self.cursor.map(|_| self.min)
        };
        self
    }

    fn step(&self, [dx, dy, dz]: [i64; 3]) -> Option<[i64; 3]> {
        if dz < self.max[2] {
            Some([dx, dy, dz + 1])
        } else if dy < self.max[1] {
            Some([dx, dy + 1, self.min[2]])
        } else if dx < self.max[0] {
            Some([dx + 1, self.min[1], self.min[2]])
        } else {
            None
        }
    }
}

impl Iterator for SphereOffsets {
    type Item = (i32, i32, i32);

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.cursor {
            self.cursor = self.step(offset);
            let [dx, dy, dz] = offset;
            let d2 = [dx, dy, dz].map(|d| i128::from(d) * i128::from(d));
            if d2[0] + d2[1] + d2[2] <= self.radius_squared {
                // offsets are bounded by the i32 radius
                return Some((dx as i32, dy as i32, dz as i32));
            }
        }
        None
    }
}
