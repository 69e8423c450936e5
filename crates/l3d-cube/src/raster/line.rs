//! 3D Bresenham line
//!
//! Steps one voxel per iteration along the dominant axis (the one with the
//! largest absolute delta) and accumulates doubled-delta error terms for the
//! other two axes. Ties pick `x` over `y` over `z`. Consecutive voxels are
//! 26-connected and both endpoints are always included.
//!
//! State is kept in `i64` so endpoints anywhere in the `i32` range work.

const AXES: usize = 3;

/// Iterator over the voxels of a line between two integer points
#[derive(Debug, Clone)]
pub struct Line {
    start: [i64; AXES],
    current: [i64; AXES],
    step: [i64; AXES],
    delta: [i64; AXES],
    error: [i64; AXES],
    axis: usize,
    remaining: u64,
}

impl Line {
    pub fn new(from: (i32, i32, i32), to: (i32, i32, i32)) -> Self {
        let start = [i64::from(from.0), i64::from(from.1), i64::from(from.2)];
        let end = [i64::from(to.0), i64::from(to.1), i64::from(to.2)];

        let mut step = [0; AXES];
        let mut delta = [0; AXES];
        for i in 0..AXES {
            let d = end[i] - start[i];
            step[i] = if d < 0 { -1 } else { 1 };
            delta[i] = d.abs();
        }

        let axis = if delta[0] >= delta[1] && delta[0] >= delta[2] {
            0
        } else if delta[1] >= delta[0] && delta[1] >= delta[2] {
            1
        } else {
            2
        };

        let mut line = Self {
            start,
            current: start,
            step,
            delta,
            error: [0; AXES],
            axis,
            remaining: delta[axis].unsigned_abs() + 1,
        };
        line.seek(0);
        line
    }

    /// Restrict the line to voxels whose dominant coordinate lies in
    /// `lo..hi`, skipping the steps outside without walking them
    ///
    /// The voxels kept are exactly those the full line would produce.
    #[must_use]
    pub fn within(mut self, lo: i32, hi: i32) -> Self {
        let (lo, hi) = (i64::from(lo), i64::from(hi));
        let s = self.start[self.axis];
        let total = self.delta[self.axis] + 1;
        let (first, end) = if self.step[self.axis] > 0 {
            (lo - s, hi - s)
        } else {
            (s - hi + 1, s - lo + 1)
        };
        let first = first.max(0);
        let end = end.min(total);

        if first >= end {
            self.remaining = 0;
            return self;
        }
        self.seek(first);
        self.remaining = (end - first).unsigned_abs();
        self
    }

    /// Jump to the state before plotting the `k`-th voxel
    ///
    /// A minor axis has stepped once for every earlier iteration whose error
    /// was positive, which is `ceil(f / 2D)` with `f = e0 + (k - 1) * 2d`.
    #[allow(clippy::cast_possible_truncation)]
    fn seek(&mut self, k: i64) {
        let axis = self.axis;
        let major2 = i128::from(self.delta[axis]) * 2;
        let k = i128::from(k);
        for i in 0..AXES {
            if i == axis {
                continue;
            }
            let minor2 = i128::from(self.delta[i]) * 2;
            let initial = minor2 - i128::from(self.delta[axis]);
            let reached = initial + (k - 1) * minor2;
            let steps = if reached > 0 && major2 > 0 {
                (reached + major2 - 1) / major2
            } else {
                0
            };
            // both stay between the endpoint values, so they fit in i64
            self.current[i] = self.start[i] + (steps as i64) * self.step[i];
            self.error[i] = (initial + k * minor2 - steps * major2) as i64;
        }
        self.current[axis] = self.start[axis] + (k as i64) * self.step[axis];
    }

    fn advance(&mut self) {
        let axis = self.axis;
        for i in 0..AXES {
            if i == axis {
                continue;
            }
            if self.error[i] > 0 {
                self.current[i] += self.step[i];
                self.error[i] -= 2 * self.delta[axis];
            }
            self.error[i] += 2 * self.delta[i];
        }
        self.current[axis] += self.step[axis];
    }
}

impl Iterator for Line {
    type Item = (i32, i32, i32);

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // every voxel lies between the two i32 endpoints
        let [x, y, z] = self.current.map(|c| c as i32);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some((x, y, z))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
