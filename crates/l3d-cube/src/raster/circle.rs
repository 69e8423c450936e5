/// Offsets of an empty circle (midpoint algorithm)
///
/// Produces `(da, db)` offsets of the circle outline, eight symmetric points
/// per step. Starting from `dx = r`, `dy = 0` and `error = 1 - dx`, each
/// step advances `dy`; when the error is negative it grows by `2*dy + 1`,
/// otherwise `dx` shrinks and the error grows by `2*(dy - dx + 1)`. Stops
/// once `dx < dy`. Points on the axes and diagonals repeat.
#[derive(Debug, Clone)]
pub struct CircleOffsets {
    dx: i64,
    dy: i64,
    error: i64,
    pending: [(i32, i32); 8],
    emitted: usize,
}

impl CircleOffsets {
    pub fn new(radius: i32) -> Self {
        let radius = i64::from(radius);
        let mut circle = Self {
            dx: radius,
            dy: 0,
            error: 1 - radius,
            pending: [(0, 0); 8],
            emitted: 8,
        };
        circle.fill_pending();
        circle
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_pending(&mut self) {
        if self.dx < self.dy {
            return;
        }
        // both lie within the i32 radius
        let (dx, dy) = (self.dx as i32, self.dy as i32);
        self.pending = [
            (dx, dy),
            (dy, dx),
            (-dx, dy),
            (-dy, dx),
            (-dx, -dy),
            (-dy, -dx),
            (dx, -dy),
            (dy, -dx),
        ];
        self.emitted = 0;

        self.dy += 1;
        if self.error < 0 {
            self.error += 2 * self.dy + 1;
        } else {
            self.dx -= 1;
            self.error += 2 * (self.dy - self.dx + 1);
        }
    }
}

impl Iterator for CircleOffsets {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == self.pending.len() {
            self.fill_pending();
            if self.emitted == self.pending.len() {
                return None;
            }
        }
        let offset = self.pending[self.emitted];
        self.emitted += 1;
        Some(offset)
    }
}
