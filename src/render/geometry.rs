//! Rasterization: which cells a line or a circle covers.
//!
//! Both functions here are pure. They produce points and leave clipping to
//! `Grid::mark`, which drops anything out of range.

use std::f64::consts::PI;

use glam::IVec2;

use super::defaults::TABLE_SIZE;

// ============================================================================
// Lines
// ============================================================================

/// Points of an 8-connected Bresenham line from `start` to `target`,
/// both endpoints included.
pub fn line_points(start: IVec2, target: IVec2) -> LinePoints {
    LinePoints::new(start, target)
}

/// Iterator state for [`line_points`].
///
/// Works in i64 so that no pair of i32 endpoints can overflow the deltas.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    target_x: i64,
    target_y: i64,
    dx: i64,
    dy: i64,
    step_x: i64,
    step_y: i64,
    /// Balance between the axes: stepping in x lowers it, stepping in y raises it
    error: i64,
    done: bool,
}

impl LinePoints {
    fn new(start: IVec2, target: IVec2) -> Self {
        let (x, y) = (i64::from(start.x), i64::from(start.y));
        let (target_x, target_y) = (i64::from(target.x), i64::from(target.y));
        let dx = (target_x - x).abs();
        let dy = (target_y - y).abs();
        // Integer division truncates toward zero.
        let error = (if dx > dy { dx } else { -dy }) / 2;
        Self {
            x,
            y,
            target_x,
            target_y,
            dx,
            dy,
            step_x: if target_x > x { 1 } else { -1 },
            step_y: if target_y > y { 1 } else { -1 },
            error,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.done {
            return None;
        }
        // Every visited point lies between the two i32 endpoints.
        let point = IVec2::new(self.x as i32, self.y as i32);
        if self.x == self.target_x && self.y == self.target_y {
            self.done = true;
            return Some(point);
        }

        let e2 = self.error;
        if e2 > -self.dx {
            self.error -= self.dy;
            self.x += self.step_x;
        }
        if e2 < self.dy {
            self.error += self.dx;
            self.y += self.step_y;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // One axis advances every step; the other at most as often.
        let remaining = (self.target_x - self.x).abs().max((self.target_y - self.y).abs());
        let n = usize::try_from(remaining + 1).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

// ============================================================================
// Circles
// ============================================================================

/// Rounded sine/cosine offsets for one radius, sampled once per degree.
///
/// Depends on nothing but the radius, so one table can serve every circle
/// of that size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleTable {
    radius: i32,
    sin: [i32; TABLE_SIZE],
    cos: [i32; TABLE_SIZE],
}

impl CircleTable {
    pub fn new(radius: i32) -> Self {
        let r = f64::from(radius);
        let mut sin = [0; TABLE_SIZE];
        let mut cos = [0; TABLE_SIZE];
        for i in 0..TABLE_SIZE {
            let angle = 2.0 * PI * i as f64 / TABLE_SIZE as f64;
            // `as` saturates, so huge radii pin to the i32 range.
            sin[i] = (r * angle.sin()).round() as i32;
            cos[i] = (r * angle.cos()).round() as i32;
        }
        Self { radius, sin, cos }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Offset from the center for sample `i` (degrees): `(cos, sin)`.
    pub fn offset(&self, i: usize) -> IVec2 {
        IVec2::new(self.cos[i], self.sin[i])
    }

    /// All `TABLE_SIZE` offsets in angle order, duplicates included.
    pub fn offsets(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..TABLE_SIZE).map(|i| self.offset(i))
    }

    /// Sample points around `center`. Saturates instead of wrapping at the
    /// edges of the i32 range; such points are off-grid either way.
    pub fn points(&self, center: IVec2) -> impl Iterator<Item = IVec2> + '_ {
        self.offsets().map(move |o| {
            IVec2::new(center.x.saturating_add(o.x), center.y.saturating_add(o.y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    fn line(sx: i32, sy: i32, tx: i32, ty: i32) -> Vec<IVec2> {
        line_points(p(sx, sy), p(tx, ty)).collect()
    }

    #[test]
    fn diagonal_line() {
        assert_eq!(line(0, 0, 3, 3), vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);
    }

    #[test]
    fn zero_length_line_is_one_point() {
        assert_eq!(line(4, 2, 4, 2), vec![p(4, 2)]);
    }

    #[test]
    fn axis_aligned_lines() {
        assert_eq!(line(0, 0, 0, 3), vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3)]);
        assert_eq!(line(3, 1, 0, 1), vec![p(3, 1), p(2, 1), p(1, 1), p(0, 1)]);
    }

    #[test]
    fn shallow_line() {
        assert_eq!(
            line(0, 0, 4, 2),
            vec![p(0, 0), p(1, 0), p(2, 1), p(3, 1), p(4, 2)]
        );
    }

    #[test]
    fn steep_line_going_up() {
        assert_eq!(
            line(2, 4, 0, 0),
            vec![p(2, 4), p(2, 3), p(1, 2), p(1, 1), p(0, 0)]
        );
    }

    #[test]
    fn lines_are_connected_and_end_on_target() {
        for sx in 0..6 {
            for sy in 0..6 {
                for tx in 0..6 {
                    for ty in 0..6 {
                        let pts = line(sx, sy, tx, ty);
                        assert_eq!(pts.first(), Some(&p(sx, sy)));
                        assert_eq!(pts.last(), Some(&p(tx, ty)));
                        for pair in pts.windows(2) {
                            let d = (pair[1] - pair[0]).abs();
                            assert!(
                                d.x <= 1 && d.y <= 1 && d != IVec2::ZERO,
                                "gap in {:?} -> {:?}: {:?}",
                                (sx, sy),
                                (tx, ty),
                                pts
                            );
                        }
                        let expected = (tx - sx).abs().max((ty - sy).abs()) as usize + 1;
                        assert_eq!(pts.len(), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn size_hint_matches_length() {
        let mut it = line_points(p(0, 0), p(7, 3));
        assert_eq!(it.len(), 8);
        it.next();
        assert_eq!(it.len(), 7);
        assert_eq!(it.count(), 7);
    }

    #[test]
    fn extreme_endpoints_do_not_overflow() {
        let pts: Vec<IVec2> = line_points(p(i32::MAX, 0), p(i32::MAX - 2, 0)).collect();
        assert_eq!(pts, vec![p(i32::MAX, 0), p(i32::MAX - 1, 0), p(i32::MAX - 2, 0)]);
    }

    #[test]
    fn circle_table_cardinal_points() {
        let table = CircleTable::new(3);
        assert_eq!(table.offset(0), p(3, 0));
        assert_eq!(table.offset(90), p(0, 3));
        assert_eq!(table.offset(180), p(-3, 0));
        assert_eq!(table.offset(270), p(0, -3));
    }

    #[test]
    fn circle_table_matches_rounded_trig() {
        for radius in [0, 1, 2, 5, 12] {
            let table = CircleTable::new(radius);
            for (i, offset) in table.offsets().enumerate() {
                let theta = 2.0 * PI * i as f64 / 360.0;
                let cos = (f64::from(radius) * theta.cos()).round() as i32;
                let sin = (f64::from(radius) * theta.sin()).round() as i32;
                assert_eq!(offset, p(cos, sin), "radius {radius}, sample {i}");
            }
            assert_eq!(table.offsets().count(), TABLE_SIZE);
        }
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let table = CircleTable::new(0);
        let points: HashSet<IVec2> = table.points(p(5, 5)).collect();
        assert_eq!(points, HashSet::from([p(5, 5)]));
    }

    #[test]
    fn circle_points_stay_on_the_ring() {
        let table = CircleTable::new(10);
        for pt in table.points(p(20, 20)) {
            let d = (pt - p(20, 20)).as_dvec2().length();
            assert!((d - 10.0).abs() < 1.0, "{pt:?} is {d} from center");
        }
    }

    #[test]
    fn negative_radius_traces_the_same_outline() {
        let pos: HashSet<IVec2> = CircleTable::new(4).points(p(0, 0)).collect();
        let neg: HashSet<IVec2> = CircleTable::new(-4).points(p(0, 0)).collect();
        assert_eq!(pos, neg);
    }

    #[test]
    fn circle_points_saturate() {
        let table = CircleTable::new(5);
        assert!(table.points(p(i32::MAX, i32::MIN)).all(|pt| pt.x >= i32::MAX - 5));
    }
}
