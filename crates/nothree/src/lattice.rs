//! Integer lattice lines: primitive direction vectors and bounded ray walks.
//!
//! Purpose
//! - Enumerate every lattice point on the line through two grid points without
//!   visiting fractional positions. The step between consecutive lattice points
//!   is the displacement divided by the gcd of its components.
//!
//! Conventions
//! - Positions and steps are `Lattice2 = Vector2<i32>`; `x` is the first
//!   component, `y` the second.
//! - The sign of a primitive step is irrelevant to the line it describes; callers
//!   always walk both rays.

use nalgebra::Vector2;

/// Integer lattice vector (position or step).
pub type Lattice2 = Vector2<i32>;

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) = 0`.
#[inline]
pub fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i32
}

/// Primitive (gcd-reduced) step of the line through `from` and `to`.
///
/// Returns `None` when the points coincide. Axis-parallel displacements reduce
/// to `(0, ±1)` or `(±1, 0)`.
#[inline]
pub fn primitive_step(from: Lattice2, to: Lattice2) -> Option<Lattice2> {
    let d = to - from;
    let g = gcd(d.x, d.y);
    if g == 0 {
        None
    } else {
        Some(d / g)
    }
}

/// Lattice points `origin + k*step` for `k = 1, 2, ...` while inside `[0, n)²`.
///
/// The origin itself is not yielded. A zero step yields nothing.
#[derive(Clone, Debug)]
pub struct Ray {
    cur: Lattice2,
    step: Lattice2,
    n: i32,
}

impl Ray {
    #[inline]
    pub fn new(origin: Lattice2, step: Lattice2, n: i32) -> Self {
        Self {
            cur: origin,
            step,
            n,
        }
    }
}

impl Iterator for Ray {
    type Item = Lattice2;

    #[inline]
    fn next(&mut self) -> Option<Lattice2> {
        if self.step == Lattice2::zeros() {
            return None;
        }
        let next = self.cur + self.step;
        if in_square(next, self.n) {
            self.cur = next;
            Some(next)
        } else {
            None
        }
    }
}

/// Both rays through `origin` along `±step`, origin excluded.
#[inline]
pub fn line_through(origin: Lattice2, step: Lattice2, n: i32) -> impl Iterator<Item = Lattice2> {
    Ray::new(origin, step, n).chain(Ray::new(origin, -step, n))
}

/// `0 <= x, y < n`.
#[inline]
pub fn in_square(p: Lattice2, n: i32) -> bool {
    (0..n).contains(&p.x) && (0..n).contains(&p.y)
}

/// Three lattice points are collinear iff the cross product of their
/// displacements vanishes. Computed in `i64` so any `i32` input is exact.
#[inline]
pub fn collinear(a: Lattice2, b: Lattice2, c: Lattice2) -> bool {
    let (ux, uy) = (i64::from(b.x - a.x), i64::from(b.y - a.y));
    let (vx, vy) = (i64::from(c.x - a.x), i64::from(c.y - a.y));
    ux * vy - uy * vx == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn gcd_handles_signs_and_zero() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, -7), 7);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn primitive_step_reduces() {
        assert_eq!(
            primitive_step(vector![0, 0], vector![2, 4]),
            Some(vector![1, 2])
        );
        assert_eq!(
            primitive_step(vector![3, 3], vector![0, 3]),
            Some(vector![-1, 0])
        );
        assert_eq!(
            primitive_step(vector![1, 5], vector![1, 1]),
            Some(vector![0, -1])
        );
        assert_eq!(primitive_step(vector![2, 2], vector![2, 2]), None);
    }

    #[test]
    fn ray_stops_at_boundary() {
        let pts: Vec<_> = Ray::new(vector![0, 0], vector![1, 2], 4).collect();
        assert_eq!(pts, vec![vector![1, 2]]);
        let pts: Vec<_> = Ray::new(vector![1, 2], vector![1, 2], 4).collect();
        assert!(pts.is_empty());
        assert_eq!(Ray::new(vector![0, 0], vector![0, 0], 4).count(), 0);
    }

    #[test]
    fn line_through_visits_both_sides() {
        let mut pts: Vec<_> = line_through(vector![2, 2], vector![1, 1], 5)
            .map(|p| (p.x, p.y))
            .collect();
        pts.sort_unstable();
        assert_eq!(pts, vec![(0, 0), (1, 1), (3, 3), (4, 4)]);
    }

    #[test]
    fn collinear_cross_product() {
        assert!(collinear(vector![0, 0], vector![1, 2], vector![2, 4]));
        assert!(!collinear(vector![0, 0], vector![1, 2], vector![2, 3]));
        assert!(collinear(vector![0, 3], vector![1, 2], vector![3, 0]));
    }
}
