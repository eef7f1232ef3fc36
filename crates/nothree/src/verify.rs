//! Independent checks of finished configurations.
//!
//! These re-derive collinearity from scratch with cross products and never
//! look at ranks or the usability index. The engine does not call them.

use crate::grid::Grid;
use crate::lattice::{collinear, Lattice2};

/// First collinear triple among `points` (exhaustive, O(k³)).
pub fn find_collinear_triple(points: &[(i32, i32)]) -> Option<[(i32, i32); 3]> {
    let v: Vec<Lattice2> = points.iter().map(|&(x, y)| Lattice2::new(x, y)).collect();
    for i in 0..v.len() {
        for j in i + 1..v.len() {
            for k in j + 1..v.len() {
                if collinear(v[i], v[j], v[k]) {
                    return Some([points[i], points[j], points[k]]);
                }
            }
        }
    }
    None
}

/// No committed triple of `grid` is collinear.
pub fn is_valid(grid: &Grid) -> bool {
    find_collinear_triple(&grid.committed_coords()).is_none()
}

/// Every non-committed cell lies on a line through two committed cells, so no
/// point can be added without creating a collinear triple.
pub fn is_maximal(grid: &Grid) -> bool {
    let chosen: Vec<Lattice2> = grid
        .points()
        .iter()
        .filter(|p| p.is_committed())
        .map(|p| p.pos())
        .collect();
    grid.points().iter().filter(|p| !p.is_committed()).all(|p| {
        let c = p.pos();
        (0..chosen.len())
            .any(|i| (i + 1..chosen.len()).any(|j| collinear(chosen[i], chosen[j], c)))
    })
}

/// The committed set is invariant under `(x, y) -> (y, x)`.
pub fn is_diagonal_symmetric(grid: &Grid) -> bool {
    grid.points().iter().filter(|p| p.is_committed()).all(|p| {
        grid.get(p.y, p.x).is_some_and(|m| m.is_committed())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PointState;

    fn grid_with(n: usize, pts: &[(i32, i32)]) -> Grid {
        let mut g = Grid::new(n);
        for &(x, y) in pts {
            let idx = g.index(x, y).unwrap();
            *g.state_mut(idx) = PointState::Committed;
        }
        g
    }

    #[test]
    fn detects_collinear_triples() {
        assert_eq!(
            find_collinear_triple(&[(0, 0), (1, 1), (0, 1), (2, 2)]),
            Some([(0, 0), (1, 1), (2, 2)])
        );
        assert_eq!(find_collinear_triple(&[(0, 0), (1, 2), (2, 1)]), None);
        assert_eq!(find_collinear_triple(&[]), None);
    }

    #[test]
    fn two_by_two_full_is_valid_and_maximal() {
        let g = grid_with(2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(is_valid(&g));
        assert!(is_maximal(&g));
        assert!(is_diagonal_symmetric(&g));
    }

    #[test]
    fn sparse_set_is_not_maximal() {
        let g = grid_with(3, &[(0, 0), (1, 2)]);
        assert!(is_valid(&g));
        assert!(!is_maximal(&g));
        assert!(!is_diagonal_symmetric(&g));
    }

    #[test]
    fn known_six_point_solution_on_three() {
        // Classic optimum for n = 3.
        let g = grid_with(3, &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
        assert!(is_valid(&g));
        assert!(is_maximal(&g));
        assert!(is_diagonal_symmetric(&g));
    }
}
