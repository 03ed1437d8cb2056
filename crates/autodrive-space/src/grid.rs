//! Rectangular grid with absorbing edges.

use crate::error::SpaceError;
use autodrive_core::{Cell, Heading};

/// A bounded two-dimensional grid of `width * height` cells.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`. Edges absorb movement: a step that would leave the
/// grid has no target cell, and the caller keeps the car where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid.
    ///
    /// Returns `Err(SpaceError::InvalidDimensions)` if either dimension
    /// is zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodrive_core::{Cell, Heading};
    /// use autodrive_space::Grid;
    ///
    /// let grid = Grid::new(10, 10).unwrap();
    /// assert_eq!(grid.cell_count(), 100);
    /// assert!(grid.within_bounds(9, 0));
    /// assert!(!grid.within_bounds(10, 0));
    ///
    /// // Moving north off the top edge has no target.
    /// assert_eq!(grid.forward(Cell::new(0, 9), Heading::North), None);
    /// assert_eq!(grid.forward(Cell::new(0, 8), Heading::North), Some(Cell::new(0, 9)));
    /// ```
    pub fn new(width: i32, height: i32) -> Result<Self, SpaceError> {
        if width <= 0 || height <= 0 {
            return Err(SpaceError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn within_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        self.within_bounds(cell.x, cell.y)
    }

    /// Check that `cell` is in bounds.
    pub fn check_bounds(&self, cell: Cell) -> Result<Cell, SpaceError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpaceError::CellOutOfBounds {
                cell,
                bounds: format!("[0, {}) x [0, {})", self.width, self.height),
            })
        }
    }

    /// The cell one step ahead of `from` along `heading`.
    ///
    /// Returns `None` when that cell is outside the grid.
    pub fn forward(&self, from: Cell, heading: Heading) -> Option<Cell> {
        let (dx, dy) = heading.offset();
        let target = from.offset(dx, dy);
        self.contains(target).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 5), (5, -3), (0, 0)] {
            assert_eq!(
                Grid::new(w, h),
                Err(SpaceError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn single_cell_grid() {
        let g = Grid::new(1, 1).unwrap();
        assert!(g.within_bounds(0, 0));
        for h in Heading::CYCLE {
            assert_eq!(g.forward(Cell::new(0, 0), h), None);
        }
    }

    #[test]
    fn bounds_are_half_open() {
        let g = Grid::new(3, 2).unwrap();
        assert!(g.within_bounds(0, 0));
        assert!(g.within_bounds(2, 1));
        assert!(!g.within_bounds(3, 1));
        assert!(!g.within_bounds(2, 2));
        assert!(!g.within_bounds(-1, 0));
        assert!(!g.within_bounds(0, -1));
    }

    #[test]
    fn check_bounds_reports_range() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.check_bounds(Cell::new(1, 1)), Ok(Cell::new(1, 1)));
        match g.check_bounds(Cell::new(4, 0)) {
            Err(SpaceError::CellOutOfBounds { cell, bounds }) => {
                assert_eq!(cell, Cell::new(4, 0));
                assert_eq!(bounds, "[0, 4) x [0, 3)");
            }
            other => panic!("expected CellOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn forward_in_each_direction() {
        let g = Grid::new(3, 3).unwrap();
        let c = Cell::new(1, 1);
        assert_eq!(g.forward(c, Heading::North), Some(Cell::new(1, 2)));
        assert_eq!(g.forward(c, Heading::East), Some(Cell::new(2, 1)));
        assert_eq!(g.forward(c, Heading::South), Some(Cell::new(1, 0)));
        assert_eq!(g.forward(c, Heading::West), Some(Cell::new(0, 1)));
    }

    #[test]
    fn forward_absorbed_at_each_edge() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(g.forward(Cell::new(1, 2), Heading::North), None);
        assert_eq!(g.forward(Cell::new(2, 1), Heading::East), None);
        assert_eq!(g.forward(Cell::new(1, 0), Heading::South), None);
        assert_eq!(g.forward(Cell::new(0, 1), Heading::West), None);
    }

    fn arb_heading() -> impl Strategy<Value = Heading> {
        (0usize..4).prop_map(|i| Heading::CYCLE[i])
    }

    proptest! {
        #[test]
        fn within_bounds_matches_definition(
            w in 1i32..20, h in 1i32..20,
            x in -5i32..25, y in -5i32..25,
        ) {
            let g = Grid::new(w, h).unwrap();
            prop_assert_eq!(g.within_bounds(x, y), 0 <= x && x < w && 0 <= y && y < h);
        }

        #[test]
        fn forward_stays_in_grid_and_is_adjacent(
            w in 1i32..20, h in 1i32..20,
            x in 0i32..20, y in 0i32..20,
            heading in arb_heading(),
        ) {
            let g = Grid::new(w, h).unwrap();
            let from = Cell::new(x % w, y % h);
            if let Some(to) = g.forward(from, heading) {
                prop_assert!(g.contains(to));
                prop_assert_eq!((to.x - from.x).abs() + (to.y - from.y).abs(), 1);
            }
        }
    }
}
