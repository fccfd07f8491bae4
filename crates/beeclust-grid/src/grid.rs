//! The packed cell-code grid.

use beeclust_core::{code, Cell, GridError, Pos};
use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Cardinal offsets in N, E, S, W order, matching the heading codes 1–4.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A fixed-shape, row-major grid of packed cell codes.
///
/// Rows and columns are bounded by `i32` so that [`Pos`] arithmetic never
/// wraps. Cell access is O(1); out-of-bounds access is a programming error
/// and panics.
///
/// # Examples
///
/// ```
/// use beeclust_core::{Cell, Direction, Pos};
/// use beeclust_grid::Grid;
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.set_cell(Pos::new(1, 2), Cell::Bee(Direction::East));
/// assert_eq!(grid.get(Pos::new(1, 2)), 2);
/// assert_eq!(grid.cell(Pos::new(0, 0)), Cell::Empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<i8>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-empty grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        Self::check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![code::EMPTY; rows as usize * cols as usize],
        })
    }

    /// Create a grid from a flat row-major code buffer.
    ///
    /// Validates the buffer length against the shape and every value
    /// against the legal cell encoding.
    pub fn from_codes(rows: u32, cols: u32, cells: Vec<i8>) -> Result<Self, GridError> {
        Self::check_dims(rows, cols)?;
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                got: cells.len(),
            });
        }
        for (index, &value) in cells.iter().enumerate() {
            if !code::is_legal(value) {
                return Err(GridError::IllegalCode { value, index });
            }
        }
        Ok(Self { rows, cols, cells })
    }

    pub(crate) fn check_dims(rows: u32, cols: u32) -> Result<(), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` lies inside the grid.
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.row < self.rows as i32 && pos.col >= 0 && pos.col < self.cols as i32
    }

    /// Flat row-major index of an in-bounds position.
    pub fn rank(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos), "position {pos} out of bounds");
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// Position of a flat row-major index.
    pub fn pos_of(&self, rank: usize) -> Pos {
        debug_assert!(rank < self.cells.len(), "rank {rank} out of bounds");
        Pos::new(
            (rank / self.cols as usize) as i32,
            (rank % self.cols as usize) as i32,
        )
    }

    /// Packed code at `pos`.
    pub fn get(&self, pos: Pos) -> i8 {
        self.cells[self.rank(pos)]
    }

    /// Overwrite the packed code at `pos`.
    pub fn set(&mut self, pos: Pos, value: i8) {
        let rank = self.rank(pos);
        self.cells[rank] = value;
    }

    /// Typed view of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the stored code is illegal, which only happens after a
    /// caller bypassed validation through [`codes_mut`](Self::codes_mut).
    pub fn cell(&self, pos: Pos) -> Cell {
        let value = self.get(pos);
        match Cell::from_code(value) {
            Some(cell) => cell,
            None => panic!("illegal cell code {value} at {pos}"),
        }
    }

    /// Store a typed cell at `pos`.
    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        self.set(pos, cell.to_code());
    }

    /// The flat row-major code buffer.
    pub fn codes(&self) -> &[i8] {
        &self.cells
    }

    /// Mutable access to the flat code buffer.
    ///
    /// Bypasses code validation; intended for the kernels, which only ever
    /// write legal values.
    pub fn codes_mut(&mut self) -> &mut [i8] {
        &mut self.cells
    }

    /// Iterate all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }

    /// In-bounds 4-connected neighbours of `pos`, in N, E, S, W order.
    pub fn neighbours4(&self, pos: Pos) -> SmallVec<[Pos; 8]> {
        self.collect_neighbours(pos, &OFFSETS_4)
    }

    /// In-bounds 8-connected neighbours of `pos`.
    pub fn neighbours8(&self, pos: Pos) -> SmallVec<[Pos; 8]> {
        self.collect_neighbours(pos, &OFFSETS_8)
    }

    fn collect_neighbours(&self, pos: Pos, offsets: &[(i32, i32)]) -> SmallVec<[Pos; 8]> {
        let mut result = SmallVec::new();
        for &(dr, dc) in offsets {
            let nb = pos.offset(dr, dc);
            if self.in_bounds(nb) {
                result.push(nb);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeclust_core::Direction;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(Grid::new(0, 5), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert_eq!(Grid::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Grid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.cell_count(), 12);
        assert!(grid.codes().iter().all(|&c| c == code::EMPTY));
    }

    #[test]
    fn from_codes_validates_length() {
        assert_eq!(
            Grid::from_codes(2, 2, vec![0, 0, 0]),
            Err(GridError::LengthMismatch {
                expected: 4,
                got: 3,
            })
        );
    }

    #[test]
    fn from_codes_validates_values() {
        assert_eq!(
            Grid::from_codes(1, 3, vec![0, 8, 0]),
            Err(GridError::IllegalCode { value: 8, index: 1 })
        );
        // Negative codes (waiting bees) are legal.
        assert!(Grid::from_codes(1, 3, vec![-1, -100, 0]).is_ok());
    }

    // ── Access tests ────────────────────────────────────────────

    #[test]
    fn rank_is_row_major() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rank(Pos::new(0, 0)), 0);
        assert_eq!(grid.rank(Pos::new(1, 0)), 4);
        assert_eq!(grid.rank(Pos::new(2, 3)), 11);
        assert_eq!(grid.pos_of(11), Pos::new(2, 3));
    }

    #[test]
    fn get_set_round_trip() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(Pos::new(1, 1), -7);
        assert_eq!(grid.get(Pos::new(1, 1)), -7);
        assert_eq!(grid.cell(Pos::new(1, 1)), Cell::Waiting(7));
        grid.set_cell(Pos::new(0, 1), Cell::Bee(Direction::West));
        assert_eq!(grid.get(Pos::new(0, 1)), 4);
    }

    #[test]
    fn positions_iterate_row_major() {
        let grid = Grid::new(2, 3).unwrap();
        let all: Vec<Pos> = grid.positions().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Pos::new(0, 0));
        assert_eq!(all[2], Pos::new(0, 2));
        assert_eq!(all[3], Pos::new(1, 0));
        assert_eq!(all[5], Pos::new(1, 2));
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours4_interior() {
        let grid = Grid::new(5, 5).unwrap();
        let n = grid.neighbours4(Pos::new(2, 2));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Pos::new(1, 2)));
        assert!(n.contains(&Pos::new(3, 2)));
        assert!(n.contains(&Pos::new(2, 1)));
        assert!(n.contains(&Pos::new(2, 3)));
    }

    #[test]
    fn neighbours4_corner() {
        let grid = Grid::new(5, 5).unwrap();
        let n = grid.neighbours4(Pos::new(0, 0));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&Pos::new(1, 0)));
        assert!(n.contains(&Pos::new(0, 1)));
    }

    #[test]
    fn neighbours8_interior_and_corner() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.neighbours8(Pos::new(2, 2)).len(), 8);
        let corner = grid.neighbours8(Pos::new(4, 4));
        assert_eq!(corner.len(), 3);
        assert!(corner.contains(&Pos::new(3, 3)));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(grid.neighbours4(Pos::new(0, 0)).is_empty());
        assert!(grid.neighbours8(Pos::new(0, 0)).is_empty());
    }
}
