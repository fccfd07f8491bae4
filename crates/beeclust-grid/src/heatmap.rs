//! The per-cell temperature plane.

use crate::grid::Grid;
use beeclust_core::{GridError, Pos};

/// A row-major `f64` temperature plane with the same shape as its grid.
///
/// Wall cells hold `f64::NAN`; every other cell holds a finite temperature
/// once the heatmap kernel has run. A freshly constructed heatmap is all
/// zeros — callers run the kernel before reading temperatures.
#[derive(Clone, Debug)]
pub struct HeatMap {
    rows: u32,
    cols: u32,
    temps: Vec<f64>,
}

impl HeatMap {
    /// Create a zeroed heatmap with the given shape.
    ///
    /// Same shape validation as [`Grid::new`].
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        // The grid's dimension rules, so the two planes can never disagree
        // about what a legal shape is.
        Grid::check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            temps: vec![0.0; rows as usize * cols as usize],
        })
    }

    /// Create a zeroed heatmap shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            temps: vec![0.0; grid.cell_count()],
        }
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
        self.temps.len()
    }

    /// Temperature at `pos`.
    pub fn get(&self, pos: Pos) -> f64 {
        self.temps[self.rank(pos)]
    }

    /// Overwrite the temperature at `pos`.
    pub fn set(&mut self, pos: Pos, value: f64) {
        let rank = self.rank(pos);
        self.temps[rank] = value;
    }

    /// The flat row-major temperature buffer.
    pub fn values(&self) -> &[f64] {
        &self.temps
    }

    /// Mutable access to the flat temperature buffer.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.temps
    }

    fn rank(&self, pos: Pos) -> usize {
        debug_assert!(
            pos.row >= 0
                && pos.row < self.rows as i32
                && pos.col >= 0
                && pos.col < self.cols as i32,
            "position {pos} out of bounds"
        );
        pos.row as usize * self.cols as usize + pos.col as usize
    }
}
