//! The simulation facade.

use std::error::Error;
use std::fmt;

use beeclust_core::{code, Cell, GridError, ParamError, Pos, SimParams};
use beeclust_grid::{Grid, HeatMap};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Errors from [`BeeClust`] construction.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// Parameter validation failed.
    Param(ParamError),
    /// Storage construction failed.
    Grid(GridError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(e) => write!(f, "invalid parameters: {e}"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Param(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ParamError> for SimError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// A running BeeClust simulation.
///
/// Owns the grid, the derived heatmap, the parameters, and the RNG stream
/// the tick kernel draws from. Construction validates the parameters and
/// computes the initial heatmap; after that, [`tick`](Self::tick) advances
/// the swarm and [`swarms`](Self::swarms) reports its clustering.
///
/// Mutating the map through [`set_cell`](Self::set_cell) (or
/// [`grid_mut`](Self::grid_mut)) leaves the heatmap stale; call
/// [`recalculate_heat`](Self::recalculate_heat) afterwards to keep the
/// simulation consistent. Moving bees never changes the heatmap, so plain
/// ticking needs no recalculation.
pub struct BeeClust {
    grid: Grid,
    heatmap: HeatMap,
    params: SimParams,
    rng: ChaCha8Rng,
}

impl BeeClust {
    /// Create a simulation with an OS-entropy RNG seed.
    pub fn new(grid: Grid, params: SimParams) -> Result<Self, SimError> {
        Self::build(grid, params, ChaCha8Rng::from_entropy())
    }

    /// Create a simulation with a fixed RNG seed, for reproducible runs.
    pub fn with_seed(grid: Grid, params: SimParams, seed: u64) -> Result<Self, SimError> {
        Self::build(grid, params, ChaCha8Rng::seed_from_u64(seed))
    }

    fn build(grid: Grid, params: SimParams, rng: ChaCha8Rng) -> Result<Self, SimError> {
        params.validate()?;
        let heatmap = HeatMap::for_grid(&grid);
        let mut sim = Self {
            grid,
            heatmap,
            params,
            rng,
        };
        sim.recalculate_heat();
        Ok(sim)
    }

    /// Advance the simulation by one step. Returns how many bees moved.
    pub fn tick(&mut self) -> usize {
        beeclust_kernels::tick(&mut self.grid, &self.heatmap, &self.params, &mut self.rng)
    }

    /// Recompute the heatmap from the current map.
    ///
    /// Required after changing walls, heaters, or coolers; the kernels
    /// never do it implicitly.
    pub fn recalculate_heat(&mut self) {
        beeclust_kernels::recalculate_heat(&mut self.heatmap, &self.grid, &self.params);
    }

    /// The current swarm clustering: one list of coordinates per
    /// 4-connected component of bee cells.
    pub fn swarms(&self) -> Vec<Vec<Pos>> {
        beeclust_kernels::swarms(&self.grid)
    }

    /// Coordinates of every bee, active or waiting, in row-major order.
    pub fn bees(&self) -> Vec<Pos> {
        self.grid
            .positions()
            .filter(|&pos| code::is_bee(self.grid.get(pos)))
            .collect()
    }

    /// Mean temperature under the bees, or `None` when there are none.
    pub fn score(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for pos in self.grid.positions() {
            if code::is_bee(self.grid.get(pos)) {
                sum += self.heatmap.get(pos);
                count += 1;
            }
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Make every bee forget its heading: all bee cells become waiting
    /// bees that pick a fresh random direction on the next tick.
    pub fn forget(&mut self) {
        for value in self.grid.codes_mut() {
            if code::is_bee(*value) {
                *value = -1;
            }
        }
    }

    /// The map.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the map. Structural changes (walls, heaters,
    /// coolers) leave the heatmap stale until
    /// [`recalculate_heat`](Self::recalculate_heat).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The derived temperature field.
    pub fn heatmap(&self) -> &HeatMap {
        &self.heatmap
    }

    /// The validated parameters.
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Typed view of one cell.
    pub fn cell(&self, pos: Pos) -> Cell {
        self.grid.cell(pos)
    }

    /// Store a typed cell. See [`grid_mut`](Self::grid_mut) for the
    /// heatmap staleness contract.
    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        self.grid.set_cell(pos, cell);
    }
}

impl fmt::Debug for BeeClust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeeClust")
            .field("rows", &self.grid.rows())
            .field("cols", &self.grid.cols())
            .field("bees", &self.bees().len())
            .field("params", &self.params)
            .finish()
    }
}
