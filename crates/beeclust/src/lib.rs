//! BeeClust: a swarm simulation on a 2D grid.
//!
//! Bees occupy cells, move in cardinal directions, bounce off or stop at
//! walls and fixtures, and linger where the temperature suits them. The
//! temperature field derives from heater and cooler placement through
//! shortest-path distances.
//!
//! This is the top-level facade crate. [`BeeClust`] owns the grid, the
//! heatmap, the parameters, and the RNG, and exposes the three kernels as
//! methods. The sub-crates hold the pieces:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `beeclust-core` | cell codes, [`Cell`], [`Direction`], [`Pos`], [`SimParams`], errors |
//! | [`storage`] | `beeclust-grid` | [`Grid`], [`HeatMap`], BFS job queue, done map |
//! | [`kernels`] | `beeclust-kernels` | distance field, heatmap, swarm, and tick kernels |
//!
//! # Quick start
//!
//! ```
//! use beeclust::prelude::*;
//!
//! let grid = Grid::from_codes(1, 5, vec![6, 0, 2, 0, 7]).unwrap();
//! let mut sim = BeeClust::with_seed(grid, SimParams::default(), 42).unwrap();
//!
//! assert_eq!(sim.heatmap().get(Pos::new(0, 0)), 40.0); // heater cell
//! assert_eq!(sim.bees(), vec![Pos::new(0, 2)]);
//!
//! let moved = sim.tick();
//! assert!(moved <= 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod sim;

/// Core types: cell codes, parameters, errors (`beeclust-core`).
pub use beeclust_core as types;

/// Grid and heatmap storage with kernel scratch structures (`beeclust-grid`).
pub use beeclust_grid as storage;

/// The three compute kernels (`beeclust-kernels`).
pub use beeclust_kernels as kernels;

pub use sim::{BeeClust, SimError};

// The working set, re-exported at the crate root.
pub use beeclust_core::{code, Cell, Direction, GridError, ParamError, Pos, SimParams};
pub use beeclust_grid::{Grid, HeatMap};

/// Common imports for typical usage.
///
/// ```
/// use beeclust::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sim::{BeeClust, SimError};
    pub use beeclust_core::{Cell, Direction, Pos, SimParams};
    pub use beeclust_grid::{Grid, HeatMap};
}
