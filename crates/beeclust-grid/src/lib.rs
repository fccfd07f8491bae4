//! In-memory storage for the BeeClust simulation.
//!
//! [`Grid`] holds the packed cell codes, [`HeatMap`] the per-cell
//! temperatures. Both are fixed-shape, row-major planes. The kernels'
//! per-call scratch structures live here too: the bounded [`JobQueue`]
//! feeding the BFS passes and the [`DoneMap`] visitation mask.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod done;
pub mod grid;
pub mod heatmap;
pub mod queue;

pub use done::DoneMap;
pub use grid::Grid;
pub use heatmap::HeatMap;
pub use queue::{Job, JobQueue};
