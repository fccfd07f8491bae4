//! Compute kernels of the BeeClust simulation.
//!
//! Three kernels over a shared grid, executed synchronously and in place:
//!
//! 1. [`recalculate_heat`] — derive per-cell steady-state temperatures from
//!    heater/cooler shortest-path distances.
//! 2. [`swarms`] — partition bee cells into 4-connected components.
//! 3. [`tick`] — advance every bee by one discrete step.
//!
//! Kernels treat their inputs as well-formed (the facade validates); there
//! are no recoverable error conditions here. Scratch buffers — distance
//! fields, the BFS [`JobQueue`](beeclust_grid::JobQueue), the
//! [`DoneMap`](beeclust_grid::DoneMap) — are allocated per call and freed
//! on return.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod heat;
pub mod swarm;
pub mod tick;

pub use distance::{distance_field, HeatSource};
pub use heat::recalculate_heat;
pub use swarm::swarms;
pub use tick::tick;
