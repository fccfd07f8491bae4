//! Core types for the BeeClust swarm simulation.
//!
//! This is the leaf crate with zero dependencies. It defines the packed
//! cell-code encoding shared by every kernel, the typed view of that
//! encoding ([`Cell`], [`Direction`]), grid coordinates ([`Pos`]),
//! simulation parameters ([`SimParams`]), and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod params;

// Re-export core types at crate root for convenience.
pub use cell::{code, Cell, Direction, Pos};
pub use error::{GridError, ParamError};
pub use params::SimParams;
