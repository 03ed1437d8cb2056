//! Bounded grid geometry for autodrive simulations.
//!
//! This crate defines [`Grid`], the rectangular field cars drive on. It
//! answers containment queries and computes the cell one step ahead of a
//! heading; occupancy is tracked by the engine's car registry, not here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::SpaceError;
pub use grid::Grid;
