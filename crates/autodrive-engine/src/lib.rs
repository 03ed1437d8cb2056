//! Lockstep simulation engine for autodrive fields.
//!
//! Provides [`Field`], which owns a [`Grid`](autodrive_space::Grid) and a
//! [`CarRegistry`], validates car placement, and runs command plans one
//! synchronized step at a time. Each step proposes every car's move,
//! resolves same-cell collisions, then commits the results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod field;
pub mod metrics;
pub mod registry;
pub(crate) mod tick;

pub use config::{ConfigError, FieldConfig};
pub use field::Field;
pub use metrics::SimulationMetrics;
pub use registry::{Car, CarRegistry, CarState, PlacementError, RegistryError};
