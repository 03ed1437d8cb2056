//! autodrive: a lockstep simulation of cars driving on a bounded grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the autodrive sub-crates. For most users, adding `autodrive` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use autodrive::prelude::*;
//!
//! let mut field = Field::new(10, 10).unwrap();
//! field.add_car("A", 1, 2, "N").unwrap();
//! field.add_car("B", 7, 8, "W").unwrap();
//!
//! let mut plan = CommandPlan::new();
//! plan.insert("A", "FFRFFFFRRL".parse().unwrap());
//! plan.insert("B", "FFLFFFFFFF".parse().unwrap());
//! let metrics = field.simulate(&plan);
//! assert_eq!(metrics.steps, 10);
//!
//! let a = field.car("A").unwrap();
//! assert!(!a.is_active());
//! assert_eq!(a.position(), Cell::new(5, 4));
//! assert_eq!(a.last_step(), Some(StepId(7)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `autodrive-core` | Names, cells, steps, headings, commands |
//! | [`space`] | `autodrive-space` | Grid bounds and forward-cell geometry |
//! | [`engine`] | `autodrive-engine` | Field, car registry, step simulator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`autodrive-core`).
///
/// Car names, cells, step counters, headings, command sequences, and the
/// ordered [`types::CommandPlan`].
pub use autodrive_core as types;

/// Grid geometry (`autodrive-space`).
///
/// [`space::Grid`] answers bounds queries and computes forward cells.
pub use autodrive_space as space;

/// Simulation engine (`autodrive-engine`).
///
/// [`engine::Field`] registers cars and runs command plans step by step.
pub use autodrive_engine as engine;

/// Common imports for typical autodrive usage.
///
/// ```rust
/// use autodrive::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use autodrive_core::{
        CarName, Cell, Command, CommandPlan, CommandSequence, Heading, StepId,
    };

    // Errors
    pub use autodrive_core::ParseError;
    pub use autodrive_engine::{ConfigError, PlacementError, RegistryError};
    pub use autodrive_space::SpaceError;

    // Space
    pub use autodrive_space::Grid;

    // Engine
    pub use autodrive_engine::{Car, CarState, Field, FieldConfig, SimulationMetrics};
}
