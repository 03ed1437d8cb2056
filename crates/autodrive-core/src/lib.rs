//! Core types for the autodrive lockstep grid simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: car identities,
//! grid cells, step counters, headings, drive commands, and the parse
//! errors raised when those are read from text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod heading;
pub mod id;

pub use command::{Command, CommandPlan, CommandSequence};
pub use error::ParseError;
pub use heading::Heading;
pub use id::{CarName, Cell, StepId};
