//! Test utilities for autodrive development.
//!
//! Provides [`Scenario`], a builder for a field plus its command plan, and
//! a handful of ready-made [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use autodrive_core::{CommandPlan, CommandSequence};
use autodrive_engine::{Field, SimulationMetrics};

/// A field with its cars and the commands each car will run.
///
/// Cars are added to the plan in the order they are registered, which is
/// also the proposal scan order during simulation.
///
/// # Panics
///
/// Every builder method panics on invalid input. Scenarios are test
/// fixtures; a bad one is a bug in the test.
pub struct Scenario {
    pub field: Field,
    pub plan: CommandPlan,
}

impl Scenario {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            field: Field::new(width, height)
                .unwrap_or_else(|e| panic!("invalid scenario field {width}x{height}: {e}")),
            plan: CommandPlan::new(),
        }
    }

    /// Register a car and queue its commands.
    pub fn car(mut self, name: &str, x: i32, y: i32, heading: &str, commands: &str) -> Self {
        self.field
            .add_car(name, x, y, heading)
            .unwrap_or_else(|e| panic!("cannot add car '{name}': {e}"));
        let sequence: CommandSequence = commands
            .parse()
            .unwrap_or_else(|e| panic!("bad commands for '{name}': {e}"));
        self.plan.insert(name, sequence);
        self
    }

    /// Run the plan and return the metrics.
    pub fn run(&mut self) -> SimulationMetrics {
        self.field.simulate(&self.plan)
    }

    /// Run the plan and hand back the finished field.
    pub fn finish(mut self) -> Field {
        self.run();
        self.field
    }
}
