//! The simulation field: a grid, the cars on it, and the run loop.
//!
//! # Ownership model
//!
//! [`Field`] exclusively owns its [`CarRegistry`]. Registration and
//! simulation take `&mut self`; read accessors hand out shared borrows,
//! so no car can change while a caller holds a reference to it.
//!
//! # Lifecycle
//!
//! Build a field, register cars, then call [`simulate()`](Field::simulate)
//! with a [`CommandPlan`]. Cars keep their final state after the run. To
//! start over, drop the field and build a new one.

use std::time::Instant;

use autodrive_core::{CarName, Cell, CommandPlan, Heading};
use autodrive_space::Grid;
use tracing::{debug, info};

use crate::config::{ConfigError, FieldConfig};
use crate::metrics::SimulationMetrics;
use crate::registry::{Car, CarRegistry, RegistryError};
use crate::tick;

/// A bounded grid with registered cars.
///
/// # Example
///
/// ```
/// use autodrive_core::{Cell, CommandPlan, CommandSequence};
/// use autodrive_engine::Field;
///
/// let mut field = Field::new(3, 3).unwrap();
/// field.add_car("A", 1, 0, "N").unwrap();
/// field.add_car("B", 1, 2, "S").unwrap();
///
/// let forward: CommandSequence = "F".parse().unwrap();
/// let plan: CommandPlan = [("A", forward.clone()), ("B", forward)].into_iter().collect();
/// field.simulate(&plan);
///
/// let a = field.car("A").unwrap();
/// assert!(!a.is_active());
/// assert_eq!(a.position(), Cell::new(1, 1));
/// assert_eq!(a.collided_with()[0].as_str(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    grid: Grid,
    cars: CarRegistry,
}

impl Field {
    /// Create an empty field of `width` by `height` cells.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Space`] wrapping
    /// `SpaceError::InvalidDimensions` if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        Self::from_config(FieldConfig { width, height })
    }

    /// Create an empty field from a validated [`FieldConfig`].
    pub fn from_config(config: FieldConfig) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        debug!(width = grid.width(), height = grid.height(), "field created");
        Ok(Self {
            grid,
            cars: CarRegistry::new(),
        })
    }

    /// The field's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether `(x, y)` lies inside the field.
    pub fn within_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.within_bounds(x, y)
    }

    /// Whether any registered car, active or collided, is reported at `(x, y)`.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cars.is_occupied(Cell::new(x, y))
    }

    /// Register a car from driver input.
    ///
    /// `heading` must be exactly one of `N`, `E`, `S`, `W`.
    ///
    /// # Errors
    ///
    /// Checked in this order, and a failure leaves the field unchanged:
    /// - [`RegistryError::DuplicateName`] if `name` is taken.
    /// - [`RegistryError::InvalidPlacement`] if `(x, y)` is out of bounds
    ///   or occupied.
    /// - [`RegistryError::InvalidHeading`] if `heading` does not parse.
    pub fn add_car(
        &mut self,
        name: impl Into<CarName>,
        x: i32,
        y: i32,
        heading: &str,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let cell = Cell::new(x, y);
        self.cars.check_placement(&self.grid, name.as_str(), cell)?;
        let heading: Heading = heading.parse()?;
        self.place_car(name, cell, heading).map(|_| ())
    }

    /// Register a car with an already-typed heading.
    pub fn place_car(
        &mut self,
        name: impl Into<CarName>,
        cell: Cell,
        heading: Heading,
    ) -> Result<&Car, RegistryError> {
        let car = self.cars.place(&self.grid, name.into(), cell, heading)?;
        debug!(car = %car.name(), %cell, %heading, "car registered");
        Ok(car)
    }

    /// Look up a car by name.
    pub fn car(&self, name: &str) -> Option<&Car> {
        self.cars.get(name)
    }

    /// Iterate cars in registration order.
    pub fn cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    /// The car registry.
    pub fn registry(&self) -> &CarRegistry {
        &self.cars
    }

    /// Run `plan` to completion.
    ///
    /// Executes `plan.max_len()` lockstep steps. In step `k` every active
    /// car whose sequence has a `k`-th command executes it; turns are
    /// applied in place, forward moves are resolved together and any cars
    /// claiming the same cell collide and freeze there.
    ///
    /// Plan entries without a registered car are skipped. The run cannot
    /// fail; the returned metrics summarize what happened.
    pub fn simulate(&mut self, plan: &CommandPlan) -> SimulationMetrics {
        let start = Instant::now();
        let mut metrics = SimulationMetrics::default();

        let steps = plan.max_len();
        for step in 0..steps {
            let outcome = tick::run_step(&self.grid, &mut self.cars, plan, step);
            debug!(
                step,
                advances = outcome.advances,
                absorbed = outcome.absorbed,
                turns = outcome.turns,
                collided = outcome.collided.len(),
                "step committed"
            );
            metrics.record_step(&outcome);
        }

        metrics.total_us = start.elapsed().as_micros() as u64;
        info!(
            steps = metrics.steps,
            cars_collided = metrics.cars_collided,
            total_us = metrics.total_us,
            "simulation finished"
        );
        metrics
    }
}
