//! Car records, their lifecycle state, and the name-keyed registry.
//!
//! A [`Car`] starts [`CarState::Active`] and may transition to
//! [`CarState::Collided`] exactly once; there is no way back. The
//! [`CarRegistry`] keeps cars in registration order and enforces unique
//! names and valid, unoccupied starting cells.

use std::error::Error;
use std::fmt;

use autodrive_core::{CarName, Cell, Heading, ParseError, StepId};
use autodrive_space::{Grid, SpaceError};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Names of the other cars that claimed the same cell in a collision.
pub type Partners = SmallVec<[CarName; 2]>;

// ── CarState ────────────────────────────────────────────────────

/// Lifecycle state of a car.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarState {
    /// The car is still driving.
    Active {
        /// Current cell. Always inside the grid.
        pos: Cell,
        /// Zero-based index of the step in which the car last executed a
        /// forward command (including an absorbed one), or `None` if it
        /// has not moved yet.
        last_moved: Option<StepId>,
    },
    /// The car collided and is frozen for the rest of the run.
    Collided {
        /// The contested cell the car was moving into.
        pos: Cell,
        /// One-based step marker: a collision during step `k` records
        /// `StepId(k + 1)`.
        step: StepId,
        /// Other cars that claimed `pos` in the same step, in scan order.
        partners: Partners,
    },
}

// ── Car ─────────────────────────────────────────────────────────

/// A registered car.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    name: CarName,
    heading: Heading,
    state: CarState,
}

impl Car {
    fn new(name: CarName, pos: Cell, heading: Heading) -> Self {
        Self {
            name,
            heading,
            state: CarState::Active {
                pos,
                last_moved: None,
            },
        }
    }

    /// The car's name.
    pub fn name(&self) -> &CarName {
        &self.name
    }

    /// Current heading. Retained unchanged once the car has collided.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Lifecycle state.
    pub fn state(&self) -> &CarState {
        &self.state
    }

    /// Reported position: the current cell while active, the contested
    /// cell once collided.
    pub fn position(&self) -> Cell {
        match self.state {
            CarState::Active { pos, .. } | CarState::Collided { pos, .. } => pos,
        }
    }

    /// Whether the car is still driving.
    pub fn is_active(&self) -> bool {
        matches!(self.state, CarState::Active { .. })
    }

    /// The position recorded by the last forward move or collision, or
    /// `None` if neither has happened.
    pub fn last_position(&self) -> Option<Cell> {
        match self.state {
            CarState::Active {
                pos,
                last_moved: Some(_),
            } => Some(pos),
            CarState::Active {
                last_moved: None, ..
            } => None,
            CarState::Collided { pos, .. } => Some(pos),
        }
    }

    /// The step marker of the last forward move (zero-based) or
    /// collision (one-based).
    pub fn last_step(&self) -> Option<StepId> {
        match self.state {
            CarState::Active { last_moved, .. } => last_moved,
            CarState::Collided { step, .. } => Some(step),
        }
    }

    /// Cars this one collided with. Empty while active.
    pub fn collided_with(&self) -> &[CarName] {
        match &self.state {
            CarState::Active { .. } => &[],
            CarState::Collided { partners, .. } => partners,
        }
    }

    pub(crate) fn turn(&mut self, heading: Heading) {
        if self.is_active() {
            self.heading = heading;
        }
    }

    pub(crate) fn advance(&mut self, to: Cell, step: StepId) {
        if let CarState::Active { pos, last_moved } = &mut self.state {
            *pos = to;
            *last_moved = Some(step);
        }
    }

    pub(crate) fn collide(&mut self, at: Cell, step: StepId, partners: Partners) {
        debug_assert!(self.is_active(), "car '{}' collided twice", self.name);
        if self.is_active() {
            self.state = CarState::Collided {
                pos: at,
                step,
                partners,
            };
        }
    }
}

// ── RegistryError ───────────────────────────────────────────────

/// Why a starting cell was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The cell is outside the grid.
    OutOfBounds(SpaceError),
    /// Another car already sits on the cell.
    Occupied {
        /// The car occupying the cell.
        by: CarName,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "{e}"),
            Self::Occupied { by } => write!(f, "occupied by car '{by}'"),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            Self::Occupied { .. } => None,
        }
    }
}

/// Errors from registering a car.
///
/// Checks run in variant order: name, then placement, then heading. A
/// failed registration leaves the registry unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A car with this name is already registered.
    DuplicateName {
        /// The duplicated name.
        name: CarName,
    },
    /// The starting cell is out of bounds or occupied.
    InvalidPlacement {
        /// The requested starting cell.
        cell: Cell,
        /// Why it was refused.
        reason: PlacementError,
    },
    /// The heading is not one of `N`, `E`, `S`, `W`.
    InvalidHeading(ParseError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "car with name '{name}' already exists"),
            Self::InvalidPlacement { cell, reason } => {
                write!(f, "car position {cell} is invalid: {reason}")
            }
            Self::InvalidHeading(e) => write!(f, "{e}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPlacement { reason, .. } => Some(reason),
            Self::InvalidHeading(e) => Some(e),
            Self::DuplicateName { .. } => None,
        }
    }
}

impl From<ParseError> for RegistryError {
    fn from(e: ParseError) -> Self {
        Self::InvalidHeading(e)
    }
}

// ── CarRegistry ─────────────────────────────────────────────────

/// All cars on a field, keyed by name, in registration order.
#[derive(Clone, Debug, Default)]
pub struct CarRegistry {
    cars: IndexMap<CarName, Car>,
}

impl CarRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered cars.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Whether no cars are registered.
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Look up a car by name.
    pub fn get(&self, name: &str) -> Option<&Car> {
        self.cars.get(name)
    }

    /// Iterate cars in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.values()
    }

    /// The car currently reported at `cell`, active or not.
    ///
    /// Collided cars are reported at their contested cell.
    pub fn occupant(&self, cell: Cell) -> Option<&Car> {
        self.cars.values().find(|car| car.position() == cell)
    }

    /// Whether any car currently sits at `cell`.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupant(cell).is_some()
    }

    /// Check that `name` is free and `cell` is an in-bounds, unoccupied
    /// starting cell, without registering anything.
    pub fn check_placement(&self, grid: &Grid, name: &str, cell: Cell) -> Result<(), RegistryError> {
        if self.cars.contains_key(name) {
            return Err(RegistryError::DuplicateName {
                name: CarName::from(name),
            });
        }
        if let Err(e) = grid.check_bounds(cell) {
            return Err(RegistryError::InvalidPlacement {
                cell,
                reason: PlacementError::OutOfBounds(e),
            });
        }
        if let Some(other) = self.occupant(cell) {
            return Err(RegistryError::InvalidPlacement {
                cell,
                reason: PlacementError::Occupied {
                    by: other.name.clone(),
                },
            });
        }
        Ok(())
    }

    /// Register an active car at `cell` facing `heading`.
    pub fn place(
        &mut self,
        grid: &Grid,
        name: CarName,
        cell: Cell,
        heading: Heading,
    ) -> Result<&Car, RegistryError> {
        self.check_placement(grid, name.as_str(), cell)?;
        let (index, _) = self
            .cars
            .insert_full(name.clone(), Car::new(name, cell, heading));
        Ok(&self.cars[index])
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.cars.get_index_of(name)
    }

    pub(crate) fn by_index(&self, index: usize) -> &Car {
        &self.cars[index]
    }

    pub(crate) fn by_index_mut(&mut self, index: usize) -> &mut Car {
        &mut self.cars[index]
    }
}
