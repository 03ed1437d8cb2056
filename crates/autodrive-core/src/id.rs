//! Strongly-typed identifiers: [`CarName`], [`Cell`], and [`StepId`].

use std::borrow::Borrow;
use std::fmt;

/// Unique name of a car within a field.
///
/// Names are compared exactly (case-sensitive, no trimming). The registry
/// keys cars by name, so `CarName` borrows as `str` to allow lookups
/// without allocating.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarName(String);

impl CarName {
    /// Wrap a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CarName {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for CarName {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl Borrow<str> for CarName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A cell on the field, addressed as `(x, y)`.
///
/// `x` grows to the east and `y` grows to the north; `(0, 0)` is the
/// south-west corner. Cells are plain values and may lie outside any
/// particular field; bounds are checked by the space layer.
///
/// # Examples
///
/// ```
/// use autodrive_core::Cell;
///
/// let c = Cell::new(2, 3);
/// assert_eq!(c.offset(1, -1), Cell::new(3, 2));
/// assert_eq!(c.to_string(), "(2,3)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing east.
    pub x: i32,
    /// Row, growing north.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    ///
    /// Saturates at the `i32` range; a saturated cell is never inside a
    /// field, so callers see it as out of bounds.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Index of a lockstep simulation step.
///
/// Steps are counted from zero within one call to the simulator. Collision
/// reports use the one-based form (`StepId(k + 1)` for a collision during
/// step `k`); see the engine's `CarState` docs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The following step.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
