//! Ready-made scenarios used across the workspace's tests.
//!
//! - [`swap_pass`]: two cars trade cells on a 2x2 field without colliding.
//! - [`head_on`]: two cars meet in the middle of a 3x3 field.
//! - [`crossroads`]: the 10x10 two-car run from the interactive driver's
//!   walkthrough, ending in a collision at step 7.

use crate::Scenario;

/// A at (0,0) N and B at (0,1) S, both `FF`. They pass through each other
/// in step 0; in step 1 both face off the edge and stay, ending on each
/// other's starting cell.
pub fn swap_pass() -> Scenario {
    Scenario::new(2, 2)
        .car("A", 0, 0, "N", "FF")
        .car("B", 0, 1, "S", "FF")
}

/// A at (1,0) N and B at (1,2) S, both `F`. Both claim (1,1) in step 0.
pub fn head_on() -> Scenario {
    Scenario::new(3, 3)
        .car("A", 1, 0, "N", "F")
        .car("B", 1, 2, "S", "F")
}

/// A at (1,2) N running `FFRFFFFRRL`, B at (7,8) W running `FFLFFFFFFF`
/// on a 10x10 field. Both claim (5,4) in step 6 (reported as step 7).
pub fn crossroads() -> Scenario {
    Scenario::new(10, 10)
        .car("A", 1, 2, "N", "FFRFFFFRRL")
        .car("B", 7, 8, "W", "FFLFFFFFFF")
}
