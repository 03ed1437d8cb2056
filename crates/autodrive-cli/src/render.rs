//! Text rendering of car lists and simulation results.

use autodrive_core::{CarName, CommandPlan};
use autodrive_engine::{Car, CarState};

/// `-- A, (1,2) N, FFRFFFFRRL`
pub fn car_line(car: &Car, plan: &CommandPlan) -> String {
    let commands = plan
        .get(car.name().as_str())
        .map(ToString::to_string)
        .unwrap_or_default();
    format!(
        "-- {}, {} {}, {}",
        car.name(),
        car.position(),
        car.heading(),
        commands
    )
}

/// `-- A: (5,4) S` for an active car, or
/// `-- A: collides with B at (5,4) at step 7` for a collided one.
pub fn result_line(car: &Car) -> String {
    match car.state() {
        CarState::Active { pos, .. } => format!("-- {}: {} {}", car.name(), pos, car.heading()),
        CarState::Collided {
            pos,
            step,
            partners,
        } => format!(
            "-- {}: collides with {} at {} at step {}",
            car.name(),
            join(partners),
            pos,
            step
        ),
    }
}

fn join(names: &[CarName]) -> String {
    names
        .iter()
        .map(CarName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
