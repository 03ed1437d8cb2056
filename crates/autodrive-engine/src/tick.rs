//! Step simulator: one synchronized propose → detect → commit pass.
//!
//! Every step runs three ordered phases over the same set of cars:
//!
//! 1. **Propose**: each active car with a command this step yields an
//!    [`Action`]. Turns never take part in collision detection. Forward
//!    moves target the next cell, or the current cell when the grid edge
//!    absorbs the move.
//! 2. **Detect**: forward targets are grouped by cell in scan order. The
//!    first claimant of a cell and every later claimant of the same cell
//!    are all marked as colliding.
//! 3. **Commit**: survivors move; colliders freeze on the contested cell.
//!
//! Car state is only mutated in phase 3.

use autodrive_core::{CarName, Cell, Command, CommandPlan, Heading, StepId};
use autodrive_space::Grid;
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{info, trace, warn};

use crate::registry::{CarRegistry, Partners};

/// What one car intends to do this step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Rotate in place to the given heading.
    Turn(Heading),
    /// Drive into `target`. `absorbed` is set when the edge kept the car
    /// on its current cell.
    Advance { target: Cell, absorbed: bool },
}

#[derive(Clone, Copy, Debug)]
struct Proposal {
    /// Registry index of the proposing car.
    car: usize,
    action: Action,
}

/// Summary of one committed step.
#[derive(Clone, Debug, Default)]
pub(crate) struct StepOutcome {
    pub advances: u64,
    pub absorbed: u64,
    pub turns: u64,
    pub contested_cells: u64,
    pub collided: Vec<CarName>,
}

/// Run step `step` (zero-based) of `plan` against `cars`.
pub(crate) fn run_step(
    grid: &Grid,
    cars: &mut CarRegistry,
    plan: &CommandPlan,
    step: usize,
) -> StepOutcome {
    let proposals = propose(grid, cars, plan, step);
    let claims = claims_by_cell(&proposals);
    commit(cars, &proposals, &claims, StepId(step as u64))
}

fn propose(grid: &Grid, cars: &CarRegistry, plan: &CommandPlan, step: usize) -> Vec<Proposal> {
    let mut proposals = Vec::with_capacity(plan.len());
    for (name, sequence) in plan.iter() {
        let Some(command) = sequence.get(step) else {
            continue;
        };
        let Some(index) = cars.index_of(name.as_str()) else {
            if step == 0 {
                warn!(car = %name, "command plan names an unregistered car, skipping");
            }
            continue;
        };
        let car = cars.by_index(index);
        if !car.is_active() {
            continue;
        }
        let action = match command {
            Command::Left => Action::Turn(car.heading().left()),
            Command::Right => Action::Turn(car.heading().right()),
            Command::Forward => match grid.forward(car.position(), car.heading()) {
                Some(target) => Action::Advance {
                    target,
                    absorbed: false,
                },
                None => Action::Advance {
                    target: car.position(),
                    absorbed: true,
                },
            },
        };
        trace!(step, car = %name, ?action, "proposed");
        proposals.push(Proposal { car: index, action });
    }
    proposals
}

/// Group forward proposals by target cell, preserving scan order both
/// across cells and among claimants of one cell.
///
/// Returns indices into `proposals`. Every cell with more than one
/// claimant is a collision involving all of them, the first claimant
/// included.
fn claims_by_cell(proposals: &[Proposal]) -> IndexMap<Cell, SmallVec<[usize; 2]>> {
    let mut claims: IndexMap<Cell, SmallVec<[usize; 2]>> = IndexMap::new();
    for (i, proposal) in proposals.iter().enumerate() {
        if let Action::Advance { target, .. } = proposal.action {
            claims.entry(target).or_default().push(i);
        }
    }
    claims
}

fn commit(
    cars: &mut CarRegistry,
    proposals: &[Proposal],
    claims: &IndexMap<Cell, SmallVec<[usize; 2]>>,
    step: StepId,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    for proposal in proposals {
        if let Action::Turn(heading) = proposal.action {
            cars.by_index_mut(proposal.car).turn(heading);
            outcome.turns += 1;
        }
    }

    for (&cell, claimants) in claims {
        if claimants.len() == 1 {
            let proposal = &proposals[claimants[0]];
            if let Action::Advance { absorbed, .. } = proposal.action {
                if absorbed {
                    outcome.absorbed += 1;
                } else {
                    outcome.advances += 1;
                }
            }
            cars.by_index_mut(proposal.car).advance(cell, step);
            continue;
        }

        outcome.contested_cells += 1;
        let names: SmallVec<[CarName; 2]> = claimants
            .iter()
            .map(|&i| cars.by_index(proposals[i].car).name().clone())
            .collect();
        info!(step = step.0, %cell, cars = ?names, "collision");

        for (k, &i) in claimants.iter().enumerate() {
            let partners: Partners = names
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != k)
                .map(|(_, n)| n.clone())
                .collect();
            cars.by_index_mut(proposals[i].car)
                .collide(cell, step.next(), partners);
            outcome.collided.push(names[k].clone());
        }
    }

    outcome
}
