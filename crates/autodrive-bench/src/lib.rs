//! Benchmark workloads for the autodrive simulation.
//!
//! Every workload is generated from a seed, so two calls with the same
//! arguments produce identical fields and plans:
//!
//! - [`reference_workload`]: 100x100 field, 200 cars, 500 commands each
//! - [`stress_workload`]: 316x316 field (~100K cells), 2000 cars, 1000 commands each
//! - [`jam_workload`]: 20x20 field packed with 200 cars, so most runs end in collisions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use autodrive_core::{Cell, Command, CommandPlan, CommandSequence, Heading};
use autodrive_engine::{ConfigError, Field};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A populated field and the plan to run on it.
#[derive(Clone, Debug)]
pub struct Workload {
    /// Field with every car already registered.
    pub field: Field,
    /// One command sequence per registered car, in registration order.
    pub plan: CommandPlan,
}

/// 100x100 field with 200 cars and 500 commands per car.
pub fn reference_workload(seed: u64) -> Result<Workload, ConfigError> {
    random_workload(100, 100, 200, 500, seed)
}

/// 316x316 field with 2000 cars and 1000 commands per car.
pub fn stress_workload(seed: u64) -> Result<Workload, ConfigError> {
    random_workload(316, 316, 2000, 1000, seed)
}

/// 20x20 field with 200 cars: half the cells start occupied.
pub fn jam_workload(seed: u64) -> Result<Workload, ConfigError> {
    random_workload(20, 20, 200, 100, seed)
}

/// Build a seeded random workload.
///
/// Cars get distinct random cells and headings. `cars` is capped at the
/// field's cell count. Commands are drawn 3:1:1 forward/left/right so cars
/// cover ground.
pub fn random_workload(
    width: i32,
    height: i32,
    cars: usize,
    commands: usize,
    seed: u64,
) -> Result<Workload, ConfigError> {
    let mut field = Field::new(width, height)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cars = cars.min(field.grid().cell_count());

    let mut plan = CommandPlan::new();
    for i in 0..cars {
        let name = format!("car-{i}");
        let heading = Heading::CYCLE[rng.gen_range(0..4)];
        // Rejection sampling; terminates because cars <= cell count.
        loop {
            let cell = Cell::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if field.place_car(name.as_str(), cell, heading).is_ok() {
                break;
            }
        }
        plan.insert(name, random_commands(&mut rng, commands));
    }
    Ok(Workload { field, plan })
}

fn random_commands(rng: &mut ChaCha8Rng, len: usize) -> CommandSequence {
    (0..len)
        .map(|_| match rng.gen_range(0..5) {
            0 => Command::Left,
            1 => Command::Right,
            _ => Command::Forward,
        })
        .collect()
}
