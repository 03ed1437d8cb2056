//! Per-run counters for the simulation engine.
//!
//! [`SimulationMetrics`] summarizes one [`Field::simulate`](crate::Field::simulate)
//! call. The counters are observational only; they never feed back into
//! car state.

/// Counters collected during one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationMetrics {
    /// Number of lockstep steps executed (the longest sequence length).
    pub steps: u64,
    /// Forward commands that moved a car to a new cell.
    pub advances: u64,
    /// Forward commands absorbed at the grid edge (car stayed put).
    pub absorbed: u64,
    /// Left and right turns applied.
    pub turns: u64,
    /// Distinct contested cells, summed over steps.
    pub collisions: u64,
    /// Cars deactivated by collisions during this run.
    pub cars_collided: u64,
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
}

impl SimulationMetrics {
    pub(crate) fn record_step(&mut self, step: &crate::tick::StepOutcome) {
        self.steps += 1;
        self.advances += step.advances;
        self.absorbed += step.absorbed;
        self.turns += step.turns;
        self.collisions += step.contested_cells;
        self.cars_collided += step.collided.len() as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SimulationMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.advances, 0);
        assert_eq!(m.absorbed, 0);
        assert_eq!(m.turns, 0);
        assert_eq!(m.collisions, 0);
        assert_eq!(m.cars_collided, 0);
        assert_eq!(m.total_us, 0);
    }
}
