//! Parallel implementation of parameter sweeps.

use super::traits::SweepOps;
use super::{GridCell, ParameterGrid};
use rayon::prelude::*;

/// Parallel implementation of `SweepOps`. Each cell is independent; rayon's
/// indexed `collect` keeps the output in row-major order.
pub struct ParallelSweep;

impl Default for ParallelSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelSweep {
    pub const fn new() -> Self {
        Self
    }
}

impl SweepOps for ParallelSweep {
    fn sweep(&self, grid: &ParameterGrid) -> Vec<GridCell> {
        grid.cells().par_iter().map(|spec| spec.evaluate()).collect()
    }
}
