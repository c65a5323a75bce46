//! Serial implementation of parameter sweeps.

use super::traits::SweepOps;
use super::{GridCell, ParameterGrid};

/// Serial implementation of `SweepOps`.
pub struct SerialSweep;

impl Default for SerialSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialSweep {
    pub const fn new() -> Self {
        Self
    }
}

impl SweepOps for SerialSweep {
    fn sweep(&self, grid: &ParameterGrid) -> Vec<GridCell> {
        grid.cells().iter().map(|spec| spec.evaluate()).collect()
    }
}
