//! Traits for parameter sweeps.

use super::{GridCell, ParameterGrid};

/// Evaluates every cell of a [`ParameterGrid`].
///
/// Implementations must return one [`GridCell`] per cell spec, in the grid's
/// row-major order, whatever order the cells were computed in.
pub trait SweepOps {
    fn sweep(&self, grid: &ParameterGrid) -> Vec<GridCell>;
}
