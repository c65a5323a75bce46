//! Grids of logo variants for exploring the parameter space.
//!
//! Every cell is a pure function of its own `(W, Ri, G)`, so a sweep can run
//! cells in any order or in parallel. An infeasible cell yields its
//! [`DomainError`] in place; it never aborts the rest of the grid.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use serial::SerialSweep;
pub use traits::SweepOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSweep;

use crate::errors::DomainError;
use crate::float_types::Real;
use crate::logo::{Logo, build_logo, min_inner_radius};

/// Raw parameters for one cell. Validation happens when the cell is
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSpec {
    pub row: usize,
    pub col: usize,
    pub width: Real,
    pub inner_radius: Real,
    pub gap: Real,
}

impl CellSpec {
    pub fn evaluate(&self) -> GridCell {
        let result = build_logo(self.width, self.inner_radius, self.gap);
        if let Err(err) = &result {
            log::warn!(
                "skipping cell ({}, {}) with W={} Ri={} G={}: {err}",
                self.row,
                self.col,
                self.width,
                self.inner_radius,
                self.gap
            );
        }
        GridCell { spec: *self, result }
    }
}

/// Outcome of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub spec: CellSpec,
    pub result: Result<Logo, DomainError>,
}

impl GridCell {
    pub const fn row(&self) -> usize {
        self.spec.row
    }

    pub const fn col(&self) -> usize {
        self.spec.col
    }

    pub fn logo(&self) -> Option<&Logo> {
        self.result.as_ref().ok()
    }
}

/// A `rows × cols` layout of cell specs in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CellSpec>,
}

impl ParameterGrid {
    /// Rows vary the inner radius, columns vary the gap, width is fixed.
    ///
    /// # Example
    /// ```
    /// use ringlogo::grid::ParameterGrid;
    /// let grid = ParameterGrid::from_axes(100.0, &[180.0, 220.0, 260.0], &[0.2, 0.3, 0.35]);
    /// assert_eq!((grid.rows(), grid.cols()), (3, 3));
    /// ```
    pub fn from_axes(width: Real, inner_radii: &[Real], gaps: &[Real]) -> Self {
        let cells = inner_radii
            .iter()
            .enumerate()
            .flat_map(|(row, &inner_radius)| {
                gaps.iter().enumerate().map(move |(col, &gap)| CellSpec {
                    row,
                    col,
                    width,
                    inner_radius,
                    gap,
                })
            })
            .collect();
        Self {
            rows: inner_radii.len(),
            cols: gaps.len(),
            cells,
        }
    }

    /// Rows vary the gap; each column sets the inner radius to
    /// `floor(W·(2G+1) + offset)`, i.e. a fixed distance above the smallest
    /// feasible radius for that row.
    pub fn edge_offsets(width: Real, gaps: &[Real], offsets: &[Real]) -> Self {
        let cells = gaps
            .iter()
            .enumerate()
            .flat_map(|(row, &gap)| {
                let minimum = min_inner_radius(width, gap);
                offsets.iter().enumerate().map(move |(col, &offset)| CellSpec {
                    row,
                    col,
                    width,
                    inner_radius: (minimum + offset).floor(),
                    gap,
                })
            })
            .collect();
        Self {
            rows: gaps.len(),
            cols: offsets.len(),
            cells,
        }
    }

    /// Hand-picked `(W, Ri, G)` triples laid out row-major, `cols` per row.
    pub fn from_triples(cols: usize, triples: &[(Real, Real, Real)]) -> Self {
        let cols = cols.max(1);
        let cells = triples
            .iter()
            .enumerate()
            .map(|(i, &(width, inner_radius, gap))| CellSpec {
                row: i / cols,
                col: i % cols,
                width,
                inner_radius,
                gap,
            })
            .collect();
        Self {
            rows: triples.len().div_ceil(cols),
            cols,
            cells,
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[CellSpec] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Evaluates every cell, in parallel when the `parallel` feature is on.
    pub fn evaluate(&self) -> Vec<GridCell> {
        #[cfg(feature = "parallel")]
        {
            ParallelSweep::new().sweep(self)
        }
        #[cfg(not(feature = "parallel"))]
        {
            SerialSweep::new().sweep(self)
        }
    }
}
