//! Parametric geometry for a **ring logo**: an annulus split into an orange,
//! a green and a blue region by two point-symmetric diagonal cuts.
//!
//! Three scalars fix the whole design:
//! - `W`: radial width of the ring,
//! - `Ri`: inner radius (`Ro = Ri + W`),
//! - `G`: gap proportion in `(0, 0.5)`, how far round the ring the straight cut starts.
//!
//! From these the crate solves the diagonal cut line analytically, computes
//! every boundary vertex, and emits each region as `M/L/A/Z` path data.
//! Everything is a pure function of `(W, Ri, G)`.
//!
//! ```
//! use ringlogo::{Region, build_region, emit};
//!
//! let blue = build_region(100.0, 220.0, 0.3, Region::Blue).unwrap();
//! let data = emit(&blue);
//! assert!(data.starts_with("M ") && data.ends_with(" Z"));
//! ```
//!
//! # Features
//! #### Default
//! - **path-parse**: parse emitted path data back into a [`RegionPath`] using `nom`
//!
//! #### Optional
//! - **parallel**: evaluate [`grid::ParameterGrid`] cells with rayon

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod grid;
pub mod logo;
pub mod path;

pub use errors::{DomainError, PathError};
pub use logo::{
    DiagonalLine, Logo, LogoParameters, Region, build_logo, build_region, min_inner_radius,
    solve_diagonal,
};
pub use path::{PathSegment, RegionPath, emit};

#[cfg(feature = "path-parse")]
pub use path::parse_path;
