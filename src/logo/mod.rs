//! Geometry of one ring logo: parameters, the diagonal solver and the region
//! outlines.

pub mod diagonal;
pub mod params;
pub mod region;

pub use diagonal::{DiagonalLine, solve_diagonal};
pub use params::{LogoParameters, min_inner_radius};
pub use region::{Region, blue_vertices, build_region};

use crate::errors::DomainError;
use crate::float_types::Real;
use crate::path::RegionPath;

/// All three outlines for one parameter set, sharing a single diagonal solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub params: LogoParameters,
    pub diagonal: DiagonalLine,
    pub orange: RegionPath,
    pub green: RegionPath,
    pub blue: RegionPath,
}

impl Logo {
    pub fn build(params: LogoParameters) -> Result<Self, DomainError> {
        let diagonal = DiagonalLine::solve(&params)?;
        let orange = region::orange(&params)?;
        let green = orange.rotate_half_turn();
        let blue = region::blue(&params, &diagonal)?;
        Ok(Self {
            params,
            diagonal,
            orange,
            green,
            blue,
        })
    }

    pub const fn region(&self, region: Region) -> &RegionPath {
        match region {
            Region::Orange => &self.orange,
            Region::Green => &self.green,
            Region::Blue => &self.blue,
        }
    }

    /// `(region, path data)` for each region in drawing order.
    pub fn path_data(&self) -> [(Region, String); 3] {
        Region::ALL.map(|region| (region, self.region(region).to_string()))
    }
}

/// Builds a whole logo from a raw `(W, Ri, G)` triple.
pub fn build_logo(width: Real, inner_radius: Real, gap: Real) -> Result<Logo, DomainError> {
    Logo::build(LogoParameters::new(width, inner_radius, gap)?)
}
