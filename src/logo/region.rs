//! Outlines of the three coloured regions of one ring.
//!
//! Coordinates use the canvas convention: y grows downwards, so the point
//! `(0, −Ro)` is the top of the ring.

use super::diagonal::DiagonalLine;
use super::params::LogoParameters;
use crate::errors::DomainError;
use crate::float_types::{Real, checked_leg};
use crate::path::RegionPath;
use nalgebra::Point2;
use std::fmt;

/// One of the three regions the ring is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Notched wedge on the left, running over the top.
    Orange,
    /// Half-turn image of orange.
    Green,
    /// Band between the two diagonals, capped by the outer circle.
    Blue,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Orange, Region::Green, Region::Blue];

    pub const fn name(self) -> &'static str {
        match self {
            Region::Orange => "orange",
            Region::Green => "green",
            Region::Blue => "blue",
        }
    }

    /// Fill colour of the reference logo.
    pub const fn fill(self) -> &'static str {
        match self {
            Region::Orange => "#E4572E",
            Region::Green => "#A1C181",
            Region::Blue => "#4F6D7A",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl LogoParameters {
    /// Builds the outline of `region`, solving the diagonal when needed.
    pub fn region(&self, region: Region) -> Result<RegionPath, DomainError> {
        match region {
            Region::Orange => orange(self),
            Region::Green => green(self),
            Region::Blue => blue(self, &DiagonalLine::solve(self)?),
        }
    }
}

/// Builds one region from a raw `(W, Ri, G)` triple.
pub fn build_region(
    width: Real,
    inner_radius: Real,
    gap: Real,
    region: Region,
) -> Result<RegionPath, DomainError> {
    LogoParameters::new(width, inner_radius, gap)?.region(region)
}

/// Move to the top of the ring, drop to the inner circle, follow it
/// counter-clockwise down to the notch at `x = −W·(2G+1)`, step out to the
/// outer circle and follow it clockwise back to the top.
pub fn orange(params: &LogoParameters) -> Result<RegionPath, DomainError> {
    let ri = params.inner_radius();
    let ro = params.outer_radius();
    let x_boundary = -params.notch_offset();

    let y_inner = checked_leg(ri, x_boundary, "orange inner notch")?;
    let y_outer = checked_leg(ro, x_boundary, "orange outer notch")?;

    Ok(RegionPath::builder(Point2::new(0.0, -ro))
        .line_to(Point2::new(0.0, -ri))
        .arc_to(Point2::new(x_boundary, y_inner), ri, false, false)
        .line_to(Point2::new(x_boundary, y_outer))
        .arc_to(Point2::new(0.0, -ro), ro, false, true)
        .close())
}

/// Orange turned 180° about the origin. A half turn keeps orientation, so
/// the arc flags stay exactly as orange has them.
pub fn green(params: &LogoParameters) -> Result<RegionPath, DomainError> {
    Ok(orange(params)?.rotate_half_turn())
}

/// The ten corners of the blue band.
///
/// `p1..p5` trace the half on the upper right (canvas y negative); `p6..p10`
/// are their exact negations.
/// ```text
/// p1 = (GW, −sqrt(Ro² − GW²))
/// p2 = (W·(G+1), −sqrt(Ro² − p2x²))
/// p3 = (p2x, s·GW − c)
/// p4 = (GW, s·GW − c) + W·n      n = (−s, 1)/sqrt(s²+1)
/// p5 = (−GW, −s·GW + c)
/// ```
pub fn blue_vertices(
    params: &LogoParameters,
    diagonal: &DiagonalLine,
) -> Result<[Point2<Real>; 10], DomainError> {
    let w = params.width();
    let ro = params.outer_radius();
    let gw = params.gap_width();
    let partner = diagonal.partner();

    let p1 = Point2::new(gw, -checked_leg(ro, gw, "blue outer start")?);
    let p2x = w * (params.gap() + 1.0);
    let p2 = Point2::new(p2x, -checked_leg(ro, p2x, "blue outer end")?);
    let p3 = Point2::new(p2x, partner.y_at(gw));
    let p4 = Point2::new(gw, partner.y_at(gw)) + diagonal.unit_normal() * w;
    let p5 = Point2::new(-gw, diagonal.y_at(-gw));

    let vertices = [p1, p2, p3, p4, p5, -p1, -p2, -p3, -p4, -p5];
    log::trace!("blue vertices for {params:?}: {vertices:?}");
    Ok(vertices)
}

/// Blue outline for an already solved diagonal. Every arc is the short way
/// round with positive sweep.
pub fn blue(params: &LogoParameters, diagonal: &DiagonalLine) -> Result<RegionPath, DomainError> {
    let [p1, p2, p3, p4, p5, p6, p7, p8, p9, p10] = blue_vertices(params, diagonal)?;
    let ro = params.outer_radius();
    let w = params.width();

    Ok(RegionPath::builder(p1)
        .arc_to(p2, ro, false, true)
        .line_to(p3)
        .arc_to(p4, w, false, true)
        .line_to(p5)
        .line_to(p6)
        .arc_to(p7, ro, false, true)
        .line_to(p8)
        .arc_to(p9, w, false, true)
        .line_to(p10)
        .close())
}
