//! Error types

use crate::float_types::Real;

/// Raised when a `(W, Ri, G)` triple admits no real, non-degenerate logo.
///
/// These are deterministic preconditions on the inputs: retrying with the
/// same parameters always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// (InvalidParameter) NaN, infinite, or non-positive input
    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: Real },
    /// (GapOutOfRange) The gap proportion must lie strictly inside (0, 0.5)
    #[error("gap proportion {0} is outside (0, 0.5)")]
    GapOutOfRange(Real),
    /// (InnerRadiusTooSmall) `Ri < W·(2G+1)`
    #[error(
        "inner radius too small for given width/gap ({inner_radius} < {minimum}): no real diagonal solution"
    )]
    InnerRadiusTooSmall { inner_radius: Real, minimum: Real },
    /// (NegativeDiscriminant) The diagonal slope quadratic has no real root
    #[error("diagonal slope quadratic has negative discriminant {0}")]
    NegativeDiscriminant(Real),
    /// (NegativeRadicand) A vertex coordinate needs the square root of a negative number.
    /// `value` is relative to the squared hypotenuse.
    #[error("negative radicand {value} while computing {quantity}")]
    NegativeRadicand { quantity: &'static str, value: Real },
    /// (NonFinite) Finite inputs overflowed or underflowed somewhere along the way
    #[error("{0} is not finite for these parameters")]
    NonFinite(&'static str),
}

/// Problems turning path data text back into a [`RegionPath`](crate::path::RegionPath).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("path data is malformed near `{0}`")]
    Malformed(String),
    #[error("path must begin with an absolute move")]
    MissingMoveTo,
    #[error("path must end with a close command")]
    NotClosed,
    #[error("elliptical arcs are not supported (rx = {rx}, ry = {ry})")]
    EllipticalArc { rx: Real, ry: Real },
}
