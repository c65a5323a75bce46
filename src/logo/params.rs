//! Validated `(W, Ri, G)` triples.

use crate::errors::DomainError;
use crate::float_types::{Real, tolerance};

/// Smallest inner radius for which the notch boundary `x = ±W·(2G+1)` still
/// meets the inner circle.
pub fn min_inner_radius(width: Real, gap: Real) -> Real {
    width * (2.0 * gap + 1.0)
}

/// Ring width `W`, inner radius `Ri` and gap proportion `G` of one logo.
///
/// Only constructible through [`LogoParameters::new`], so every value of this
/// type describes a drawable logo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoParameters {
    width: Real,
    inner_radius: Real,
    gap: Real,
}

impl LogoParameters {
    /// Checks, in order:
    /// - all three inputs are finite,
    /// - `width` and `inner_radius` are positive,
    /// - `0 < gap < 0.5`,
    /// - `inner_radius + width` is finite,
    /// - `inner_radius >= width·(2·gap + 1)`, read as
    ///   `width·(2·gap + 1) / inner_radius <= 1 + tolerance()`. The region
    ///   builders compare the same ratio, so anything accepted here builds.
    pub fn new(width: Real, inner_radius: Real, gap: Real) -> Result<Self, DomainError> {
        for (name, value) in [("width", width), ("inner_radius", inner_radius), ("gap", gap)] {
            if !value.is_finite() {
                return Err(DomainError::InvalidParameter { name, value });
            }
        }
        if width <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "width",
                value: width,
            });
        }
        if inner_radius <= 0.0 {
            return Err(DomainError::InvalidParameter {
                name: "inner_radius",
                value: inner_radius,
            });
        }
        if gap <= 0.0 || gap >= 0.5 {
            return Err(DomainError::GapOutOfRange(gap));
        }

        if !(inner_radius + width).is_finite() {
            return Err(DomainError::InvalidParameter {
                name: "inner_radius",
                value: inner_radius,
            });
        }

        let minimum = min_inner_radius(width, gap);
        if minimum / inner_radius > 1.0 + tolerance() {
            return Err(DomainError::InnerRadiusTooSmall {
                inner_radius,
                minimum,
            });
        }

        Ok(Self {
            width,
            inner_radius,
            gap,
        })
    }

    /// Ring width `W`.
    pub const fn width(&self) -> Real {
        self.width
    }

    /// Inner radius `Ri`.
    pub const fn inner_radius(&self) -> Real {
        self.inner_radius
    }

    /// Gap proportion `G`.
    pub const fn gap(&self) -> Real {
        self.gap
    }

    /// `Ro = Ri + W`
    pub fn outer_radius(&self) -> Real {
        self.inner_radius + self.width
    }

    /// `G·W`, the half-width of the straight gap the blue band runs through.
    pub fn gap_width(&self) -> Real {
        self.gap * self.width
    }

    /// `W·(2G+1)`, distance from the y axis to the orange/green notch.
    pub fn notch_offset(&self) -> Real {
        min_inner_radius(self.width, self.gap)
    }

    /// `Ri / W`
    pub fn ratio(&self) -> Real {
        self.inner_radius / self.width
    }
}
