//! The cut line between the blue band and the orange/green regions.

use super::params::LogoParameters;
use crate::errors::DomainError;
use crate::float_types::{Real, checked_leg};
use nalgebra::Vector2;

/// The line `y = slope·x + intercept`.
///
/// The blue band is bounded by this line and its half-turn image
/// `y = slope·x − intercept` (see [`DiagonalLine::partner`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagonalLine {
    pub slope: Real,
    pub intercept: Real,
}

impl DiagonalLine {
    /// **Mathematical Foundation: Diagonal Cut Line**
    ///
    /// The cut line must sit at perpendicular distance `W/2` from the origin
    /// (so the band between it and its partner is exactly `W` wide) and must
    /// meet the inner circle where that circle crosses `x = W·(G+1)`.
    /// The slope is scale-free, so the quadratic is solved in units of `W`
    /// with `r = Ri/W` and `k = G+1`:
    /// ```text
    /// h = sqrt(r² − k²)
    /// a = 1/4 − k²
    /// b = −2·k·h
    /// c = 1/4 − h²
    /// a·s² + b·s + c = 0
    /// ```
    /// `k > 1` keeps `a <= −3/4`. Of the two roots the one with the smaller
    /// magnitude is taken; the steeper root folds the band back over itself.
    /// Only the intercept carries the scale:
    /// ```text
    /// intercept = W·sqrt(1 + s²) / 2
    /// ```
    ///
    /// Expanding the discriminant gives `r² − 1/4`, positive for every
    /// validated [`LogoParameters`]. A negative value still surfaces as
    /// [`DomainError::NegativeDiscriminant`]. Ratios so extreme that the
    /// quadratic overflows give [`DomainError::NonFinite`].
    pub fn solve(params: &LogoParameters) -> Result<Self, DomainError> {
        let r = params.ratio();
        let k = params.gap() + 1.0;

        let h = checked_leg(r, k, "diagonal anchor height")?;

        let a = 0.25 - k * k;
        let b = -2.0 * k * h;
        let c = 0.25 - h * h;

        let discriminant = b * b - 4.0 * a * c;
        if !discriminant.is_finite() {
            return Err(DomainError::NonFinite("diagonal discriminant"));
        }
        if discriminant < 0.0 {
            return Err(DomainError::NegativeDiscriminant(discriminant));
        }
        let root = discriminant.sqrt();
        let s1 = (-b + root) / (2.0 * a);
        let s2 = (-b - root) / (2.0 * a);
        let slope = if s2.abs() < s1.abs() { s2 } else { s1 };

        log::debug!("diagonal roots for {params:?}: {s1}, {s2}; using {slope}");

        let intercept = params.width() / 2.0 * (1.0 + slope * slope).sqrt();
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(DomainError::NonFinite("diagonal line"));
        }
        Ok(Self { slope, intercept })
    }

    /// The half-turn image of this line, `y = slope·x − intercept`.
    pub fn partner(&self) -> Self {
        Self {
            slope: self.slope,
            intercept: -self.intercept,
        }
    }

    pub fn y_at(&self, x: Real) -> Real {
        self.slope * x + self.intercept
    }

    /// Perpendicular distance from the origin, `|intercept| / sqrt(1 + s²)`.
    pub fn distance_from_origin(&self) -> Real {
        self.intercept.abs() / (1.0 + self.slope * self.slope).sqrt()
    }

    /// Unit normal `(−s, 1) / sqrt(1 + s²)`, pointing to the side of
    /// increasing `y`.
    pub fn unit_normal(&self) -> Vector2<Real> {
        Vector2::new(-self.slope, 1.0) / (1.0 + self.slope * self.slope).sqrt()
    }

    /// Angle between the line and the x axis, in degrees, ignoring direction.
    pub fn angle_degrees(&self) -> Real {
        self.slope.atan().abs().to_degrees()
    }
}

/// Solves the diagonal for a raw `(W, Ri, G)` triple.
///
/// # Example
/// ```
/// let line = ringlogo::solve_diagonal(100.0, 220.0, 0.3).unwrap();
/// assert!(line.slope.abs() < 1.0);
/// assert!((line.distance_from_origin() - 50.0).abs() < 1e-9);
/// ```
pub fn solve_diagonal(width: Real, inner_radius: Real, gap: Real) -> Result<DiagonalLine, DomainError> {
    DiagonalLine::solve(&LogoParameters::new(width, inner_radius, gap)?)
}
