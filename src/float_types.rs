use crate::errors::DomainError;
use core::str::FromStr;
use std::sync::OnceLock;

/// Scalar type used for every coordinate, radius and parameter.
pub type Real = f64;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Lazily-initialized tolerance used across the crate.
/// Defaults to `1e-9` (relative), but can be overridden:
///  1) **Build-time**: set env var `RINGLOGO_TOLERANCE` (e.g. `RINGLOGO_TOLERANCE=1e-7 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

const DEFAULT_TOLERANCE: Real = 1e-9;

/// Number of chords used when an arc is flattened for area or
/// self-intersection checks.
pub const DEFAULT_ARC_SEGMENTS: usize = 64;

/// Returns the current relative tolerance.
/// If not set yet, it tries `RINGLOGO_TOLERANCE` and falls back to `1e-9`.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("RINGLOGO_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        DEFAULT_TOLERANCE
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// The other leg of a right triangle, `sqrt(hypotenuse² − leg²)`.
///
/// Computed as `hypotenuse·sqrt((1 − t)(1 + t))` with `t = |leg| / hypotenuse`,
/// so squaring never overflows. Ratios a hair above one, up to
/// `1 + 2·tolerance()` (twice the band
/// [`LogoParameters::new`](crate::LogoParameters::new) accepts), clamp to
/// `0.0`. Anything larger is a [`DomainError::NegativeRadicand`] naming
/// `quantity` and carrying the relative radicand `(1 − t)(1 + t)`.
pub fn checked_leg(hypotenuse: Real, leg: Real, quantity: &'static str) -> Result<Real, DomainError> {
    let t = leg.abs() / hypotenuse;
    if !t.is_finite() || !hypotenuse.is_finite() {
        return Err(DomainError::NonFinite(quantity));
    }
    if t <= 1.0 {
        return Ok(hypotenuse * ((1.0 - t) * (1.0 + t)).sqrt());
    }
    if t <= 1.0 + 2.0 * tolerance() {
        return Ok(0.0);
    }
    Err(DomainError::NegativeRadicand {
        quantity,
        value: (1.0 - t) * (1.0 + t),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_leg_pythagorean_triple() {
        let leg = checked_leg(5.0, 3.0, "test").unwrap();
        assert!((leg - 4.0).abs() < 1e-12);
        assert_eq!(checked_leg(5.0, -3.0, "test"), Ok(leg));
        assert_eq!(checked_leg(5.0, 5.0, "test"), Ok(0.0));
    }

    #[test]
    fn checked_leg_clamps_rounding_noise() {
        // 100 * 1.1 is 110.00000000000001
        let w: Real = 100.0;
        let notch = w * (2.0 * 0.05 + 1.0);
        assert!(notch > 110.0);
        assert_eq!(checked_leg(110.0, notch, "y"), Ok(0.0));
    }

    #[test]
    fn checked_leg_rejects_long_leg() {
        match checked_leg(10.0, 11.0, "height") {
            Err(DomainError::NegativeRadicand { quantity, value }) => {
                assert_eq!(quantity, "height");
                assert!((value + 0.21).abs() < 1e-12);
            },
            other => panic!("expected NegativeRadicand, got {other:?}"),
        }
    }

    #[test]
    fn checked_leg_survives_extreme_magnitudes() {
        let big = checked_leg(1e300, 6e299, "big").unwrap();
        assert!((big / 8e299 - 1.0).abs() < 1e-12);
        let small = checked_leg(1e-300, 6e-301, "small").unwrap();
        assert!((small / 8e-301 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn checked_leg_rejects_non_finite() {
        assert_eq!(checked_leg(Real::INFINITY, 1.0, "x"), Err(DomainError::NonFinite("x")));
        assert_eq!(checked_leg(1.0, Real::NAN, "x"), Err(DomainError::NonFinite("x")));
        assert_eq!(checked_leg(0.0, 1.0, "x"), Err(DomainError::NonFinite("x")));
    }

    #[test]
    fn tolerance_defaults_or_follows_build_env() {
        let expected = option_env!("RINGLOGO_TOLERANCE")
            .and_then(|value| Real::from_str(value).ok())
            .map_or(DEFAULT_TOLERANCE, |value| value.max(Real::EPSILON));
        assert_eq!(tolerance(), expected);
    }
}
