//! Serialization to the `M/L/A/Z` path mini-language.
//!
//! Coordinates are written with `f64`'s shortest round-trip `Display`, so a
//! parsed-back path reproduces every vertex bit for bit. Nothing here knows
//! which region it is writing.

use super::{PathSegment, RegionPath};
use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt;

/// Renders `path` as absolute path data.
///
/// ```
/// use ringlogo::{Region, build_region, emit};
///
/// let orange = build_region(100.0, 220.0, 0.3, Region::Orange).unwrap();
/// assert_eq!(
///     emit(&orange),
///     "M 0,-320 L 0,-220 A 220,220 0 0 0 -160,150.99668870541498 \
///      L -160,277.12812921102034 A 320,320 0 0 1 0,-320 Z"
/// );
/// ```
pub fn emit(path: &RegionPath) -> String {
    log::trace!("emitting {} segments", path.segments().len());
    path.to_string()
}

impl fmt::Display for RegionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathSegment::MoveTo(p) => write!(f, "M {}", Coord(p)),
            PathSegment::LineTo(p) => write!(f, "L {}", Coord(p)),
            PathSegment::ArcTo {
                to,
                radius,
                large_arc,
                sweep,
            } => write!(
                f,
                "A {r},{r} 0 {} {} {}",
                u8::from(large_arc),
                u8::from(sweep),
                Coord(to),
                r = Number(radius),
            ),
            PathSegment::ClosePath => f.write_str("Z"),
        }
    }
}

struct Number(Real);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 is legal path data but reads like a sign error
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}")
    }
}

struct Coord(Point2<Real>);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", Number(self.0.x), Number(self.0.y))
    }
}
