//! Closed outlines made of straight and circular-arc segments.

pub mod emit;
pub mod flatten;

#[cfg(feature = "path-parse")]
pub mod parse;

pub use emit::emit;
pub use flatten::arc_center;

#[cfg(feature = "path-parse")]
pub use parse::parse_path;

use crate::errors::PathError;
use crate::float_types::Real;
use nalgebra::Point2;

/// One command of an outline. Coordinates are absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point2<Real>),
    LineTo(Point2<Real>),
    /// Circular arc from the current point to `to`, using the SVG flag
    /// conventions for `large_arc` and `sweep`.
    ArcTo {
        to: Point2<Real>,
        radius: Real,
        large_arc: bool,
        sweep: bool,
    },
    ClosePath,
}

impl PathSegment {
    /// The point this segment ends at; `None` for [`PathSegment::ClosePath`].
    pub fn end_point(&self) -> Option<Point2<Real>> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::ArcTo { to, .. } => Some(to),
            PathSegment::ClosePath => None,
        }
    }

    /// Half-turn about the origin. Orientation is preserved by a rotation,
    /// so radii and both arc flags carry over unchanged.
    pub fn rotated_half_turn(&self) -> Self {
        match *self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(-p),
            PathSegment::LineTo(p) => PathSegment::LineTo(-p),
            PathSegment::ArcTo {
                to,
                radius,
                large_arc,
                sweep,
            } => PathSegment::ArcTo {
                to: -to,
                radius,
                large_arc,
                sweep,
            },
            PathSegment::ClosePath => PathSegment::ClosePath,
        }
    }
}

/// The outline of one filled region.
///
/// Always starts with a `MoveTo` and ends with a `ClosePath`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionPath {
    segments: Vec<PathSegment>,
}

impl RegionPath {
    /// Starts a new outline at `start`.
    pub fn builder(start: Point2<Real>) -> PathBuilder {
        PathBuilder {
            segments: vec![PathSegment::MoveTo(start)],
        }
    }

    /// Wraps an existing segment list, checking that it opens with a move and
    /// finishes with a close.
    pub fn from_segments(segments: Vec<PathSegment>) -> Result<Self, PathError> {
        match segments.first() {
            Some(PathSegment::MoveTo(_)) => {},
            _ => return Err(PathError::MissingMoveTo),
        }
        match segments.last() {
            Some(PathSegment::ClosePath) => {},
            _ => return Err(PathError::NotClosed),
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// End points of every drawing segment, in path order.
    pub fn vertices(&self) -> Vec<Point2<Real>> {
        self.segments.iter().filter_map(PathSegment::end_point).collect()
    }

    /// The same outline rotated 180° about the origin.
    pub fn rotate_half_turn(&self) -> Self {
        Self {
            segments: self.segments.iter().map(PathSegment::rotated_half_turn).collect(),
        }
    }
}

/// Accumulates segments after the initial move. Finish with [`PathBuilder::close`].
#[derive(Debug, Clone)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn line_to(mut self, to: Point2<Real>) -> Self {
        self.segments.push(PathSegment::LineTo(to));
        self
    }

    pub fn arc_to(mut self, to: Point2<Real>, radius: Real, large_arc: bool, sweep: bool) -> Self {
        self.segments.push(PathSegment::ArcTo {
            to,
            radius,
            large_arc,
            sweep,
        });
        self
    }

    pub fn close(mut self) -> RegionPath {
        self.segments.push(PathSegment::ClosePath);
        RegionPath {
            segments: self.segments,
        }
    }
}
