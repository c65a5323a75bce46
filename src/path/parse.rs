//! Parser for the absolute `M/L/A/Z` dialect written by [`emit`](super::emit).
//!
//! Commas and whitespace are interchangeable separators. Relative commands,
//! curves and elliptical arcs are rejected; a [`RegionPath`] only holds
//! circular arcs.

use super::{PathSegment, RegionPath};
use crate::errors::PathError;
use crate::float_types::Real;
use nalgebra::Point2;
use nom::{
    IResult,
    branch::alt,
    character::complete::{char, multispace0, one_of},
    combinator::{all_consuming, map, opt, value},
    multi::many1,
    number::complete::double,
    sequence::{delimited, preceded, terminated, tuple},
};

#[derive(Debug, Clone, PartialEq)]
enum RawCommand {
    Move(Point2<Real>),
    Line(Point2<Real>),
    Arc {
        rx: Real,
        ry: Real,
        large_arc: bool,
        sweep: bool,
        to: Point2<Real>,
    },
    Close,
}

impl RawCommand {
    fn into_segment(self) -> Result<PathSegment, PathError> {
        Ok(match self {
            RawCommand::Move(p) => PathSegment::MoveTo(p),
            RawCommand::Line(p) => PathSegment::LineTo(p),
            RawCommand::Arc {
                rx,
                ry,
                large_arc,
                sweep,
                to,
            } => {
                if rx != ry {
                    return Err(PathError::EllipticalArc { rx, ry });
                }
                PathSegment::ArcTo {
                    to,
                    radius: rx,
                    large_arc,
                    sweep,
                }
            },
            RawCommand::Close => PathSegment::ClosePath,
        })
    }
}

/// Parses path data into a [`RegionPath`].
///
/// # Example
/// ```
/// use ringlogo::path::parse_path;
/// let path = parse_path("M 0,-320 L 0,-220 Z").unwrap();
/// assert_eq!(path.vertices().len(), 2);
/// ```
pub fn parse_path(data: &str) -> Result<RegionPath, PathError> {
    let (_, raw) = all_consuming(commands)(data).map_err(|err| match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => PathError::Malformed(snippet(e.input)),
        nom::Err::Incomplete(_) => PathError::Malformed(snippet(data)),
    })?;

    let segments = raw
        .into_iter()
        .map(RawCommand::into_segment)
        .collect::<Result<Vec<_>, _>>()?;
    RegionPath::from_segments(segments)
}

fn snippet(input: &str) -> String {
    input.chars().take(24).collect()
}

fn commands(input: &str) -> IResult<&str, Vec<RawCommand>> {
    delimited(
        multispace0,
        many1(terminated(alt((move_to, line_to, arc_to, close)), multispace0)),
        multispace0,
    )(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    value((), tuple((multispace0, opt(char(',')), multispace0)))(input)
}

fn point(input: &str) -> IResult<&str, Point2<Real>> {
    map(tuple((double, separator, double)), |(x, _, y)| Point2::new(x, y))(input)
}

fn flag(input: &str) -> IResult<&str, bool> {
    map(one_of("01"), |c| c == '1')(input)
}

fn move_to(input: &str) -> IResult<&str, RawCommand> {
    map(preceded(terminated(char('M'), multispace0), point), RawCommand::Move)(input)
}

fn line_to(input: &str) -> IResult<&str, RawCommand> {
    map(preceded(terminated(char('L'), multispace0), point), RawCommand::Line)(input)
}

fn arc_to(input: &str) -> IResult<&str, RawCommand> {
    map(
        preceded(
            terminated(char('A'), multispace0),
            tuple((
                double, separator, double, separator, double, separator, flag, separator, flag,
                separator, point,
            )),
        ),
        |(rx, _, ry, _, _rotation, _, large_arc, _, sweep, _, to)| RawCommand::Arc {
            rx,
            ry,
            large_arc,
            sweep,
            to,
        },
    )(input)
}

fn close(input: &str) -> IResult<&str, RawCommand> {
    value(RawCommand::Close, one_of("Zz"))(input)
}
