//! Polyline approximation of a [`RegionPath`] and the checks built on it.
//!
//! Arc flags are easy to get wrong and a wrong flag still renders, just as a
//! different shape. Flattening into a `geo` polygon lets the orientation
//! (signed area) and simplicity of an outline be measured instead of eyeballed.

use super::{PathSegment, RegionPath};
use crate::float_types::{DEFAULT_ARC_SEGMENTS, Real, TAU};
use geo::line_intersection::{LineIntersection, line_intersection};
use geo::{Area, Coord, LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Vector2};

/// **Endpoint to center conversion for a circular arc**
///
/// Given the SVG arc parameters, returns the circle center and the radius
/// actually used. Follows the SVG implementation notes restricted to
/// `rx == ry` with no rotation:
/// ```text
/// h  = (from - to) / 2
/// f  = sqrt((r² - |h|²) / |h|²)      (0 when r is too small; r grows to |h|)
/// c' = ±f · (h.y, -h.x)              (negated when large_arc == sweep)
/// c  = (from + to) / 2 + c'
/// ```
/// Returns `None` when `from == to`, which SVG treats as "draw nothing".
pub fn arc_center(
    from: Point2<Real>,
    to: Point2<Real>,
    radius: Real,
    large_arc: bool,
    sweep: bool,
) -> Option<(Point2<Real>, Real)> {
    let half: Vector2<Real> = (from - to) / 2.0;
    let d2 = half.norm_squared();
    if d2 == 0.0 {
        return None;
    }

    let mut r = radius.abs();
    let factor = if r * r < d2 {
        r = d2.sqrt();
        0.0
    } else {
        ((r * r - d2) / d2).sqrt()
    };

    let mut offset = Vector2::new(factor * half.y, -factor * half.x);
    if large_arc == sweep {
        offset = -offset;
    }
    Some((nalgebra::center(&from, &to) + offset, r))
}

impl RegionPath {
    /// Approximates the outline with straight chords, `segments_per_arc`
    /// per arc. Arc end points are reproduced exactly.
    pub fn flatten(&self, segments_per_arc: usize) -> LineString<Real> {
        let segments_per_arc = segments_per_arc.max(1);
        let mut coords: Vec<Coord<Real>> = Vec::new();
        let mut current = Point2::origin();

        for segment in self.segments() {
            match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    coords.push(to_coord(p));
                    current = p;
                },
                PathSegment::ArcTo {
                    to,
                    radius,
                    large_arc,
                    sweep,
                } => {
                    if let Some((center, r)) = arc_center(current, to, radius, large_arc, sweep) {
                        let start = (current.y - center.y).atan2(current.x - center.x);
                        let end = (to.y - center.y).atan2(to.x - center.x);
                        let mut delta = end - start;
                        if sweep && delta < 0.0 {
                            delta += TAU;
                        } else if !sweep && delta > 0.0 {
                            delta -= TAU;
                        }
                        for i in 1..segments_per_arc {
                            let theta = start + delta * (i as Real) / (segments_per_arc as Real);
                            coords.push(Coord {
                                x: center.x + r * theta.cos(),
                                y: center.y + r * theta.sin(),
                            });
                        }
                    }
                    coords.push(to_coord(to));
                    current = to;
                },
                PathSegment::ClosePath => {},
            }
        }

        LineString::new(coords)
    }

    /// The flattened outline as a `geo` polygon without holes.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        GeoPolygon::new(self.flatten(DEFAULT_ARC_SEGMENTS), vec![])
    }

    /// Shoelace area of the flattened outline. Positive for paths that turn
    /// counter-clockwise in a y-up frame (clockwise on a y-down canvas).
    pub fn signed_area(&self) -> Real {
        self.to_polygon().signed_area()
    }

    /// `true` when no two non-adjacent edges of the flattened outline cross
    /// or overlap.
    pub fn is_simple(&self) -> bool {
        let polygon = self.to_polygon();
        let lines: Vec<_> = polygon.exterior().lines().collect();
        let n = lines.len();

        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue; // closing edge meets the first edge
                }
                match line_intersection(lines[i], lines[j]) {
                    Some(LineIntersection::SinglePoint { is_proper: true, .. })
                    | Some(LineIntersection::Collinear { .. }) => return false,
                    _ => {},
                }
            }
        }
        true
    }
}

fn to_coord(p: Point2<Real>) -> Coord<Real> {
    Coord { x: p.x, y: p.y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn center_of_quarter_arc() {
        // (10,0) -> (0,10) on the unit-10 circle about the origin, short way
        // round with increasing angle
        let (center, r) =
            arc_center(Point2::new(10.0, 0.0), Point2::new(0.0, 10.0), 10.0, false, true)
                .expect("distinct end points");
        assert!(approx_eq(center.x, 0.0, 1e-9));
        assert!(approx_eq(center.y, 0.0, 1e-9));
        assert_eq!(r, 10.0);

        // Same chord, other sweep: center mirrors across the chord
        let (center, _) =
            arc_center(Point2::new(10.0, 0.0), Point2::new(0.0, 10.0), 10.0, false, false)
                .expect("distinct end points");
        assert!(approx_eq(center.x, 10.0, 1e-9));
        assert!(approx_eq(center.y, 10.0, 1e-9));
    }

    #[test]
    fn radius_too_small_is_scaled_up() {
        let (center, r) =
            arc_center(Point2::new(-5.0, 0.0), Point2::new(5.0, 0.0), 1.0, false, true)
                .expect("distinct end points");
        assert!(approx_eq(r, 5.0, 1e-12));
        assert!(approx_eq(center.x, 0.0, 1e-12));
        assert!(approx_eq(center.y, 0.0, 1e-12));
    }

    #[test]
    fn coincident_end_points_have_no_center() {
        let p = Point2::new(3.0, 4.0);
        assert!(arc_center(p, p, 5.0, false, true).is_none());
    }

    #[test]
    fn half_disc_area() {
        // Diameter along the x axis, closed by a half circle through +y
        let path = RegionPath::builder(Point2::new(-10.0, 0.0))
            .line_to(Point2::new(10.0, 0.0))
            .arc_to(Point2::new(-10.0, 0.0), 10.0, false, true)
            .close();
        let area = path.signed_area();
        assert!(approx_eq(area, 50.0 * PI, 0.5), "area was {area}");
        assert!(path.is_simple());
    }

    #[test]
    fn bow_tie_is_not_simple() {
        let path = RegionPath::builder(Point2::new(0.0, 0.0))
            .line_to(Point2::new(10.0, 10.0))
            .line_to(Point2::new(10.0, 0.0))
            .line_to(Point2::new(0.0, 10.0))
            .close();
        assert!(!path.is_simple());
    }

    #[test]
    fn flatten_reproduces_arc_end_points() {
        let to = Point2::new(0.0, 10.0);
        let path = RegionPath::builder(Point2::new(10.0, 0.0))
            .arc_to(to, 10.0, false, true)
            .close();
        let line = path.flatten(8);
        assert_eq!(line.0.len(), 9);
        assert_eq!(line.0.last(), Some(&Coord { x: 0.0, y: 10.0 }));
    }
}
