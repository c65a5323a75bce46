#![cfg(feature = "path-parse")]

use ringlogo::{PathError, PathSegment, Region, RegionPath, build_region, emit, parse_path};

mod support;

use crate::support::{all_fixtures, approx_eq};

#[test]
fn emitted_regions_round_trip() {
    for params in all_fixtures() {
        for region in Region::ALL {
            let path = params.region(region).unwrap();
            let data = emit(&path);
            let parsed = parse_path(&data).unwrap_or_else(|err| panic!("{data}: {err}"));

            let original = path.vertices();
            let recovered = parsed.vertices();
            assert_eq!(original.len(), recovered.len());
            for (a, b) in original.iter().zip(&recovered) {
                assert!(approx_eq(a.x, b.x, 1e-12) && approx_eq(a.y, b.y, 1e-12));
            }
            assert_eq!(emit(&parsed), data);
        }
    }
}

#[test]
fn emitted_paths_have_expected_shape() {
    let blue = emit(&build_region(100.0, 220.0, 0.3, Region::Blue).unwrap());
    assert!(blue.starts_with("M 30,"));
    assert!(blue.ends_with(" Z"));
    assert_eq!(blue.matches('A').count(), 4);
    assert_eq!(blue.matches('L').count(), 5);
    assert!(blue.contains("A 320,320 0 0 1 130,"));
    assert!(blue.contains("A 100,100 0 0 1 "));

    let orange = emit(&build_region(100.0, 220.0, 0.3, Region::Orange).unwrap());
    assert!(orange.starts_with("M 0,-320 L 0,-220 A 220,220 0 0 0 -160,"));
    assert!(orange.ends_with(" A 320,320 0 0 1 0,-320 Z"));

    let green = emit(&build_region(100.0, 220.0, 0.3, Region::Green).unwrap());
    assert!(green.starts_with("M 0,320 L 0,220 A 220,220 0 0 0 160,"));
    assert!(green.ends_with(" A 320,320 0 0 1 0,320 Z"));
}

#[test]
fn emitter_does_not_care_about_region() {
    let hand_made = RegionPath::from_segments(vec![
        PathSegment::MoveTo(nalgebra::Point2::new(1.5, -2.0)),
        PathSegment::LineTo(nalgebra::Point2::new(3.0, 4.25)),
        PathSegment::ClosePath,
    ])
    .unwrap();
    assert_eq!(emit(&hand_made), "M 1.5,-2 L 3,4.25 Z");
}

#[test]
fn parse_errors_are_reported() {
    assert!(matches!(parse_path("M 0,0 C 1,1 2,2 3,3 Z"), Err(PathError::Malformed(_))));
    assert!(matches!(parse_path(""), Err(PathError::Malformed(_))));
    assert_eq!(parse_path("M 0,0 L 1,1"), Err(PathError::NotClosed));
}
