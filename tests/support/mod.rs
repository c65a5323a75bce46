//! Test support library
//! Provides helpers and the named parameter sets the historical grids used.
#![allow(dead_code)]

use ringlogo::{LogoParameters, float_types::Real};

/// Golden ratio
pub const PHI: Real = 1.618_033_988_749_895;

/// Width shared by every historical grid.
pub const W: Real = 100.0;

/// 3×3 exploration grid: rows vary `Ri`, columns vary `G`.
pub const EXPLORATION_INNER_RADII: [Real; 3] = [180.0, 220.0, 260.0];
pub const EXPLORATION_GAPS: [Real; 3] = [0.2, 0.3, 0.35];

/// 4×4 edge grid: rows vary `G`, columns sit this far above the minimum `Ri`.
pub const EDGE_GAPS: [Real; 4] = [0.05, 0.08, 0.10, 0.15];
pub const EDGE_OFFSETS: [Real; 4] = [2.0, 10.0, 20.0, 40.0];

/// 4×4 "special ratios" grid: golden ratio, simple fractions, square roots,
/// special angles.
pub fn special_ratios() -> Vec<(Real, Real, Real)> {
    vec![
        (W, 161.0, (PHI - 1.0) / 2.0 - 0.05),
        (W, 161.0, 0.20),
        (W, 186.0, (PHI - 1.0) / PHI),
        (W, 150.0, 1.0 / PHI - 0.4),
        (W, 150.0, 1.0 / 6.0),
        (W, 166.0, 1.0 / 6.0),
        (W, 160.0, 1.0 / 5.0),
        (W, 200.0, 1.0 / 6.0),
        (W, 141.0, 0.15),
        (W, 141.0, 0.20),
        (W, 173.0, 0.15),
        (W, 173.0, 0.20),
        (W, 170.0, 0.15),
        (W, 210.0, 0.10),
        (W, 162.0, 1.0 / 6.0),
        (W, 400.0, 0.15),
    ]
}

/// Every parameter set from the three historical grids.
pub fn all_fixtures() -> Vec<LogoParameters> {
    let mut triples = Vec::new();
    for ri in EXPLORATION_INNER_RADII {
        for g in EXPLORATION_GAPS {
            triples.push((W, ri, g));
        }
    }
    for g in EDGE_GAPS {
        for offset in EDGE_OFFSETS {
            triples.push((W, (ringlogo::min_inner_radius(W, g) + offset).floor(), g));
        }
    }
    triples.extend(special_ratios());

    triples
        .into_iter()
        .map(|(w, ri, g)| {
            LogoParameters::new(w, ri, g)
                .unwrap_or_else(|err| panic!("fixture ({w}, {ri}, {g}) rejected: {err}"))
        })
        .collect()
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison for values far from zero.
pub fn approx_eq_rel(a: Real, b: Real, rel: Real) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs())
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
