//! Runs in its own process: the tolerance can only be set once.

use ringlogo::float_types::{set_tolerance, tolerance};
use ringlogo::{DomainError, Logo, LogoParameters, Region};

mod support;

use crate::support::approx_eq;

#[test]
fn runtime_tolerance_widens_the_accepted_band() {
    set_tolerance(1e-6);
    assert_eq!(tolerance(), 1e-6);

    // Later calls are ignored
    set_tolerance(1e-3);
    assert_eq!(tolerance(), 1e-6);

    // Rejected under the default 1e-9, accepted now, and still drawable
    let params = LogoParameters::new(100.0, 110.0 * (1.0 - 0.5e-6), 0.05).unwrap();
    let logo = Logo::build(params).unwrap();
    let notch = logo.region(Region::Orange).vertices()[2];
    assert!(approx_eq(notch.x, -110.0, 1e-9));
    assert_eq!(notch.y, 0.0);

    assert!(matches!(
        LogoParameters::new(100.0, 110.0 * (1.0 - 2e-6), 0.05),
        Err(DomainError::InnerRadiusTooSmall { .. })
    ));
}
