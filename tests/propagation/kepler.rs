extern crate tycho;

use approx::assert_abs_diff_eq;
use rstest::rstest;
use tycho::cosmic::MU_EARTH_KM3_S2;
use tycho::propagators::{mean_to_true_anomaly, solve_kepler_equation, KeplerJ2};
use tycho::{Body, OrbitalElements};

#[rstest]
#[case(0.0)]
#[case(0.1)]
#[case(0.5)]
#[case(0.8)]
#[case(0.9)]
fn kepler_equation(#[case] ecc: f64) {
    let mut ma = 0.0;
    while ma < std::f64::consts::TAU {
        let ea = solve_kepler_equation(ma, ecc);
        assert!((ea - ecc * ea.sin() - ma).abs() < 1e-10, "e = {ecc}, M = {ma}");
        ma += 0.01;
    }
}

#[test]
fn full_period_returns_home() {
    let _ = pretty_env_logger::try_init();

    let kep = OrbitalElements::new(7_500.0, 0.15, 28.5, 10.0, 20.0, 123.0);
    let prop = KeplerJ2::two_body(Body::Earth);
    let period = kep.period_s(MU_EARTH_KM3_S2);

    let after = prop.propagate(&kep, 3.0 * period);
    assert_abs_diff_eq!(after.ta_deg, kep.ta_deg, epsilon = 1e-6);
    assert_eq!(after.raan_deg, kep.raan_deg);
    assert_eq!(after.aop_deg, kep.aop_deg);

    let before = prop.propagate(&kep, -0.5 * period);
    let back = prop.propagate(&before, 0.5 * period);
    assert_abs_diff_eq!(back.ta_deg, kep.ta_deg, epsilon = 1e-6);
}

#[test]
fn apoapsis_after_half_period() {
    let kep = OrbitalElements::new(10_000.0, 0.3, 0.0, 0.0, 0.0, 0.0);
    let half = 0.5 * kep.period_s(MU_EARTH_KM3_S2);
    let after = KeplerJ2::two_body(Body::Earth).propagate(&kep, half);
    assert_abs_diff_eq!(after.ta_deg, 180.0, epsilon = 1e-6);
    assert_abs_diff_eq!(mean_to_true_anomaly(std::f64::consts::PI, 0.3), std::f64::consts::PI, epsilon = 1e-12);
}

#[test]
fn invalid_elements_propagate_to_nan() {
    let kep = OrbitalElements::new(7_000.0, 1.0, 0.0, 0.0, 0.0, 0.0);
    assert!(KeplerJ2::earth().propagate(&kep, 60.0).ta_deg.is_nan());
}
