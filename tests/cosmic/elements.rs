extern crate tycho;

use approx::assert_relative_eq;
use rstest::rstest;
use tycho::cosmic::frames::{ecef_to_geodetic, geodetic_to_ecef, Geodetic};
use tycho::cosmic::{cartesian_to_keplerian, keplerian_to_cartesian, MU_EARTH_KM3_S2};
use tycho::propagators::KeplerJ2;
use tycho::OrbitalElements;

#[rstest]
#[case(6_478.137, 0.0)]
#[case(7_000.0, 0.01)]
#[case(12_000.0, 0.3)]
#[case(26_600.0, 0.74)]
#[case(70_000.0, 0.9)]
#[case(140_000.0, 0.949)]
fn energy_and_momentum_invariants(#[case] sma_km: f64, #[case] ecc: f64) {
    let _ = pretty_env_logger::try_init();

    let mu = MU_EARTH_KM3_S2;
    let kep = OrbitalElements::new(sma_km, ecc, 63.4, 120.0, 270.0, 10.0);
    let init = keplerian_to_cartesian(&kep, mu);

    let prop = KeplerJ2::earth();
    let period = kep.period_s(mu);

    for step in 1..=20 {
        let dt = period * f64::from(step) / 7.3;
        let state = prop.propagate(&kep, dt).to_cartesian(mu);
        assert_relative_eq!(state.energy(mu), init.energy(mu), max_relative = 1e-6);
        assert_relative_eq!(state.hmag(), init.hmag(), max_relative = 1e-6);
    }

    assert_relative_eq!(init.energy(mu), -mu / (2.0 * sma_km), max_relative = 1e-9);
    assert_relative_eq!(
        init.hmag(),
        (mu * sma_km * (1.0 - ecc.powi(2))).sqrt(),
        max_relative = 1e-9
    );
}

#[rstest]
#[case(OrbitalElements::new(8_000.0, 0.2, 30.0, 45.0, 60.0, 75.0))]
#[case(OrbitalElements::new(42_164.0, 0.05, 5.0, 300.0, 10.0, 200.0))]
#[case(OrbitalElements::new(7_200.0, 0.6, 110.0, 200.0, 135.0, 350.0))]
fn keplerian_cartesian_round_trip(#[case] kep: OrbitalElements) {
    let mu = MU_EARTH_KM3_S2;
    let state = keplerian_to_cartesian(&kep, mu);
    let back = cartesian_to_keplerian(&state, mu);
    assert_relative_eq!(back.sma_km, kep.sma_km, max_relative = 1e-9);
    assert_relative_eq!(back.ecc, kep.ecc, epsilon = 1e-10);
    assert_relative_eq!(back.inc_deg, kep.inc_deg, epsilon = 1e-8);
    assert_relative_eq!(back.raan_deg, kep.raan_deg, epsilon = 1e-8);
    assert_relative_eq!(back.aop_deg, kep.aop_deg, epsilon = 1e-7);
    assert_relative_eq!(back.ta_deg, kep.ta_deg, epsilon = 1e-7);
}

#[test]
fn hyperbolic_elements_are_nan() {
    let kep = OrbitalElements::new(7_000.0, 1.2, 30.0, 0.0, 0.0, 0.0);
    let state = keplerian_to_cartesian(&kep, MU_EARTH_KM3_S2);
    assert!(!state.is_finite());
    assert!(kep.validate().is_err());
}

#[rstest]
#[case(Geodetic::new(40.427_222, 4.250_556, 0.834_939))]
#[case(Geodetic::new(-35.398_333, 148.981_944, 0.691_75))]
#[case(Geodetic::new(89.9, -120.0, 400.0))]
#[case(Geodetic::new(0.0, 180.0, 35_786.0))]
fn geodetic_round_trip(#[case] point: Geodetic) {
    let back = ecef_to_geodetic(&geodetic_to_ecef(&point));
    assert_relative_eq!(back.latitude_deg, point.latitude_deg, epsilon = 1e-9);
    // +180 and -180 are the same meridian
    let dlon = (back.longitude_deg - point.longitude_deg).rem_euclid(360.0);
    assert!(dlon < 1e-9 || (360.0 - dlon) < 1e-9, "{back}");
    assert_relative_eq!(back.altitude_km, point.altitude_km, epsilon = 1e-6);
}
