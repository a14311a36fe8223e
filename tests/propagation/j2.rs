extern crate tycho;

use rstest::rstest;
use tycho::cosmic::{EARTH_RADIUS_KM, SUN_SYNC_RAAN_RATE_DEG_DAY};
use tycho::propagators::{sun_sync_inclination, KeplerJ2, SUN_SYNC_TOLERANCE_DEG_DAY};
use tycho::OrbitalElements;

#[rstest]
#[case(0.0)]
#[case(28.5)]
#[case(51.6)]
#[case(89.0)]
fn prograde_node_regresses(#[case] inc_deg: f64) {
    let kep = OrbitalElements::new(7_000.0, 0.001, inc_deg, 0.0, 0.0, 0.0);
    let rates = KeplerJ2::earth().secular_rates(&kep);
    assert!(rates.raan_deg_day() < 0.0, "i = {inc_deg}");

    let later = KeplerJ2::earth().propagate(&kep, 86_400.0);
    // Wrapped below 360
    assert!(later.raan_deg > 300.0);
}

#[rstest]
#[case(91.0)]
#[case(97.8)]
#[case(135.0)]
#[case(180.0)]
fn retrograde_node_advances(#[case] inc_deg: f64) {
    let kep = OrbitalElements::new(7_000.0, 0.001, inc_deg, 0.0, 0.0, 0.0);
    assert!(KeplerJ2::earth().secular_rates(&kep).raan_deg_day() > 0.0, "i = {inc_deg}");
}

#[test]
fn sun_synchronous_round_trip() {
    let prop = KeplerJ2::earth();
    let mut altitude_km = 200.0;
    while altitude_km <= 4_000.0 {
        for ecc in [0.0, 0.001, 0.01] {
            let sma = EARTH_RADIUS_KM + altitude_km;
            let inc = sun_sync_inclination(sma, ecc);
            if inc.is_nan() {
                continue;
            }
            let kep = OrbitalElements::new(sma, ecc, inc, 0.0, 0.0, 0.0);
            let drift = prop.secular_rates(&kep).raan_deg_day();
            assert!(
                (drift - SUN_SYNC_RAAN_RATE_DEG_DAY).abs() < 0.01,
                "{altitude_km} km: {drift} deg/day"
            );
            assert!(prop.is_sun_synchronous(&kep));
            // Five degrees away is not Sun synchronous any more
            assert!(!prop.is_sun_synchronous(&kep.with_inc(inc - 5.0)));
        }
        altitude_km += 200.0;
    }
    assert!(SUN_SYNC_TOLERANCE_DEG_DAY > 0.0);
    // No Sun synchronous orbit exists that high
    assert!(sun_sync_inclination(EARTH_RADIUS_KM + 20_000.0, 0.0).is_nan());
}
