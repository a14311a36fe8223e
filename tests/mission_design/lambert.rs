extern crate tycho;

use approx::assert_relative_eq;
use tycho::cosmic::MU_EARTH_KM3_S2;
use tycho::linalg::Vector3;
use tycho::md::transfer::HohmannTransfer;
use tycho::propagators::{eccentric_to_mean_anomaly, true_to_eccentric_anomaly};
use tycho::tools::lambert::{universal, TransferKind};
use tycho::{LambertError, OrbitalElements};

const R_LEO_KM: f64 = 7_000.0;
const R_GEO_KM: f64 = 42_164.0;

/// Returns the state on the LEO to GEO transfer ellipse at the provided true anomaly, and the
/// time of flight from periapsis.
fn on_transfer_ellipse(ta_deg: f64) -> (Vector3<f64>, Vector3<f64>, f64) {
    let sma = 0.5 * (R_LEO_KM + R_GEO_KM);
    let ecc = (R_GEO_KM - R_LEO_KM) / (R_GEO_KM + R_LEO_KM);
    let kep = OrbitalElements::new(sma, ecc, 0.0, 0.0, 0.0, ta_deg);
    let state = kep.to_cartesian(MU_EARTH_KM3_S2);

    let ea = true_to_eccentric_anomaly(ta_deg.to_radians(), ecc);
    let tof_s = eccentric_to_mean_anomaly(ea, ecc) / kep.mean_motion_rad_s(MU_EARTH_KM3_S2);
    (state.radius_km, state.velocity_km_s, tof_s)
}

#[test]
fn nearly_hohmann_transfer() {
    let _ = pretty_env_logger::try_init();

    let r1 = Vector3::new(R_LEO_KM, 0.0, 0.0);
    let (r2, v2, tof_s) = on_transfer_ellipse(179.5);
    let (_, v1, _) = on_transfer_ellipse(0.0);

    let sol = universal(r1, r2, tof_s, MU_EARTH_KM3_S2, TransferKind::Auto)
        .expect("Lambert failed on a nearly Hohmann transfer");
    println!("{sol}");

    assert_relative_eq!(sol.transfer_angle_deg, 179.5, epsilon = 1e-9);
    assert_relative_eq!(sol.v_init, v1, epsilon = 1e-4);
    assert_relative_eq!(sol.v_final, v2, epsilon = 1e-4);

    // The departure burn from a circular LEO matches the Hohmann one
    let v_circ = (MU_EARTH_KM3_S2 / R_LEO_KM).sqrt();
    let hohmann = HohmannTransfer::new(R_LEO_KM, R_GEO_KM, MU_EARTH_KM3_S2);
    assert_relative_eq!(sol.v_init.norm() - v_circ, hohmann.dv1_km_s, max_relative = 1e-3);
    // Half a degree short of apoapsis
    assert_relative_eq!(tof_s, hohmann.tof_s, max_relative = 2e-2);
    assert!(tof_s < hohmann.tof_s);
}

#[test]
fn exact_half_revolution_is_undefined() {
    let r1 = Vector3::new(R_LEO_KM, 0.0, 0.0);
    let r2 = Vector3::new(-R_GEO_KM, 0.0, 0.0);
    let tof_s = HohmannTransfer::new(R_LEO_KM, R_GEO_KM, MU_EARTH_KM3_S2).tof_s;

    for kind in [TransferKind::Auto, TransferKind::ShortWay, TransferKind::LongWay] {
        assert!(matches!(
            universal(r1, r2, tof_s, MU_EARTH_KM3_S2, kind),
            Err(LambertError::TargetsTooClose { .. })
        ));
    }
}

#[test]
fn short_and_long_way_differ() {
    let r1 = Vector3::new(R_LEO_KM, 0.0, 0.0);
    let (r2, _, tof_s) = on_transfer_ellipse(120.0);

    let short = universal(r1, r2, tof_s, MU_EARTH_KM3_S2, TransferKind::ShortWay)
        .expect("short way failed");
    let long = universal(r1, r2, tof_s, MU_EARTH_KM3_S2, TransferKind::LongWay)
        .expect("long way failed");

    assert_relative_eq!(short.transfer_angle_deg, 120.0, epsilon = 1e-9);
    assert_relative_eq!(long.transfer_angle_deg, 240.0, epsilon = 1e-9);
    // Prograde then retrograde
    assert!(short.v_init.y > 0.0);
    assert!(long.v_init.y < 0.0);
}
