extern crate tycho;

use std::collections::HashSet;
use tycho::cosmic::epoch::gmst_of;
use tycho::cosmic::frames::eci_to_geodetic;
use tycho::cosmic::MU_EARTH_KM3_S2;
use tycho::io::MissionScenario;
use tycho::od::prelude::*;
use tycho::propagators::KeplerJ2;
use tycho::time::{Epoch, Unit};
use tycho::OrbitalElements;

fn iss() -> OrbitalElements {
    OrbitalElements::new(6_778.137, 0.0005, 51.6, 0.0, 0.0, 0.0)
}

#[test]
fn dsn_passes_one_day() {
    let _ = pretty_env_logger::try_init();

    let epoch = Epoch::from_gregorian_utc_at_midnight(2024, 6, 1);
    let stations = GroundStation::dsn(5.0);
    let passes = PassPredictor::builder()
        .elements(iss())
        .epoch(epoch)
        .stations(stations.clone())
        .duration_days(1.0)
        .build()
        .predict();

    assert!(!passes.is_empty());
    for window in passes.windows(2) {
        assert!(window[0].aos <= window[1].aos);
    }

    let end = epoch + 1.0 * Unit::Day;
    for pass in &passes {
        println!("{pass}");
        let station = stations
            .iter()
            .find(|s| s.id == pass.station_id)
            .expect("pass over an unknown station");
        assert!(pass.duration_s >= 60.0);
        assert!(pass.max_elevation_deg >= station.min_elevation_deg);
        assert!(pass.aos >= epoch && pass.los <= end);
        assert_eq!(
            pass.quality,
            PassQuality::from_max_elevation(pass.max_elevation_deg)
        );
        // Low Earth orbit passes are short
        assert!(pass.duration_s < 20.0 * 60.0);
    }

    let stats = ContactStatistics::from_passes(&passes, 1.0, 2.0);
    assert_eq!(stats.pass_count, passes.len());
    assert!(stats.daily_contact_s > 0.0);
    assert!(stats.daily_data_volume_mbit > 0.0);
}

#[test]
fn station_under_the_ground_track() {
    let epoch = Epoch::from_gregorian_utc_at_midnight(2024, 6, 1);
    let prop = KeplerJ2::earth();

    // Sub-satellite point ten minutes into the scan
    let offset_s = 600.0;
    let r_eci = prop
        .propagate(&iss(), offset_s)
        .to_cartesian(MU_EARTH_KM3_S2)
        .radius_km;
    let point = eci_to_geodetic(&r_eci, gmst_of(epoch + offset_s * Unit::Second));

    let station = GroundStation::from_point(
        "UNDER".to_string(),
        "Under the track".to_string(),
        point.latitude_deg,
        point.longitude_deg,
        0.0,
    );

    let passes = PassPredictor::builder()
        .elements(iss())
        .epoch(epoch)
        .stations(vec![station])
        .duration_days(0.5)
        .build()
        .predict();

    assert!(!passes.is_empty());
    let first = &passes[0];
    assert!(first.max_elevation_deg > 89.9, "{first}");
    assert_eq!(first.tca, epoch + offset_s * Unit::Second);
    assert_eq!(first.quality, PassQuality::A);
    assert!(first.aos < first.tca && first.tca < first.los);
}

#[test]
fn scenario_passes_skip_inactive_stations() {
    let _ = pretty_env_logger::try_init();

    let scenario = MissionScenario::from_yaml(crate::test_config("leo_cubesat.yaml"))
        .expect("could not load the scenario");

    let predictor = scenario.pass_predictor();
    assert_eq!(predictor.step_s, 20.0);
    assert_eq!(predictor.stations.len(), 3);

    let passes = predictor.predict();
    assert!(!passes.is_empty());

    let seen = passes
        .iter()
        .map(|pass| pass.station_id.as_str())
        .collect::<HashSet<&str>>();
    assert!(!seen.contains("SVAL"));
    // A sun-synchronous orbit is seen from Madrid every day
    assert!(seen.contains("DSS-65"));

    for pass in passes.iter().filter(|pass| pass.station_id == "DSS-34") {
        assert!(pass.max_elevation_deg >= 10.0);
    }

    let stats = ContactStatistics::from_passes(
        &passes,
        scenario.scan.duration_days,
        scenario.scan.data_rate_mbps,
    );
    assert!(stats.passes_per_day > 1.0);
    assert!(stats.max_gap_s > 0.0);
}
