extern crate tycho;

use approx::assert_abs_diff_eq;
use tycho::io::ConfigRepr;
use tycho::md::transfer::InterplanetaryTransfer;
use tycho::time::{Epoch, Unit};
use tycho::tools::lambert::PorkchopConfig;
use tycho::Body;

#[test]
fn earth_mars_2026() {
    let _ = pretty_env_logger::try_init();

    let start = Epoch::from_gregorian_utc_at_midnight(2026, 9, 1);
    let cfg = PorkchopConfig::builder()
        .departure_body(Body::Earth)
        .arrival_body(Body::Mars)
        .departure_start(start)
        .departure_span_days(150.0)
        .tof_min_days(200.0)
        .tof_max_days(320.0)
        .build();

    let grid = cfg.sweep();
    assert_eq!(grid.departure_count, 31);
    assert_eq!(grid.tof_count, 25);
    // Cells which do not converge to 1e-8 s are left out of the grid
    assert_eq!(grid.cells.len() + grid.failed_count(), 31 * 25);
    assert!(grid.cells.len() > 31 * 25 / 2);
    for cell in &grid.cells {
        assert!(cell.c3_km2_s2.is_finite() && cell.v_inf_arrival_km_s.is_finite());
    }

    let best = grid.best().expect("empty porkchop");
    println!("best: {best}");

    let expected_departure = Epoch::from_gregorian_utc_at_midnight(2026, 11, 15);
    assert!((best.departure - expected_departure).abs() <= 10.0 * Unit::Day);
    assert_abs_diff_eq!(best.tof_days, 260.0, epsilon = 10.0);
    assert_abs_diff_eq!(best.c3_km2_s2, 8.68, epsilon = 0.25);

    // On circular coplanar orbits, the best cell is close to the Hohmann transfer
    let hohmann = InterplanetaryTransfer::hohmann(Body::Earth, Body::Mars)
        .expect("Earth and Mars orbit the Sun");
    let hohmann_total = hohmann.v_inf_departure_km_s + hohmann.v_inf_arrival_km_s;
    assert_abs_diff_eq!(best.total_v_inf_km_s(), hohmann_total, epsilon = 0.05);

    let best_c3 = grid.best_c3().expect("empty porkchop");
    assert!(best_c3.c3_km2_s2 <= best.c3_km2_s2);
}

#[test]
fn porkchop_from_yaml() {
    let cfg = PorkchopConfig::load(crate::test_config("earth_venus_porkchop.yaml"))
        .expect("could not load the porkchop");
    assert_eq!(cfg.departure_body, Body::Earth);
    assert_eq!(cfg.arrival_body, Body::Venus);
    assert_eq!(cfg.departure_step_days, 10.0);
    // Defaults to five days
    assert_eq!(cfg.tof_step_days, 5.0);

    let grid = cfg.sweep();
    assert_eq!(grid.departure_count, 4);
    assert_eq!(grid.tof_count, 11);
    assert!(!grid.cells.is_empty());
    for cell in &grid.cells {
        assert!(cell.c3_km2_s2.is_finite());
        assert_eq!(cell.arrival, cell.departure + cell.tof_days * Unit::Day);
    }
}
