extern crate tycho;

use rstest::rstest;
use tycho::cosmic::epoch::{
    calendar_from_julian, epoch_from_julian, gmst, julian_date, julian_date_of, CalendarDate,
    J2000_JD,
};
use tycho::time::{Epoch, Unit};

#[test]
fn j2000() {
    let noon = CalendarDate::new(2000, 1, 1, 12, 0, 0.0);
    assert_eq!(julian_date(&noon), J2000_JD);
    assert_eq!(
        julian_date_of(Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0)),
        J2000_JD
    );
}

#[rstest]
#[case(CalendarDate::new(1957, 10, 4, 19, 28, 34.0))]
#[case(CalendarDate::new(1999, 12, 31, 23, 59, 59.5))]
#[case(CalendarDate::new(2024, 2, 29, 6, 30, 15.25))]
#[case(CalendarDate::new(2031, 7, 15, 0, 0, 0.0))]
#[case(CalendarDate::new(2100, 3, 1, 18, 45, 1.0))]
fn julian_round_trip(#[case] date: CalendarDate) {
    let jd = julian_date(&date);
    let back = calendar_from_julian(jd);
    let error_s = (julian_date(&back) - jd).abs() * 86_400.0;
    assert!(error_s < 1.0, "{date} -> {back}: {error_s} s");
    assert_eq!(back.year, date.year);
    assert_eq!(back.month, date.month);

    // Through hifitime
    let epoch = date.to_epoch();
    let delta_s = (epoch_from_julian(jd) - epoch).to_seconds().abs();
    assert!(delta_s < 1e-3, "{delta_s}");
}

#[test]
fn sidereal_day() {
    // The Earth completes one rotation relative to the stars in 23h56m4.09s
    let jd = julian_date_of(Epoch::from_gregorian_utc_at_midnight(2025, 6, 1));
    let sidereal_day = (23.0 * Unit::Hour + 56.0 * Unit::Minute + 4.0905 * Unit::Second).to_seconds();
    let later = gmst(jd + sidereal_day / 86_400.0);
    let delta = (later - gmst(jd)).abs();
    assert!(delta < 1e-6 || (std::f64::consts::TAU - delta) < 1e-6, "{delta}");
}
