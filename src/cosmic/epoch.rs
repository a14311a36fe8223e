/*
    Tycho, small-satellite mission design
    Copyright (C) the Tycho developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::time::Epoch;
use crate::utils::between_0_tau;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Julian date of the J2000 reference epoch (2000-01-01T12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// A Gregorian calendar date and time of day, in UTC.
///
/// Leap seconds are ignored: UTC is treated as UT1, which is well within the accuracy of a
/// spherical Earth model.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Seconds within the minute, including the fractional part
    pub second: f64,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian date of this calendar date
    pub fn julian_date(&self) -> f64 {
        julian_date(self)
    }

    /// Converts this calendar date into a hifitime Epoch in the UTC time scale
    pub fn to_epoch(&self) -> Epoch {
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round().min(999_999_999.0) as u32;
        Epoch::from_gregorian_utc(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            whole as u8,
            nanos,
        )
    }
}

impl From<Epoch> for CalendarDate {
    fn from(epoch: Epoch) -> Self {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second: f64::from(second) + f64::from(nanos) * 1e-9,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Returns the Julian date of the provided Gregorian calendar date (Meeus, Astronomical
/// Algorithms, chapter 7). The Gregorian calendar is applied proleptically.
pub fn julian_date(date: &CalendarDate) -> f64 {
    let (mut year, mut month) = (date.year, i32::from(date.month));
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let century = (f64::from(year) / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();
    let day_fraction = (f64::from(date.hour)
        + (f64::from(date.minute) + date.second / 60.0) / 60.0)
        / 24.0;

    (365.25 * f64::from(year + 4716)).floor()
        + (30.6001 * f64::from(month + 1)).floor()
        + f64::from(date.day)
        + day_fraction
        + gregorian
        - 1524.5
}

/// Returns the Gregorian calendar date of the provided Julian date, the inverse of [julian_date].
pub fn calendar_from_julian(jd: f64) -> CalendarDate {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let fraction = shifted - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let mut seconds_of_day = fraction * 86_400.0;
    let hour = (seconds_of_day / 3_600.0).floor().min(23.0);
    seconds_of_day -= hour * 3_600.0;
    let minute = (seconds_of_day / 60.0).floor().min(59.0);
    let second = (seconds_of_day - minute * 60.0).max(0.0);

    CalendarDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
        hour: hour as u8,
        minute: minute as u8,
        second,
    }
}

/// Returns the Julian date (UTC) of the provided epoch
pub fn julian_date_of(epoch: Epoch) -> f64 {
    CalendarDate::from(epoch).julian_date()
}

/// Returns the epoch matching the provided Julian date (UTC)
pub fn epoch_from_julian(jd: f64) -> Epoch {
    calendar_from_julian(jd).to_epoch()
}

/// Greenwich Mean Sidereal Time in radians in [0, 2π), using the IAU-1982 polynomial.
///
/// The input is a UT1 Julian date.
pub fn gmst(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    // In seconds of time
    let gmst_s = 67_310.548_41 + (876_600.0 * 3_600.0 + 8_640_184.812_866) * t
        + 0.093_104 * t.powi(2)
        - 6.2e-6 * t.powi(3);
    // 240 seconds of time per degree
    between_0_tau((gmst_s % 86_400.0 / 240.0).to_radians())
}

/// Greenwich Mean Sidereal Time in radians of the provided epoch
pub fn gmst_of(epoch: Epoch) -> f64 {
    gmst(julian_date_of(epoch))
}

#[cfg(test)]
mod ut_epoch {
    use super::*;

    #[test]
    fn test_julian_date_references() {
        assert_eq!(
            julian_date(&CalendarDate::new(2000, 1, 1, 12, 0, 0.0)),
            J2000_JD
        );
        assert_eq!(
            julian_date(&CalendarDate::new(1999, 1, 1, 0, 0, 0.0)),
            2_451_179.5
        );
        // Meeus example 7.a, launch of Sputnik 1
        let sputnik = julian_date(&CalendarDate::new(1957, 10, 4, 19, 26, 24.0));
        assert!((sputnik - 2_436_116.31).abs() < 1e-8, "{sputnik}");
    }

    #[test]
    fn test_julian_round_trip() {
        let dates = [
            CalendarDate::new(2000, 1, 1, 12, 0, 0.0),
            CalendarDate::new(2024, 2, 29, 23, 59, 59.5),
            CalendarDate::new(1987, 6, 19, 0, 0, 0.0),
            CalendarDate::new(2031, 12, 31, 6, 30, 15.25),
            CalendarDate::new(1900, 3, 1, 18, 45, 1.0),
        ];
        for date in dates {
            let back = calendar_from_julian(date.julian_date());
            assert_eq!(back.year, date.year);
            assert_eq!(back.month, date.month);
            assert_eq!(back.day, date.day);
            let delta_s = (back.julian_date() - date.julian_date()).abs() * 86_400.0;
            assert!(delta_s < 1.0, "{date} -> {back}: {delta_s} s");
        }
    }

    #[test]
    fn test_gmst_vallado() {
        // Vallado, example 3-5: 1992 August 20, 12:14 UT1
        let jd = julian_date(&CalendarDate::new(1992, 8, 20, 12, 14, 0.0));
        let gmst_deg = gmst(jd).to_degrees();
        assert!((gmst_deg - 152.578_787_886).abs() < 1e-4, "{gmst_deg}");
    }

    #[test]
    fn test_gmst_bounds() {
        for i in 0..500 {
            let theta = gmst(J2000_JD - 20_000.0 + 97.3 * f64::from(i));
            assert!((0.0..std::f64::consts::TAU).contains(&theta));
        }
    }

    #[test]
    fn test_epoch_bridge() {
        let epoch = Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0);
        assert!((julian_date_of(epoch) - J2000_JD).abs() < 1e-9);

        let epoch = Epoch::from_gregorian_utc_hms(2024, 3, 20, 3, 6, 30);
        let back = epoch_from_julian(julian_date_of(epoch));
        assert!((back - epoch).to_seconds().abs() < 1e-3);
    }
}
