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

//! Celestial bodies, time scales and coordinate transforms, and the classical orbital elements.

mod bodies;
pub use self::bodies::*;

mod elements;
pub use self::elements::*;

mod derived;
pub use self::derived::*;

/// Julian dates, calendar conversions and Greenwich sidereal time.
pub mod epoch;

/// Inertial, Earth-fixed and geodetic frames over a spherical Earth.
pub mod frames;

/// Cylindrical-shadow eclipse estimates.
pub mod eclipse;

/// Lagrange point locations of the circular restricted three body problem.
pub mod lagrange;

/// Standard gravity in m/s^2, from NIST special publication 330, 2008 edition
pub const STD_GRAVITY: f64 = 9.80665;

/// Number of SI seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days per Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Astronomical unit in km (IAU 2012)
pub const AU_KM: f64 = 149_597_870.7;

/// Gravitational parameter of the Earth, in km^3/s^2
pub const MU_EARTH_KM3_S2: f64 = 3.986004418e5;

/// Equatorial radius of the Earth, in km
pub const EARTH_RADIUS_KM: f64 = 6_378.137;

/// Second zonal harmonic of the Earth gravity field
pub const EARTH_J2: f64 = 1.082_626_68e-3;

/// Mean angular velocity of the Earth, in rad/s
pub const EARTH_ANGULAR_VELOCITY_RAD_S: f64 = 7.292_115_9e-5;

/// Nodal precession rate of a sun-synchronous orbit, in degrees per day
pub const SUN_SYNC_RAAN_RATE_DEG_DAY: f64 = 360.0 / DAYS_PER_YEAR;
