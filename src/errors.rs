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

use crate::cosmic::Body;
use snafu::prelude::*;

/// Errors raised when orbital elements or physical constants cannot describe a bound orbit.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AstroError {
    #[snafu(display("eccentricity {ecc} is not elliptical (expected 0 <= e < 1)"))]
    NotElliptical { ecc: f64 },
    #[snafu(display("semi-major axis must be strictly positive, got {sma_km} km"))]
    NonPositiveSma { sma_km: f64 },
    #[snafu(display("gravitational parameter must be strictly positive, got {mu_km3_s2} km^3/s^2"))]
    NonPositiveMu { mu_km3_s2: f64 },
    #[snafu(display("unknown celestial body `{name}`"))]
    UnknownBody { name: String },
    #[snafu(display("{body} does not orbit the Sun"))]
    NotHeliocentric { body: Body },
}

/// Reasons why the Lambert solver did not return a transfer.
///
/// These are returned as values so that grid sweeps can skip a failed cell and carry on.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LambertError {
    #[snafu(display(
        "transfer angle is too close to 180 degrees (|A| = {a:e}): the transfer plane is undefined"
    ))]
    TargetsTooClose { a: f64 },
    #[snafu(display("Lambert solver failed to converge after {iter} iterations"))]
    MaxIterReached { iter: usize },
    #[snafu(display("time of flight must be strictly positive, got {tof_s} s"))]
    InvalidTimeOfFlight { tof_s: f64 },
    #[snafu(display("position vectors must be non-zero"))]
    DegeneratePosition,
}
