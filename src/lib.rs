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

/*! # tycho

Small-satellite mission design: orbit geometry, ground-station contact windows, Lambert transfers
and delta-v budgets, computed with two-body dynamics, first-order J2 secular drift and a spherical Earth.

Every computation is a pure function of its inputs. Degenerate inputs (hyperbolic elements, a
massless spacecraft, an empty station list) return a safe default instead of panicking, so that a
reactive caller can recompute on every parameter change.
*/

/// Kepler propagation with J2 secular drift.
pub mod propagators;

/// Propulsion models and the rocket equation.
pub mod dynamics;

/// Celestial bodies, time and coordinate transforms, orbital elements.
pub mod cosmic;

/// Utility functions shared by different modules, and which may be useful to engineers.
pub mod utils;

mod errors;
/// Tycho will (almost) never panic and functions which may fail will return an error.
pub use self::errors::{AstroError, LambertError};

/// YAML configuration of mission scenarios and ground stations.
pub mod io;

/// Ground stations and contact (pass) prediction.
pub mod od;

/// Mission design: maneuvers, transfers and delta-v budgets.
pub mod md;

/// Simple tools (e.g. Lambert solver)
pub mod tools;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub use self::cosmic::{Body, OrbitalElements, StateVector};
