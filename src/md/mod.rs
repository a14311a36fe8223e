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

/// Maneuvers and the standard maneuver list of a low Earth orbit mission.
pub mod maneuver;
pub use maneuver::{Maneuver, StandardManeuvers};

/// Rocket equation sequencing of a maneuver list against a propulsion system.
pub mod budget;
pub use budget::{BudgetLine, BudgetStatus, DeltaVBudgetResult};

/// Impulsive transfers: Hohmann, plane changes, patched conics.
pub mod transfer;

pub mod prelude {
    pub use super::budget::*;
    pub use super::maneuver::*;
    pub use super::transfer::*;
    pub use crate::dynamics::{PropulsionConfig, PropulsionKind};
}
