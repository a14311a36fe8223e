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

/// Ground station definitions and topocentric (South-East-Zenith) pointing.
mod ground_station;
pub use ground_station::{AzElRange, GroundStation};

/// Contact window prediction over a time span.
pub mod passes;
pub use passes::{ContactStatistics, Pass, PassPredictor, PassQuality};

#[allow(unused_imports)]
pub mod prelude {
    pub use super::ground_station::*;
    pub use super::passes::*;

    pub use crate::time::{Duration, Epoch, TimeUnits, Unit};
}
