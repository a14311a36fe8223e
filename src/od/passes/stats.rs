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

use super::Pass;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the contact time actually usable for data transfer (acquisition, ranging and
/// protocol overhead excluded)
pub const LINK_EFFICIENCY: f64 = 0.70;

/// Aggregate contact metrics over a list of passes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactStatistics {
    pub pass_count: usize,
    pub passes_per_day: f64,
    pub average_duration_s: f64,
    /// Longest time between the loss of signal of a pass and the acquisition of the next one in the
    /// merged list, over all stations. A short pass nested within a longer pass at another station
    /// ends before the longer one, so this may overstate the actual time without any contact.
    pub max_gap_s: f64,
    pub daily_contact_s: f64,
    /// Data downlinked per day at the provided rate, in megabits
    pub daily_data_volume_mbit: f64,
}

impl ContactStatistics {
    /// Computes the statistics of passes sorted by acquisition of signal, over a scan of
    /// `duration_days`, with a downlink rate in megabits per second.
    pub fn from_passes(passes: &[Pass], duration_days: f64, data_rate_mbps: f64) -> Self {
        if passes.is_empty() || duration_days <= 0.0 || !duration_days.is_finite() {
            return Self::default();
        }

        let pass_count = passes.len();
        let total_contact_s = passes.iter().map(|p| p.duration_s).sum::<f64>();

        let max_gap_s = passes
            .windows(2)
            .map(|pair| (pair[1].aos - pair[0].los).to_seconds().max(0.0))
            .fold(0.0, f64::max);

        let daily_contact_s = total_contact_s / duration_days;

        Self {
            pass_count,
            passes_per_day: pass_count as f64 / duration_days,
            average_duration_s: total_contact_s / pass_count as f64,
            max_gap_s,
            daily_contact_s,
            daily_data_volume_mbit: data_rate_mbps.max(0.0) * daily_contact_s * LINK_EFFICIENCY,
        }
    }
}

impl fmt::Display for ContactStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} passes ({:.2} per day), average {:.1} min",
            self.pass_count,
            self.passes_per_day,
            self.average_duration_s / 60.0
        )?;
        writeln!(f, "longest gap:    {:.1} min", self.max_gap_s / 60.0)?;
        writeln!(f, "daily contact:  {:.1} min", self.daily_contact_s / 60.0)?;
        write!(f, "daily volume:   {:.1} Mbit", self.daily_data_volume_mbit)
    }
}
