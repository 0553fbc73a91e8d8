/*
    Belos, blazing fast dart trajectory analysis
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

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

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::search::{PrecisionSearch, SearchError};
use crate::sim::SimulationConfig;

/// One entry of the radius to minimal-n table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub radius: f64,
    pub minimal_n: u32,
}

/// Inclusive arithmetic progression of target radii.
///
/// Radii are generated by index (`start + i * increment`) rather than by
/// accumulation, so the schedule is restartable and free of float drift. The
/// stop value is included when it lands on the grid within a small relative
/// tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusSchedule {
    pub start: f64,
    pub stop: f64,
    pub increment: f64,
}

impl RadiusSchedule {
    pub fn new(start: f64, stop: f64, increment: f64) -> Self {
        Self {
            start,
            stop,
            increment,
        }
    }

    /// Number of radii in the schedule.
    pub fn len(&self) -> usize {
        if self.increment <= 0.0 || self.stop < self.start {
            return 0;
        }
        ((self.stop - self.start) / self.increment + 1e-6).floor() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The radii of this schedule, in ascending order.
    pub fn radii(&self) -> impl Iterator<Item = f64> {
        let (start, increment) = (self.start, self.increment);
        (0..self.len()).map(move |i| start + increment * i as f64)
    }
}

impl IntoIterator for RadiusSchedule {
    type Item = f64;
    type IntoIter = Box<dyn Iterator<Item = f64>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.radii())
    }
}

/// Runs the precision search across a sequence of target radii, producing the
/// radius to minimal-n mapping.
///
/// Each row overrides only the target radius on the template configuration;
/// rows share no mutable state and may therefore run in parallel.
#[derive(Clone, Copy, Debug)]
pub struct SweepDriver {
    pub template: SimulationConfig,
    pub search: PrecisionSearch,
}

impl SweepDriver {
    /// A driver with the default search (bisection over the full bounds).
    pub fn new(template: SimulationConfig) -> Self {
        Self {
            template,
            search: PrecisionSearch::default(),
        }
    }

    pub fn with_search(template: SimulationConfig, search: PrecisionSearch) -> Self {
        Self { template, search }
    }

    fn row(&self, radius: f64) -> Result<SweepRow, SearchError> {
        let mut cfg = self.template;
        cfg.target_radius = radius;
        let result = self.search.find_minimal_n(&cfg)?;

        Ok(SweepRow {
            radius,
            minimal_n: result.minimal_n,
        })
    }

    /// Lazy sequential sweep: each row is computed on demand, and iterating
    /// again restarts the sweep.
    pub fn rows<'a, I>(
        &'a self,
        radii: I,
    ) -> impl Iterator<Item = Result<SweepRow, SearchError>> + 'a
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: 'a,
    {
        radii.into_iter().map(move |radius| self.row(radius))
    }

    /// Parallel sweep: one task per radius, collected in radius order.
    pub fn run(&self, radii: &[f64]) -> Result<Vec<SweepRow>, SearchError> {
        let rows = radii
            .par_iter()
            .map(|&radius| self.row(radius))
            .collect::<Result<Vec<_>, _>>()?;

        info!("sweep complete: {} radii", rows.len());
        Ok(rows)
    }

    /// Parallel sweep over a whole schedule.
    pub fn run_schedule(&self, schedule: RadiusSchedule) -> Result<Vec<SweepRow>, SearchError> {
        let radii = schedule.radii().collect::<Vec<_>>();
        self.run(&radii)
    }
}

/// Splits rows into the parallel radius and n arrays a line/marker plotting
/// consumer expects.
pub fn parallel_arrays(rows: &[SweepRow]) -> (Vec<f64>, Vec<f64>) {
    rows.iter()
        .map(|row| (row.radius, f64::from(row.minimal_n)))
        .unzip()
}
