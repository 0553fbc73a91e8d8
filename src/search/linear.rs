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

//! Ascending scan over the candidate term counts, stopping at the first hit.
//! Guaranteed to return the true minimum regardless of the oracle's shape, at
//! up to `span` simulations.

use super::{PrecisionResult, SearchBounds};
use crate::sim::SimulationConfig;

pub(super) fn search(cfg: &SimulationConfig, bounds: SearchBounds) -> PrecisionResult {
    let mut total_iterations = 0;
    let mut simulations = 0;

    for candidate in bounds.low_n..=bounds.high_n {
        let result = cfg.simulate(candidate);
        simulations += 1;
        total_iterations += result.iterations;

        debug!(
            "n = {candidate}: hit = {}, {} steps, final distance {:.6}",
            result.hit, result.iterations, result.final_distance
        );

        if result.hit {
            return PrecisionResult {
                minimal_n: candidate,
                final_distance: result.final_distance,
                total_iterations,
                simulations,
            };
        }
    }

    warn!(
        "no term count in {bounds} reached radius {:.3}; reporting the upper bound",
        cfg.target_radius
    );

    PrecisionResult {
        minimal_n: bounds.high_n,
        final_distance: 0.0,
        total_iterations,
        simulations,
    }
}
