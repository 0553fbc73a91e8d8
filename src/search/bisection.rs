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

//! Integer bisection over the candidate term counts, using the simulator as
//! the oracle. A hit records the candidate as the new best and tightens the
//! upper bound; a miss tightens the lower bound. Costs at most
//! `ceil(log2(span)) + 1` simulations.
//!
//! The oracle is treated as monotonic in `n` but is not proven to be: this
//! search is a heuristic that matches the reference behavior. Callers needing
//! guaranteed minimality use the linear strategy instead.

use super::{PrecisionResult, SearchBounds};
use crate::sim::SimulationConfig;

pub(super) fn search(cfg: &SimulationConfig, bounds: SearchBounds) -> PrecisionResult {
    let mut low_n = bounds.low_n;
    let mut high_n = bounds.high_n;

    let mut minimal_n = bounds.high_n;
    let mut final_distance = 0.0;
    let mut total_iterations = 0;
    let mut simulations = 0;
    let mut any_hit = false;

    while low_n <= high_n {
        let candidate = (low_n + high_n) / 2;
        let result = cfg.simulate(candidate);
        simulations += 1;
        total_iterations += result.iterations;

        debug!(
            "n = {candidate}: hit = {}, {} steps, final distance {:.6}",
            result.hit, result.iterations, result.final_distance
        );

        if result.hit {
            any_hit = true;
            minimal_n = candidate;
            final_distance = result.final_distance;
            high_n = candidate - 1;
        } else {
            low_n = candidate + 1;
        }
    }

    if !any_hit {
        warn!(
            "no term count in {bounds} reached radius {:.3}; reporting the upper bound",
            cfg.target_radius
        );
    }

    PrecisionResult {
        minimal_n,
        final_distance,
        total_iterations,
        simulations,
    }
}
