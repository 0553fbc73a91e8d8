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

use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::fmt;

use crate::series::MAX_TERMS;
use crate::sim::SimulationConfig;

mod bisection;
mod linear;

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum SearchError {
    #[snafu(display(
        "invalid search bounds [{low_n}, {high_n}]: need 1 <= low_n <= high_n"
    ))]
    InvalidBounds { low_n: u32, high_n: u32 },
}

/// Inclusive candidate range for the term count search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBounds {
    pub low_n: u32,
    pub high_n: u32,
}

impl Default for SearchBounds {
    /// The full supported range, `[1, MAX_TERMS]`.
    fn default() -> Self {
        Self {
            low_n: 1,
            high_n: MAX_TERMS,
        }
    }
}

impl SearchBounds {
    /// Builds validated bounds: a term count of zero is meaningless and the
    /// range must not be inverted.
    pub fn new(low_n: u32, high_n: u32) -> Result<Self, SearchError> {
        let bounds = Self { low_n, high_n };
        bounds.validate()?;
        Ok(bounds)
    }

    pub(crate) fn validate(&self) -> Result<(), SearchError> {
        ensure!(
            self.low_n >= 1 && self.low_n <= self.high_n,
            InvalidBoundsSnafu {
                low_n: self.low_n,
                high_n: self.high_n
            }
        );
        Ok(())
    }

    /// Number of candidates in the range.
    pub fn span(&self) -> u32 {
        self.high_n - self.low_n + 1
    }
}

impl fmt::Display for SearchBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low_n, self.high_n)
    }
}

/// Which search drives the oracle.
///
/// `Bisection` matches the reference behavior and costs `O(log(span))`
/// simulations, but the hit/miss outcome is not provably monotonic in `n`
/// (a lower sufficient `n` below the probed midpoints can be skipped over).
/// `Linear` scans upward from the low bound and is guaranteed to return the
/// true minimum at `O(span)` simulations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    Bisection,
    Linear,
}

/// Aggregate outcome of one minimal-n search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrecisionResult {
    /// Smallest term count that hit, or the high bound if none did
    pub minimal_n: u32,
    /// Final distance of the best hit, 0.0 if nothing hit
    pub final_distance: f64,
    /// Simulation steps accumulated over every oracle call
    pub total_iterations: usize,
    /// Number of oracle calls made
    pub simulations: usize,
}

/// Searches the minimal term count `n` whose simulated trajectory reaches the
/// target radius within the iteration cap.
///
/// When no candidate in the bounds hits, the high bound is returned as a
/// sentinel: "even the maximum term count was insufficient" is a measurement
/// outcome, not a failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrecisionSearch {
    pub bounds: SearchBounds,
    pub strategy: Strategy,
}

impl PrecisionSearch {
    /// A bisection search over the provided bounds.
    pub fn bisection(bounds: SearchBounds) -> Self {
        Self {
            bounds,
            strategy: Strategy::Bisection,
        }
    }

    /// A linear scan over the provided bounds.
    pub fn linear(bounds: SearchBounds) -> Self {
        Self {
            bounds,
            strategy: Strategy::Linear,
        }
    }

    /// Runs the configured strategy against the simulation oracle.
    ///
    /// Fails fast on malformed bounds; never evaluates a candidate outside
    /// them.
    pub fn find_minimal_n(
        &self,
        cfg: &SimulationConfig,
    ) -> Result<PrecisionResult, SearchError> {
        self.bounds.validate()?;

        debug!(
            "searching minimal n in {} ({:?}) for {cfg}",
            self.bounds, self.strategy
        );

        let result = match self.strategy {
            Strategy::Bisection => bisection::search(cfg, self.bounds),
            Strategy::Linear => linear::search(cfg, self.bounds),
        };

        info!(
            "radius {:.3}: minimal n = {} after {} simulations ({} total steps)",
            cfg.target_radius, result.minimal_n, result.simulations, result.total_iterations
        );

        Ok(result)
    }
}

#[test]
fn test_bounds_validation() {
    assert!(SearchBounds::new(1, 30).is_ok());
    assert_eq!(
        SearchBounds::new(10, 3),
        Err(SearchError::InvalidBounds {
            low_n: 10,
            high_n: 3
        })
    );
    assert_eq!(
        SearchBounds::new(0, 3),
        Err(SearchError::InvalidBounds { low_n: 0, high_n: 3 })
    );
    assert_eq!(SearchBounds::default().span(), MAX_TERMS);
}
