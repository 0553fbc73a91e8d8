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

use std::fmt;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::linalg::Vector2;
use crate::series;

/// Iteration cap of a single simulation run. The only safeguard against a
/// degenerate direction or an unreachable radius, and the single place this
/// value is declared.
pub const MAX_ITERATIONS: usize = 10_000;

/// SimulationConfig describes one dart throw: the geometry, the step length,
/// the acceptance radius around the target, and the iteration cap.
///
/// The direction of the walk is computed once per run from the start/target
/// vector through the truncated series and held constant afterwards: the walk
/// is a straight discretized ray, not a re-aimed pursuit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct SimulationConfig {
    pub start: Vector2<f64>,
    pub target: Vector2<f64>,
    #[builder(default = 1.0)]
    pub step: f64,
    pub target_radius: f64,
    #[builder(default = MAX_ITERATIONS)]
    pub max_iterations: usize,
}

/// The outcome of a single simulation run.
///
/// Exceeding the iteration cap is NOT an error: `hit == false` is a valid
/// oracle answer meaning "this term count was insufficient".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Whether the walk came within the target radius
    pub hit: bool,
    /// Number of steps taken
    pub iterations: usize,
    /// Euclidean distance to the target when the walk stopped
    pub final_distance: f64,
}

impl SimulationConfig {
    /// Euclidean distance from the provided position to the target.
    pub fn distance_to_target(&self, position: &Vector2<f64>) -> f64 {
        (self.target - position).norm()
    }

    /// The fixed walk direction for a term count `n`, as `(cos, sin)` of the
    /// series-approximated aim angle. Not necessarily a unit vector: the
    /// truncated series do not satisfy `cos^2 + sin^2 == 1`.
    pub fn direction(&self, n: u32) -> Vector2<f64> {
        let aim = self.target - self.start;
        let angle = series::atan2(aim.y, aim.x, n);
        Vector2::new(series::cos(angle, n), series::sin(angle, n))
    }

    /// Returns the stepping iterator for this configuration.
    ///
    /// This is the single definition of the trajectory stepping logic: both
    /// [`simulate`](Self::simulate) and [`flight_path`](Self::flight_path)
    /// consume it, as must any rendering consumer.
    pub fn steps(&self, n: u32) -> Steps {
        Steps {
            cfg: *self,
            direction: self.direction(n),
            position: self.start,
            iterations: 0,
            done: false,
        }
    }

    /// Runs the walk to completion and reports whether the target radius was
    /// reached, in how many steps, and at what final distance.
    pub fn simulate(&self, n: u32) -> SimulationResult {
        let mut steps = self.steps(n);
        while steps.next().is_some() {}

        SimulationResult {
            hit: steps.within_radius(),
            iterations: steps.iterations(),
            final_distance: steps.distance(),
        }
    }

    /// Every visited position of the walk, starting point included. This is
    /// the surface a trajectory renderer consumes.
    pub fn flight_path(&self, n: u32) -> Vec<Vector2<f64>> {
        let mut path = vec![self.start];
        path.extend(self.steps(n));
        path
    }
}

impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dart ({:.1}, {:.1}) -> ({:.1}, {:.1}), step {:.3}, radius {:.3}, cap {}",
            self.start.x,
            self.start.y,
            self.target.x,
            self.target.y,
            self.step,
            self.target_radius,
            self.max_iterations
        )
    }
}

/// Fixed-direction stepping toward the target, ending on the first position
/// within the target radius or at the iteration cap.
///
/// The iterator yields the position reached after each advance; the start
/// point itself is not yielded. It is fused: after ending once it stays ended.
pub struct Steps {
    cfg: SimulationConfig,
    direction: Vector2<f64>,
    position: Vector2<f64>,
    iterations: usize,
    done: bool,
}

impl Steps {
    /// Steps taken so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Distance from the current position to the target.
    pub fn distance(&self) -> f64 {
        self.cfg.distance_to_target(&self.position)
    }

    /// Whether the current position is within the target radius.
    pub fn within_radius(&self) -> bool {
        self.distance() <= self.cfg.target_radius
    }
}

impl Iterator for Steps {
    type Item = Vector2<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.within_radius() || self.iterations >= self.cfg.max_iterations {
            self.done = true;
            return None;
        }

        self.position += self.direction * self.cfg.step;
        self.iterations += 1;
        Some(self.position)
    }
}

#[test]
fn test_degenerate_throw_is_immediate_hit() {
    let cfg = SimulationConfig::builder()
        .start(Vector2::new(100.0, 100.0))
        .target(Vector2::new(100.0, 100.0))
        .target_radius(4.0)
        .build();

    let result = cfg.simulate(5);
    assert!(result.hit);
    assert_eq!(result.iterations, 0);
    assert!(result.final_distance.abs() < f64::EPSILON);
}

#[test]
fn test_simulate_reference_geometry() {
    let cfg = SimulationConfig::builder()
        .start(Vector2::new(100.0, 100.0))
        .target(Vector2::new(1000.0, 800.0))
        .target_radius(4.0)
        .build();

    // One series term aims exactly along (1, y/x), so it hits
    let one_term = cfg.simulate(1);
    assert!(one_term.hit);
    assert_eq!(one_term.iterations, 897);
    assert!((one_term.final_distance - 3.800585).abs() < 1e-5);

    // Three terms point off target and exhaust the cap
    let three_terms = cfg.simulate(3);
    assert!(!three_terms.hit);
    assert_eq!(three_terms.iterations, MAX_ITERATIONS);
    assert!(three_terms.final_distance > cfg.target_radius);

    // Determinism: identical config and n, identical outcome
    assert_eq!(cfg.simulate(7), cfg.simulate(7));
}

#[test]
fn test_flight_path_shares_stepping() {
    let cfg = SimulationConfig::builder()
        .start(Vector2::new(100.0, 100.0))
        .target(Vector2::new(1000.0, 800.0))
        .target_radius(4.0)
        .build();

    let result = cfg.simulate(6);
    let path = cfg.flight_path(6);

    assert_eq!(path.len(), result.iterations + 1);
    assert_eq!(path[0], cfg.start);
    let last = path.last().unwrap();
    assert!(cfg.distance_to_target(last) <= cfg.target_radius);
}
