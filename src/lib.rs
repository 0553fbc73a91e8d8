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

/*! # belos

[Belos](https://en.wiktionary.org/wiki/%CE%B2%CE%AD%CE%BB%CE%BF%CF%82): dart trajectory simulation built on truncated Taylor series trigonometry, answering the question "how many series terms does it take to hit the target?"

The crate simulates a discrete straight-line walk from a start point toward a target point, where the walk direction comes from series approximations of sine, cosine and arctangent truncated to `n` terms. A bisection (or linear) search then finds the minimal `n` that still lands the walk within a given radius of the target, and a sweep driver maps that threshold across a whole schedule of radii.
*/

/// Truncated Maclaurin series approximations of the trigonometric functions.
pub mod series;

/// The dart trajectory simulator: fixed-direction stepping toward a target radius.
pub mod sim;

/// Minimal sufficient term count searches, by bisection or linear scan.
pub mod search;

/// Radius sweeps producing the radius to minimal-n mapping.
pub mod sweep;

/// Scenario configuration and sweep table serialization.
pub mod io;

#[macro_use]
extern crate log;
extern crate nalgebra as na;

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub mod prelude {
    pub use crate::io::{ConfigRepr, Scenario};
    pub use crate::linalg::Vector2;
    pub use crate::search::{
        PrecisionResult, PrecisionSearch, SearchBounds, SearchError, Strategy,
    };
    pub use crate::series;
    pub use crate::sim::{SimulationConfig, SimulationResult, MAX_ITERATIONS};
    pub use crate::sweep::{RadiusSchedule, SweepDriver, SweepRow};
}
