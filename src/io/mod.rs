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

//! Scenario configuration files and sweep table serialization. Every reader
//! and writer takes an explicit path or stream from the caller: there is no
//! global output directory discovery.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

use crate::linalg::Vector2;
use crate::search::{PrecisionSearch, SearchBounds, Strategy};
use crate::sim::SimulationConfig;
use crate::sweep::{RadiusSchedule, SweepDriver, SweepRow};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read or write file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse YAML configuration file: {0}")]
    ParseError(#[source] serde_yaml::Error),

    #[error("Failed to serialize YAML configuration: {0}")]
    SerializeError(#[source] serde_yaml::Error),

    #[error("Malformed sweep table: {0}")]
    TableError(#[source] csv::Error),

    #[error("Malformed sweep record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// YAML (de)serialization for configuration representations.
pub trait ConfigRepr: Debug + Sized + Serialize + DeserializeOwned {
    /// Builds the configuration representation from the path to a yaml
    fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader).map_err(ConfigError::ParseError)
    }

    /// Saves this configuration representation as yaml to the provided path
    fn save<P>(&self, path: P) -> Result<(), ConfigError>
    where
        P: AsRef<Path>,
    {
        let file = File::create(path)?;

        serde_yaml::to_writer(file, self).map_err(ConfigError::SerializeError)
    }
}

/// A full experiment description: throw geometry, radius schedule and search
/// setup, loadable from a yaml scenario file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub start: Vector2<f64>,
    pub target: Vector2<f64>,
    pub step: f64,
    pub radii: RadiusSchedule,
    pub bounds: SearchBounds,
    pub strategy: Strategy,
}

impl Default for Scenario {
    /// The reference geometry: a throw from (100, 100) to (1000, 800) with a
    /// unit step, swept over radii 0.5 to 10.0 by 0.5.
    fn default() -> Self {
        Self {
            start: Vector2::new(100.0, 100.0),
            target: Vector2::new(1000.0, 800.0),
            step: 1.0,
            radii: RadiusSchedule::new(0.5, 10.0, 0.5),
            bounds: SearchBounds::default(),
            strategy: Strategy::default(),
        }
    }
}

impl ConfigRepr for Scenario {}

impl Scenario {
    /// The simulation configuration of this scenario for one target radius.
    pub fn config(&self, target_radius: f64) -> SimulationConfig {
        SimulationConfig::builder()
            .start(self.start)
            .target(self.target)
            .step(self.step)
            .target_radius(target_radius)
            .build()
    }

    /// The sweep driver executing this scenario.
    pub fn driver(&self) -> SweepDriver {
        SweepDriver::with_search(
            self.config(self.radii.start),
            PrecisionSearch {
                bounds: self.bounds,
                strategy: self.strategy,
            },
        )
    }
}

/// Writes the sweep table to the provided sink as headerless tab-separated
/// lines: the radius with two decimals, then the minimal n.
pub fn write_sweep<W: Write>(rows: &[SweepRow], writer: W) -> Result<(), ConfigError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    for row in rows {
        wtr.write_record([
            format!("{:.2}", row.radius),
            row.minimal_n.to_string(),
        ])
        .map_err(ConfigError::TableError)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Reads a sweep table written by [`write_sweep`], reconstructing the rows
/// exactly for any radius with at most two decimals.
pub fn read_sweep<R: Read>(reader: R) -> Result<Vec<SweepRow>, ConfigError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.map_err(ConfigError::TableError)?;
        let line = idx + 1;
        if record.len() != 2 {
            return Err(ConfigError::MalformedRecord {
                line,
                reason: format!("expected 2 fields, found {}", record.len()),
            });
        }

        let radius = record[0]
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::MalformedRecord {
                line,
                reason: e.to_string(),
            })?;
        let minimal_n = record[1]
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::MalformedRecord {
                line,
                reason: e.to_string(),
            })?;

        rows.push(SweepRow { radius, minimal_n });
    }

    Ok(rows)
}

/// Writes the sweep table to the explicitly provided file path.
pub fn export_sweep<P: AsRef<Path>>(rows: &[SweepRow], path: P) -> Result<(), ConfigError> {
    let file = File::create(path)?;
    write_sweep(rows, BufWriter::new(file))
}

/// Loads a sweep table from the explicitly provided file path.
pub fn load_sweep<P: AsRef<Path>>(path: P) -> Result<Vec<SweepRow>, ConfigError> {
    let file = File::open(path)?;
    read_sweep(BufReader::new(file))
}
