/*
Copyright 2026 climoplot developers

This file is part of climoplot.

climoplot is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

climoplot is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with climoplot. If not, see https://www.gnu.org/licenses/.
*/

//! Error types of the pipeline, grouped by concern.
//!
//! No error is caught or recovered anywhere: every failure propagates
//! to `main`, is logged and terminates the run with a non-zero status.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error covering a whole pipeline run.
#[derive(Error, Debug)]
pub enum ClimatologyError {
    #[error("Error while reading input data: {0}")]
    Input(#[from] InputError),

    #[error("Error while converting units: {0}")]
    Unit(#[from] UnitError),

    #[error("Error while applying the land-sea mask: {0}")]
    Mask(#[from] MaskError),

    #[error("Error while writing output: {0}")]
    Output(#[from] OutputError),
}

/// Errors reading and decoding the input datasets.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot access the netCDF dataset: {0}")]
    CannotReadDataset(#[from] netcdf::Error),

    #[error("Variable {0:?} not found in {1}")]
    MissingVariable(&'static str, PathBuf),

    #[error("Coordinate variable {0:?} not found")]
    MissingCoordinate(String),

    #[error("Attribute {0:?} not found on variable {1:?}")]
    MissingAttribute(&'static str, String),

    #[error("Cannot decode the time axis: {0}")]
    InvalidTimeAxis(String),

    #[error("No time samples match month {0:?}")]
    NoMatchingSamples(String),

    #[error("Cannot average over an empty time axis")]
    EmptyTimeAxis,

    #[error("Variable {name:?} has shape {found:?}, expected {expected}")]
    UnexpectedShape {
        name: String,
        found: Vec<usize>,
        expected: String,
    },
}

/// Violation of the fixed unit precondition of the converter stage.
#[derive(Error, Debug)]
pub enum UnitError {
    #[error("Input units must be {expected:?}, found {found:?}")]
    UnexpectedUnits {
        expected: &'static str,
        found: String,
    },
}

/// Errors of the optional land-sea masking stage.
#[derive(Error, Debug)]
pub enum MaskError {
    #[error("Cannot read the land-area-fraction field: {0}")]
    Input(#[from] InputError),

    #[error("Realm must be \"land\" or \"ocean\", got {0:?}")]
    InvalidRealm(String),

    #[error("Mask grid has shape {mask:?} but the data grid has shape {data:?}")]
    GridMismatch { mask: Vec<usize>, data: Vec<usize> },
}

/// Errors writing the figure or the provenance log.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported output format {0:?}, only \"png\" is supported")]
    UnsupportedFormat(String),

    #[error("At least two contour levels are required, got {0}")]
    NotEnoughLevels(usize),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
