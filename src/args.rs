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

//! Command-line surface of the tool.
//!
//! A single command, no subcommands. The month argument is validated
//! against the canonical three-letter abbreviations (case-sensitive),
//! the realm of `--mask` against `land`/`ocean` when the pipeline runs.

use crate::constants::MONTH_ABBREVIATIONS;
use crate::Float;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "climoplot")]
#[command(about = "Plot the precipitation climatology for a given month.")]
pub struct Args {
    /// Input data file holding the "precipitation_flux" field
    pub infile: PathBuf,

    /// Month to plot (three-letter abbreviation, e.g. Jan)
    #[arg(value_parser = parse_month)]
    pub month: String,

    /// Output file name; the extension selects the image format
    pub outfile: PathBuf,

    /// Add gridlines to the map
    #[arg(long)]
    pub gridlines: bool,

    /// Levels / tick marks to appear on the colourbar
    #[arg(
        long = "cbar_levels",
        num_args = 0..,
        value_name = "LEVEL",
        allow_negative_numbers = true
    )]
    pub cbar_levels: Vec<Float>,

    /// Apply a land or ocean mask (specify the realm to mask)
    #[arg(long, num_args = 2, value_names = ["SFTLF_FILE", "REALM"])]
    pub mask: Option<Vec<String>>,
}

/// Surface realm hidden by the masking stage.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Realm {
    Land,
    Ocean,
}

impl FromStr for Realm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "land" => Ok(Realm::Land),
            "ocean" => Ok(Realm::Ocean),
            other => Err(other.to_string()),
        }
    }
}

fn parse_month(value: &str) -> Result<String, String> {
    if MONTH_ABBREVIATIONS.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "month must be one of: {}",
            MONTH_ABBREVIATIONS.join(", ")
        ))
    }
}
