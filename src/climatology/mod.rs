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

//! The analysis pipeline.
//!
//! Data flows strictly forward through five stages, each owning the
//! field exclusively and mutating it in place before handing it on:
//! [`loader`] → [`units`] → [`reduce`] → ([`mask`]) → [`crate::plot`]
//! plus the provenance record. Nothing is retried and nothing is
//! shared; a failure anywhere aborts the run.

pub mod calendar;
pub mod field;
pub mod loader;
pub mod mask;
pub mod reduce;
pub mod units;

use crate::args::{Args, Realm};
use crate::errors::{ClimatologyError, MaskError};
use crate::{plot, provenance};
use log::{debug, info};
use std::path::Path;

/// Runs the whole pipeline for one invocation.
pub fn run(args: &Args) -> Result<(), ClimatologyError> {
    info!(
        "Computing the {} precipitation climatology from {}",
        args.month,
        args.infile.display()
    );

    let mut field = loader::read_precipitation(&args.infile, &args.month)?;

    debug!("Converting {} to mm/day", field.units);
    units::convert_to_mm_per_day(&mut field)?;

    let mut clim = reduce::collapse_time(field)?;

    if let Some(mask_args) = &args.mask {
        let sftlf_file = Path::new(&mask_args[0]);
        let realm: Realm = mask_args[1]
            .parse()
            .map_err(MaskError::InvalidRealm)?;

        debug!(
            "Masking with realm {:?} from {}",
            realm,
            sftlf_file.display()
        );
        let fraction = mask::read_land_fraction(sftlf_file).map_err(MaskError::from)?;
        mask::apply_realm_mask(&mut clim, &fraction, realm)?;
    }

    info!("Rendering the figure to {}", args.outfile.display());
    let image = plot::render_figure(&clim, &args.month, args.gridlines, &args.cbar_levels)?;
    plot::save_figure(&args.outfile, &image)?;

    let history = clim
        .attributes
        .get("history")
        .map(|text| (args.infile.as_path(), text.as_str()));
    let record = provenance::new_record(&command_line(), history);
    provenance::append_record(&args.outfile, &record)?;
    debug!(
        "Provenance appended to {}",
        provenance::log_path(&args.outfile).display()
    );

    Ok(())
}

fn command_line() -> String {
    std::env::args().collect::<Vec<_>>().join(" ")
}
