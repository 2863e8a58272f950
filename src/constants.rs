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

//! Module containing constants used by the pipeline.

use crate::Float;

/// Name of the netCDF variable holding the precipitation field.
pub const PRECIPITATION_VARIABLE: &str = "precipitation_flux";

/// Name of the netCDF variable holding the land-area-fraction field.
pub const LAND_FRACTION_VARIABLE: &str = "land_area_fraction";

/// Unit string the input precipitation field must declare.
pub const INPUT_UNITS: &str = "kg m-2 s-1";

/// Unit string of the converted field.
pub const OUTPUT_UNITS: &str = "mm/day";

/// Seconds per day, the `kg m-2 s-1` to `mm/day` conversion factor.
pub const SECONDS_PER_DAY: Float = 86_400.0;

/// Land-area-fraction threshold (in percent) separating land cells
/// from ocean cells.
pub const LAND_FRACTION_THRESHOLD: Float = 50.0;

/// Canonical three-letter month abbreviations in calendar order.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Extension of the provenance log written next to the figure.
pub const PROVENANCE_EXTENSION: &str = "txt";
