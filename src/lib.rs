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

//! climoplot computes a monthly climatological mean precipitation field
//! from gridded climate-model output (netCDF) and renders it as a
//! filled-contour map with a provenance log.
//!
//! The whole program is one forward pass through five stages:
//! load and month-filter, unit conversion, temporal mean, optional
//! land-sea masking, and rendering plus provenance. Each stage lives in
//! its own module under [`climatology`] and [`plot`].

pub mod args;
pub mod climatology;
pub mod constants;
pub mod errors;
pub mod plot;
pub mod provenance;

/// Floating-point type used for all field data.
pub type Float = f64;
