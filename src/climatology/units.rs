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

//! Unit Converter stage: `kg m-2 s-1` to `mm/day`.
//!
//! This is a single fixed conversion, not a unit system: water with a
//! density of 1000 kg m-3 falling at 1 kg m-2 s-1 accumulates 86 400 mm
//! per day.

use super::field::GriddedField;
use crate::constants::{INPUT_UNITS, OUTPUT_UNITS, SECONDS_PER_DAY};
use crate::errors::UnitError;

/// Converts the precipitation field in place.
///
/// The declared units must be exactly `kg m-2 s-1`; the check happens
/// before any value is touched, so a failed conversion leaves the
/// field unchanged.
pub fn convert_to_mm_per_day(field: &mut GriddedField) -> Result<(), UnitError> {
    if field.units != INPUT_UNITS {
        return Err(UnitError::UnexpectedUnits {
            expected: INPUT_UNITS,
            found: field.units.clone(),
        });
    }

    field.data.mapv_inplace(|value| value * SECONDS_PER_DAY);
    field.units = OUTPUT_UNITS.to_string();

    Ok(())
}
