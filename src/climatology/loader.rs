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

//! Loader stage: reads the precipitation field from a netCDF dataset
//! and restricts it to the time samples of the requested month.

use super::calendar::{self, Calendar};
use super::field::GriddedField;
use crate::constants::PRECIPITATION_VARIABLE;
use crate::errors::InputError;
use crate::Float;
use log::debug;
use ndarray::{Array1, Array3, Axis};
use rustc_hash::FxHashMap;
use std::path::Path;

/// Attributes carried from the dataset into the field metadata.
const CARRIED_ATTRIBUTES: [&str; 2] = ["model_id", "history"];

/// Reads the precipitation field from `path`, keeping only the time
/// samples whose calendar month matches `month`.
pub fn read_precipitation(path: &Path, month: &str) -> Result<GriddedField, InputError> {
    debug!("Opening dataset {}", path.display());
    let file = netcdf::open(path)?;

    let var = file
        .variable(PRECIPITATION_VARIABLE)
        .ok_or_else(|| InputError::MissingVariable(PRECIPITATION_VARIABLE, path.to_path_buf()))?;

    let dims = var.dimensions();
    if dims.len() != 3 {
        return Err(InputError::UnexpectedShape {
            name: PRECIPITATION_VARIABLE.to_string(),
            found: dims.iter().map(|d| d.len()).collect(),
            expected: "(time, lat, lon)".to_string(),
        });
    }

    let shape = (dims[0].len(), dims[1].len(), dims[2].len());
    let time_name = dims[0].name();
    let lat_name = dims[1].name();
    let lon_name = dims[2].name();

    let labels = month_labels_of(&file, &time_name)?;
    let lats = coordinate_values(&file, &lat_name)?;
    let lons = coordinate_values(&file, &lon_name)?;

    if labels.len() != shape.0 || lats.len() != shape.1 || lons.len() != shape.2 {
        return Err(InputError::UnexpectedShape {
            name: PRECIPITATION_VARIABLE.to_string(),
            found: vec![shape.0, shape.1, shape.2],
            expected: format!("({}, {}, {})", labels.len(), lats.len(), lons.len()),
        });
    }

    let indices = matching_indices(&labels, month);
    if indices.is_empty() {
        return Err(InputError::NoMatchingSamples(month.to_string()));
    }
    debug!(
        "{} of {} time samples match {}",
        indices.len(),
        labels.len(),
        month
    );

    let values = var.get_values::<Float, _>(..)?;
    let data = Array3::from_shape_vec(shape, values).map_err(|err| {
        InputError::InvalidTimeAxis(format!("cannot shape variable data: {err}"))
    })?;
    let data = data.select(Axis(0), &indices);

    let units = variable_text(&var, "units")
        .ok_or(InputError::MissingAttribute("units", PRECIPITATION_VARIABLE.to_string()))?;

    let mut attributes = FxHashMap::default();
    for name in CARRIED_ATTRIBUTES {
        // variable attributes take precedence over global ones
        if let Some(text) = variable_text(&var, name).or_else(|| global_text(&file, name)) {
            attributes.insert(name.to_string(), text);
        }
    }

    GriddedField::new(data, lats, lons, units, attributes)
}

/// Indices of the time samples whose label equals the requested month.
///
/// Filtering is idempotent: applied to an already single-month label
/// set it selects every sample again.
pub fn matching_indices(labels: &[&'static str], month: &str) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, &label)| label == month)
        .map(|(index, _)| index)
        .collect()
}

/// Decodes the time coordinate variable into month labels.
fn month_labels_of(file: &netcdf::File, time_name: &str) -> Result<Vec<&'static str>, InputError> {
    let time_var = file
        .variable(time_name)
        .ok_or_else(|| InputError::MissingCoordinate(time_name.to_string()))?;

    let units = variable_text(&time_var, "units")
        .ok_or_else(|| InputError::MissingAttribute("units", time_name.to_string()))?;
    let calendar_attr = variable_text(&time_var, "calendar");
    let calendar = Calendar::from_attribute(calendar_attr.as_deref())?;

    let values = time_var.get_values::<Float, _>(..)?;
    calendar::month_labels(&values, &units, calendar)
}

/// Reads a one-dimensional coordinate variable.
pub(super) fn coordinate_values(
    file: &netcdf::File,
    name: &str,
) -> Result<Array1<Float>, InputError> {
    let var = file
        .variable(name)
        .ok_or_else(|| InputError::MissingCoordinate(name.to_string()))?;

    Ok(Array1::from_vec(var.get_values::<Float, _>(..)?))
}

/// Text value of a global attribute, when present and textual.
pub(super) fn global_text(file: &netcdf::File, name: &str) -> Option<String> {
    file.attribute(name).and_then(|attr| match attr.value() {
        Ok(netcdf::AttributeValue::Str(text)) => Some(text),
        _ => None,
    })
}

/// Text value of a variable attribute, when present and textual.
pub(super) fn variable_text(var: &netcdf::Variable, name: &str) -> Option<String> {
    match var.attribute_value(name) {
        Some(Ok(netcdf::AttributeValue::Str(text))) => Some(text),
        _ => None,
    }
}
