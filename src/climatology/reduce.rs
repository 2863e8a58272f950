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

//! Temporal Reducer stage: collapses the time axis into a climatology.

use super::field::{ClimatologyField, GriddedField};
use crate::errors::InputError;
use log::debug;
use ndarray::Axis;

/// Collapses the time axis with an equal-weight arithmetic mean.
///
/// Every sample counts the same; there is no adjustment for variable
/// month lengths. Coordinates, units and attributes carry over and the
/// result starts without a hidden-cell mask.
pub fn collapse_time(field: GriddedField) -> Result<ClimatologyField, InputError> {
    let samples = field.data.len_of(Axis(0));
    debug!("Averaging {samples} time samples");

    let data = field
        .data
        .mean_axis(Axis(0))
        .ok_or(InputError::EmptyTimeAxis)?;

    Ok(ClimatologyField {
        data,
        lats: field.lats,
        lons: field.lons,
        units: field.units,
        attributes: field.attributes,
        hidden: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use ndarray::{array, Array3};
    use rustc_hash::FxHashMap;

    #[test]
    fn averages_each_cell_over_time() {
        // three samples on a 2x2 grid with hand-computed means
        let data = Array3::from_shape_vec(
            (3, 2, 2),
            vec![
                1.0, 2.0, 3.0, 4.0, //
                3.0, 2.0, 9.0, 4.0, //
                5.0, 2.0, 0.0, 4.0,
            ],
        )
        .unwrap();
        let field = GriddedField::new(
            data,
            array![-30.0, 30.0],
            array![0.0, 180.0],
            "mm/day".to_string(),
            FxHashMap::default(),
        )
        .unwrap();

        let clim = collapse_time(field).unwrap();

        assert_eq!(clim.data.shape(), [2, 2]);
        assert!(approx_eq!(f64, clim.data[[0, 0]], 3.0));
        assert!(approx_eq!(f64, clim.data[[0, 1]], 2.0));
        assert!(approx_eq!(f64, clim.data[[1, 0]], 4.0));
        assert!(approx_eq!(f64, clim.data[[1, 1]], 4.0));
        assert_eq!(clim.units, "mm/day");
        assert!(clim.hidden.is_none());
    }

    #[test]
    fn empty_time_axis_is_an_error() {
        let field = GriddedField::new(
            Array3::zeros((0, 2, 2)),
            array![-30.0, 30.0],
            array![0.0, 180.0],
            "mm/day".to_string(),
            FxHashMap::default(),
        )
        .unwrap();

        assert!(matches!(
            collapse_time(field),
            Err(InputError::EmptyTimeAxis)
        ));
    }
}
