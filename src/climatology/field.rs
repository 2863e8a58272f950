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

//! In-memory representation of gridded fields.
//!
//! Fields carry their coordinate arrays, the physical unit string and
//! the free-form dataset attributes alongside the data, so every later
//! stage can read metadata without going back to the file.

use crate::errors::InputError;
use crate::Float;
use ndarray::{Array1, Array2, Array3};
use rustc_hash::FxHashMap;

/// A time-resolved gridded field (time × lat × lon).
#[derive(Clone, Debug)]
pub struct GriddedField {
    pub data: Array3<Float>,
    pub lats: Array1<Float>,
    pub lons: Array1<Float>,
    pub units: String,
    pub attributes: FxHashMap<String, String>,
}

impl GriddedField {
    /// Constructs a field, checking the shape invariant: the data
    /// extent must match the coordinate lengths along every spatial
    /// axis.
    pub fn new(
        data: Array3<Float>,
        lats: Array1<Float>,
        lons: Array1<Float>,
        units: String,
        attributes: FxHashMap<String, String>,
    ) -> Result<Self, InputError> {
        if data.shape()[1] != lats.len() || data.shape()[2] != lons.len() {
            return Err(InputError::UnexpectedShape {
                name: "precipitation_flux".to_string(),
                found: data.shape().to_vec(),
                expected: format!("(time, {}, {})", lats.len(), lons.len()),
            });
        }

        Ok(GriddedField {
            data,
            lats,
            lons,
            units,
            attributes,
        })
    }
}

/// A time-collapsed climatological field (lat × lon).
///
/// The optional hidden-cell mask is honoured by the renderer and by the
/// statistics behind automatic contour levels; `true` marks a cell as
/// hidden.
#[derive(Clone, Debug)]
pub struct ClimatologyField {
    pub data: Array2<Float>,
    pub lats: Array1<Float>,
    pub lons: Array1<Float>,
    pub units: String,
    pub attributes: FxHashMap<String, String>,
    pub hidden: Option<Array2<bool>>,
}

impl ClimatologyField {
    pub fn is_hidden(&self, lat_index: usize, lon_index: usize) -> bool {
        self.hidden
            .as_ref()
            .map_or(false, |mask| mask[[lat_index, lon_index]])
    }

    /// Minimum and maximum of the visible, finite values.
    /// `None` when every cell is hidden or non-finite.
    pub fn visible_range(&self) -> Option<(Float, Float)> {
        let mut range: Option<(Float, Float)> = None;

        for ((lat_index, lon_index), &value) in self.data.indexed_iter() {
            if self.is_hidden(lat_index, lon_index) || !value.is_finite() {
                continue;
            }

            range = Some(match range {
                None => (value, value),
                Some((low, high)) => (low.min(value), high.max(value)),
            });
        }

        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_climatology() -> ClimatologyField {
        ClimatologyField {
            data: array![[1.0, 2.0], [3.0, 4.0]],
            lats: array![-45.0, 45.0],
            lons: array![0.0, 180.0],
            units: "mm/day".to_string(),
            attributes: FxHashMap::default(),
            hidden: None,
        }
    }

    #[test]
    fn shape_invariant_is_checked() {
        let data = Array3::zeros((2, 3, 4));
        let bad_lats = Array1::zeros(2);
        let lons = Array1::zeros(4);

        let result = GriddedField::new(
            data,
            bad_lats,
            lons,
            "kg m-2 s-1".to_string(),
            FxHashMap::default(),
        );

        assert!(matches!(
            result,
            Err(InputError::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn visible_range_ignores_hidden_cells() {
        let mut clim = sample_climatology();
        assert_eq!(clim.visible_range(), Some((1.0, 4.0)));

        clim.hidden = Some(array![[false, true], [true, false]]);
        assert_eq!(clim.visible_range(), Some((1.0, 4.0)));

        clim.hidden = Some(array![[true, true], [false, true]]);
        assert_eq!(clim.visible_range(), Some((3.0, 3.0)));

        clim.hidden = Some(array![[true, true], [true, true]]);
        assert_eq!(clim.visible_range(), None);
    }
}
