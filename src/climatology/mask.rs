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

//! Masker stage: hides cells of one surface realm using a
//! land-area-fraction field on the same grid.
//!
//! The realm-to-hidden-cell convention is kept bit-for-bit compatible
//! with the established behaviour of this analysis, even though it
//! reads inverted: realm `ocean` hides cells whose land fraction is
//! below the threshold, realm `land` hides those at or above it. See
//! DESIGN.md before changing it.

use super::field::ClimatologyField;
use crate::args::Realm;
use crate::constants::{LAND_FRACTION_THRESHOLD, LAND_FRACTION_VARIABLE};
use crate::errors::{InputError, MaskError};
use crate::Float;
use log::debug;
use ndarray::Array2;
use std::path::Path;

/// Reads the two-dimensional land-area-fraction field (in percent).
pub fn read_land_fraction(path: &Path) -> Result<Array2<Float>, InputError> {
    debug!("Opening land-area-fraction dataset {}", path.display());
    let file = netcdf::open(path)?;

    let var = file
        .variable(LAND_FRACTION_VARIABLE)
        .ok_or_else(|| InputError::MissingVariable(LAND_FRACTION_VARIABLE, path.to_path_buf()))?;

    let dims = var.dimensions();
    if dims.len() != 2 {
        return Err(InputError::UnexpectedShape {
            name: LAND_FRACTION_VARIABLE.to_string(),
            found: dims.iter().map(|d| d.len()).collect(),
            expected: "(lat, lon)".to_string(),
        });
    }

    let values = var.get_values::<Float, _>(..)?;
    Array2::from_shape_vec((dims[0].len(), dims[1].len()), values).map_err(|err| {
        InputError::UnexpectedShape {
            name: LAND_FRACTION_VARIABLE.to_string(),
            found: vec![dims[0].len(), dims[1].len()],
            expected: err.to_string(),
        }
    })
}

/// Applies the realm mask to the climatological field in place.
///
/// The fraction grid must match the data grid exactly; no regridding
/// is performed. The new hidden set replaces any previously applied
/// mask.
pub fn apply_realm_mask(
    clim: &mut ClimatologyField,
    fraction: &Array2<Float>,
    realm: Realm,
) -> Result<(), MaskError> {
    if fraction.shape() != clim.data.shape() {
        return Err(MaskError::GridMismatch {
            mask: fraction.shape().to_vec(),
            data: clim.data.shape().to_vec(),
        });
    }

    let hidden = match realm {
        Realm::Ocean => fraction.mapv(|value| value < LAND_FRACTION_THRESHOLD),
        Realm::Land => fraction.mapv(|value| value >= LAND_FRACTION_THRESHOLD),
    };

    clim.hidden = Some(hidden);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rustc_hash::FxHashMap;

    fn climatology() -> ClimatologyField {
        ClimatologyField {
            data: array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
            lats: array![-30.0, 30.0],
            lons: array![0.0, 120.0, 240.0],
            units: "mm/day".to_string(),
            attributes: FxHashMap::default(),
            hidden: None,
        }
    }

    fn fraction() -> Array2<Float> {
        // includes the exact threshold value
        array![[100.0, 49.9, 0.0], [50.0, 75.0, 10.0]]
    }

    #[test]
    fn ocean_realm_hides_cells_below_the_threshold() {
        let mut clim = climatology();

        apply_realm_mask(&mut clim, &fraction(), Realm::Ocean).unwrap();

        let hidden = clim.hidden.as_ref().unwrap();
        assert_eq!(
            hidden,
            &array![[false, true, true], [false, false, true]]
        );
    }

    #[test]
    fn land_realm_hides_cells_at_or_above_the_threshold() {
        let mut clim = climatology();

        apply_realm_mask(&mut clim, &fraction(), Realm::Land).unwrap();

        let hidden = clim.hidden.as_ref().unwrap();
        assert_eq!(
            hidden,
            &array![[true, false, false], [true, true, false]]
        );
    }

    #[test]
    fn realms_are_complementary() {
        let mut ocean_run = climatology();
        let mut land_run = climatology();
        apply_realm_mask(&mut ocean_run, &fraction(), Realm::Ocean).unwrap();
        apply_realm_mask(&mut land_run, &fraction(), Realm::Land).unwrap();

        let ocean_hidden = ocean_run.hidden.unwrap();
        let land_hidden = land_run.hidden.unwrap();

        for (a, b) in ocean_hidden.iter().zip(land_hidden.iter()) {
            // each cell is hidden by exactly one of the two realms
            assert_ne!(a, b);
        }
    }

    #[test]
    fn masking_is_idempotent_and_overwrites_prior_state() {
        let mut clim = climatology();

        apply_realm_mask(&mut clim, &fraction(), Realm::Ocean).unwrap();
        let first = clim.hidden.clone().unwrap();

        apply_realm_mask(&mut clim, &fraction(), Realm::Ocean).unwrap();
        assert_eq!(clim.hidden.as_ref().unwrap(), &first);

        // a later land mask replaces the ocean mask instead of merging
        apply_realm_mask(&mut clim, &fraction(), Realm::Land).unwrap();
        for (a, b) in clim.hidden.unwrap().iter().zip(first.iter()) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn grid_mismatch_is_fatal() {
        let mut clim = climatology();
        let small = array![[10.0, 90.0], [90.0, 10.0]];

        let result = apply_realm_mask(&mut clim, &small, Realm::Land);

        assert!(matches!(result, Err(MaskError::GridMismatch { .. })));
        assert!(clim.hidden.is_none());
    }
}
