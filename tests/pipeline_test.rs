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

//! End-to-end tests over synthetic netCDF datasets.

use climoplot::args::Args;
use climoplot::climatology::{self, loader, reduce, units};
use climoplot::errors::{ClimatologyError, InputError, MaskError, OutputError, UnitError};
use float_cmp::assert_approx_eq;
use std::path::{Path, PathBuf};

const LATS: [f64; 3] = [-30.0, 0.0, 30.0];
const LONS: [f64; 3] = [0.0, 120.0, 240.0];

/// Writes a dataset with two January time samples of constant
/// precipitation on a 3x3 grid.
fn write_precipitation(path: &Path, value: f64, units: &str) {
    let mut file = netcdf::create(path).unwrap();

    file.add_dimension("time", 2).unwrap();
    file.add_dimension("lat", LATS.len()).unwrap();
    file.add_dimension("lon", LONS.len()).unwrap();

    file.add_attribute("model_id", "TEST-MODEL").unwrap();
    file.add_attribute("history", "synthesised for testing").unwrap();

    {
        let mut time = file.add_variable::<f64>("time", &["time"]).unwrap();
        time.put_attribute("units", "days since 2000-01-01").unwrap();
        time.put_attribute("calendar", "standard").unwrap();
        // 2000 is a leap year, so day 366 is January again
        time.put_values(&[0.0, 366.0], ..).unwrap();
    }
    {
        let mut lat = file.add_variable::<f64>("lat", &["lat"]).unwrap();
        lat.put_values(&LATS, ..).unwrap();
    }
    {
        let mut lon = file.add_variable::<f64>("lon", &["lon"]).unwrap();
        lon.put_values(&LONS, ..).unwrap();
    }
    {
        let mut pr = file
            .add_variable::<f64>("precipitation_flux", &["time", "lat", "lon"])
            .unwrap();
        pr.put_attribute("units", units).unwrap();
        pr.put_values(&vec![value; 2 * LATS.len() * LONS.len()], ..)
            .unwrap();
    }
}

/// Writes a land-area-fraction dataset on an `nlat` x `nlon` grid.
fn write_land_fraction(path: &Path, nlat: usize, nlon: usize) {
    let mut file = netcdf::create(path).unwrap();

    file.add_dimension("lat", nlat).unwrap();
    file.add_dimension("lon", nlon).unwrap();

    let mut sftlf = file
        .add_variable::<f64>("land_area_fraction", &["lat", "lon"])
        .unwrap();
    sftlf.put_attribute("units", "%").unwrap();
    let fractions: Vec<f64> = (0..nlat * nlon)
        .map(|cell| if cell % 2 == 0 { 100.0 } else { 0.0 })
        .collect();
    sftlf.put_values(&fractions, ..).unwrap();
}

fn args(infile: PathBuf, month: &str, outfile: PathBuf) -> Args {
    Args {
        infile,
        month: month.to_string(),
        outfile,
        gridlines: false,
        cbar_levels: Vec::new(),
        mask: None,
    }
}

#[test]
fn a_full_run_writes_the_figure_and_its_provenance() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    let outfile = dir.path().join("map.png");
    write_precipitation(&infile, 2.5e-5, "kg m-2 s-1");

    climatology::run(&args(infile, "Jan", outfile.clone())).unwrap();

    let image = std::fs::read(&outfile).unwrap();
    assert_eq!(&image[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let log = std::fs::read_to_string(dir.path().join("map.txt")).unwrap();
    assert!(log.contains("(history of"));
    assert!(log.contains("synthesised for testing"));
}

#[test]
fn the_climatology_is_the_flux_in_mm_per_day() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    write_precipitation(&infile, 2.5e-5, "kg m-2 s-1");

    let mut field = loader::read_precipitation(&infile, "Jan").unwrap();
    units::convert_to_mm_per_day(&mut field).unwrap();
    let clim = reduce::collapse_time(field).unwrap();

    assert_eq!(clim.data.dim(), (3, 3));
    for &value in clim.data.iter() {
        assert_approx_eq!(f64, value, 2.16, epsilon = 1e-9);
    }
    assert_eq!(clim.units, "mm/day");
}

#[test]
fn a_month_without_samples_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    write_precipitation(&infile, 2.5e-5, "kg m-2 s-1");

    let result = climatology::run(&args(infile, "Feb", dir.path().join("map.png")));

    assert!(matches!(
        result,
        Err(ClimatologyError::Input(InputError::NoMatchingSamples(month))) if month == "Feb"
    ));
}

#[test]
fn unexpected_input_units_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    write_precipitation(&infile, 2.16, "mm/day");

    let result = climatology::run(&args(infile, "Jan", dir.path().join("map.png")));

    assert!(matches!(
        result,
        Err(ClimatologyError::Unit(UnitError::UnexpectedUnits { found, .. })) if found == "mm/day"
    ));
}

#[test]
fn a_masked_run_succeeds_on_a_matching_grid() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    let sftlf = dir.path().join("sftlf.nc");
    let outfile = dir.path().join("masked.png");
    write_precipitation(&infile, 2.5e-5, "kg m-2 s-1");
    write_land_fraction(&sftlf, LATS.len(), LONS.len());

    let mut args = args(infile, "Jan", outfile.clone());
    args.mask = Some(vec![
        sftlf.to_str().unwrap().to_string(),
        "ocean".to_string(),
    ]);

    climatology::run(&args).unwrap();
    assert!(outfile.exists());
}

#[test]
fn a_mask_on_a_different_grid_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    let sftlf = dir.path().join("sftlf.nc");
    write_precipitation(&infile, 2.5e-5, "kg m-2 s-1");
    write_land_fraction(&sftlf, 2, 2);

    let mut args = args(infile, "Jan", dir.path().join("map.png"));
    args.mask = Some(vec![
        sftlf.to_str().unwrap().to_string(),
        "land".to_string(),
    ]);

    let result = climatology::run(&args);

    assert!(matches!(
        result,
        Err(ClimatologyError::Mask(MaskError::GridMismatch { .. }))
    ));
}

#[test]
fn an_unknown_realm_is_rejected_before_any_reading() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    write_precipitation(&infile, 2.5e-5, "kg m-2 s-1");

    let mut args = args(infile, "Jan", dir.path().join("map.png"));
    args.mask = Some(vec!["missing.nc".to_string(), "sea".to_string()]);

    let result = climatology::run(&args);

    assert!(matches!(
        result,
        Err(ClimatologyError::Mask(MaskError::InvalidRealm(realm))) if realm == "sea"
    ));
}

#[test]
fn non_png_output_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("pr.nc");
    write_precipitation(&infile, 2.5e-5, "kg m-2 s-1");

    let result = climatology::run(&args(infile, "Jan", dir.path().join("map.pdf")));

    assert!(matches!(
        result,
        Err(ClimatologyError::Output(OutputError::UnsupportedFormat(ext))) if ext == "pdf"
    ));
}
