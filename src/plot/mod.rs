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

//! Figure composition and output.
//!
//! [`render_figure`] draws the filled-contour world map with its
//! decorations into an RGBA canvas and encodes it as PNG bytes;
//! [`save_figure`] writes them to disk. All geometry is fixed: the
//! figure is always 1200x500 pixels in an equirectangular projection
//! covering the whole globe.

pub mod canvas;
pub mod coastline;
pub mod colormap;
pub mod font;
pub mod levels;
pub mod png;

use crate::climatology::field::ClimatologyField;
use crate::constants::OUTPUT_UNITS;
use crate::errors::OutputError;
use crate::Float;
use canvas::{Canvas, Rect};
use log::{debug, warn};
use std::path::Path;

const FIGURE_WIDTH: usize = 1200;
const FIGURE_HEIGHT: usize = 500;

const MARGIN_LEFT: usize = 70;
const MARGIN_TOP: usize = 60;
const MARGIN_BOTTOM: usize = 45;
const MARGIN_RIGHT: usize = 130;
const COLORBAR_GAP: usize = 30;
const COLORBAR_WIDTH: usize = 28;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const HIDDEN_COLOR: [u8; 3] = [224, 224, 224];
const COASTLINE_COLOR: [u8; 3] = [64, 64, 64];
const GRIDLINE_COLOR: [u8; 3] = [176, 176, 176];
const FRAME_COLOR: [u8; 3] = [32, 32, 32];
const TEXT_COLOR: [u8; 3] = [16, 16, 16];

const MERIDIAN_SPACING: Float = 60.0;
const PARALLEL_SPACING: Float = 30.0;

/// Renders the climatology figure and returns the encoded PNG bytes.
///
/// `cbar_levels`, when non-empty, fixes the contour levels; otherwise
/// levels are chosen automatically from the visible data range. Cells
/// below the first level are left in the background color and cells at
/// or above the last level take the final band color.
pub fn render_figure(
    clim: &ClimatologyField,
    month: &str,
    gridlines: bool,
    cbar_levels: &[Float],
) -> Result<Vec<u8>, OutputError> {
    let levels = contour_levels(clim, cbar_levels)?;
    debug!(
        "Drawing {} contour bands between {} and {}",
        levels.len() - 1,
        levels[0],
        levels[levels.len() - 1]
    );
    let colors = colormap::band_colors(levels.len() - 1);

    let map = Rect {
        x: MARGIN_LEFT,
        y: MARGIN_TOP,
        width: FIGURE_WIDTH - MARGIN_LEFT - COLORBAR_GAP - COLORBAR_WIDTH - MARGIN_RIGHT,
        height: FIGURE_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
    };

    let mut canvas = Canvas::new(FIGURE_WIDTH, FIGURE_HEIGHT, BACKGROUND);

    draw_field(&mut canvas, map, clim, &levels, &colors);
    if gridlines {
        draw_gridlines(&mut canvas, map);
    }
    draw_coastlines(&mut canvas, map);
    canvas.outline_rect(map, FRAME_COLOR);
    draw_axis_labels(&mut canvas, map);
    draw_colorbar(&mut canvas, map, &levels, &colors);
    draw_title(&mut canvas, clim, month);

    png::encode_rgba(canvas.pixels(), canvas.width(), canvas.height())
}

/// Writes encoded figure bytes to `path`, which must end in `.png`.
pub fn save_figure(path: &Path, image: &[u8]) -> Result<(), OutputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if !extension.eq_ignore_ascii_case("png") {
        return Err(OutputError::UnsupportedFormat(extension.to_string()));
    }

    std::fs::write(path, image)?;

    Ok(())
}

fn contour_levels(
    clim: &ClimatologyField,
    cbar_levels: &[Float],
) -> Result<Vec<Float>, OutputError> {
    if !cbar_levels.is_empty() {
        if cbar_levels.len() < 2 {
            return Err(OutputError::NotEnoughLevels(cbar_levels.len()));
        }
        let mut sorted = cbar_levels.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        return Ok(sorted);
    }

    let (min, max) = clim.visible_range().unwrap_or_else(|| {
        warn!("No visible finite data; falling back to a 0 to 1 color range");
        (0.0, 1.0)
    });

    Ok(levels::nice_levels(min, max))
}

/// Paints every map pixel from its nearest grid cell.
fn draw_field(
    canvas: &mut Canvas,
    map: Rect,
    clim: &ClimatologyField,
    levels: &[Float],
    colors: &[[u8; 3]],
) {
    // data longitudes may run 0..360 instead of -180..180
    let wraps_at_360 = clim.lons.iter().any(|&lon| lon > 180.0);

    let column_cells: Vec<usize> = (0..map.width)
        .map(|px| {
            let mut lon = -180.0 + (px as Float + 0.5) / map.width as Float * 360.0;
            if wraps_at_360 && lon < 0.0 {
                lon += 360.0;
            }
            nearest_index(&clim.lons, lon)
        })
        .collect();
    let row_cells: Vec<usize> = (0..map.height)
        .map(|py| {
            let lat = 90.0 - (py as Float + 0.5) / map.height as Float * 180.0;
            nearest_index(&clim.lats, lat)
        })
        .collect();

    for (py, &lat_index) in row_cells.iter().enumerate() {
        for (px, &lon_index) in column_cells.iter().enumerate() {
            let color = if clim.is_hidden(lat_index, lon_index) {
                HIDDEN_COLOR
            } else {
                let value = clim.data[[lat_index, lon_index]];
                if !value.is_finite() {
                    HIDDEN_COLOR
                } else {
                    match band_of(value, levels) {
                        Some(band) => colors[band],
                        None => BACKGROUND,
                    }
                }
            };

            canvas.set_pixel((map.x + px) as i64, (map.y + py) as i64, color);
        }
    }
}

/// Band index for `value`, or `None` when it falls below the first
/// level. Values at or beyond the last level saturate into the final
/// band.
fn band_of(value: Float, levels: &[Float]) -> Option<usize> {
    if value < levels[0] {
        return None;
    }

    let bands = levels.len() - 1;
    for band in 0..bands {
        if value < levels[band + 1] {
            return Some(band);
        }
    }

    Some(bands - 1)
}

fn nearest_index(coordinates: &ndarray::Array1<Float>, target: Float) -> usize {
    let mut best = 0;
    let mut best_distance = Float::INFINITY;
    for (index, &coordinate) in coordinates.iter().enumerate() {
        let distance = (coordinate - target).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

fn project(map: Rect, lon: Float, lat: Float) -> (f64, f64) {
    let x = map.x as Float + (lon + 180.0) / 360.0 * map.width as Float;
    let y = map.y as Float + (90.0 - lat) / 180.0 * map.height as Float;
    (x, y)
}

fn draw_coastlines(canvas: &mut Canvas, map: Rect) {
    for (from, to) in coastline::coastline_segments() {
        canvas.draw_line(
            project(map, from.0, from.1),
            project(map, to.0, to.1),
            COASTLINE_COLOR,
            Some(map),
        );
    }
}

fn draw_gridlines(canvas: &mut Canvas, map: Rect) {
    let mut lon = -180.0 + MERIDIAN_SPACING;
    while lon < 180.0 {
        canvas.draw_line(
            project(map, lon, 90.0),
            project(map, lon, -90.0),
            GRIDLINE_COLOR,
            Some(map),
        );
        lon += MERIDIAN_SPACING;
    }

    let mut lat = -90.0 + PARALLEL_SPACING;
    while lat < 90.0 {
        canvas.draw_line(
            project(map, -180.0, lat),
            project(map, 180.0, lat),
            GRIDLINE_COLOR,
            Some(map),
        );
        lat += PARALLEL_SPACING;
    }
}

/// Degree labels along the bottom and left map edges.
fn draw_axis_labels(canvas: &mut Canvas, map: Rect) {
    let scale = 1;

    let mut lon = -180.0;
    while lon <= 180.0 {
        let (x, _) = project(map, lon, 0.0);
        let label = degree_label(lon, 'E', 'W');
        let width = font::text_width(&label, scale) as i64;
        canvas.draw_text(
            x.round() as i64 - width / 2,
            map.bottom() as i64 + 6,
            &label,
            scale,
            TEXT_COLOR,
        );
        lon += MERIDIAN_SPACING;
    }

    let mut lat = -90.0;
    while lat <= 90.0 {
        let (_, y) = project(map, 0.0, lat);
        let label = degree_label(lat, 'N', 'S');
        let width = font::text_width(&label, scale) as i64;
        canvas.draw_text(
            map.x as i64 - width - 8,
            y.round() as i64 - (font::GLYPH_HEIGHT as i64 * scale as i64) / 2,
            &label,
            scale,
            TEXT_COLOR,
        );
        lat += PARALLEL_SPACING;
    }
}

fn degree_label(degrees: Float, positive: char, negative: char) -> String {
    let magnitude = degrees.abs().round() as i64;
    if magnitude == 0 {
        "0".to_string()
    } else if degrees > 0.0 {
        format!("{magnitude}{positive}")
    } else {
        format!("{magnitude}{negative}")
    }
}

/// Vertical colorbar to the right of the map, one patch per band with
/// tick labels at the shared levels and the unit string on top.
fn draw_colorbar(canvas: &mut Canvas, map: Rect, levels: &[Float], colors: &[[u8; 3]]) {
    let bar = Rect {
        x: map.right() + COLORBAR_GAP,
        y: map.y,
        width: COLORBAR_WIDTH,
        height: map.height,
    };

    let bands = colors.len();
    for (band, &color) in colors.iter().enumerate() {
        // band 0 sits at the bottom of the bar
        let top = bar.y as Float + (bands - 1 - band) as Float / bands as Float * bar.height as Float;
        let bottom = bar.y as Float + (bands - band) as Float / bands as Float * bar.height as Float;
        canvas.fill_rect(
            Rect {
                x: bar.x,
                y: top.round() as usize,
                width: bar.width,
                height: (bottom.round() - top.round()) as usize,
            },
            color,
        );
    }
    canvas.outline_rect(bar, FRAME_COLOR);

    let scale = 1;
    for (index, &level) in levels.iter().enumerate() {
        let y = bar.y as Float
            + (levels.len() - 1 - index) as Float / bands as Float * bar.height as Float;
        canvas.draw_text(
            bar.right() as i64 + 6,
            y.round() as i64 - (font::GLYPH_HEIGHT as i64 * scale as i64) / 2,
            &format_level(level),
            scale,
            TEXT_COLOR,
        );
    }

    canvas.draw_text(
        bar.x as i64,
        bar.y as i64 - font::GLYPH_HEIGHT as i64 * 2 - 6,
        OUTPUT_UNITS,
        1,
        TEXT_COLOR,
    );
}

/// Formats a contour level for its colorbar tick, trimming the
/// trailing zeros a fixed-precision format leaves behind.
fn format_level(level: Float) -> String {
    let mut text = format!("{level:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

fn draw_title(canvas: &mut Canvas, clim: &ClimatologyField, month: &str) {
    let model = clim.attributes.get("model_id").cloned().unwrap_or_else(|| {
        warn!("Input has no model_id attribute; titling the figure with \"unknown\"");
        "unknown".to_string()
    });
    let title = format!("{model} precipitation climatology ({month})");

    let scale = 2;
    let width = font::text_width(&title, scale) as i64;
    canvas.draw_text(
        (FIGURE_WIDTH as i64 - width) / 2,
        (MARGIN_TOP as i64 - font::GLYPH_HEIGHT as i64 * scale as i64) / 2,
        &title,
        scale,
        TEXT_COLOR,
    );
}
