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

//! Built-in coastline overlay.
//!
//! A ten-degree land/ocean grid is embedded below and traced with
//! marching squares at the 0.5 isoline to yield coastline segments in
//! longitude/latitude coordinates. At this resolution the outline is a
//! geographic orientation aid, not a navigational coastline, which is
//! all a global climatology figure needs.

use crate::Float;

/// A coastline segment between two `(lon, lat)` points.
pub type Segment = ((Float, Float), (Float, Float));

/// Land cells on a 36x18 grid of 10-degree cells. Row 0 spans
/// latitudes 80..90 north; column 0 spans longitudes 170..180 west.
/// `#` marks a cell that is mostly land.
const LAND_ROWS: [&str; 18] = [
    "..........##..##....................",
    "......#####.####............#.......",
    "############.##.#.##################",
    "..#..########....#.#################",
    ".....#######.....################...",
    "......#####......###.###########....",
    ".......##.#.....########.#####......",
    "........##......#######..##.#.#.....",
    "..........###....######.....##......",
    "..........#####....####......####...",
    "...........####....####.......###...",
    "...........###.....###.......#####..",
    "...........##.......#..........##...",
    "...........#.......................#",
    "...........#........................",
    "............#.......................",
    "####################################",
    "####################################",
];

const COLUMNS: usize = 36;
const ROWS: usize = 18;
const CELL_DEGREES: Float = 10.0;

/// Longitude of the centre of grid column `i`.
fn column_longitude(i: usize) -> Float {
    -180.0 + (i as Float + 0.5) * CELL_DEGREES
}

/// Latitude of the centre of grid row `j`.
fn row_latitude(j: usize) -> Float {
    90.0 - (j as Float + 0.5) * CELL_DEGREES
}

fn is_land(i: usize, j: usize) -> bool {
    LAND_ROWS[j].as_bytes()[i] == b'#'
}

/// Traces the land/ocean boundary and returns its line segments.
///
/// Classic marching squares over the cell-centre lattice: every square
/// of four neighbouring centres is classified by which corners are
/// land, and the matching one or two segments cross the square through
/// its edge midpoints. Squares that straddle the antimeridian are not
/// formed, so coastlines crossing it are left open there.
pub fn coastline_segments() -> Vec<Segment> {
    let mut segments = Vec::new();

    for j in 0..ROWS - 1 {
        for i in 0..COLUMNS - 1 {
            let left = column_longitude(i);
            let right = column_longitude(i + 1);
            let top = row_latitude(j);
            let bottom = row_latitude(j + 1);

            let centre_x = (left + right) / 2.0;
            let centre_y = (top + bottom) / 2.0;

            // edge midpoints of the square
            let top_mid = (centre_x, top);
            let bottom_mid = (centre_x, bottom);
            let left_mid = (left, centre_y);
            let right_mid = (right, centre_y);

            let mut case = 0u8;
            if is_land(i, j) {
                case |= 1; // top left
            }
            if is_land(i + 1, j) {
                case |= 2; // top right
            }
            if is_land(i + 1, j + 1) {
                case |= 4; // bottom right
            }
            if is_land(i, j + 1) {
                case |= 8; // bottom left
            }

            match case {
                0 | 15 => {}
                1 | 14 => segments.push((left_mid, top_mid)),
                2 | 13 => segments.push((top_mid, right_mid)),
                3 | 12 => segments.push((left_mid, right_mid)),
                4 | 11 => segments.push((right_mid, bottom_mid)),
                6 | 9 => segments.push((top_mid, bottom_mid)),
                7 | 8 => segments.push((left_mid, bottom_mid)),
                // the two ambiguous saddles, resolved as separated corners
                5 => {
                    segments.push((left_mid, top_mid));
                    segments.push((right_mid, bottom_mid));
                }
                10 => {
                    segments.push((top_mid, right_mid));
                    segments.push((left_mid, bottom_mid));
                }
                _ => unreachable!(),
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_land_grid_is_rectangular() {
        assert_eq!(LAND_ROWS.len(), ROWS);
        for row in LAND_ROWS {
            assert_eq!(row.len(), COLUMNS);
            assert!(row.bytes().all(|b| b == b'#' || b == b'.'));
        }
    }

    #[test]
    fn segments_stay_inside_the_map_bounds() {
        let segments = coastline_segments();

        assert!(!segments.is_empty());
        for ((x0, y0), (x1, y1)) in segments {
            for lon in [x0, x1] {
                assert!((-180.0..=180.0).contains(&lon));
            }
            for lat in [y0, y1] {
                assert!((-90.0..=90.0).contains(&lat));
            }
        }
    }

    #[test]
    fn known_landmarks_are_classified() {
        // mid Pacific is ocean, central Asia and Antarctica are land
        assert!(!is_land(2, 9));
        assert!(is_land(26, 4));
        assert!(is_land(0, 17));
    }

    #[test]
    fn antarctica_contributes_an_unbroken_east_west_coast() {
        // rows 15 and 16 are ocean-over-land everywhere except the
        // peninsula column, so every square between them cuts a segment
        let horizontal: Vec<_> = coastline_segments()
            .into_iter()
            .filter(|((_, y0), (_, y1))| *y0 == -70.0 && *y1 == -70.0)
            .collect();

        assert!(horizontal.len() >= COLUMNS - 4);
    }
}
