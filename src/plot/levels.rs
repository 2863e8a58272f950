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

//! Automatic contour level selection.

use crate::Float;

const TARGET_BANDS: usize = 10;

/// Picks evenly spaced "nice" contour levels covering `[min, max]`.
///
/// The step is of the form 1, 2 or 5 times a power of ten, chosen so
/// that roughly [`TARGET_BANDS`] bands span the range. The first level
/// is the step multiple at or below `min`, so levels land on round
/// values rather than on the data extremes.
pub fn nice_levels(min: Float, max: Float) -> Vec<Float> {
    let (min, max) = if max > min { (min, max) } else { (min, min + 1.0) };

    let step = nice_step((max - min) / TARGET_BANDS as Float);
    let start = (min / step).floor() * step;
    let bands = ((max - start) / step).ceil() as usize;

    (0..=bands.max(1))
        .map(|index| start + index as Float * step)
        .collect()
}

/// Rounds a raw step up to the nearest 1, 2 or 5 times a power of ten.
fn nice_step(raw: Float) -> Float {
    let magnitude = (10.0 as Float).powf(raw.log10().floor());
    let residual = raw / magnitude;

    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    factor * magnitude
}
