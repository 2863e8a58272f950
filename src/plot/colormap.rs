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

//! Sequential colormap for precipitation amounts.
//!
//! The palette follows the reversed haline scheme: pale yellow for dry
//! cells through green and teal into deep blue for the wettest ones.

use crate::Float;

/// A color anchor within a gradient, positioned on `[0, 1]`.
#[derive(Copy, Clone, Debug)]
pub struct ColorStop {
    pub position: Float,
    pub color: [u8; 3],
}

/// Reversed haline, sampled at eight anchors.
const PALETTE: [ColorStop; 8] = [
    ColorStop {
        position: 0.0,
        color: [253, 238, 161],
    },
    ColorStop {
        position: 0.14,
        color: [165, 205, 122],
    },
    ColorStop {
        position: 0.29,
        color: [86, 185, 131],
    },
    ColorStop {
        position: 0.43,
        color: [43, 159, 141],
    },
    ColorStop {
        position: 0.57,
        color: [33, 131, 144],
    },
    ColorStop {
        position: 0.71,
        color: [35, 100, 143],
    },
    ColorStop {
        position: 0.86,
        color: [48, 62, 133],
    },
    ColorStop {
        position: 1.0,
        color: [41, 24, 107],
    },
];

/// Samples the palette at `t`, clamped to `[0, 1]`, interpolating
/// linearly between the neighbouring stops.
pub fn sample(t: Float) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);

    let mut lower = PALETTE[0];
    for stop in &PALETTE[1..] {
        if t <= stop.position {
            let span = stop.position - lower.position;
            let fraction = if span > 0.0 { (t - lower.position) / span } else { 0.0 };
            return lerp(lower.color, stop.color, fraction);
        }
        lower = *stop;
    }

    PALETTE[PALETTE.len() - 1].color
}

/// One fill color per contour band, sampled at band midpoints so the
/// first and last bands stay distinguishable from the extremes.
pub fn band_colors(bands: usize) -> Vec<[u8; 3]> {
    (0..bands)
        .map(|band| sample((band as Float + 0.5) / bands as Float))
        .collect()
}

fn lerp(from: [u8; 3], to: [u8; 3], fraction: Float) -> [u8; 3] {
    let mut color = [0u8; 3];
    for channel in 0..3 {
        let a = from[channel] as Float;
        let b = to[channel] as Float;
        color[channel] = (a + (b - a) * fraction).round() as u8;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_the_anchor_colors() {
        assert_eq!(sample(0.0), [253, 238, 161]);
        assert_eq!(sample(1.0), [41, 24, 107]);
    }

    #[test]
    fn out_of_range_positions_are_clamped() {
        assert_eq!(sample(-3.0), sample(0.0));
        assert_eq!(sample(7.5), sample(1.0));
    }

    #[test]
    fn midpoints_interpolate_between_stops() {
        // halfway between the first two anchors (0.0 and 0.14)
        let color = sample(0.07);
        assert_eq!(color, [209, 222, 142]);
    }

    #[test]
    fn band_colors_darken_from_dry_to_wet() {
        let colors = band_colors(10);

        assert_eq!(colors.len(), 10);
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }

        let brightness =
            |color: [u8; 3]| color.iter().map(|&c| c as u32).sum::<u32>();
        for pair in colors.windows(2) {
            assert!(brightness(pair[0]) > brightness(pair[1]));
        }
    }
}
