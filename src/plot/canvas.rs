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

//! Minimal RGBA drawing surface for figure composition.

use super::font;

/// Axis-aligned pixel rectangle used for clipping.
#[derive(Copy, Clone, Debug)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x as i64
            && y >= self.y as i64
            && x < (self.x + self.width) as i64
            && y < (self.y + self.height) as i64
    }

    pub fn right(&self) -> usize {
        self.x + self.width
    }

    pub fn bottom(&self) -> usize {
        self.y + self.height
    }
}

/// An RGBA pixel buffer with just enough drawing primitives for the
/// figure: rectangles, clipped lines and bitmap text.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[background[0], background[1], background[2], 255]);
        }

        Canvas {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let offset = (y as usize * self.width + x as usize) * 4;
        self.pixels[offset] = color[0];
        self.pixels[offset + 1] = color[1];
        self.pixels[offset + 2] = color[2];
        self.pixels[offset + 3] = 255;
    }

    pub fn fill_rect(&mut self, rect: Rect, color: [u8; 3]) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.set_pixel(x as i64, y as i64, color);
            }
        }
    }

    /// One-pixel rectangle outline, drawn inside the rect bounds.
    pub fn outline_rect(&mut self, rect: Rect, color: [u8; 3]) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }

        for x in rect.x..rect.right() {
            self.set_pixel(x as i64, rect.y as i64, color);
            self.set_pixel(x as i64, rect.bottom() as i64 - 1, color);
        }
        for y in rect.y..rect.bottom() {
            self.set_pixel(rect.x as i64, y as i64, color);
            self.set_pixel(rect.right() as i64 - 1, y as i64, color);
        }
    }

    /// Bresenham line restricted to an optional clip rectangle.
    pub fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        color: [u8; 3],
        clip: Option<Rect>,
    ) {
        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if clip.map_or(true, |rect| rect.contains(x0, y0)) {
                self.set_pixel(x0, y0, color);
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x0 += sx;
            }
            if doubled <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draws text with the built-in bitmap font; `(x, y)` is the
    /// top-left corner of the first glyph.
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: usize, color: [u8; 3]) {
        let advance = ((font::GLYPH_WIDTH + 1) * scale) as i64;
        let mut pen_x = x;

        for character in text.chars() {
            let glyph = font::glyph(character);

            for (row, bits) in glyph.iter().enumerate() {
                for column in 0..font::GLYPH_WIDTH {
                    if bits & (1 << (font::GLYPH_WIDTH - 1 - column)) == 0 {
                        continue;
                    }

                    for sub_y in 0..scale {
                        for sub_x in 0..scale {
                            self.set_pixel(
                                pen_x + (column * scale + sub_x) as i64,
                                y + (row * scale + sub_y) as i64,
                                color,
                            );
                        }
                    }
                }
            }

            pen_x += advance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(canvas: &Canvas, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * canvas.width() + x) * 4;
        let p = &canvas.pixels()[offset..offset + 4];
        [p[0], p[1], p[2], p[3]]
    }

    #[test]
    fn starts_filled_with_the_background() {
        let canvas = Canvas::new(4, 3, [250, 250, 250]);

        assert_eq!(canvas.pixels().len(), 4 * 3 * 4);
        assert_eq!(pixel(&canvas, 0, 0), [250, 250, 250, 255]);
        assert_eq!(pixel(&canvas, 3, 2), [250, 250, 250, 255]);
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut canvas = Canvas::new(4, 3, [0, 0, 0]);

        canvas.set_pixel(-1, 0, [255, 0, 0]);
        canvas.set_pixel(4, 0, [255, 0, 0]);
        canvas.set_pixel(0, 3, [255, 0, 0]);

        assert!(canvas.pixels().iter().step_by(4).all(|&r| r == 0));
    }

    #[test]
    fn lines_respect_the_clip_rect() {
        let mut canvas = Canvas::new(10, 10, [0, 0, 0]);
        let clip = Rect {
            x: 2,
            y: 2,
            width: 4,
            height: 4,
        };

        canvas.draw_line((0.0, 0.0), (9.0, 0.0), [255, 255, 255], Some(clip));
        canvas.draw_line((0.0, 3.0), (9.0, 3.0), [255, 255, 255], Some(clip));

        // the first line lies entirely outside the clip rect
        assert_eq!(pixel(&canvas, 4, 0), [0, 0, 0, 255]);
        // the second is only drawn inside it
        assert_eq!(pixel(&canvas, 1, 3), [0, 0, 0, 255]);
        assert_eq!(pixel(&canvas, 4, 3), [255, 255, 255, 255]);
        assert_eq!(pixel(&canvas, 7, 3), [0, 0, 0, 255]);
    }
}
