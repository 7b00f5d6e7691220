/*
 *  display/text.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Glyph rasterizer and text cursor
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use arrayvec::ArrayVec;
use log::trace;

use crate::display::color::Color;
use crate::display::error::DisplayError;
use crate::display::font::GlyphSource;
use crate::display::framebuffer::{DISPLAY_HEIGHT, FrameBuffer, PAGE_WIDTH};

/// Tallest glyph that can fit on the panel
const MAX_GLYPH_ROWS: usize = DISPLAY_HEIGHT as usize;

/// Top-left pixel of the next glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    x: u32,
    y: u32,
}

impl TextCursor {
    pub const fn new() -> Self {
        Self { x: 0, y: 0 }
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Move the cursor; rejects positions off the panel
    pub fn set_position(&mut self, x: u32, y: u32) -> Result<(), DisplayError> {
        if x >= PAGE_WIDTH || y >= DISPLAY_HEIGHT {
            return Err(DisplayError::OutOfBounds { x, y });
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    pub fn home(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Rasterize one glyph at the cursor and advance past it
    ///
    /// Every cell of the glyph box is written, set bits in `color` and clear
    /// bits in its inverse, so earlier buffer content never shows through.
    /// With `padding` a background column is drawn first and one extra column
    /// is skipped after the glyph.
    ///
    /// The room check compares both `x + height` and `y + height` against the
    /// page width; existing layouts depend on where it trips. A glyph that
    /// passes it but would still leave the panel is rejected with
    /// `OutOfBounds` before anything is drawn.
    pub fn write_char<G: GlyphSource>(
        &mut self,
        fb: &mut FrameBuffer,
        ch: char,
        font: &G,
        color: Color,
        padding: bool,
    ) -> Result<char, DisplayError> {
        let width = font.width() as u32;
        let height = font.height() as u32;

        if PAGE_WIDTH <= self.x + height || PAGE_WIDTH <= self.y + height {
            trace!("no room for {:?} at ({}, {})", ch, self.x, self.y);
            return Err(DisplayError::LayoutFull { x: self.x, y: self.y });
        }

        let right = self.x + u32::from(padding) + width;
        let bottom = self.y + height;
        if right > PAGE_WIDTH || bottom > DISPLAY_HEIGHT {
            return Err(DisplayError::OutOfBounds {
                x: right.saturating_sub(1),
                y: bottom.saturating_sub(1),
            });
        }

        let mut rows: ArrayVec<u16, MAX_GLYPH_ROWS> = ArrayVec::new();
        for r in 0..font.height() {
            let index = font.row_index(ch, r);
            let word = index
                .and_then(|i| font.row_at(i))
                .ok_or(DisplayError::GlyphLookupFailed { ch, index })?;
            rows.try_push(word)
                .map_err(|_| DisplayError::OutOfBounds { x: self.x, y: bottom - 1 })?;
        }

        let background = color.inverse();

        if padding {
            for n in 0..height {
                fb.set_pixel(self.x, self.y + n, background)?;
            }
            self.x += 1;
        }

        for (r, word) in rows.iter().enumerate() {
            let y = self.y + r as u32;
            for c in 0..width {
                // mask is left-justified; columns past bit 0 have no data
                let lit = 15u32
                    .checked_sub(c)
                    .is_some_and(|shift| (word >> shift) & 1 == 1);
                let pixel = if lit { color } else { background };
                fb.set_pixel(self.x + c, y, pixel)?;
            }
        }

        self.x += width;
        if padding {
            self.x += 1;
        }

        Ok(ch)
    }

    /// Write characters in order, stopping at the first failure
    ///
    /// Glyphs written before the failing one stay in the buffer.
    pub fn write_string<G: GlyphSource>(
        &mut self,
        fb: &mut FrameBuffer,
        text: &str,
        font: &G,
        color: Color,
        padding: bool,
    ) -> Result<(), DisplayError> {
        for ch in text.chars() {
            self.write_char(fb, ch, font, color, padding)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::font::{FONT_5X7, Font};

    fn glyph_rows(fb: &FrameBuffer, x0: u32, y0: u32, w: u32, h: u32) -> Vec<Vec<u8>> {
        (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| fb.pixel(x0 + x, y0 + y).unwrap().is_on() as u8)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_letter_a_pattern() {
        let mut fb = FrameBuffer::new();
        let mut cursor = TextCursor::new();
        fb.fill(Color::White);
        assert_eq!(cursor.write_char(&mut fb, 'A', &FONT_5X7, Color::Black, false), Ok('A'));

        // white background, black ink: lit pixels are the glyph's clear bits
        let rows = glyph_rows(&fb, 0, 0, 5, 7);
        let expected_ink = [
            [0, 0, 1, 0, 0],
            [0, 1, 0, 1, 0],
            [1, 0, 0, 0, 1],
            [1, 0, 0, 0, 1],
            [1, 1, 1, 1, 1],
            [1, 0, 0, 0, 1],
            [1, 0, 0, 0, 1],
        ];
        for (row, ink) in rows.iter().zip(expected_ink.iter()) {
            let lit: Vec<u8> = ink.iter().map(|b| 1 - b).collect();
            assert_eq!(row, &lit);
        }
        assert_eq!(cursor.position(), (5, 0));
    }

    #[test]
    fn test_matches_font_table_rows() {
        let mut fb = FrameBuffer::new();
        let mut cursor = TextCursor::new();
        cursor.write_char(&mut fb, 'g', &FONT_5X7, Color::White, false).unwrap();
        for r in 0..7u8 {
            let word = FONT_5X7.row('g', r).unwrap();
            for c in 0..5u32 {
                let expected = (word >> (15 - c)) & 1 == 1;
                assert_eq!(fb.pixel(c, r as u32).unwrap().is_on(), expected);
            }
        }
    }

    #[test]
    fn test_background_overwrites_previous_content() {
        let mut fb = FrameBuffer::new();
        fb.fill(Color::White);
        let mut cursor = TextCursor::new();
        cursor.write_char(&mut fb, ' ', &FONT_5X7, Color::White, false).unwrap();
        assert_eq!(glyph_rows(&fb, 0, 0, 5, 7), vec![vec![0u8; 5]; 7]);
        // outside the cell untouched
        assert_eq!(fb.pixel(5, 0).unwrap(), Color::White);
        assert_eq!(fb.pixel(0, 7).unwrap(), Color::White);
    }

    #[test]
    fn test_cursor_advance_without_padding() {
        let mut fb = FrameBuffer::new();
        let mut cursor = TextCursor::new();
        cursor.write_string(&mut fb, "abc", &FONT_5X7, Color::White, false).unwrap();
        assert_eq!(cursor.position(), (15, 0));
        cursor.write_string(&mut fb, "de", &FONT_5X7, Color::White, false).unwrap();
        assert_eq!(cursor.position(), (25, 0));
    }

    #[test]
    fn test_padding_column_and_advance() {
        let mut fb = FrameBuffer::new();
        fb.fill(Color::White);
        let mut cursor = TextCursor::new();
        cursor.write_char(&mut fb, '|', &FONT_5X7, Color::White, true).unwrap();
        assert_eq!(cursor.position(), (7, 0));
        for y in 0..7 {
            assert_eq!(fb.pixel(0, y).unwrap(), Color::Black);
        }
        // '|' is 0x1000: column 3 of the glyph, shifted one right by padding
        assert_eq!(fb.pixel(4, 0).unwrap(), Color::White);
        assert_eq!(fb.pixel(3, 0).unwrap(), Color::Black);
    }

    #[test]
    fn test_layout_full_uses_height_for_both_axes() {
        let mut fb = FrameBuffer::new();
        let mut cursor = TextCursor::new();

        // 120 + 7 = 127 still fits
        cursor.set_position(120, 0).unwrap();
        assert!(cursor.write_char(&mut fb, 'x', &FONT_5X7, Color::White, false).is_ok());

        // 121 + 7 = 128 does not, even though a 5-wide glyph would
        cursor.set_position(121, 0).unwrap();
        let before = fb.clone();
        assert_eq!(
            cursor.write_char(&mut fb, 'x', &FONT_5X7, Color::White, false),
            Err(DisplayError::LayoutFull { x: 121, y: 0 })
        );
        assert_eq!(fb, before);
        assert_eq!(cursor.position(), (121, 0));
    }

    #[test]
    fn test_glyph_past_bottom_is_out_of_bounds() {
        let mut fb = FrameBuffer::new();
        let mut cursor = TextCursor::new();
        cursor.set_position(0, 60).unwrap();
        let before = fb.clone();
        assert_eq!(
            cursor.write_char(&mut fb, 'x', &FONT_5X7, Color::White, false),
            Err(DisplayError::OutOfBounds { x: 4, y: 66 })
        );
        assert_eq!(fb, before);

        cursor.set_position(0, 57).unwrap();
        assert!(cursor.write_char(&mut fb, 'x', &FONT_5X7, Color::White, false).is_ok());
    }

    #[test]
    fn test_unprintable_character_rejected() {
        let mut fb = FrameBuffer::new();
        fb.fill(Color::White);
        let before = fb.clone();
        let mut cursor = TextCursor::new();
        let err = cursor.write_char(&mut fb, '\t', &FONT_5X7, Color::White, true).unwrap_err();
        assert!(matches!(err, DisplayError::GlyphLookupFailed { ch: '\t', index: None }));
        let err = cursor.write_char(&mut fb, '\u{7f}', &FONT_5X7, Color::White, true).unwrap_err();
        assert!(matches!(err, DisplayError::GlyphLookupFailed { index: Some(665), .. }));
        assert_eq!(fb, before);
        assert_eq!(cursor.position(), (0, 0));
    }

    #[test]
    fn test_string_failure_keeps_earlier_glyphs() {
        let mut fb = FrameBuffer::new();
        let mut cursor = TextCursor::new();
        let err = cursor
            .write_string(&mut fb, "ab\u{1}c", &FONT_5X7, Color::White, false)
            .unwrap_err();
        assert!(matches!(err, DisplayError::GlyphLookupFailed { ch: '\u{1}', .. }));
        assert!(fb.count_on_pixels() > 0);
        assert_eq!(cursor.position(), (10, 0));
    }

    #[test]
    fn test_wide_font_columns_beyond_word() {
        const WIDE: [u16; 95 * 2] = [0xFFFF; 95 * 2];
        let font = Font::new("18x2", 18, 2, &WIDE);
        let mut fb = FrameBuffer::new();
        let mut cursor = TextCursor::new();
        cursor.write_char(&mut fb, 'A', &font, Color::White, false).unwrap();
        assert_eq!(fb.pixel(15, 0).unwrap(), Color::White);
        assert_eq!(fb.pixel(16, 0).unwrap(), Color::Black);
        assert_eq!(fb.pixel(17, 1).unwrap(), Color::Black);
        assert_eq!(cursor.position(), (18, 0));
    }

    #[test]
    fn test_set_position_bounds() {
        let mut cursor = TextCursor::new();
        assert!(cursor.set_position(127, 63).is_ok());
        assert_eq!(
            cursor.set_position(128, 0),
            Err(DisplayError::OutOfBounds { x: 128, y: 0 })
        );
        assert_eq!(cursor.position(), (127, 63));
        cursor.home();
        assert_eq!(cursor.position(), (0, 0));
    }
}
