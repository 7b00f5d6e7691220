/*
 *  display/font/mod.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Fixed-cell bitmap fonts, one 16-bit word per glyph row
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

mod font5x7;

pub use font5x7::FONT_5X7;

/// First printable character stored in a table (space)
pub const FIRST_CHAR: char = ' ';

/// Last printable character stored in a table (tilde)
pub const LAST_CHAR: char = '~';

/// Number of glyphs in every table, ' ' through '~'
pub const CHAR_MAP_SIZE: usize = 95;

/// Source of glyph bitmaps for one font size
///
/// Each row is a 16-bit word with the pixel mask left-justified: column 0 is
/// bit 15, column 1 is bit 14 and so on, whatever the declared width.
pub trait GlyphSource {
    /// Glyph cell width in pixels
    fn width(&self) -> u8;

    /// Glyph cell height in pixels (rows per glyph)
    fn height(&self) -> u8;

    /// Row word at a flat table index, `None` past the end of the table
    fn row_at(&self, index: usize) -> Option<u16>;

    /// Flat table index of row `row` of `ch`
    ///
    /// `None` for characters below the printable range; characters above it
    /// produce an index that `row_at` rejects.
    fn row_index(&self, ch: char, row: u8) -> Option<usize> {
        let offset = (ch as u32).checked_sub(FIRST_CHAR as u32)? as usize;
        Some(offset * self.height() as usize + row as usize)
    }

    /// Row word for `(ch, row)`
    fn row(&self, ch: char, row: u8) -> Option<u16> {
        self.row_index(ch, row).and_then(|index| self.row_at(index))
    }
}

/// A font backed by a static row table
#[derive(Debug, Clone, Copy)]
pub struct Font {
    name: &'static str,
    width: u8,
    height: u8,
    data: &'static [u16],
}

impl Font {
    /// Wrap a pre-generated table of `CHAR_MAP_SIZE * height` rows
    pub const fn new(name: &'static str, width: u8, height: u8, data: &'static [u16]) -> Self {
        Self { name, width, height, data }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of row words in the table
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Look up a built-in font by its `WxH` name
    pub fn by_name(name: &str) -> Option<Font> {
        match name.to_ascii_lowercase().as_str() {
            "5x7" | "font5x7" => Some(FONT_5X7),
            _ => None,
        }
    }
}

impl GlyphSource for Font {
    fn width(&self) -> u8 {
        self.width
    }

    fn height(&self) -> u8 {
        self.height
    }

    fn row_at(&self, index: usize) -> Option<u16> {
        self.data.get(index).copied()
    }
}

impl<G: GlyphSource + ?Sized> GlyphSource for &G {
    fn width(&self) -> u8 {
        (**self).width()
    }

    fn height(&self) -> u8 {
        (**self).height()
    }

    fn row_at(&self, index: usize) -> Option<u16> {
        (**self).row_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(FONT_5X7.len(), CHAR_MAP_SIZE * 7);
        assert_eq!(FONT_5X7.width(), 5);
        assert_eq!(FONT_5X7.height(), 7);
    }

    #[test]
    fn test_row_index() {
        assert_eq!(FONT_5X7.row_index(' ', 0), Some(0));
        assert_eq!(FONT_5X7.row_index('A', 2), Some(33 * 7 + 2));
        assert_eq!(FONT_5X7.row_index('\n', 0), None);
    }

    #[test]
    fn test_row_lookup_bounds() {
        assert_eq!(FONT_5X7.row('1', 6), Some(0xFF00));
        assert_eq!(FONT_5X7.row('~', 3), Some(0x7400));
        assert_eq!(FONT_5X7.row('\u{7f}', 0), None);
        assert_eq!(FONT_5X7.row('é', 0), None);
    }

    #[test]
    fn test_by_name() {
        assert!(Font::by_name("5x7").is_some());
        assert!(Font::by_name("16x26").is_none());
    }
}
