/*
 *  display/color.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Monochrome pixel colour
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

use embedded_graphics::pixelcolor::BinaryColor;
use serde::{Deserialize, Serialize};

/// Pixel colour of a monochrome OLED panel
///
/// `White` is a lit pixel (bit set in GDDRAM), `Black` is dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other colour; used as the background of a glyph cell
    pub fn inverse(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Byte value a whole GDDRAM column takes when filled with this colour
    pub fn fill_byte(self) -> u8 {
        match self {
            Color::Black => 0x00,
            Color::White => 0xFF,
        }
    }

    pub fn is_on(self) -> bool {
        self == Color::White
    }
}

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::White,
            BinaryColor::Off => Color::Black,
        }
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => BinaryColor::On,
            Color::Black => BinaryColor::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        assert_eq!(Color::Black.inverse(), Color::White);
        assert_eq!(Color::White.inverse(), Color::Black);
    }

    #[test]
    fn test_fill_byte() {
        assert_eq!(Color::Black.fill_byte(), 0x00);
        assert_eq!(Color::White.fill_byte(), 0xFF);
    }

    #[test]
    fn test_binary_conversion() {
        assert_eq!(BinaryColor::from(Color::White), BinaryColor::On);
        assert_eq!(Color::from(BinaryColor::Off), Color::Black);
    }
}
