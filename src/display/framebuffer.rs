/*
 *  display/framebuffer.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Bit-packed GDDRAM mirror, one byte per 8-pixel page column
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

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::display::color::Color;
use crate::display::error::DisplayError;

/// Panel width in pixels; also the number of bytes in one GDDRAM page
pub const PAGE_WIDTH: u32 = 128;

/// Panel height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

/// Number of 8-row pages
pub const PAGE_COUNT: usize = (DISPLAY_HEIGHT / 8) as usize;

/// Total framebuffer size in bytes
pub const BUFFER_SIZE: usize = (PAGE_WIDTH * DISPLAY_HEIGHT / 8) as usize;

/// Software copy of the controller's graphics RAM
///
/// Laid out exactly like GDDRAM in page addressing mode: `PAGE_COUNT` pages of
/// `PAGE_WIDTH` bytes, each byte a column of 8 pixels with bit 0 on top.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    buf: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.buf.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("FrameBuffer")
            .field("width", &PAGE_WIDTH)
            .field("height", &DISPLAY_HEIGHT)
            .field("lit_pixels", &lit)
            .finish()
    }
}

impl FrameBuffer {
    /// Zeroed (all black) buffer
    pub const fn new() -> Self {
        Self { buf: [0; BUFFER_SIZE] }
    }

    pub const fn width(&self) -> u32 {
        PAGE_WIDTH
    }

    pub const fn height(&self) -> u32 {
        DISPLAY_HEIGHT
    }

    /// Map (x, y) to (byte index, bit mask); the only place the layout lives
    #[inline]
    fn locate(x: u32, y: u32) -> Result<(usize, u8), DisplayError> {
        if x >= PAGE_WIDTH || y >= DISPLAY_HEIGHT {
            return Err(DisplayError::OutOfBounds { x, y });
        }
        let index = (x + (y / 8) * PAGE_WIDTH) as usize;
        Ok((index, 1 << (y % 8)))
    }

    /// Set every pixel to one colour
    pub fn fill(&mut self, color: Color) {
        self.buf.fill(color.fill_byte());
    }

    /// Light (White) or clear (Black) a single pixel
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), DisplayError> {
        let (index, mask) = Self::locate(x, y)?;
        match color {
            Color::White => self.buf[index] |= mask,
            Color::Black => self.buf[index] &= !mask,
        }
        Ok(())
    }

    /// Read a pixel back
    pub fn pixel(&self, x: u32, y: u32) -> Result<Color, DisplayError> {
        let (index, mask) = Self::locate(x, y)?;
        Ok(if self.buf[index] & mask != 0 { Color::White } else { Color::Black })
    }

    /// The `PAGE_WIDTH` bytes of one page, in column order
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        if page >= PAGE_COUNT {
            return None;
        }
        let start = page * PAGE_WIDTH as usize;
        self.buf.get(start..start + PAGE_WIDTH as usize)
    }

    /// Pages top to bottom
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.buf.chunks_exact(PAGE_WIDTH as usize)
    }

    /// Raw GDDRAM image
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Count of lit pixels
    pub fn count_on_pixels(&self) -> usize {
        self.buf.iter().map(|b| b.count_ones() as usize).sum()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(PAGE_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            // primitives may overhang the panel; clip silently
            if p.x >= 0 && p.y >= 0 {
                let _ = self.set_pixel(p.x as u32, p.y as u32, c.into());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}
