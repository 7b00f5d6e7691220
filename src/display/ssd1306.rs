/*
 *  display/ssd1306.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  SSD1306 128x64 display: framebuffer, text cursor and controller link
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

use std::io;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::display::color::Color;
use crate::display::error::{DisplayError, InitStage};
use crate::display::font::GlyphSource;
use crate::display::framebuffer::{DISPLAY_HEIGHT, FrameBuffer, PAGE_WIDTH};
use crate::display::protocol::{self, AddressingMode};
use crate::display::text::TextCursor;
use crate::display::transport::Transport;

/// Bytes per line in a buffer dump
const DUMP_LINE_BYTES: usize = 32;

/// Where the driver is in the controller lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing sent yet, or the last init failed
    #[default]
    Uninitialized,
    /// Init script accepted
    Configured,
    /// Last refresh completed
    Synchronized,
}

/// Number format for `Display::dump_buffer`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DumpRadix {
    #[default]
    #[serde(rename = "hex")]
    Hex,
    #[serde(rename = "dec")]
    Decimal,
}

/// Text-oriented driver for a 128x64 SSD1306 panel
///
/// Owns the framebuffer and the transport. Drawing only touches the buffer;
/// nothing reaches the panel until `refresh` (or a committed `write`).
pub struct Display<T: Transport> {
    transport: T,
    mode: AddressingMode,
    fb: FrameBuffer,
    cursor: TextCursor,
    state: ControllerState,
}

impl<T: Transport> Display<T> {
    pub const WIDTH: u32 = PAGE_WIDTH;
    pub const HEIGHT: u32 = DISPLAY_HEIGHT;

    /// Wrap a transport; the panel is not touched until `init`
    pub fn new(transport: T, mode: AddressingMode) -> Self {
        Self {
            transport,
            mode,
            fb: FrameBuffer::new(),
            cursor: TextCursor::new(),
            state: ControllerState::Uninitialized,
        }
    }

    pub fn width(&self) -> u32 {
        Self::WIDTH
    }

    pub fn height(&self) -> u32 {
        Self::HEIGHT
    }

    pub fn addressing(&self) -> AddressingMode {
        self.mode
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Reset the controller, run the configuration script and blank the panel
    ///
    /// Safe to call again; the whole script is re-sent each time.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        info!("Initializing SSD1306 ({:?} addressing)", self.mode);
        self.state = ControllerState::Uninitialized;

        protocol::reset(&mut self.transport)?;
        protocol::configure(&mut self.transport, self.mode)?;
        self.state = ControllerState::Configured;

        self.fb.fill(Color::Black);
        protocol::refresh(&mut self.transport, &self.fb, self.mode).map_err(|e| match e {
            DisplayError::RefreshStage { source, .. } => {
                DisplayError::ProtocolStage { stage: InitStage::Flush, source }
            }
            other => other,
        })?;
        self.state = ControllerState::Synchronized;
        self.cursor.home();

        info!("SSD1306 initialized successfully ({}x{})", Self::WIDTH, Self::HEIGHT);
        Ok(())
    }

    /// Fill the whole buffer; the cursor stays where it is
    pub fn fill(&mut self, color: Color) {
        self.fb.fill(color);
    }

    /// Clear to `bg`, write `text` in `fg` from `(x, y)`, refresh if `commit`
    ///
    /// The refresh happens only when every glyph was written.
    #[allow(clippy::too_many_arguments)]
    pub fn write<G: GlyphSource>(
        &mut self,
        text: &str,
        font: &G,
        x: u32,
        y: u32,
        bg: Color,
        fg: Color,
        padding: bool,
        commit: bool,
    ) -> Result<(), DisplayError> {
        self.fill(bg);
        self.cursor.set_position(x, y)?;
        self.cursor
            .write_string(&mut self.fb, text, font, fg, padding)?;
        debug!("wrote {:?} at ({}, {})", text, x, y);
        if commit {
            self.refresh()?;
        }
        Ok(())
    }

    /// Write at the current cursor without clearing or refreshing
    pub fn write_str<G: GlyphSource>(
        &mut self,
        text: &str,
        font: &G,
        color: Color,
        padding: bool,
    ) -> Result<(), DisplayError> {
        self.cursor
            .write_string(&mut self.fb, text, font, color, padding)
    }

    pub fn set_cursor(&mut self, x: u32, y: u32) -> Result<(), DisplayError> {
        self.cursor.set_position(x, y)
    }

    pub fn cursor(&self) -> (u32, u32) {
        self.cursor.position()
    }

    /// Push the framebuffer to controller memory
    pub fn refresh(&mut self) -> Result<(), DisplayError> {
        debug!("refresh ({:?})", self.mode);
        protocol::refresh(&mut self.transport, &self.fb, self.mode)?;
        if self.state != ControllerState::Uninitialized {
            self.state = ControllerState::Synchronized;
        }
        Ok(())
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Direct buffer access, e.g. as an embedded-graphics draw target
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    /// Page-by-page listing of the buffer, 32 bytes per line
    pub fn dump_buffer<W: io::Write>(&self, sink: &mut W, radix: DumpRadix) -> io::Result<()> {
        for (n, page) in self.fb.pages().enumerate() {
            if n > 0 {
                writeln!(sink)?;
            }
            writeln!(sink, "Page #{}:", n)?;
            for line in page.chunks(DUMP_LINE_BYTES) {
                let cells: Vec<String> = line
                    .iter()
                    .map(|b| match radix {
                        DumpRadix::Hex => format!("0x{:02x}", b),
                        DumpRadix::Decimal => b.to_string(),
                    })
                    .collect();
                writeln!(sink, "{}", cells.join(" "))?;
            }
        }
        Ok(())
    }

    /// Take the transport back
    pub fn release(self) -> T {
        self.transport
    }
}
