/*
 *  display/error.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Unified error types for the display subsystem
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

use std::fmt;
use thiserror::Error;

/// Failure reported by a bus transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// SPI peripheral rejected the transfer
    #[error("SPI transfer failed: {0}")]
    Spi(String),

    /// Data/command or reset line could not be driven
    #[error("GPIO error: {0}")]
    Pin(String),

    /// A status flag never reached the expected level within the poll budget
    #[error("timed out waiting for SPI {flag} flag")]
    Timeout { flag: &'static str },

    /// Failure injected by the test double
    #[error("injected failure on {what}")]
    Injected { what: String },
}

/// Stage of the controller initialisation script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStage {
    /// Hardware reset pulse
    Reset,
    /// Display off while configuring
    Sleep,
    /// RAM follow, inverse off, contrast
    Fundamental,
    /// Memory addressing mode and start address
    Addressing,
    /// Start line, remaps, multiplex, offset, COM pins
    HardwareConfig,
    /// Clock divider, pre-charge, VCOMH
    Timing,
    /// Display on
    Wake,
    /// First buffer transfer after configuration
    Flush,
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InitStage::Reset => "reset",
            InitStage::Sleep => "sleep",
            InitStage::Fundamental => "fundamental",
            InitStage::Addressing => "addressing",
            InitStage::HardwareConfig => "hardware-config",
            InitStage::Timing => "timing",
            InitStage::Wake => "wake",
            InitStage::Flush => "flush",
        };
        f.write_str(name)
    }
}

/// Step of a single page transfer during refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStep {
    PageSelect,
    LowColumn,
    HighColumn,
    DataStream,
}

impl fmt::Display for RefreshStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RefreshStep::PageSelect => "page-select",
            RefreshStep::LowColumn => "low-column",
            RefreshStep::HighColumn => "high-column",
            RefreshStep::DataStream => "data-stream",
        };
        f.write_str(name)
    }
}

/// Unified error type for all display operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    /// Coordinate outside the framebuffer
    #[error("pixel ({x}, {y}) is outside the framebuffer")]
    OutOfBounds { x: u32, y: u32 },

    /// No room for the next glyph at the cursor
    #[error("no room for the next glyph at cursor ({x}, {y})")]
    LayoutFull { x: u32, y: u32 },

    /// Character outside the font's printable range
    #[error("no glyph for {ch:?} in the font table")]
    GlyphLookupFailed { ch: char, index: Option<usize> },

    /// Transport failure outside the init/refresh sequences
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Initialisation aborted at a stage
    #[error("init failed at {stage} stage: {source}")]
    ProtocolStage {
        stage: InitStage,
        #[source]
        source: TransportError,
    },

    /// Refresh aborted on a page
    #[error("refresh failed on page {page} at {stage}: {source}")]
    RefreshStage {
        page: u8,
        stage: RefreshStep,
        #[source]
        source: TransportError,
    },
}

impl DisplayError {
    /// Short machine-friendly code, handy when logging over a serial console
    pub fn code(&self) -> &'static str {
        match self {
            DisplayError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            DisplayError::LayoutFull { .. } => "LAYOUT_FULL",
            DisplayError::GlyphLookupFailed { .. } => "GLYPH_LOOKUP",
            DisplayError::Transport(_) => "TRANSPORT",
            DisplayError::ProtocolStage { .. } => "INIT_STAGE",
            DisplayError::RefreshStage { stage, .. } => match stage {
                RefreshStep::PageSelect => "START_PAGE_ERR",
                RefreshStep::LowColumn => "START_LCOL_ERR",
                RefreshStep::HighColumn => "START_HCOL_ERR",
                RefreshStep::DataStream => "SEND_DATA_ERR",
            },
        }
    }
}
