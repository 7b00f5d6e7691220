/*
 *  display/protocol.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  SSD1306 command set, init script and GDDRAM transfer sequences
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

//! Register map per section 9 of the SSD1306 datasheet.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::display::error::{DisplayError, InitStage, RefreshStep, TransportError};
use crate::display::framebuffer::{FrameBuffer, PAGE_COUNT};
use crate::display::transport::Transport;

/// SSD1306 command bytes
#[allow(dead_code)]
pub mod cmd {
    // fundamental
    pub const SET_CONTRAST: u8 = 0x81;
    pub const MAX_CONTRAST: u8 = 0xFF;
    pub const MIN_CONTRAST: u8 = 0x01;
    pub const DISPLAY_FOLLOW_RAM: u8 = 0xA4;
    pub const DISPLAY_IGNORE_RAM: u8 = 0xA5;
    pub const INVERSE_OFF: u8 = 0xA6;
    pub const INVERSE_ON: u8 = 0xA7;
    pub const DISPLAY_SLEEP: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    // addressing
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const HORIZONTAL_MODE: u8 = 0x00;
    pub const VERTICAL_MODE: u8 = 0x01;
    pub const PAGE_MODE: u8 = 0x02;
    pub const SET_COLUMN_ADDRESS: u8 = 0x21;
    pub const SET_PAGE_ADDRESS: u8 = 0x22;
    pub const START_PAGE_0: u8 = 0xB0;
    pub const LOW_COLUMN_0: u8 = 0x00;
    pub const HIGH_COLUMN_0: u8 = 0x10;

    // hardware configuration
    pub const START_LINE_0: u8 = 0x40;
    pub const SEGMENT_REMAP_OFF: u8 = 0xA0;
    pub const SEGMENT_REMAP_ON: u8 = 0xA1;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const MUX_64: u8 = 0x3F;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const NO_OFFSET: u8 = 0x00;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const COM_SEQ_REMAP_ON: u8 = 0x22;
    pub const COM_SEQ_REMAP_OFF: u8 = 0x02;
    pub const COM_ALT_REMAP_ON: u8 = 0x32;
    pub const COM_ALT_REMAP_OFF: u8 = 0x12;

    // timing and driving
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const CLOCK_MAX: u8 = 0xF0;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const PRECHARGE_DEFAULT: u8 = 0x22;
    pub const SET_VCOMH: u8 = 0xDB;
    pub const VCOMH_065: u8 = 0x00;
    pub const VCOMH_077: u8 = 0x20;
    pub const VCOMH_083: u8 = 0x30;
}

/// Last column / page of the 128x64 GDDRAM window
const LAST_COLUMN: u8 = 0x7F;
const LAST_PAGE: u8 = (PAGE_COUNT - 1) as u8;

/// Reset pulse width and settle time
pub const RESET_PULSE_MS: u32 = 10;

/// Wait after reset before the first command
pub const BOOT_DELAY_MS: u32 = 100;

/// GDDRAM addressing mode programmed at init
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    /// Explicit page select before every 128-byte page
    #[default]
    Page,
    /// Column/page window covering the panel, whole buffer in one stream
    Horizontal,
}

const SLEEP: &[u8] = &[cmd::DISPLAY_SLEEP];

const FUNDAMENTAL: &[u8] = &[
    cmd::DISPLAY_FOLLOW_RAM,
    cmd::INVERSE_OFF,
    cmd::SET_CONTRAST,
    cmd::MAX_CONTRAST,
];

const PAGE_ADDRESSING: &[u8] = &[
    cmd::SET_MEMORY_MODE,
    cmd::PAGE_MODE,
    cmd::START_PAGE_0,
    cmd::LOW_COLUMN_0,
    cmd::HIGH_COLUMN_0,
];

const HORIZONTAL_ADDRESSING: &[u8] = &[
    cmd::SET_MEMORY_MODE,
    cmd::HORIZONTAL_MODE,
    cmd::SET_COLUMN_ADDRESS,
    0x00,
    LAST_COLUMN,
    cmd::SET_PAGE_ADDRESS,
    0x00,
    LAST_PAGE,
];

const HARDWARE_CONFIG: &[u8] = &[
    cmd::START_LINE_0,
    cmd::COM_SCAN_DEC,
    cmd::SEGMENT_REMAP_ON,
    cmd::SET_MUX_RATIO,
    cmd::MUX_64,
    cmd::SET_DISPLAY_OFFSET,
    cmd::NO_OFFSET,
    cmd::SET_COM_PINS,
    cmd::COM_ALT_REMAP_OFF,
];

const TIMING: &[u8] = &[
    cmd::SET_CLOCK_DIV,
    cmd::CLOCK_MAX,
    cmd::SET_PRECHARGE,
    cmd::PRECHARGE_DEFAULT,
    cmd::SET_VCOMH,
    cmd::VCOMH_077,
];

const WAKE: &[u8] = &[cmd::DISPLAY_ON];

/// Configuration script for `mode`, as (stage, command bytes) in send order
pub fn init_script(mode: AddressingMode) -> [(InitStage, &'static [u8]); 6] {
    let addressing = match mode {
        AddressingMode::Page => PAGE_ADDRESSING,
        AddressingMode::Horizontal => HORIZONTAL_ADDRESSING,
    };
    [
        (InitStage::Sleep, SLEEP),
        (InitStage::Fundamental, FUNDAMENTAL),
        (InitStage::Addressing, addressing),
        (InitStage::HardwareConfig, HARDWARE_CONFIG),
        (InitStage::Timing, TIMING),
        (InitStage::Wake, WAKE),
    ]
}

/// Pulse the reset line and wait for the controller to boot
pub fn reset<T: Transport + ?Sized>(transport: &mut T) -> Result<(), DisplayError> {
    let stage = |source| DisplayError::ProtocolStage { stage: InitStage::Reset, source };
    transport.assert_reset().map_err(stage)?;
    transport.delay_ms(RESET_PULSE_MS);
    transport.release_reset().map_err(stage)?;
    transport.delay_ms(RESET_PULSE_MS);
    transport.delay_ms(BOOT_DELAY_MS);
    Ok(())
}

/// Send the configuration script, stopping at the first rejected byte
pub fn configure<T: Transport + ?Sized>(
    transport: &mut T,
    mode: AddressingMode,
) -> Result<(), DisplayError> {
    for (stage, bytes) in init_script(mode) {
        debug!("init stage {}: {} command byte(s)", stage, bytes.len());
        for &byte in bytes {
            transport.send_command(byte).map_err(|source| {
                warn!("init stage {} rejected command 0x{:02X}: {}", stage, byte, source);
                DisplayError::ProtocolStage { stage, source }
            })?;
        }
    }
    Ok(())
}

fn page_error(page: usize, stage: RefreshStep) -> impl FnOnce(TransportError) -> DisplayError {
    move |source| {
        warn!("refresh page {} failed at {}: {}", page, stage, source);
        DisplayError::RefreshStage { page: page as u8, stage, source }
    }
}

/// Copy the framebuffer into GDDRAM
///
/// Page mode: for each page select the page, reset the column pointer to 0
/// and stream the page's bytes. Horizontal mode relies on the window set at
/// init and streams the whole buffer at once. Pages after a failure are not
/// attempted.
pub fn refresh<T: Transport + ?Sized>(
    transport: &mut T,
    fb: &FrameBuffer,
    mode: AddressingMode,
) -> Result<(), DisplayError> {
    match mode {
        AddressingMode::Page => {
            for (page, bytes) in fb.pages().enumerate() {
                trace!("refresh page {}", page);
                transport
                    .send_command(cmd::START_PAGE_0 + page as u8)
                    .map_err(page_error(page, RefreshStep::PageSelect))?;
                transport
                    .send_command(cmd::LOW_COLUMN_0)
                    .map_err(page_error(page, RefreshStep::LowColumn))?;
                transport
                    .send_command(cmd::HIGH_COLUMN_0)
                    .map_err(page_error(page, RefreshStep::HighColumn))?;
                transport
                    .send_data(bytes)
                    .map_err(page_error(page, RefreshStep::DataStream))?;
            }
        }
        AddressingMode::Horizontal => {
            trace!("refresh full buffer");
            transport
                .send_data(fb.as_bytes())
                .map_err(page_error(0, RefreshStep::DataStream))?;
        }
    }
    Ok(())
}
