/*
 *  lib.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
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

//! Text driver for 128x64 SSD1306 OLED panels.
//!
//! A [`display::Display`] owns a 1 KiB page-organised framebuffer, rasterizes
//! bitmap-font text into it and copies it to the controller over any
//! [`display::Transport`]: embedded-hal SPI, a register-level SPI block, or
//! the in-memory mock used by the tests.

pub mod config;
pub mod display;
