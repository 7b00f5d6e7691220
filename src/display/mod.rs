/*
 *  display/mod.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display subsystem - framebuffer, fonts, controller protocol and transports
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

pub mod color;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod text;

// Controller command set and the driver on top of it
pub mod protocol;
pub mod ssd1306;

// Bus links
pub mod transport;

// Re-exports for convenience
pub use color::Color;
pub use error::{DisplayError, InitStage, RefreshStep, TransportError};
pub use font::{FONT_5X7, Font, GlyphSource};
pub use framebuffer::FrameBuffer;
pub use protocol::AddressingMode;
pub use ssd1306::{ControllerState, Display, DumpRadix};
pub use text::TextCursor;
pub use transport::{BoxedTransport, HalTransport, MockTransport, RegisterTransport, Transport};
