/*
 *  display/transport/mod.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Bus transports: command/data bytes and the reset line
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

pub mod hal;
pub mod mock;
pub mod register;

pub use hal::HalTransport;
pub use mock::{BusEvent, MockTransport, MockTransportState};
pub use register::{RegisterTransport, SpiRegisters};

use crate::display::error::TransportError;

/// Minimal bus abstraction every controller link must provide
///
/// Calls block until the bytes are on the wire or the transfer has failed.
/// Implementations never retry.
pub trait Transport {
    /// Send one byte with the data/command line in command mode
    fn send_command(&mut self, byte: u8) -> Result<(), TransportError>;

    /// Send bytes with the data/command line in data mode
    fn send_data(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Drive the reset line active (low)
    fn assert_reset(&mut self) -> Result<(), TransportError>;

    /// Release the reset line (high)
    fn release_reset(&mut self) -> Result<(), TransportError>;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Owned transport chosen at runtime
pub type BoxedTransport = Box<dyn Transport + Send>;

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_command(&mut self, byte: u8) -> Result<(), TransportError> {
        (**self).send_command(byte)
    }

    fn send_data(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).send_data(bytes)
    }

    fn assert_reset(&mut self) -> Result<(), TransportError> {
        (**self).assert_reset()
    }

    fn release_reset(&mut self) -> Result<(), TransportError> {
        (**self).release_reset()
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_command(&mut self, byte: u8) -> Result<(), TransportError> {
        (**self).send_command(byte)
    }

    fn send_data(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).send_data(bytes)
    }

    fn assert_reset(&mut self) -> Result<(), TransportError> {
        (**self).assert_reset()
    }

    fn release_reset(&mut self) -> Result<(), TransportError> {
        (**self).release_reset()
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
