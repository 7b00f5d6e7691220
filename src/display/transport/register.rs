/*
 *  display/transport/register.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Register-level SPI transport: polls status flags, writes the data register
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

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin};
use log::{trace, warn};

use super::Transport;
use crate::display::error::TransportError;

/// Default number of status reads before a flag wait gives up
pub const DEFAULT_POLL_LIMIT: u32 = 10_000;

/// The bits of an SPI peripheral register block this transport needs
///
/// Implement over a PAC register block (`SPIx_SR` / `SPIx_DR`) or a
/// memory-mapped window; only 8-bit frames are used.
pub trait SpiRegisters {
    /// TXE: transmit FIFO has room for another frame
    fn tx_empty(&self) -> bool;

    /// BSY: a frame is still being clocked out
    fn busy(&self) -> bool;

    /// Push one frame into the data register
    fn write_dr(&mut self, byte: u8);
}

/// Byte-at-a-time transport that talks to the SPI registers directly
///
/// The data/command line is switched only after the byte is in the FIFO and
/// the bus is idle, so the controller never latches a byte in the wrong mode.
pub struct RegisterTransport<R, DC, RST, D> {
    regs: R,
    dc: DC,
    rst: RST,
    delay: D,
    poll_limit: u32,
}

impl<R, DC, RST, D> RegisterTransport<R, DC, RST, D>
where
    R: SpiRegisters,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    pub fn new(regs: R, dc: DC, rst: RST, delay: D) -> Self {
        Self { regs, dc, rst, delay, poll_limit: DEFAULT_POLL_LIMIT }
    }

    /// Override how many status reads a flag wait may take
    pub fn with_poll_limit(mut self, poll_limit: u32) -> Self {
        self.poll_limit = poll_limit.max(1);
        self
    }

    pub fn release(self) -> (R, DC, RST, D) {
        (self.regs, self.dc, self.rst, self.delay)
    }

    fn wait_tx_empty(&self) -> Result<(), TransportError> {
        for _ in 0..self.poll_limit {
            if self.regs.tx_empty() {
                return Ok(());
            }
        }
        warn!("SPI TX buffer still full after {} polls", self.poll_limit);
        Err(TransportError::Timeout { flag: "TXE" })
    }

    fn wait_idle(&self) -> Result<(), TransportError> {
        for _ in 0..self.poll_limit {
            if !self.regs.busy() {
                return Ok(());
            }
        }
        warn!("SPI bus still busy after {} polls", self.poll_limit);
        Err(TransportError::Timeout { flag: "BSY" })
    }

    fn ready(&self) -> Result<(), TransportError> {
        self.wait_tx_empty()?;
        self.wait_idle()
    }
}

impl<R, DC, RST, D> Transport for RegisterTransport<R, DC, RST, D>
where
    R: SpiRegisters,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn send_command(&mut self, byte: u8) -> Result<(), TransportError> {
        self.ready()?;
        self.dc
            .set_low()
            .map_err(|e| TransportError::Pin(format!("D/C line: {:?}", e.kind())))?;
        self.regs.write_dr(byte);
        Ok(())
    }

    fn send_data(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        trace!("register transport: {} data byte(s)", bytes.len());
        for &byte in bytes {
            self.ready()?;
            self.regs.write_dr(byte);
            self.dc
                .set_high()
                .map_err(|e| TransportError::Pin(format!("D/C line: {:?}", e.kind())))?;
        }
        Ok(())
    }

    fn assert_reset(&mut self) -> Result<(), TransportError> {
        self.rst
            .set_low()
            .map_err(|e| TransportError::Pin(format!("RESET line: {:?}", e.kind())))
    }

    fn release_reset(&mut self) -> Result<(), TransportError> {
        self.rst
            .set_high()
            .map_err(|e| TransportError::Pin(format!("RESET line: {:?}", e.kind())))
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeRegs {
        written: Rc<RefCell<Vec<(u8, bool)>>>,
        dc_level: Rc<Cell<bool>>,
        stuck_busy: bool,
        tx_full_polls: Cell<u32>,
    }

    impl SpiRegisters for FakeRegs {
        fn tx_empty(&self) -> bool {
            let left = self.tx_full_polls.get();
            if left > 0 {
                self.tx_full_polls.set(left - 1);
                return false;
            }
            true
        }

        fn busy(&self) -> bool {
            self.stuck_busy
        }

        fn write_dr(&mut self, byte: u8) {
            self.written.borrow_mut().push((byte, self.dc_level.get()));
        }
    }

    struct Line(Rc<Cell<bool>>);

    impl ErrorType for Line {
        type Error = Infallible;
    }

    impl OutputPin for Line {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.set(true);
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn build(regs: FakeRegs) -> RegisterTransport<FakeRegs, Line, Line, NoDelay> {
        let dc = Line(regs.dc_level.clone());
        RegisterTransport::new(regs, dc, Line(Rc::default()), NoDelay)
    }

    #[test]
    fn test_command_latched_in_command_mode() {
        let regs = FakeRegs::default();
        let written = regs.written.clone();
        let mut t = build(regs);
        t.send_data(&[0x11]).unwrap();
        t.send_command(0xAE).unwrap();
        // first data byte goes out before D/C rises, as the hardware expects
        assert_eq!(*written.borrow(), vec![(0x11, false), (0xAE, false)]);
        t.send_data(&[0x22, 0x33]).unwrap();
        assert_eq!(written.borrow()[2..], [(0x22, false), (0x33, true)]);
    }

    #[test]
    fn test_waits_for_tx_empty() {
        let regs = FakeRegs { tx_full_polls: Cell::new(5), ..Default::default() };
        let written = regs.written.clone();
        let mut t = build(regs).with_poll_limit(10);
        t.send_command(0xA4).unwrap();
        assert_eq!(written.borrow().len(), 1);
    }

    #[test]
    fn test_tx_timeout() {
        let regs = FakeRegs { tx_full_polls: Cell::new(50), ..Default::default() };
        let written = regs.written.clone();
        let mut t = build(regs).with_poll_limit(10);
        assert_eq!(t.send_command(0xA4), Err(TransportError::Timeout { flag: "TXE" }));
        assert!(written.borrow().is_empty());
    }

    #[test]
    fn test_busy_timeout() {
        let regs = FakeRegs { stuck_busy: true, ..Default::default() };
        let mut t = build(regs).with_poll_limit(3);
        assert_eq!(t.send_data(&[0; 4]), Err(TransportError::Timeout { flag: "BSY" }));
    }
}
