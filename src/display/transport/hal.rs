/*
 *  display/transport/hal.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  4-wire SPI transport over embedded-hal 1.0 traits
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
use embedded_hal::spi::{Error as _, SpiDevice};
use log::warn;

use super::Transport;
use crate::display::error::TransportError;

/// SPI device plus data/command and reset lines
///
/// Chip select is owned by the `SpiDevice`. Works with any embedded-hal 1.0
/// implementation, e.g. `linux-embedded-hal` spidev and GPIO on a Pi.
pub struct HalTransport<SPI, DC, RST, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    delay: D,
}

impl<SPI, DC, RST, D> HalTransport<SPI, DC, RST, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: D) -> Self {
        Self { spi, dc, rst, delay }
    }

    /// Give the peripherals back
    pub fn release(self) -> (SPI, DC, RST, D) {
        (self.spi, self.dc, self.rst, self.delay)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.spi.write(bytes).map_err(|e| {
            warn!("SPI write of {} byte(s) failed: {:?}", bytes.len(), e.kind());
            TransportError::Spi(format!("{:?}", e.kind()))
        })
    }
}

fn pin_error<E: embedded_hal::digital::Error>(line: &str, e: E) -> TransportError {
    TransportError::Pin(format!("{} line: {:?}", line, e.kind()))
}

impl<SPI, DC, RST, D> Transport for HalTransport<SPI, DC, RST, D>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn send_command(&mut self, byte: u8) -> Result<(), TransportError> {
        self.dc.set_low().map_err(|e| pin_error("D/C", e))?;
        self.write(&[byte])
    }

    fn send_data(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.dc.set_high().map_err(|e| pin_error("D/C", e))?;
        self.write(bytes)
    }

    fn assert_reset(&mut self) -> Result<(), TransportError> {
        self.rst.set_low().map_err(|e| pin_error("RESET", e))
    }

    fn release_reset(&mut self) -> Result<(), TransportError> {
        self.rst.set_high().map_err(|e| pin_error("RESET", e))
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType, Operation};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Wire {
        Dc(bool),
        Rst(bool),
        Spi(Vec<u8>),
        Delay(u32),
    }

    type Log = Rc<RefCell<Vec<Wire>>>;

    struct FakeSpi {
        log: Log,
        fail: bool,
    }

    impl ErrorType for FakeSpi {
        type Error = ErrorKind;
    }

    impl SpiDevice for FakeSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Overrun);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Wire::Spi(bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    struct FakePin {
        log: Log,
        dc: bool,
    }

    impl PinErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let w = if self.dc { Wire::Dc(false) } else { Wire::Rst(false) };
            self.log.borrow_mut().push(w);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let w = if self.dc { Wire::Dc(true) } else { Wire::Rst(true) };
            self.log.borrow_mut().push(w);
            Ok(())
        }
    }

    struct FakeDelay {
        log: Log,
    }

    impl DelayNs for FakeDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Wire::Delay(ms));
        }
    }

    fn transport(fail: bool) -> (HalTransport<FakeSpi, FakePin, FakePin, FakeDelay>, Log) {
        let log: Log = Rc::default();
        let t = HalTransport::new(
            FakeSpi { log: log.clone(), fail },
            FakePin { log: log.clone(), dc: true },
            FakePin { log: log.clone(), dc: false },
            FakeDelay { log: log.clone() },
        );
        (t, log)
    }

    #[test]
    fn test_command_drives_dc_low() {
        let (mut t, log) = transport(false);
        t.send_command(0xAE).unwrap();
        t.send_data(&[1, 2, 3]).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Wire::Dc(false), Wire::Spi(vec![0xAE]), Wire::Dc(true), Wire::Spi(vec![1, 2, 3])]
        );
    }

    #[test]
    fn test_reset_and_delay() {
        let (mut t, log) = transport(false);
        t.assert_reset().unwrap();
        t.delay_ms(10);
        t.release_reset().unwrap();
        assert_eq!(*log.borrow(), vec![Wire::Rst(false), Wire::Delay(10), Wire::Rst(true)]);
    }

    #[test]
    fn test_spi_failure_reported() {
        let (mut t, _log) = transport(true);
        assert_eq!(t.send_command(0xAF), Err(TransportError::Spi("Overrun".into())));
    }
}
