/*
 *  display/transport/mock.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Recording transport for testing without hardware
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

use std::sync::{Arc, Mutex, MutexGuard};

use super::Transport;
use crate::display::error::TransportError;

/// One thing that happened on the simulated bus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    Command(u8),
    Data(Vec<u8>),
    ResetAsserted,
    ResetReleased,
    Delay(u32),
}

/// Transport test double
///
/// This transport simulates the controller link without hardware. It's useful for:
/// - Unit tests
/// - Integration tests
/// - CI/CD pipelines
/// - Development without a panel attached
///
/// Every call is appended to a shared event log. Clones share the log, so a
/// test can keep one clone while the display owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockTransportState>>,
}

/// Internal state for the mock transport (shared for inspection in tests)
#[derive(Debug, Default)]
pub struct MockTransportState {
    /// Everything sent, in order
    pub events: Vec<BusEvent>,

    /// Commands accepted so far
    pub command_count: usize,

    /// Data transfers accepted so far
    pub data_transfers: usize,

    /// Reject the command with this zero-based ordinal
    pub fail_on_command: Option<usize>,

    /// Reject the data transfer with this zero-based ordinal
    pub fail_on_data: Option<usize>,

    /// Reject the reset line
    pub fail_reset: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get reference to state for inspection in tests
    pub fn state(&self) -> Arc<Mutex<MockTransportState>> {
        Arc::clone(&self.state)
    }

    fn lock(&self) -> MutexGuard<'_, MockTransportState> {
        // a panicking test must not hide the log from the next assertion
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fail the `n`th command (zero-based, counting accepted commands)
    pub fn fail_on_command(&self, n: usize) {
        self.lock().fail_on_command = Some(n);
    }

    /// Fail the `n`th data transfer (zero-based)
    pub fn fail_on_data(&self, n: usize) {
        self.lock().fail_on_data = Some(n);
    }

    pub fn fail_reset(&self, fail: bool) {
        self.lock().fail_reset = fail;
    }

    /// Clear recorded events and injected failures
    pub fn reset_state(&self) {
        *self.lock() = MockTransportState::default();
    }

    pub fn events(&self) -> Vec<BusEvent> {
        self.lock().events.clone()
    }

    /// Only the command bytes, in order
    pub fn commands(&self) -> Vec<u8> {
        self.lock()
            .events
            .iter()
            .filter_map(|e| match e {
                BusEvent::Command(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Every data transfer, in order
    pub fn data_transfers(&self) -> Vec<Vec<u8>> {
        self.lock()
            .events
            .iter()
            .filter_map(|e| match e {
                BusEvent::Data(d) => Some(d.clone()),
                _ => None,
            })
            .collect()
    }

    /// Total data bytes sent
    pub fn bytes_written(&self) -> usize {
        self.data_transfers().iter().map(Vec::len).sum()
    }
}

impl Transport for MockTransport {
    fn send_command(&mut self, byte: u8) -> Result<(), TransportError> {
        let mut state = self.lock();
        if state.fail_on_command == Some(state.command_count) {
            return Err(TransportError::Injected { what: format!("command 0x{:02X}", byte) });
        }
        state.command_count += 1;
        state.events.push(BusEvent::Command(byte));
        Ok(())
    }

    fn send_data(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let mut state = self.lock();
        if state.fail_on_data == Some(state.data_transfers) {
            return Err(TransportError::Injected {
                what: format!("{} data byte(s)", bytes.len()),
            });
        }
        state.data_transfers += 1;
        state.events.push(BusEvent::Data(bytes.to_vec()));
        Ok(())
    }

    fn assert_reset(&mut self) -> Result<(), TransportError> {
        let mut state = self.lock();
        if state.fail_reset {
            return Err(TransportError::Injected { what: "reset line".into() });
        }
        state.events.push(BusEvent::ResetAsserted);
        Ok(())
    }

    fn release_reset(&mut self) -> Result<(), TransportError> {
        let mut state = self.lock();
        if state.fail_reset {
            return Err(TransportError::Injected { what: "reset line".into() });
        }
        state.events.push(BusEvent::ResetReleased);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.lock().events.push(BusEvent::Delay(ms));
    }
}
