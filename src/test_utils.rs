//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::vec::Vec;

use crate::error::{IoError, Result};
use crate::hal::mdio::{MdioBus, phy_reg};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// This allows setting up expected register values, verifying writes and
/// injecting bus failures.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_register(8, 0x00, 0x0E00); // Link up, full duplex, 1000 Mb/s code
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Number of reads performed
    reads: Cell<usize>,
    /// Error returned by every read, if set
    read_fault: Cell<Option<IoError>>,
    /// Error returned by every write, if set
    write_fault: Cell<Option<IoError>>,
    /// Whether the bus should report as busy
    busy: Cell<bool>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Check whether a specific write was made
    pub fn was_written(&self, phy_addr: u8, reg_addr: u8, value: u16) -> bool {
        self.write_log
            .borrow()
            .iter()
            .any(|w| *w == (phy_addr, reg_addr, value))
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// Number of register reads performed so far
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    /// Make every subsequent read fail with `err`
    pub fn fail_reads(&self, err: IoError) {
        self.read_fault.set(Some(err));
    }

    /// Make every subsequent write fail with `err`
    pub fn fail_writes(&self, err: IoError) {
        self.write_fault.set(Some(err));
    }

    /// Clear injected faults
    pub fn heal(&self) {
        self.read_fault.set(None);
        self.write_fault.set(None);
    }

    /// Set the busy flag
    pub fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    /// Populate the Clause 22 identifier registers
    pub fn set_phy_id(&self, phy_addr: u8, id: u32) {
        self.set_register(phy_addr, phy_reg::PHYIDR1, (id >> 16) as u16);
        self.set_register(phy_addr, phy_reg::PHYIDR2, id as u16);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if let Some(err) = self.read_fault.get() {
            return Err(err.into());
        }
        self.reads.set(self.reads.get() + 1);

        // Return from register map (default 0 if not set)
        Ok(self
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        if let Some(err) = self.write_fault.get() {
            return Err(err.into());
        }

        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: Cell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns.get()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::error::Error;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(mdio.read(8, 0).unwrap(), 0);

        mdio.set_register(8, 0, 0x1234);
        assert_eq!(mdio.read(8, 0).unwrap(), 0x1234);

        // Write updates the value
        mdio.write(8, 0, 0x000A).unwrap();
        assert_eq!(mdio.read(8, 0).unwrap(), 0x000A);

        assert_eq!(mdio.get_writes(), vec![(8, 0, 0x000A)]);
        assert_eq!(mdio.read_count(), 3);
    }

    #[test]
    fn mock_mdio_multiple_phys() {
        let mut mdio = MockMdioBus::new();

        mdio.set_register(8, 0, 0x1111);
        mdio.set_register(9, 0, 0x2222);

        assert_eq!(mdio.read(8, 0).unwrap(), 0x1111);
        assert_eq!(mdio.read(9, 0).unwrap(), 0x2222);
    }

    #[test]
    fn mock_mdio_fault_injection() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads(IoError::BusFault);
        mdio.fail_writes(IoError::Timeout);

        assert_eq!(mdio.read(8, 0), Err(Error::Io(IoError::BusFault)));
        assert_eq!(mdio.write(8, 0, 1), Err(Error::Io(IoError::Timeout)));
        assert!(mdio.get_writes().is_empty());

        mdio.heal();
        assert!(mdio.read(8, 0).is_ok());
    }

    #[test]
    fn mock_mdio_busy_flag() {
        let mdio = MockMdioBus::new();
        assert!(!mdio.is_busy());

        mdio.set_busy(true);
        assert!(mdio.is_busy());
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 1000);
        embedded_hal::delay::DelayNs::delay_ms(&mut delay, 2);

        assert_eq!(delay.total_ms(), 2);
        assert_eq!(delay.total_ns(), 2_001_000);
    }
}
