//! MDIO (Management Data Input/Output) HAL
//!
//! This module defines the bus seam between PHY drivers and the host. The
//! latency, timeout and failure semantics of a transaction belong to the
//! implementation; drivers propagate its errors unchanged.

use crate::error::{ConfigError, Result};

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with various MDIO implementations.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;

    /// Check if the MDIO bus is busy
    ///
    /// Discovery refuses to start while a transaction is in flight.
    fn is_busy(&self) -> bool;
}

impl<T: MdioBus + ?Sized> MdioBus for &mut T {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        (**self).write(phy_addr, reg_addr, value)
    }

    fn is_busy(&self) -> bool {
        (**self).is_busy()
    }
}

/// Reject addresses that do not fit the 5-bit MDIO PHY address field
pub fn validate_phy_address(phy_addr: u8) -> Result<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(ConfigError::InvalidPhyAddress.into());
    }
    Ok(())
}

// =============================================================================
// Clause 22 Identifier Registers
// =============================================================================

/// Standard PHY register addresses used for device identification
pub mod phy_reg {
    /// PHY Identifier 1 (OUI bits 3-18)
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2 (OUI bits 19-24, model, revision)
    pub const PHYIDR2: u8 = 3;
}

/// Read the PHY identifier (OUI + model + revision)
///
/// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
pub fn read_phy_id<M: MdioBus + ?Sized>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)?;
    let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)?;
    Ok(((id1 as u32) << 16) | id2 as u32)
}
