//! Generic PHY Driver Trait
//!
//! This module defines the callback contract between the framework and a
//! PHY driver, plus the link report types the framework hands to the MAC.

use crate::config::{Duplex, Speed};
use crate::error::Result;
use crate::hal::mdio::MdioBus;

use super::device::PhyDevice;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// Either field may be unknown even while the link is up; a MAC should fall
/// back to its own defaults in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Option<Speed>,
    /// Duplex mode
    pub duplex: Option<Duplex>,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Option<Speed>, duplex: Option<Duplex>) -> Self {
        Self { speed, duplex }
    }
}

/// Result of one link poll, relative to the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkChange {
    /// Nothing changed since the last poll
    Unchanged,
    /// Link came up, or its speed/duplex changed while up
    Up(LinkStatus),
    /// Link went down
    Down,
}

// =============================================================================
// PHY Identifier Matching
// =============================================================================

/// PHY identifier with the mask of significant bits
///
/// Revision bits are usually masked off so one driver covers every stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyId {
    /// Identifier value: `(PHYIDR1 << 16) | PHYIDR2`
    pub id: u32,
    /// Bits of `id` that must match
    pub mask: u32,
}

impl PhyId {
    /// Identifier compared under `mask`
    pub const fn new(id: u32, mask: u32) -> Self {
        Self { id, mask }
    }

    /// Identifier that must match all 32 bits
    pub const fn exact(id: u32) -> Self {
        Self::new(id, 0xFFFF_FFFF)
    }

    /// Check a raw identifier read from the device
    pub const fn matches(&self, raw: u32) -> bool {
        (raw & self.mask) == (self.id & self.mask)
    }

    /// Check whether two entries would claim any common identifier
    pub const fn overlaps(&self, other: &PhyId) -> bool {
        let common = self.mask & other.mask;
        (self.id & common) == (other.id & common)
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Callback contract a PHY driver exposes to the framework
///
/// Drivers are stateless: every call receives the framework-owned
/// [`PhyDevice`] and, where register access is needed, the bus. The framework
/// serializes all calls against one device.
///
/// Call order: [`probe`](Self::probe) once at discovery,
/// [`config_init`](Self::config_init) once at bring-up, then
/// [`read_status`](Self::read_status) on every poll.
/// [`config_aneg`](Self::config_aneg) may be called at any time.
///
/// # Example Implementation
///
/// ```ignore
/// struct MyPhy;
///
/// impl PhyDriver for MyPhy {
///     const NAME: &'static str = "My PHY";
///     const PHY_ID: PhyId = PhyId::exact(0x0012_3450);
///
///     fn config_init<M: MdioBus>(dev: &mut PhyDevice, mdio: &mut M) -> Result<()> {
///         mdio.write(dev.address(), 0, 0x1000)
///     }
///
///     // ... other methods
/// }
/// ```
pub trait PhyDriver {
    /// Human-readable device name
    const NAME: &'static str;

    /// Identifier this driver binds to
    const PHY_ID: PhyId;

    /// Decide whether the driver supports this device instance
    ///
    /// Must not access registers.
    fn probe(dev: &PhyDevice) -> Result<()> {
        let _ = dev;
        Ok(())
    }

    /// Program the device for its configured interface
    fn config_init<M: MdioBus>(dev: &mut PhyDevice, mdio: &mut M) -> Result<()>;

    /// Start or configure autonegotiation
    fn config_aneg<M: MdioBus>(dev: &mut PhyDevice, mdio: &mut M) -> Result<()>;

    /// Refresh link, speed and duplex on `dev`
    ///
    /// Errors are reserved for bus failures; a down link is not an error.
    fn read_status<M: MdioBus>(dev: &mut PhyDevice, mdio: &mut M) -> Result<()>;
}
