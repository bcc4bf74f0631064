//! Per-device context shared between the framework and the driver
//!
//! A [`PhyDevice`] is created and owned by the framework (see
//! [`DriverRegistry::attach`](super::registry::DriverRegistry::attach)).
//! Driver callbacks receive it by reference and only ever touch the fields
//! their contract allows.

use crate::config::{Duplex, PhyInterface, Speed};

use super::generic::LinkStatus;

/// Framework lifecycle state of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Discovered, mode not yet programmed
    #[default]
    Unconfigured,
    /// `config_init` succeeded; status may be polled
    Configured,
}

/// Device context handed to driver callbacks
///
/// `speed` and `duplex` are `None` when unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyDevice {
    addr: u8,
    interface: PhyInterface,
    state: DeviceState,
    link: bool,
    speed: Option<Speed>,
    duplex: Option<Duplex>,
    autoneg: bool,
}

impl PhyDevice {
    /// Create a context for the device at `addr` using `interface`
    ///
    /// Autonegotiation starts enabled and the link reports down.
    pub const fn new(addr: u8, interface: PhyInterface) -> Self {
        Self {
            addr,
            interface,
            state: DeviceState::Unconfigured,
            link: false,
            speed: None,
            duplex: None,
            autoneg: true,
        }
    }

    /// MDIO bus address
    pub const fn address(&self) -> u8 {
        self.addr
    }

    /// Configured PHY-to-MAC interface
    pub const fn interface(&self) -> PhyInterface {
        self.interface
    }

    /// Framework lifecycle state
    pub const fn state(&self) -> DeviceState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: DeviceState) {
        self.state = state;
    }

    /// Last reported link state
    pub const fn is_link_up(&self) -> bool {
        self.link
    }

    /// Last reported speed, `None` if unknown
    pub const fn speed(&self) -> Option<Speed> {
        self.speed
    }

    /// Last reported duplex, `None` if unknown
    pub const fn duplex(&self) -> Option<Duplex> {
        self.duplex
    }

    /// Whether autonegotiation is enabled
    pub const fn is_autoneg_enabled(&self) -> bool {
        self.autoneg
    }

    /// Set the reported link state
    pub fn set_link(&mut self, up: bool) {
        self.link = up;
    }

    /// Set the reported speed
    pub fn set_speed(&mut self, speed: Option<Speed>) {
        self.speed = speed;
    }

    /// Set the reported duplex
    pub fn set_duplex(&mut self, duplex: Option<Duplex>) {
        self.duplex = duplex;
    }

    /// Enable or disable autonegotiation
    pub fn set_autoneg(&mut self, enabled: bool) {
        self.autoneg = enabled;
    }

    /// Report link down with unknown speed and duplex
    pub fn reset_link_status(&mut self) {
        self.link = false;
        self.speed = None;
        self.duplex = None;
    }

    /// Snapshot of the reported link, `None` while the link is down
    pub const fn link_status(&self) -> Option<LinkStatus> {
        if self.link {
            Some(LinkStatus::new(self.speed, self.duplex))
        } else {
            None
        }
    }
}
