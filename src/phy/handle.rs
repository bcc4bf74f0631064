//! Attached PHY handle and link polling
//!
//! A [`PhyHandle`] exists only for a device whose `config_init` succeeded,
//! so every status poll runs against a configured device.

use embedded_hal::delay::DelayNs;

use crate::error::Result;
use crate::hal::mdio::MdioBus;

use super::device::PhyDevice;
use super::generic::{LinkChange, LinkStatus};
use super::registry::DriverEntry;

/// Interval between status polls in [`PhyHandle::wait_for_link`]
pub const LINK_POLL_INTERVAL_MS: u32 = 10;

/// A configured device bound to its driver
#[derive(Debug)]
pub struct PhyHandle<M: MdioBus> {
    entry: DriverEntry<M>,
    device: PhyDevice,
    /// Link state handed out by the last poll
    reported: Option<LinkStatus>,
}

impl<M: MdioBus> PhyHandle<M> {
    pub(crate) const fn new(entry: DriverEntry<M>, device: PhyDevice) -> Self {
        Self {
            entry,
            device,
            reported: None,
        }
    }

    /// Driver name
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    /// Device context with the most recently decoded status
    pub fn device(&self) -> &PhyDevice {
        &self.device
    }

    /// Most recently decoded link, `None` while down
    pub fn link_status(&self) -> Option<LinkStatus> {
        self.device.link_status()
    }

    /// Run the driver's autonegotiation callback
    pub fn config_aneg(&mut self, mdio: &mut M) -> Result<()> {
        (self.entry.config_aneg)(&mut self.device, mdio)
    }

    /// Refresh link, speed and duplex from hardware
    pub fn read_status(&mut self, mdio: &mut M) -> Result<()> {
        (self.entry.read_status)(&mut self.device, mdio)
    }

    /// Refresh status and report what changed since the last poll
    ///
    /// Call periodically. A bus error is returned as-is and the next
    /// successful poll reports the change relative to the last good one.
    pub fn poll_link(&mut self, mdio: &mut M) -> Result<LinkChange> {
        self.read_status(mdio)?;

        let current = self.device.link_status();
        let change = match (self.reported, current) {
            (None, None) => LinkChange::Unchanged,
            (Some(_), None) => LinkChange::Down,
            (Some(prev), Some(now)) if prev == now => LinkChange::Unchanged,
            (_, Some(now)) => LinkChange::Up(now),
        };

        #[cfg(feature = "defmt")]
        match change {
            LinkChange::Up(status) => defmt::info!("{}: link up {}", self.entry.name, status),
            LinkChange::Down => defmt::info!("{}: link down", self.entry.name),
            LinkChange::Unchanged => {}
        }

        self.reported = current;
        Ok(change)
    }

    /// Poll until the link comes up or `timeout_ms` elapses
    ///
    /// Returns `None` on timeout.
    pub fn wait_for_link<D: DelayNs>(
        &mut self,
        mdio: &mut M,
        delay: &mut D,
        timeout_ms: u32,
    ) -> Result<Option<LinkStatus>> {
        let mut waited_ms = 0;
        loop {
            self.poll_link(mdio)?;
            if let Some(status) = self.device.link_status() {
                return Ok(Some(status));
            }
            if waited_ms >= timeout_ms {
                return Ok(None);
            }
            delay.delay_ms(LINK_POLL_INTERVAL_MS);
            waited_ms = waited_ms.saturating_add(LINK_POLL_INTERVAL_MS);
        }
    }

    /// Detach, returning the device context
    pub fn into_device(self) -> PhyDevice {
        self.device
    }
}
