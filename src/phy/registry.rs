//! Driver registry and attach flow
//!
//! The registry is an explicit, fixed-capacity table populated at startup.
//! It maps PHY identifiers to driver callbacks and runs the bring-up
//! sequence (`probe` then `config_init`) when a device is attached.
//!
//! # Example
//!
//! ```ignore
//! use ph_mv88q5152::phy::{DriverRegistry, mv88q5152};
//!
//! let mut registry: DriverRegistry<MyMdio, 4> = DriverRegistry::new();
//! mv88q5152::register(&mut registry)?;
//!
//! for addr in mv88q5152::SUPPORTED_ADDRESSES {
//!     let phy = registry.attach(&mut mdio, addr, PhyInterface::Sgmii)?;
//!     // hand `phy` to the link poller
//! }
//! ```

use crate::config::PhyInterface;
use crate::error::{ConfigError, ConfigResult, IoError, Result};
use crate::hal::mdio::{MdioBus, read_phy_id, validate_phy_address};

use super::device::{DeviceState, PhyDevice};
use super::generic::{PhyDriver, PhyId};
use super::handle::PhyHandle;

/// Callback signature taking the device only
pub type ProbeFn = fn(&PhyDevice) -> Result<()>;

/// Callback signature taking the device and the bus
pub type BusFn<M> = fn(&mut PhyDevice, &mut M) -> Result<()>;

// =============================================================================
// Driver Entry
// =============================================================================

/// One registered driver: identity plus its callbacks bound to bus type `M`
pub struct DriverEntry<M: MdioBus> {
    /// Human-readable device name
    pub name: &'static str,
    /// Identifier the driver binds to
    pub phy_id: PhyId,
    pub(crate) probe: ProbeFn,
    pub(crate) config_init: BusFn<M>,
    pub(crate) config_aneg: BusFn<M>,
    pub(crate) read_status: BusFn<M>,
}

impl<M: MdioBus> DriverEntry<M> {
    /// Build the entry for driver `D`
    pub fn of<D: PhyDriver>() -> Self {
        Self {
            name: D::NAME,
            phy_id: D::PHY_ID,
            probe: D::probe,
            config_init: D::config_init::<M>,
            config_aneg: D::config_aneg::<M>,
            read_status: D::read_status::<M>,
        }
    }

    /// Bring up the device at `addr` with this driver
    ///
    /// Runs `probe` then `config_init`. On success the device is marked
    /// [`DeviceState::Configured`] and wrapped in a [`PhyHandle`]; on failure
    /// no handle exists, so status can never be polled on an unconfigured
    /// device.
    pub fn bind(self, mdio: &mut M, addr: u8, interface: PhyInterface) -> Result<PhyHandle<M>> {
        let mut device = PhyDevice::new(addr, interface);

        (self.probe)(&device)?;
        (self.config_init)(&mut device, mdio)?;
        device.set_state(DeviceState::Configured);

        #[cfg(feature = "defmt")]
        defmt::info!("{}: attached at address {} ({})", self.name, addr, interface);

        Ok(PhyHandle::new(self, device))
    }
}

impl<M: MdioBus> Clone for DriverEntry<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MdioBus> Copy for DriverEntry<M> {}

impl<M: MdioBus> core::fmt::Debug for DriverEntry<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DriverEntry")
            .field("name", &self.name)
            .field("phy_id", &self.phy_id)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Driver Registry
// =============================================================================

/// Fixed-capacity table of up to `N` drivers for bus type `M`
pub struct DriverRegistry<M: MdioBus, const N: usize> {
    entries: [Option<DriverEntry<M>>; N],
    len: usize,
}

impl<M: MdioBus, const N: usize> DriverRegistry<M, N> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            entries: [const { None }; N],
            len: 0,
        }
    }

    /// Register driver `D`
    ///
    /// Fails with [`ConfigError::DuplicateDriver`] if an existing entry
    /// claims any identifier `D` claims, or [`ConfigError::RegistryFull`]
    /// when all `N` slots are taken.
    pub fn register<D: PhyDriver>(&mut self) -> ConfigResult<()> {
        let entry = DriverEntry::<M>::of::<D>();

        if self.iter().any(|e| e.phy_id.overlaps(&entry.phy_id)) {
            return Err(ConfigError::DuplicateDriver);
        }

        let slot = self
            .entries
            .get_mut(self.len)
            .ok_or(ConfigError::RegistryFull)?;
        *slot = Some(entry);
        self.len += 1;
        Ok(())
    }

    /// Find the driver for a raw identifier read from a device
    pub fn lookup(&self, raw_id: u32) -> Option<&DriverEntry<M>> {
        self.iter().find(|e| e.phy_id.matches(raw_id))
    }

    /// Discover and bring up the device at `addr`
    ///
    /// Fails with [`IoError::Busy`] if the bus reports a transaction in
    /// flight. Otherwise reads the Clause 22 identifier, selects the matching
    /// driver and [`bind`](DriverEntry::bind)s it.
    pub fn attach(&self, mdio: &mut M, addr: u8, interface: PhyInterface) -> Result<PhyHandle<M>> {
        validate_phy_address(addr)?;
        if mdio.is_busy() {
            return Err(IoError::Busy.into());
        }

        let id = read_phy_id(mdio, addr)?;
        let Some(entry) = self.lookup(id).copied() else {
            #[cfg(feature = "defmt")]
            defmt::warn!("no driver for PHY ID {:#010x} at address {}", id, addr);

            return Err(ConfigError::NoMatchingDriver.into());
        };

        entry.bind(mdio, addr, interface)
    }

    /// Registered drivers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &DriverEntry<M>> {
        self.entries[..self.len].iter().flatten()
    }

    /// Number of registered drivers
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no driver is registered
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of drivers
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<M: MdioBus, const N: usize> Default for DriverRegistry<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Duplex, Speed};
    use crate::error::{Error, IoError};
    use crate::phy::mv88q5152::{self, MV88Q5152_PHY_ID, Mv88q5152};
    use crate::test_utils::MockMdioBus;

    /// Second driver used to exercise lookup across several entries
    struct OtherPhy;

    impl PhyDriver for OtherPhy {
        const NAME: &'static str = "Other PHY";
        const PHY_ID: PhyId = PhyId::exact(0x0007_C0F1);

        fn config_init<M: MdioBus>(dev: &mut PhyDevice, mdio: &mut M) -> Result<()> {
            mdio.write(dev.address(), 0, 0x1000)
        }

        fn config_aneg<M: MdioBus>(_dev: &mut PhyDevice, _mdio: &mut M) -> Result<()> {
            Ok(())
        }

        fn read_status<M: MdioBus>(dev: &mut PhyDevice, _mdio: &mut M) -> Result<()> {
            dev.reset_link_status();
            Ok(())
        }
    }

    fn registry() -> DriverRegistry<MockMdioBus, 4> {
        let mut registry: DriverRegistry<MockMdioBus, 4> = DriverRegistry::new();
        registry.register::<OtherPhy>().unwrap();
        mv88q5152::register(&mut registry).unwrap();
        registry
    }

    fn bus_with_switch() -> MockMdioBus {
        let mdio = MockMdioBus::new();
        for addr in 0..=31 {
            mdio.set_phy_id(addr, MV88Q5152_PHY_ID | 0x1);
        }
        mdio
    }

    #[test]
    fn new_registry_is_empty() {
        let registry: DriverRegistry<MockMdioBus, 2> = DriverRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.capacity(), 2);
        assert!(registry.lookup(MV88Q5152_PHY_ID).is_none());
    }

    #[test]
    fn register_and_lookup() {
        let registry = registry();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(0x002B_0B43).unwrap().name, "Marvell 88Q5152");
        assert_eq!(registry.lookup(0x0007_C0F1).unwrap().name, "Other PHY");
        assert!(registry.lookup(0x0007_C0F0).is_none());
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut registry = registry();
        assert_eq!(
            registry.register::<Mv88q5152>(),
            Err(ConfigError::DuplicateDriver)
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_rejects_when_full() {
        let mut registry: DriverRegistry<MockMdioBus, 1> = DriverRegistry::new();
        registry.register::<Mv88q5152>().unwrap();

        assert_eq!(registry.register::<OtherPhy>(), Err(ConfigError::RegistryFull));
    }

    #[test]
    fn iter_preserves_registration_order() {
        let registry = registry();
        let mut names = registry.iter().map(|e| e.name);

        assert_eq!(names.next(), Some("Other PHY"));
        assert_eq!(names.next(), Some("Marvell 88Q5152"));
        assert_eq!(names.next(), None);
    }

    #[test]
    fn attach_configures_serdes_port() {
        let registry = registry();
        let mut mdio = bus_with_switch();

        let phy = registry.attach(&mut mdio, 8, PhyInterface::Sgmii).unwrap();

        assert_eq!(phy.name(), "Marvell 88Q5152");
        assert_eq!(phy.device().state(), DeviceState::Configured);
        assert!(mdio.was_written(8, 0, 0x0A));
    }

    #[test]
    fn attach_5gbaser_disables_autoneg() {
        let registry = registry();
        let mut mdio = bus_with_switch();

        let phy = registry.attach(&mut mdio, 9, PhyInterface::Base5GR).unwrap();

        assert!(!phy.device().is_autoneg_enabled());
        assert!(mdio.was_written(9, 0, 0x0C));
    }

    #[test]
    fn attach_rejects_unsupported_address_before_any_write() {
        let registry = registry();
        let mut mdio = bus_with_switch();

        let result = registry.attach(&mut mdio, 3, PhyInterface::Sgmii);

        assert_eq!(result.err(), Some(Error::Config(ConfigError::UnsupportedAddress)));
        // Only the two identifier reads happen before probe rejects the port
        assert_eq!(mdio.read_count(), 2);
        assert!(mdio.get_writes().is_empty());
    }

    #[test]
    fn attach_rejects_busy_bus_without_access() {
        let registry = registry();
        let mut mdio = bus_with_switch();
        mdio.set_busy(true);

        let result = registry.attach(&mut mdio, 8, PhyInterface::Sgmii);

        assert_eq!(result.err(), Some(Error::Io(IoError::Busy)));
        assert_eq!(mdio.read_count(), 0);
        assert!(mdio.get_writes().is_empty());

        mdio.set_busy(false);
        assert!(registry.attach(&mut mdio, 8, PhyInterface::Sgmii).is_ok());
    }

    #[test]
    fn attach_rejects_unsupported_interface() {
        let registry = registry();
        let mut mdio = bus_with_switch();

        let result = registry.attach(&mut mdio, 8, PhyInterface::Usxgmii);

        assert_eq!(
            result.err(),
            Some(Error::Config(ConfigError::UnsupportedInterface))
        );
        assert!(mdio.get_writes().is_empty());
    }

    #[test]
    fn attach_rejects_unknown_id() {
        let registry = registry();
        let mut mdio = MockMdioBus::new();
        mdio.set_phy_id(8, 0x0141_0C50);

        let result = registry.attach(&mut mdio, 8, PhyInterface::Sgmii);

        assert_eq!(result.err(), Some(Error::Config(ConfigError::NoMatchingDriver)));
    }

    #[test]
    fn attach_rejects_invalid_address() {
        let registry = registry();
        let mut mdio = bus_with_switch();

        let result = registry.attach(&mut mdio, 32, PhyInterface::Sgmii);

        assert_eq!(result.err(), Some(Error::Config(ConfigError::InvalidPhyAddress)));
        assert_eq!(mdio.read_count(), 0);
    }

    #[test]
    fn attach_propagates_bus_errors() {
        let registry = registry();
        let mut mdio = bus_with_switch();
        mdio.fail_writes(IoError::BusFault);

        let result = registry.attach(&mut mdio, 8, PhyInterface::Sgmii);

        assert_eq!(result.err(), Some(Error::Io(IoError::BusFault)));
    }

    #[test]
    fn bind_skips_identification() {
        let mut mdio = MockMdioBus::new();
        let entry = DriverEntry::<MockMdioBus>::of::<Mv88q5152>();

        let mut phy = entry.bind(&mut mdio, 9, PhyInterface::Sgmii).unwrap();
        assert_eq!(mdio.read_count(), 0);

        mdio.set_register(9, 0, 0x0D00);
        phy.read_status(&mut mdio).unwrap();
        assert_eq!(phy.device().speed(), Some(Speed::Mbps100));
        assert_eq!(phy.device().duplex(), Some(Duplex::Full));
    }
}
