//! Marvell 88Q5152 PHY Driver
//!
//! Driver for the SerDes ports of the Marvell 88Q5152 automotive Ethernet
//! switch, presented to the host as a PHY.
//!
//! Only ports 8 and 9 carry a SerDes towards the host MAC, so the driver
//! binds to MDIO addresses 8 and 9 and rejects every other instance in
//! [`probe`](PhyDriver::probe).
//!
//! # Port Status Register (0)
//!
//! | Bits  | Name   | Description |
//! |-------|--------|-------------|
//! | 11    | LINK   | SerDes link up |
//! | 10    | DUPLEX | Full duplex if set |
//! | 9:8   | SPEED  | Speed code (SGMII only) |
//!
//! Writing the same register at bring-up selects the SerDes mode (CMODE):
//!
//! | Interface | CMODE |
//! |-----------|-------|
//! | SGMII     | `0x0A` |
//! | 5GBASE-R  | `0x0C` |
//!
//! # Link Reporting Caveat
//!
//! The port status register reflects the SerDes between switch and host,
//! not the internal PHY facing the cable. The reported link can therefore
//! differ from the actual end-to-end link. There is no register through
//! this interface that exposes the internal PHY state.
//!
//! # Autonegotiation
//!
//! Negotiation, if any, happens on the wire at the SerDes level.
//! [`config_aneg`](PhyDriver::config_aneg) is a no-op, and 5GBASE-R mode
//! turns the framework's autonegotiation flag off since the rate is fixed.
//!
//! # Example
//!
//! ```ignore
//! use ph_mv88q5152::phy::{DriverRegistry, mv88q5152};
//! use ph_mv88q5152::PhyInterface;
//!
//! let mut registry: DriverRegistry<MyMdio, 4> = DriverRegistry::new();
//! mv88q5152::register(&mut registry)?;
//!
//! let mut phy = registry.attach(&mut mdio, 8, PhyInterface::Sgmii)?;
//! phy.read_status(&mut mdio)?;
//! ```

use crate::config::{Duplex, PhyInterface, Speed};
use crate::error::{ConfigError, ConfigResult, Result};
use crate::hal::mdio::MdioBus;

use super::device::PhyDevice;
use super::generic::{PhyDriver, PhyId};
use super::registry::DriverRegistry;

// =============================================================================
// 88Q5152 Constants
// =============================================================================

/// 88Q5152 PHY Identifier (revision bits clear)
pub const MV88Q5152_PHY_ID: u32 = 0x002B_0B40;
/// Marvell PHY ID mask (ignores revision bits)
pub const MARVELL_PHY_ID_MASK: u32 = 0xFFFF_FFF0;

/// MDIO addresses of the SerDes ports
pub const SUPPORTED_ADDRESSES: [u8; 2] = [8, 9];

/// 88Q5152 register addresses
pub mod reg {
    /// Port Status / CMODE Register
    pub const PORT_STATUS: u8 = 0;
}

/// Port Status Register (0) bits
pub mod port_status {
    /// LINK - SerDes link up
    pub const LINK: u16 = 1 << 11;
    /// DUPLEX - full duplex
    pub const DUPLEX: u16 = 1 << 10;
    /// SPEED mask (bits 9:8)
    pub const SPEED_MASK: u16 = 0x3 << 8;
    /// SPEED field shift
    pub const SPEED_SHIFT: u16 = 8;
    /// CMODE: SGMII
    pub const CMODE_SGMII: u16 = 0x0A;
    /// CMODE: 5GBASE-R
    pub const CMODE_5GBASER: u16 = 0x0C;
}

// =============================================================================
// SerDes Mode
// =============================================================================

/// SerDes modes the 88Q5152 ports support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerdesMode {
    /// SGMII, 10/100/1000 Mb/s
    Sgmii,
    /// 5GBASE-R, fixed 5 Gb/s
    Base5GR,
}

impl SerdesMode {
    /// Map a framework interface onto a SerDes mode
    pub const fn from_interface(interface: PhyInterface) -> Option<Self> {
        match interface {
            PhyInterface::Sgmii => Some(SerdesMode::Sgmii),
            PhyInterface::Base5GR => Some(SerdesMode::Base5GR),
            PhyInterface::Mii
            | PhyInterface::Rmii
            | PhyInterface::Rgmii
            | PhyInterface::Base1000X
            | PhyInterface::Base2500X
            | PhyInterface::Base10GR
            | PhyInterface::Usxgmii => None,
        }
    }

    /// CMODE value selecting this mode
    pub const fn cmode(self) -> u16 {
        match self {
            SerdesMode::Sgmii => port_status::CMODE_SGMII,
            SerdesMode::Base5GR => port_status::CMODE_5GBASER,
        }
    }
}

impl TryFrom<PhyInterface> for SerdesMode {
    type Error = ConfigError;

    fn try_from(interface: PhyInterface) -> ConfigResult<Self> {
        Self::from_interface(interface).ok_or(ConfigError::UnsupportedInterface)
    }
}

// =============================================================================
// Port Status Decoding
// =============================================================================

/// Two-bit speed code from the port status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedCode {
    /// `00`
    Code0,
    /// `01`
    Code1,
    /// `10`
    Code2,
    /// `11`
    Code3,
}

/// Raw port status register value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortStatus(pub u16);

impl PortStatus {
    /// SerDes link bit
    pub const fn is_link_up(self) -> bool {
        (self.0 & port_status::LINK) != 0
    }

    /// Duplex bit
    pub const fn duplex(self) -> Duplex {
        if (self.0 & port_status::DUPLEX) != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        }
    }

    /// Speed code in bits 9:8
    pub const fn speed_code(self) -> SpeedCode {
        match (self.0 & port_status::SPEED_MASK) >> port_status::SPEED_SHIFT {
            0 => SpeedCode::Code0,
            1 => SpeedCode::Code1,
            2 => SpeedCode::Code2,
            _ => SpeedCode::Code3,
        }
    }

    /// Speed as interpreted in `mode`
    ///
    /// SGMII code `11` has no assigned rate and yields `None`. 5GBASE-R has
    /// no variable rate at this layer, so the speed bits are ignored.
    pub const fn speed(self, mode: SerdesMode) -> Option<Speed> {
        match mode {
            SerdesMode::Sgmii => match self.speed_code() {
                SpeedCode::Code0 => Some(Speed::Mbps10),
                SpeedCode::Code1 => Some(Speed::Mbps100),
                SpeedCode::Code2 => Some(Speed::Mbps1000),
                SpeedCode::Code3 => None,
            },
            SerdesMode::Base5GR => Some(Speed::Mbps5000),
        }
    }
}

// =============================================================================
// 88Q5152 Driver
// =============================================================================

/// Marvell 88Q5152 SerDes port driver
///
/// Stateless; all per-device state lives in the [`PhyDevice`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Mv88q5152;

impl Mv88q5152 {
    /// Check whether `addr` is one of the SerDes ports
    pub const fn is_supported_address(addr: u8) -> bool {
        matches!(addr, 8 | 9)
    }
}

impl PhyDriver for Mv88q5152 {
    const NAME: &'static str = "Marvell 88Q5152";
    const PHY_ID: PhyId = PhyId::new(MV88Q5152_PHY_ID, MARVELL_PHY_ID_MASK);

    fn probe(dev: &PhyDevice) -> Result<()> {
        if !Self::is_supported_address(dev.address()) {
            #[cfg(feature = "defmt")]
            defmt::debug!("88Q5152: no SerDes port at address {}", dev.address());

            return Err(ConfigError::UnsupportedAddress.into());
        }
        Ok(())
    }

    fn config_init<M: MdioBus>(dev: &mut PhyDevice, mdio: &mut M) -> Result<()> {
        let mode = match SerdesMode::try_from(dev.interface()) {
            Ok(mode) => mode,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("88Q5152: interface {} not supported", dev.interface());

                return Err(e.into());
            }
        };

        if mode == SerdesMode::Base5GR {
            dev.set_autoneg(false);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "88Q5152: addr {} CMODE {:#04x} ({})",
            dev.address(),
            mode.cmode(),
            mode
        );

        mdio.write(dev.address(), reg::PORT_STATUS, mode.cmode())
    }

    fn config_aneg<M: MdioBus>(_dev: &mut PhyDevice, _mdio: &mut M) -> Result<()> {
        Ok(())
    }

    fn read_status<M: MdioBus>(dev: &mut PhyDevice, mdio: &mut M) -> Result<()> {
        dev.reset_link_status();

        // SerDes-side status only; the internal PHY link is not visible here.
        let status = PortStatus(mdio.read(dev.address(), reg::PORT_STATUS)?);
        if !status.is_link_up() {
            return Ok(());
        }

        dev.set_link(true);
        dev.set_duplex(Some(status.duplex()));

        let speed = SerdesMode::from_interface(dev.interface()).and_then(|mode| status.speed(mode));
        dev.set_speed(speed);

        Ok(())
    }
}

/// Add the 88Q5152 driver to `registry`
pub fn register<M: MdioBus, const N: usize>(registry: &mut DriverRegistry<M, N>) -> ConfigResult<()> {
    registry.register::<Mv88q5152>()
}
