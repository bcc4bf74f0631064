//! Link and interface configuration types

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    Mbps100,
    /// 1000 Mbps
    Mbps1000,
    /// 5000 Mbps
    Mbps5000,
}

impl Speed {
    /// Link rate in Mb/s
    #[must_use]
    pub const fn mbps(self) -> u32 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
            Speed::Mbps5000 => 5000,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    Full,
}

/// PHY-to-MAC interface type
///
/// The full set a host framework may configure. Individual drivers accept
/// only the subset their hardware implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Media Independent Interface
    Mii,
    /// Reduced Media Independent Interface
    Rmii,
    /// Reduced Gigabit Media Independent Interface
    Rgmii,
    /// Serial Gigabit Media Independent Interface
    Sgmii,
    /// 1000BASE-X
    Base1000X,
    /// 2500BASE-X
    Base2500X,
    /// 5GBASE-R
    Base5GR,
    /// 10GBASE-R
    Base10GR,
    /// Universal Serial 10GE Media Independent Interface
    Usxgmii,
}

impl PhyInterface {
    /// Short name as used in device trees and kernel logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PhyInterface::Mii => "mii",
            PhyInterface::Rmii => "rmii",
            PhyInterface::Rgmii => "rgmii",
            PhyInterface::Sgmii => "sgmii",
            PhyInterface::Base1000X => "1000base-x",
            PhyInterface::Base2500X => "2500base-x",
            PhyInterface::Base5GR => "5gbase-r",
            PhyInterface::Base10GR => "10gbase-r",
            PhyInterface::Usxgmii => "usxgmii",
        }
    }
}

impl core::fmt::Display for PhyInterface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
