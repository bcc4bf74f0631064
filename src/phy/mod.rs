//! Ethernet PHY Framework and Drivers
//!
//! This module provides the callback contract between a host network stack
//! and PHY drivers, the registry that binds drivers to devices, and the
//! 88Q5152 SerDes port driver.
//!
//! # Architecture
//!
//! The PHY layer is independent of the MAC, communicating only through the
//! [`MdioBus`](crate::hal::MdioBus) trait. Drivers are stateless types
//! implementing [`PhyDriver`]; per-device state lives in a framework-owned
//! [`PhyDevice`] passed to every callback.
//!
//! ```text
//!  DriverRegistry::attach ──► probe ──► config_init ──► PhyHandle
//!                                                         │
//!                                   poll_link / read_status (repeated)
//! ```
//!
//! # Supported PHY Chips
//!
//! - [`Mv88q5152`]: Marvell 88Q5152 switch SerDes ports (SGMII, 5GBASE-R)
//!
//! # Example
//!
//! ```ignore
//! use ph_mv88q5152::phy::{DriverRegistry, LinkChange, mv88q5152};
//! use ph_mv88q5152::PhyInterface;
//!
//! let mut registry: DriverRegistry<MyMdio, 4> = DriverRegistry::new();
//! mv88q5152::register(&mut registry)?;
//!
//! let mut phy = registry.attach(&mut mdio, 9, PhyInterface::Base5GR)?;
//!
//! loop {
//!     if let LinkChange::Up(link) = phy.poll_link(&mut mdio)? {
//!         mac.set_speed(link.speed);
//!     }
//!     // delay...
//! }
//! ```

pub mod device;
pub mod generic;
pub mod handle;
pub mod mv88q5152;
pub mod registry;

pub use device::{DeviceState, PhyDevice};
pub use generic::{LinkChange, LinkStatus, PhyDriver, PhyId};
pub use handle::PhyHandle;
pub use mv88q5152::Mv88q5152;
pub use registry::{DriverEntry, DriverRegistry};
