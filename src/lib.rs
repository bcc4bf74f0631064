//! Marvell 88Q5152 SerDes PHY Driver
//!
//! A `no_std`, `no_alloc` driver for the host-facing SerDes ports of the
//! Marvell 88Q5152 automotive Ethernet switch, exposed to a network stack as
//! an Ethernet PHY.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! 1. **Driver** ([`phy::mv88q5152`]): address validation, SerDes mode
//!    programming and port status decoding
//! 2. **Framework** ([`phy`]): the [`PhyDriver`] callback contract, the
//!    per-device [`PhyDevice`] context, the [`DriverRegistry`] and link
//!    polling through [`PhyHandle`]
//! 3. **HAL** ([`hal`]): the [`MdioBus`] seam to the host's management bus
//!
//! # Supported Configurations
//!
//! | MDIO address | Interface | CMODE | Speed |
//! |--------------|-----------|-------|-------|
//! | 8 or 9       | SGMII     | `0x0A` | 10/100/1000 Mb/s from status |
//! | 8 or 9       | 5GBASE-R  | `0x0C` | fixed 5 Gb/s |
//!
//! # Known Limitation
//!
//! The reported link is the SerDes link between switch and host, not the
//! link of the switch's internal PHY. The hardware exposes nothing else
//! through this register, so the two can disagree.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and driver log messages
//! - `critical-section`: Enable the ISR-safe `SharedPhy` wrapper
//!
//! # Example
//!
//! ```ignore
//! use ph_mv88q5152::{DriverRegistry, LinkChange, PhyInterface};
//! use ph_mv88q5152::phy::mv88q5152;
//!
//! let mut registry: DriverRegistry<MyMdio, 4> = DriverRegistry::new();
//! mv88q5152::register(&mut registry).unwrap();
//!
//! let mut phy = registry.attach(&mut mdio, 8, PhyInterface::Sgmii).unwrap();
//!
//! if let Some(link) = phy.wait_for_link(&mut mdio, &mut delay, 3000).unwrap() {
//!     // program the MAC with link.speed / link.duplex
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels mirror the [lints] table in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod phy;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Duplex, PhyInterface, Speed};
pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use hal::MdioBus;

// Re-export PHY types
pub use phy::{
    DeviceState, DriverEntry, DriverRegistry, LinkChange, LinkStatus, Mv88q5152, PhyDevice,
    PhyDriver, PhyHandle, PhyId,
};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedPhy;

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::hal::mdio::{MAX_PHY_ADDR, MAX_REG_ADDR};
    pub use crate::phy::handle::LINK_POLL_INTERVAL_MS;
    pub use crate::phy::mv88q5152::port_status::{CMODE_5GBASER, CMODE_SGMII};
    pub use crate::phy::mv88q5152::reg::PORT_STATUS;
    pub use crate::phy::mv88q5152::{MARVELL_PHY_ID_MASK, MV88Q5152_PHY_ID, SUPPORTED_ADDRESSES};
}
