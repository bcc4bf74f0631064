//! Hardware Abstraction Layer
//!
//! The driver talks to hardware only through the [`MdioBus`] trait. Host
//! frameworks implement it over whatever management bus controller they own
//! (a MAC's SMI block, a bit-banged MDIO, a switch's indirect access, ...).
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus trait and Clause 22 identifier registers

pub mod mdio;

pub use mdio::{MdioBus, read_phy_id};
