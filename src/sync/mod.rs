//! Synchronization Support
//!
//! Serialization of driver calls for firmware that touches one PHY from
//! several contexts (main loop, timer interrupt, ...). The driver itself has
//! no locking; this wrapper provides it.
//!
//! [`SharedPhy`] keeps an attached PHY and its bus behind a
//! `critical_section::Mutex`.
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module

mod shared;

pub use shared::SharedPhy;
