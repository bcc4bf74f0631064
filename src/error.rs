//! Error types for the 88Q5152 PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Unsupported device configuration, detected before any
//!   register access
//! - [`IoError`]: MDIO bus transaction failures, reported by the [`MdioBus`]
//!   implementation and propagated unchanged
//!
//! The unified [`Error`] enum wraps both domains and is returned by the
//! driver callbacks and the registry.
//!
//! Status decoding has no error outcomes of its own: a missing link or an
//! unassigned speed code is reported as data, never as an `Error`.
//!
//! [`MdioBus`]: crate::hal::mdio::MdioBus

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and attach errors
///
/// These errors reject a device before the driver touches its registers, so
/// the framework can decline to attach or initialize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Device sits on a bus address the driver does not support
    UnsupportedAddress,
    /// Configured interface mode is not supported by the driver
    UnsupportedInterface,
    /// No registered driver matches the PHY identifier
    NoMatchingDriver,
    /// A driver with the same identifier is already registered
    DuplicateDriver,
    /// The driver registry has no free slots
    RegistryFull,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::UnsupportedAddress => "device not supported at this address",
            ConfigError::UnsupportedInterface => "interface mode not supported",
            ConfigError::NoMatchingDriver => "no driver matches PHY identifier",
            ConfigError::DuplicateDriver => "driver already registered",
            ConfigError::RegistryFull => "driver registry full",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// MDIO bus transaction errors
///
/// Produced by [`MdioBus`](crate::hal::mdio::MdioBus) implementations. The
/// driver never retries or masks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Bus transaction timed out
    Timeout,
    /// Bus controller is busy with another transaction
    Busy,
    /// Bus reported a fault (no response, turnaround error, ...)
    BusFault,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "MDIO transaction timed out",
            IoError::Busy => "MDIO bus busy",
            IoError::BusFault => "MDIO bus fault",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnsupportedAddress)) => { /* skip device */ }
///     Err(Error::Io(IoError::Timeout)) => { /* bus problem */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for bus operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
