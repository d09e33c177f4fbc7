//! Driver configuration.

use crate::registers::I2C_ADDR_DEFAULT;
use crate::types::AddressPin;

/// Default number of status reads before [`reset`](crate::Bd3491fs::reset) gives up.
pub const DEFAULT_RESET_POLL_LIMIT: u16 = 100;

/// Default pause between status reads during reset, in microseconds.
pub const DEFAULT_RESET_POLL_INTERVAL_US: u32 = 1_000;

/// Bus address and reset polling bounds for a [`Bd3491fs`](crate::Bd3491fs).
///
/// ```
/// use bd3491fs::{AddressPin, Config};
///
/// let config = Config::from_pin(AddressPin::Ground).reset_poll_limit(10);
/// assert_eq!(config.address, 0x40);
/// assert_eq!(config.reset_poll_limit, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit I2C device address.
    pub address: u8,
    /// Maximum number of reset status reads.
    pub reset_poll_limit: u16,
    /// Delay before each reset status read, in microseconds.
    pub reset_poll_interval_us: u32,
}

impl Config {
    /// Default configuration at the given address.
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            reset_poll_limit: DEFAULT_RESET_POLL_LIMIT,
            reset_poll_interval_us: DEFAULT_RESET_POLL_INTERVAL_US,
        }
    }

    /// Default configuration for a given address-pin strapping.
    pub const fn from_pin(pin: AddressPin) -> Self {
        Self::new(pin.address())
    }

    /// Set the I2C address.
    pub const fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the maximum number of reset status reads.
    ///
    /// A limit of zero makes [`reset`](crate::Bd3491fs::reset) time out
    /// without reading the status at all.
    pub const fn reset_poll_limit(mut self, limit: u16) -> Self {
        self.reset_poll_limit = limit;
        self
    }

    /// Set the delay before each reset status read.
    pub const fn reset_poll_interval_us(mut self, interval_us: u32) -> Self {
        self.reset_poll_interval_us = interval_us;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(I2C_ADDR_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.address, 0x41);
        assert_eq!(config.reset_poll_limit, DEFAULT_RESET_POLL_LIMIT);
        assert_eq!(config.reset_poll_interval_us, DEFAULT_RESET_POLL_INTERVAL_US);
    }

    #[test]
    fn builder_overrides() {
        let config = Config::default()
            .address(0x40)
            .reset_poll_limit(3)
            .reset_poll_interval_us(0);
        assert_eq!(config, Config { address: 0x40, reset_poll_limit: 3, reset_poll_interval_us: 0 });
    }
}
