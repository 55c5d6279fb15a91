//! Display configuration
//!
//! Board-level settings for one panel. With the `serde` feature the
//! configuration can be stored as postcard binary data.

use scrollphat_protocol::{DEVICE_ADDRESS, MODE_5X11};

use crate::diagnostics::IO_ERROR_THRESHOLD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bus channel (`/dev/i2c-1` on a Raspberry Pi)
pub const DEFAULT_CHANNEL: u8 = 1;

/// Largest postcard encoding of a [`DisplayConfig`]
#[cfg(feature = "serde")]
pub const MAX_CONFIG_SIZE: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address does not fit in 7 bits
    InvalidAddress,
    /// Could not serialize the configuration
    Serialize,
    /// Could not deserialize the configuration
    Deserialize,
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// 7-bit I2C address of the controller
    pub address: u8,
    /// Bus channel opened during initialization
    pub channel: u8,
    /// Mode byte sent during initialization
    pub mode: u8,
    /// Board mounted upside down
    pub rotate: bool,
    /// Brightness sent during initialization, if any
    pub brightness: Option<u8>,
    /// Failed pushes before the operator notice (0 disables it)
    pub io_error_threshold: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEVICE_ADDRESS,
            channel: DEFAULT_CHANNEL,
            mode: MODE_5X11,
            rotate: false,
            brightness: None,
            io_error_threshold: IO_ERROR_THRESHOLD,
        }
    }
}

impl DisplayConfig {
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_io_error_threshold(mut self, threshold: u32) -> Self {
        self.io_error_threshold = threshold;
        self
    }

    /// Check values the bus cannot represent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address > 0x7F {
            return Err(ConfigError::InvalidAddress);
        }
        Ok(())
    }

    /// Serialize to postcard bytes, returning the used part of `buf`
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from postcard bytes and validate
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_board() {
        let config = DisplayConfig::default();
        assert_eq!(config.address, 0x60);
        assert_eq!(config.channel, 1);
        assert_eq!(config.mode, 0b0000_0011);
        assert!(!config.rotate);
        assert_eq!(config.brightness, None);
        assert_eq!(config.io_error_threshold, 10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builders() {
        let config = DisplayConfig::default()
            .with_channel(0)
            .with_rotate(true)
            .with_brightness(20)
            .with_io_error_threshold(3);

        assert_eq!(config.channel, 0);
        assert!(config.rotate);
        assert_eq!(config.brightness, Some(20));
        assert_eq!(config.io_error_threshold, 3);
    }

    #[test]
    fn test_eight_bit_address_is_rejected() {
        let config = DisplayConfig {
            address: 0xC0,
            ..DisplayConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_storage() {
        let config = DisplayConfig::default().with_rotate(true).with_brightness(64);
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let stored = config.to_bytes(&mut buf).unwrap();

        assert_eq!(DisplayConfig::from_bytes(stored), Ok(config));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_corrupt_storage_is_rejected() {
        assert_eq!(
            DisplayConfig::from_bytes(&[0x60]),
            Err(ConfigError::Deserialize)
        );

        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let bad = DisplayConfig {
            address: 0xFE,
            ..DisplayConfig::default()
        };
        let stored = bad.to_bytes(&mut buf).unwrap();
        assert_eq!(
            DisplayConfig::from_bytes(stored),
            Err(ConfigError::InvalidAddress)
        );
    }
}
