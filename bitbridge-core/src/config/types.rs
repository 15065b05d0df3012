//! Configuration types

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bitbridge_hal::UartConfig;
use bitbridge_protocol::MAX_RADIO_POWER;

use crate::registry::MAX_PIN;

/// Maximum edge pins that can be exposed
pub const MAX_EXPOSED_PINS: usize = MAX_PIN as usize + 1;

/// Slowest supported baud rate
pub const MIN_BAUDRATE: u32 = 1_200;

/// Fastest supported baud rate
pub const MAX_BAUDRATE: u32 = 1_000_000;

/// Serial link settings (framing is always 8N1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SerialConfig {
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { baudrate: 115_200 }
    }
}

/// Radio settings applied at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RadioConfig {
    /// Group (0-255)
    pub group: u8,
    /// Transmit power (0-7)
    pub power: u8,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self { group: 0, power: 6 }
    }
}

/// Which edge pins get `pinN` registry names
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PinsConfig {
    pub exposed: Vec<u8, MAX_EXPOSED_PINS>,
}

impl Default for PinsConfig {
    fn default() -> Self {
        Self {
            exposed: Vec::from_slice(&[0, 1, 2]).unwrap_or_default(),
        }
    }
}

/// Complete bridge configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BridgeConfig {
    pub serial: SerialConfig,
    pub radio: RadioConfig,
    pub pins: PinsConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Baud rate outside `MIN_BAUDRATE..=MAX_BAUDRATE`
    InvalidBaudrate,
    /// Radio power above 7
    InvalidRadioPower,
    /// Pin number above `MAX_PIN`
    InvalidPin(u8),
    /// Pin listed twice
    DuplicatePin(u8),
}

impl BridgeConfig {
    /// Check that every value is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BAUDRATE..=MAX_BAUDRATE).contains(&self.serial.baudrate) {
            return Err(ConfigError::InvalidBaudrate);
        }
        if self.radio.power > MAX_RADIO_POWER {
            return Err(ConfigError::InvalidRadioPower);
        }
        for (i, &pin) in self.pins.exposed.iter().enumerate() {
            if pin > MAX_PIN {
                return Err(ConfigError::InvalidPin(pin));
            }
            if self.pins.exposed[..i].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }
        Ok(())
    }

    /// Serial settings for the HAL
    pub fn uart_config(&self) -> UartConfig {
        UartConfig::with_baudrate(self.serial.baudrate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BridgeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.serial.baudrate, 115_200);
        assert_eq!(config.radio.power, 6);
        assert_eq!(&config.pins.exposed[..], &[0, 1, 2]);
        assert_eq!(config.uart_config(), UartConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BridgeConfig::default();
        config.serial.baudrate = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidBaudrate));

        let mut config = BridgeConfig::default();
        config.radio.power = 8;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadioPower));

        let mut config = BridgeConfig::default();
        config.pins.exposed.push(21).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::InvalidPin(21)));

        let mut config = BridgeConfig::default();
        config.pins.exposed.push(1).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(1)));
    }
}
