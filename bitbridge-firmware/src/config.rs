//! Configuration loading
//!
//! The bridge settings are compiled in from `bridge.toml`. build.rs has
//! already checked the file, so a failure here means the two parsers
//! disagree; the board then comes up on defaults rather than not at all.

use defmt::*;

use bitbridge_core::config::{parse_config, BridgeConfig};

pub fn load(source: &str) -> BridgeConfig {
    let config = match parse_config(source) {
        Ok(config) => config,
        Err(e) => {
            warn!("bridge.toml parse error: {:?}, using defaults", e);
            return BridgeConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("bridge.toml invalid: {:?}, using defaults", e);
        return BridgeConfig::default();
    }

    info!(
        "Config: {} baud, radio group {} power {}, {} edge pins",
        config.serial.baudrate,
        config.radio.group,
        config.radio.power,
        config.pins.exposed.len()
    );
    config
}
