//! Minimal TOML reader for `bridge.toml`
//!
//! Handles only the subset the bridge needs:
//! - `[serial]`, `[radio]` and `[pins]` section headers
//! - `key = integer` pairs, with `_` digit separators
//! - `key = [integer, ...]` arrays on one line
//! - `#` comments, whole-line or trailing
//!
//! Keys that are left out keep their defaults.

use core::str::FromStr;

use heapless::{String, Vec};

use super::types::{BridgeConfig, MAX_EXPOSED_PINS};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not known in its section
    UnknownKey,
    /// Value has the wrong shape or does not fit
    InvalidValue,
    /// Array longer than its capacity
    TooManyItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Serial,
    Radio,
    Pins,
}

/// Parse `bridge.toml` text into a config, starting from the defaults
pub fn parse_config(input: &str) -> Result<BridgeConfig, ParseError> {
    let mut config = BridgeConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "serial" => Ok(Section::Serial),
        "radio" => Ok(Section::Radio),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_int<T: FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: String<24> = String::new();
    for c in value.chars().filter(|c| *c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_int_array<T: FromStr, const N: usize>(value: &str) -> Result<Vec<T, N>, ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut items = Vec::new();
    for item in inner.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        items
            .push(parse_int(item)?)
            .map_err(|_| ParseError::TooManyItems)?;
    }
    Ok(items)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut BridgeConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Serial, "baudrate") => config.serial.baudrate = parse_int(value)?,
        (Section::Radio, "group") => config.radio.group = parse_int(value)?,
        (Section::Radio, "power") => config.radio.power = parse_int(value)?,
        (Section::Pins, "exposed") => {
            config.pins.exposed = parse_int_array::<u8, MAX_EXPOSED_PINS>(value)?;
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}
