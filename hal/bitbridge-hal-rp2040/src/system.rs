//! Uptime and die temperature

use core::cell::RefCell;

use bitbridge_core::traits::{CapabilityError, SystemInfo};
use embassy_rp::adc::{self, Adc, Blocking};
use embassy_rp::peripherals::ADC_TEMP_SENSOR;
use embassy_rp::Peri;
use embassy_time::Instant;

/// ADC reference in millivolts
const VREF_MV: i32 = 3300;

/// Sensor output at 27°C, in millivolts
const SENSOR_MV_AT_27C: i32 = 706;

/// Sensor slope in microvolts per °C
const SENSOR_SLOPE_UV: i32 = 1721;

/// Convert a raw 12-bit sensor sample to whole degrees Celsius
pub fn temperature_from_raw(raw: u16) -> i32 {
    let mv = raw as i32 * VREF_MV / 4096;
    27 - (mv - SENSOR_MV_AT_27C) * 1000 / SENSOR_SLOPE_UV
}

pub struct RpSystem<'d> {
    adc: &'d RefCell<Adc<'d, Blocking>>,
    sensor: adc::Channel<'d>,
}

impl<'d> RpSystem<'d> {
    pub fn new(adc: &'d RefCell<Adc<'d, Blocking>>, sensor: Peri<'d, ADC_TEMP_SENSOR>) -> Self {
        Self {
            adc,
            sensor: adc::Channel::new_temp_sensor(sensor),
        }
    }
}

impl SystemInfo for RpSystem<'_> {
    fn running_time_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn temperature(&mut self) -> Result<i32, CapabilityError> {
        let mut adc = self
            .adc
            .try_borrow_mut()
            .map_err(|_| CapabilityError::Hardware)?;
        let raw = adc
            .blocking_read(&mut self.sensor)
            .map_err(|_| CapabilityError::Hardware)?;
        Ok(temperature_from_raw(raw))
    }
}
