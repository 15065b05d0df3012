//! PWM buzzer
//!
//! A square wave on one PWM channel. The slice counter wraps at `top`, so
//! the output frequency is `clk_sys / (divider * (top + 1))`. The divider
//! is kept integral to leave the full 16-bit counter for pitch resolution.

use bitbridge_core::traits::{CapabilityError, ToneGenerator};
use embassy_rp::pwm::{Config, Pwm};
use fixed::types::extra::U4;
use fixed::FixedU16;

/// Highest pitch accepted, in Hz
pub const MAX_TONE_HZ: u32 = 20_000;

/// Integer divider and counter wrap for a target frequency
///
/// Returns `None` when the frequency can't be produced from `clk_hz`
/// with an 8-bit integer divider.
pub fn tone_timing(clk_hz: u32, freq_hz: u32) -> Option<(u8, u16)> {
    if freq_hz == 0 || freq_hz > MAX_TONE_HZ {
        return None;
    }

    // Smallest divider that keeps top within 16 bits
    let per_period = clk_hz / freq_hz;
    let divider = per_period.div_ceil(65_536).max(1);
    if divider > u8::MAX as u32 {
        return None;
    }

    let top = (clk_hz / (divider * freq_hz)).saturating_sub(1);
    let top = u16::try_from(top).ok()?;
    Some((divider as u8, top))
}

pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmTone<'d> {
    /// Wrap a PWM slice with its output on channel A
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        config.enable = false;
        config.compare_a = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl ToneGenerator for PwmTone<'_> {
    fn pitch(&mut self, frequency: u32) -> Result<(), CapabilityError> {
        if frequency == 0 {
            return self.stop();
        }

        let clk = embassy_rp::clocks::clk_sys_freq();
        let (divider, top) =
            tone_timing(clk, frequency).ok_or(CapabilityError::InvalidArgument)?;

        self.config.divider = FixedU16::<U4>::from_num(divider);
        self.config.top = top;
        self.config.compare_a = top / 2 + 1;
        self.config.enable = true;
        self.pwm.set_config(&self.config);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), CapabilityError> {
        self.config.compare_a = 0;
        self.config.enable = false;
        self.pwm.set_config(&self.config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLK: u32 = 125_000_000;

    #[test]
    fn test_concert_a() {
        // 125MHz / 440Hz = 284090 ticks, needs a divider of 5
        let (divider, top) = tone_timing(CLK, 440).unwrap();
        assert_eq!(divider, 5);
        assert_eq!(top, 56_817);
    }

    #[test]
    fn test_high_pitch_uses_unit_divider() {
        let (divider, top) = tone_timing(CLK, 10_000).unwrap();
        assert_eq!(divider, 1);
        assert_eq!(top, 12_499);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(tone_timing(CLK, 0), None);
        assert_eq!(tone_timing(CLK, MAX_TONE_HZ + 1), None);
        // Below ~7.5Hz the divider no longer fits in 8 bits
        assert_eq!(tone_timing(CLK, 7), None);
        assert!(tone_timing(CLK, 8).is_some());
    }

    #[test]
    fn test_period_matches_request() {
        for freq in [131, 262, 523, 1047, 4186] {
            let (divider, top) = tone_timing(CLK, freq).unwrap();
            let actual = CLK / (divider as u32 * (top as u32 + 1));
            assert!(actual.abs_diff(freq) <= 1, "{} -> {}", freq, actual);
        }
    }
}
