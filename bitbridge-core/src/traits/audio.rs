//! Tone output trait

use super::CapabilityError;

/// Square-wave tone output on the board's speaker pin
pub trait ToneGenerator {
    /// Start a tone at `frequency` Hz and return immediately
    ///
    /// A frequency of zero is silence.
    fn pitch(&mut self, frequency: u32) -> Result<(), CapabilityError>;

    /// Stop any tone
    fn stop(&mut self) -> Result<(), CapabilityError>;
}
