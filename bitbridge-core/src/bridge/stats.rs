//! Link counters

use super::{Exchange, Outcome};
use crate::dispatch::ErrorKind;

/// Running totals since boot; counters wrap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Requests answered (or deliberately not answered)
    pub frames: u32,
    pub replies: u32,
    pub silent: u32,
    pub failures: u32,
    /// Category of the most recent failure
    pub last_error: Option<ErrorKind>,
}

impl LinkStats {
    pub(crate) fn record(&mut self, exchange: &Exchange) {
        self.frames = self.frames.wrapping_add(1);
        match exchange.outcome() {
            Outcome::Replied => self.replies = self.replies.wrapping_add(1),
            Outcome::Silent => self.silent = self.silent.wrapping_add(1),
            Outcome::Failed(e) => {
                self.failures = self.failures.wrapping_add(1);
                self.last_error = Some(e.kind());
            }
        }
    }
}
