//! Bridge state machine
//!
//! One request moves through four states:
//!
//! ```text
//!            byte               byte != 0x01
//!   AwaitOpcode ──► AwaitDelimiter ◄─┐
//!        ▲               │ └─────────┘
//!        │               │ 0x01
//!        │               ▼
//!     Respond ◄──── Dispatch
//! ```
//!
//! The only points where the bridge waits on the outside world are reading
//! a byte (in `AwaitOpcode` and `AwaitDelimiter`) and writing the response
//! (in `Respond`). [`Bridge::feed`] takes bytes one at a time and never
//! blocks, so a caller can drive it from blocking reads, a polled FIFO or an
//! interrupt-filled buffer alike. [`Bridge::serve_once`] is the blocking
//! driver used by the firmware.

mod stats;

pub use stats::LinkStats;

use core::fmt::Write;

use bitbridge_hal::{UartRx, UartTx};
use bitbridge_protocol::{
    Command, Frame, FrameError, FrameReader, Response, MAX_RESPONSE_SIZE, MAX_TEXT_LEN,
};
use heapless::{String, Vec};

use crate::dispatch::{CommandError, Dispatcher, Reply, Value};
use crate::traits::Board;

/// Where the bridge is in the request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeState {
    /// Between requests; the next byte is an opcode
    AwaitOpcode,
    /// Collecting payload bytes
    AwaitDelimiter,
    /// Running the command
    Dispatch,
    /// Response ready, waiting to be written
    Respond,
}

/// How a request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Result text and success marker
    Replied,
    /// Nothing written
    Silent,
    /// Error marker
    Failed(CommandError),
}

/// One finished request and the bytes to send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    opcode: Option<u8>,
    outcome: Outcome,
    wire: Vec<u8, MAX_RESPONSE_SIZE>,
}

impl Exchange {
    fn replied(opcode: u8, wire: Vec<u8, MAX_RESPONSE_SIZE>) -> Self {
        Self {
            opcode: Some(opcode),
            outcome: Outcome::Replied,
            wire,
        }
    }

    fn silent(opcode: u8) -> Self {
        Self {
            opcode: Some(opcode),
            outcome: Outcome::Silent,
            wire: Vec::new(),
        }
    }

    fn failed(opcode: Option<u8>, error: CommandError) -> Self {
        Self {
            opcode,
            outcome: Outcome::Failed(error),
            wire: Response::Failure.encode_to_vec().unwrap_or_default(),
        }
    }

    /// Request opcode; `None` when the frame was too long to keep
    pub fn opcode(&self) -> Option<u8> {
        self.opcode
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Why the request failed, if it did
    pub fn error(&self) -> Option<CommandError> {
        match self.outcome {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Encoded response; empty for a silent request
    pub fn bytes(&self) -> &[u8] {
        &self.wire
    }
}

/// Serial link failures
///
/// These are failures of the link itself, not of a request. A request
/// failure is answered on the link and never surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError<R, W> {
    /// Receiving failed
    Read(R),
    /// Transmitting failed
    Write(W),
}

/// Serial command bridge
pub struct Bridge<B: Board> {
    dispatcher: Dispatcher<B>,
    reader: FrameReader,
    state: BridgeState,
    stats: LinkStats,
}

impl<B: Board> Bridge<B> {
    pub fn new(dispatcher: Dispatcher<B>) -> Self {
        Self {
            dispatcher,
            reader: FrameReader::new(),
            state: BridgeState::AwaitOpcode,
            stats: LinkStats::default(),
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn stats(&self) -> &LinkStats {
        &self.stats
    }

    pub fn dispatcher(&self) -> &Dispatcher<B> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<B> {
        &mut self.dispatcher
    }

    /// Drop any partially read request
    pub fn reset(&mut self) {
        self.reader.reset();
        self.state = BridgeState::AwaitOpcode;
    }

    /// Feed one received byte
    ///
    /// Returns the finished exchange when the byte completes a request. The
    /// bridge is then in `Respond` until [`Bridge::responded`] is called or
    /// the next byte arrives.
    pub fn feed(&mut self, byte: u8) -> Option<Exchange> {
        let exchange = match self.reader.push(byte) {
            Ok(None) => {
                self.state = BridgeState::AwaitDelimiter;
                return None;
            }
            Ok(Some(frame)) => self.process(&frame),
            Err(e) => Exchange::failed(None, CommandError::MalformedFrame(e)),
        };
        self.state = BridgeState::Respond;
        self.stats.record(&exchange);
        Some(exchange)
    }

    /// Mark the last exchange as written
    pub fn responded(&mut self) {
        if self.state == BridgeState::Respond {
            self.state = BridgeState::AwaitOpcode;
        }
    }

    /// Read one request, answer it and return what happened
    ///
    /// Blocks on `rx` until a full request has arrived, then writes the
    /// whole response to `tx` in one call.
    pub fn serve_once<R: UartRx, W: UartTx>(
        &mut self,
        rx: &mut R,
        tx: &mut W,
    ) -> Result<Exchange, LinkError<R::Error, W::Error>> {
        loop {
            let byte = rx.read_byte().map_err(LinkError::Read)?;
            let Some(exchange) = self.feed(byte) else {
                continue;
            };

            if !exchange.bytes().is_empty() {
                tx.write_blocking(exchange.bytes()).map_err(LinkError::Write)?;
                tx.flush().map_err(LinkError::Write)?;
            }
            self.responded();
            return Ok(exchange);
        }
    }

    fn process(&mut self, frame: &Frame) -> Exchange {
        self.state = BridgeState::Dispatch;
        let opcode = frame.opcode;

        let result = frame
            .payload_str()
            .map_err(CommandError::from)
            .and_then(|payload| Command::parse(opcode, payload).map_err(CommandError::from))
            .and_then(|command| self.dispatcher.execute(&command));

        match result.and_then(|reply| encode(&reply)) {
            Ok(Some(wire)) => Exchange::replied(opcode, wire),
            Ok(None) => Exchange::silent(opcode),
            Err(e) => Exchange::failed(Some(opcode), e),
        }
    }
}

/// Render a reply; `None` means write nothing
fn encode(reply: &Reply) -> Result<Option<Vec<u8, MAX_RESPONSE_SIZE>>, CommandError> {
    match reply {
        Reply::Silent => Ok(None),
        Reply::Value(value) => Ok(Some(encode_value(value)?)),
    }
}

fn encode_value(value: &Value) -> Result<Vec<u8, MAX_RESPONSE_SIZE>, CommandError> {
    let mut text: String<MAX_TEXT_LEN> = String::new();
    write!(text, "{}", value).map_err(|_| FrameError::BufferTooSmall)?;
    Ok(Response::Success(&text).encode_to_vec()?)
}
