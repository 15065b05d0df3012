//! Blocking UART halves for the host link
//!
//! The bridge answers one request at a time, so the link runs on the
//! blocking embassy-rp driver with no interrupt handler bound.

use bitbridge_hal::{DataBits, Parity, StopBits, UartConfig};
use embassy_rp::uart::{self, Blocking};

/// Transmit half of UART0/UART1
pub struct BlockingUartTx<'d>(uart::UartTx<'d, Blocking>);

/// Receive half of UART0/UART1
pub struct BlockingUartRx<'d>(uart::UartRx<'d, Blocking>);

impl<'d> BlockingUartTx<'d> {
    pub fn new(tx: uart::UartTx<'d, Blocking>) -> Self {
        Self(tx)
    }
}

impl<'d> BlockingUartRx<'d> {
    pub fn new(rx: uart::UartRx<'d, Blocking>) -> Self {
        Self(rx)
    }
}

impl bitbridge_hal::UartTx for BlockingUartTx<'_> {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.blocking_flush()
    }
}

impl bitbridge_hal::UartRx for BlockingUartRx<'_> {
    type Error = uart::Error;

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.blocking_read(buf)
    }
}

/// Translate link settings into the embassy-rp driver config
pub fn to_rp_config(config: &UartConfig) -> uart::Config {
    let mut rp = uart::Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    rp.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    rp
}
