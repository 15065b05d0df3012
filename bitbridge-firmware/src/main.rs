//! bitbridge - Serial Command Bridge Firmware
//!
//! Main firmware binary for RP2040 boards. A host sends framed requests
//! over UART0; each one is decoded, run against the board's capabilities
//! and answered with a single response frame.
//!
//! The serve loop blocks in thread mode. Matrix scanning, scrolling and
//! button sampling run on an interrupt-priority executor above it.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::uart::Uart;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bitbridge_core::bridge::Bridge;
use bitbridge_core::dispatch::Dispatcher;
use bitbridge_core::registry::Registry;
use bitbridge_drivers::{Button, MatrixScanner};
use bitbridge_hal_rp2040::uart::to_rp_config;
use bitbridge_hal_rp2040::{
    BlockingUartRx, BlockingUartTx, PwmTone, RpEdgePins, RpInput, RpOutput, RpSystem,
};

use crate::board::PicoBoard;

mod board;
mod config;
mod shared;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit bridge.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../bridge.toml");

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Edge pins and the temperature sensor share the one ADC
static ADC: StaticCell<RefCell<Adc<'static, adc::Blocking>>> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("bitbridge firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);

    // Host link: UART0 on GPIO0 (TX) / GPIO1 (RX)
    let uart = Uart::new_blocking(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        to_rp_config(&config.uart_config()),
    );
    let (tx, rx) = uart.split();
    let mut tx = BlockingUartTx::new(tx);
    let mut rx = BlockingUartRx::new(rx);
    info!("UART initialized at {} baud", config.serial.baudrate);

    // LED matrix: rows on GPIO2-6 (active high), columns on GPIO7-11 (active low)
    let rows = [
        RpOutput::new(Output::new(p.PIN_2, Level::Low)),
        RpOutput::new(Output::new(p.PIN_3, Level::Low)),
        RpOutput::new(Output::new(p.PIN_4, Level::Low)),
        RpOutput::new(Output::new(p.PIN_5, Level::Low)),
        RpOutput::new(Output::new(p.PIN_6, Level::Low)),
    ];
    let cols = [
        RpOutput::new(Output::new(p.PIN_7, Level::High)),
        RpOutput::new(Output::new(p.PIN_8, Level::High)),
        RpOutput::new(Output::new(p.PIN_9, Level::High)),
        RpOutput::new(Output::new(p.PIN_10, Level::High)),
        RpOutput::new(Output::new(p.PIN_11, Level::High)),
    ];
    let scanner = MatrixScanner::new(rows, cols);

    // Buttons A/B on GPIO14/15, switched to ground
    let button_a = Button::new_active_low(RpInput::new(Input::new(p.PIN_14, Pull::Up)));
    let button_b = Button::new_active_low(RpInput::new(Input::new(p.PIN_15, Pull::Up)));

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::matrix_scan_task(scanner)).unwrap();
    spawner.spawn(tasks::scroll_task()).unwrap();
    spawner.spawn(tasks::button_task(button_a, button_b)).unwrap();
    info!("Periodic tasks spawned");

    // Buzzer: PWM slice 3 channel A on GPIO22
    let buzzer = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_22, pwm::Config::default());
    let tone = PwmTone::new(buzzer);

    // Edge pins 0/1/2 on GPIO26/27/28 (ADC0-2)
    let adc: &'static RefCell<Adc<'static, adc::Blocking>> =
        ADC.init(RefCell::new(Adc::new_blocking(p.ADC, adc::Config::default())));
    let pins = RpEdgePins::new(p.PIN_26, p.PIN_27, p.PIN_28, adc);
    let system = RpSystem::new(adc, p.ADC_TEMP_SENSOR);

    let mut board = PicoBoard::new(tone, pins, system);
    board.apply_radio(&config.radio);

    let registry = Registry::standard(&config.pins.exposed).unwrap_or_else(|e| {
        warn!("Registry setup failed: {:?}, exposing no pins", e);
        Registry::standard(&[]).unwrap_or_default()
    });
    info!("Registry ready with {} entries", registry.len());

    let mut bridge = Bridge::new(Dispatcher::new(board, registry));
    info!("Bridge ready");

    loop {
        match bridge.serve_once(&mut rx, &mut tx) {
            Ok(exchange) => match exchange.error() {
                Some(e) => warn!("Request {:?} failed: {:?}", exchange.opcode(), e.kind()),
                None => trace!("Request {:?} -> {:?}", exchange.opcode(), exchange.outcome()),
            },
            Err(e) => {
                warn!("UART link error: {:?}", e);
                bridge.reset();
            }
        }
    }
}
