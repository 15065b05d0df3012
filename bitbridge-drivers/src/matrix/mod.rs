//! 5×5 LED matrix
//!
//! [`LedMatrix`] is the framebuffer and text scroller; it never touches a
//! pin. [`MatrixScanner`] multiplexes a framebuffer onto row and column
//! GPIOs one row at a time. A board usually keeps the matrix behind a mutex,
//! writes to it from the command loop and scans it from a periodic task:
//!
//! ```ignore
//! // Every SCAN_INTERVAL_US
//! matrix.lock(|m| scanner.step(&m.borrow()));
//!
//! // Every SCROLL_INTERVAL_MS
//! matrix.lock(|m| m.borrow_mut().tick());
//! ```
//!
//! Brightness is done by splitting each row's on-time into
//! `SUBFRAMES` slices; an LED at level `n` is lit for `n` of them.

mod font;
mod scanner;

pub use scanner::{MatrixScanner, SCAN_INTERVAL_US};

use bitbridge_core::traits::{CapabilityError, MatrixDisplay, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use bitbridge_protocol::{Image, MAX_BRIGHTNESS, MAX_PAYLOAD_SIZE};
use heapless::String;

const WIDTH: usize = DISPLAY_WIDTH as usize;
const HEIGHT: usize = DISPLAY_HEIGHT as usize;

/// PWM slices per row, one per brightness step
pub const SUBFRAMES: u8 = MAX_BRIGHTNESS;

/// Time between scroll steps
pub const SCROLL_INTERVAL_MS: u64 = 150;

/// Longest text that can be scrolled
pub const MAX_SCROLL_LEN: usize = MAX_PAYLOAD_SIZE;

/// Columns per character while scrolling (glyph plus one blank)
const CHAR_PITCH: usize = WIDTH + 1;

#[derive(Debug, Clone)]
struct Scroll {
    text: String<MAX_SCROLL_LEN>,
    /// Chars in `text`
    len: usize,
    /// Columns scrolled so far
    offset: usize,
}

impl Scroll {
    /// Columns from first entering on the right to last leaving on the left
    fn span(&self) -> usize {
        WIDTH + self.len * CHAR_PITCH
    }

    /// Whether virtual column `v` row `y` is lit; column 0 is the right edge at start
    fn is_lit(&self, v: usize, y: usize) -> bool {
        let Some(v) = v.checked_sub(WIDTH) else {
            return false;
        };
        let (index, x) = (v / CHAR_PITCH, v % CHAR_PITCH);
        match self.text.chars().nth(index) {
            Some(c) if x < WIDTH => font::is_lit(&font::glyph(c), x, y),
            _ => false,
        }
    }
}

/// Framebuffer for a 5×5 matrix with brightness 0-9
#[derive(Debug, Clone)]
pub struct LedMatrix {
    pixels: [[u8; WIDTH]; HEIGHT],
    enabled: bool,
    scroll: Option<Scroll>,
}

impl Default for LedMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl LedMatrix {
    /// A dark, enabled matrix
    pub const fn new() -> Self {
        Self {
            pixels: [[0; WIDTH]; HEIGHT],
            enabled: true,
            scroll: None,
        }
    }

    /// Whether text is still moving across the screen
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Advance a running scroll by one column
    pub fn tick(&mut self) {
        let Some(scroll) = self.scroll.as_mut() else {
            return;
        };

        scroll.offset += 1;
        if scroll.offset > scroll.span() {
            self.scroll = None;
            self.pixels = [[0; WIDTH]; HEIGHT];
            return;
        }

        let mut pixels = [[0; WIDTH]; HEIGHT];
        for (y, row) in pixels.iter_mut().enumerate() {
            for (x, level) in row.iter_mut().enumerate() {
                if scroll.is_lit(scroll.offset + x, y) {
                    *level = MAX_BRIGHTNESS;
                }
            }
        }
        self.pixels = pixels;
    }

    /// Brightness of every LED in a row
    pub fn row_levels(&self, row: usize) -> [u8; WIDTH] {
        self.pixels.get(row).copied().unwrap_or([0; WIDTH])
    }

    /// Columns lit during one PWM slice of a row; bit `x` is column `x`
    pub fn row_mask(&self, row: usize, subframe: u8) -> u8 {
        if !self.enabled {
            return 0;
        }
        self.row_levels(row)
            .iter()
            .enumerate()
            .filter(|(_, level)| **level > subframe)
            .fold(0, |mask, (x, _)| mask | (1 << x))
    }

    fn stop_scroll(&mut self) {
        self.scroll = None;
    }

    fn check(x: u8, y: u8) -> Result<(usize, usize), CapabilityError> {
        let (x, y) = (x as usize, y as usize);
        if x < WIDTH && y < HEIGHT {
            Ok((x, y))
        } else {
            Err(CapabilityError::InvalidArgument)
        }
    }
}

impl MatrixDisplay for LedMatrix {
    fn show_char(&mut self, c: char) -> Result<(), CapabilityError> {
        self.stop_scroll();
        let rows = font::glyph(c);
        for (y, row) in self.pixels.iter_mut().enumerate() {
            for (x, level) in row.iter_mut().enumerate() {
                *level = if font::is_lit(&rows, x, y) { MAX_BRIGHTNESS } else { 0 };
            }
        }
        Ok(())
    }

    fn scroll(&mut self, text: &str) -> Result<(), CapabilityError> {
        self.clear()?;
        if text.is_empty() {
            return Ok(());
        }

        let mut owned = String::new();
        owned
            .push_str(text)
            .map_err(|_| CapabilityError::InvalidArgument)?;
        self.scroll = Some(Scroll {
            len: owned.chars().count(),
            text: owned,
            offset: 0,
        });
        Ok(())
    }

    fn show_image(&mut self, image: &Image) -> Result<(), CapabilityError> {
        self.stop_scroll();
        for (y, row) in self.pixels.iter_mut().enumerate() {
            for (x, level) in row.iter_mut().enumerate() {
                *level = image.pixel(x as u8, y as u8);
            }
        }
        Ok(())
    }

    fn get_pixel(&self, x: u8, y: u8) -> Result<u8, CapabilityError> {
        let (x, y) = Self::check(x, y)?;
        Ok(self.pixels[y][x])
    }

    fn set_pixel(&mut self, x: u8, y: u8, level: u8) -> Result<(), CapabilityError> {
        let (x, y) = Self::check(x, y)?;
        if level > MAX_BRIGHTNESS {
            return Err(CapabilityError::InvalidArgument);
        }
        self.stop_scroll();
        self.pixels[y][x] = level;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CapabilityError> {
        self.stop_scroll();
        self.pixels = [[0; WIDTH]; HEIGHT];
        Ok(())
    }

    fn set_enabled(&mut self, on: bool) -> Result<(), CapabilityError> {
        self.enabled = on;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn read_light_level(&mut self) -> Result<u8, CapabilityError> {
        Err(CapabilityError::Unsupported)
    }
}
