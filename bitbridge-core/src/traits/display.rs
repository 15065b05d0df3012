//! LED matrix display trait

use bitbridge_protocol::Image;

use super::CapabilityError;

/// Matrix width in LEDs
pub const DISPLAY_WIDTH: u8 = 5;

/// Matrix height in LEDs
pub const DISPLAY_HEIGHT: u8 = 5;

/// A 5×5 LED matrix with 10 brightness levels (0-9)
///
/// Implementations own the framebuffer; refreshing the LEDs is their
/// business. Pixel coordinates outside the matrix are `InvalidArgument`.
pub trait MatrixDisplay {
    /// Show a single character, replacing whatever is on screen
    fn show_char(&mut self, c: char) -> Result<(), CapabilityError>;

    /// Start scrolling text across the screen
    ///
    /// Returns once the scroll has been queued; it does not wait for the
    /// text to finish moving. Empty text clears the screen.
    fn scroll(&mut self, text: &str) -> Result<(), CapabilityError>;

    /// Show an image anchored at the top-left corner
    fn show_image(&mut self, image: &Image) -> Result<(), CapabilityError>;

    /// Read one pixel's brightness
    fn get_pixel(&self, x: u8, y: u8) -> Result<u8, CapabilityError>;

    /// Set one pixel's brightness
    fn set_pixel(&mut self, x: u8, y: u8, level: u8) -> Result<(), CapabilityError>;

    /// Turn every pixel off and stop any scroll
    fn clear(&mut self) -> Result<(), CapabilityError>;

    /// Switch the LED drive on or off; the framebuffer is kept
    fn set_enabled(&mut self, on: bool) -> Result<(), CapabilityError>;

    /// Whether the LED drive is on
    fn is_enabled(&self) -> bool;

    /// Ambient light level (0-255) sensed through the matrix
    fn read_light_level(&mut self) -> Result<u8, CapabilityError>;
}

/// Helper for the text opcode
pub trait DisplayExt: MatrixDisplay {
    /// Show one character as a glyph, scroll anything else
    fn show_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.show_char(c),
            _ => self.scroll(text),
        }
    }
}

impl<T: MatrixDisplay + ?Sized> DisplayExt for T {}
