//! Board-native image strings
//!
//! An image is written row by row, one brightness digit (`0`-`9`) per LED,
//! rows separated by `:` or a newline:
//!
//! ```text
//! "09090:99999:99999:09990:00900"   (heart)
//! ```
//!
//! A trailing separator is allowed and a space counts as an unlit LED.
//! Short rows are padded with zeros to the width of the longest row.

use crate::payload::CoercionError;

/// Largest width/height an image can have
pub const IMAGE_MAX_DIM: usize = 5;

/// Highest LED brightness
pub const MAX_BRIGHTNESS: u8 = 9;

/// A small brightness bitmap, at most 5×5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Image {
    width: u8,
    height: u8,
    pixels: [[u8; IMAGE_MAX_DIM]; IMAGE_MAX_DIM],
}

impl Default for Image {
    fn default() -> Self {
        Self::empty()
    }
}

impl Image {
    const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: [[0; IMAGE_MAX_DIM]; IMAGE_MAX_DIM],
        }
    }

    /// Parse an image string
    pub fn parse(text: &str) -> Result<Self, CoercionError> {
        let mut image = Self::empty();
        let mut row = 0usize;
        let mut col = 0usize;

        for c in text.chars() {
            match c {
                ':' | '\n' => {
                    row += 1;
                    col = 0;
                }
                ' ' | '0'..='9' => {
                    if row >= IMAGE_MAX_DIM || col >= IMAGE_MAX_DIM {
                        return Err(CoercionError::InvalidImage);
                    }
                    let level = if c == ' ' { 0 } else { c as u8 - b'0' };
                    image.pixels[row][col] = level;
                    col += 1;
                    image.width = image.width.max(col as u8);
                    image.height = image.height.max(row as u8 + 1);
                }
                _ => return Err(CoercionError::InvalidImage),
            }
        }

        Ok(image)
    }

    /// Width in pixels
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Brightness at `(x, y)`; pixels outside the image are dark
    pub fn pixel(&self, x: u8, y: u8) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y as usize][x as usize]
    }
}
