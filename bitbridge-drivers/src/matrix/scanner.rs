//! Row-multiplexed matrix refresh

use bitbridge_hal::OutputPin;

use super::{LedMatrix, HEIGHT, SUBFRAMES, WIDTH};

/// Time each row is lit per step
pub const SCAN_INTERVAL_US: u64 = 200;

/// Drives a matrix with one anode per row and one cathode per column
///
/// Rows are active high, columns active low: an LED is lit while its row is
/// high and its column is low. Each [`step`](Self::step) lights the next row
/// for one PWM slice, so a full refresh of every brightness level takes
/// `5 * SUBFRAMES` steps.
pub struct MatrixScanner<R, C> {
    rows: [R; HEIGHT],
    cols: [C; WIDTH],
    row: usize,
    subframe: u8,
}

impl<R: OutputPin, C: OutputPin> MatrixScanner<R, C> {
    /// Take the pins and switch every LED off
    pub fn new(rows: [R; HEIGHT], cols: [C; WIDTH]) -> Self {
        let mut scanner = Self {
            rows,
            cols,
            row: HEIGHT - 1,
            subframe: SUBFRAMES - 1,
        };
        scanner.blank();
        scanner
    }

    /// Switch every LED off
    pub fn blank(&mut self) {
        for row in self.rows.iter_mut() {
            row.set_low();
        }
        for col in self.cols.iter_mut() {
            col.set_high();
        }
    }

    /// Light the next row with its current mask
    pub fn step(&mut self, matrix: &LedMatrix) {
        self.rows[self.row].set_low();

        self.row += 1;
        if self.row == HEIGHT {
            self.row = 0;
            self.subframe = (self.subframe + 1) % SUBFRAMES;
        }

        let mask = matrix.row_mask(self.row, self.subframe);
        for (x, col) in self.cols.iter_mut().enumerate() {
            col.set_state(mask & (1 << x) == 0);
        }
        self.rows[self.row].set_high();
    }

    /// Row lit by the last step
    pub fn current_row(&self) -> usize {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitbridge_core::traits::MatrixDisplay;
    use core::cell::Cell;

    struct MockPin<'a> {
        level: &'a Cell<bool>,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.level.set(true);
        }

        fn set_low(&mut self) {
            self.level.set(false);
        }
    }

    fn pins(levels: &[Cell<bool>; 5]) -> [MockPin<'_>; 5] {
        [0, 1, 2, 3, 4].map(|i| MockPin { level: &levels[i] })
    }

    fn high(levels: &[Cell<bool>; 5]) -> [bool; 5] {
        [0, 1, 2, 3, 4].map(|i| levels[i].get())
    }

    #[test]
    fn test_starts_dark() {
        let rows: [Cell<bool>; 5] = Default::default();
        let cols: [Cell<bool>; 5] = Default::default();
        let _scanner = MatrixScanner::new(pins(&rows), pins(&cols));
        assert_eq!(high(&rows), [false; 5]);
        assert_eq!(high(&cols), [true; 5]);
    }

    #[test]
    fn test_one_row_at_a_time() {
        let rows: [Cell<bool>; 5] = Default::default();
        let cols: [Cell<bool>; 5] = Default::default();
        let mut scanner = MatrixScanner::new(pins(&rows), pins(&cols));
        let mut matrix = LedMatrix::new();
        matrix.set_pixel(1, 0, 9).unwrap();
        matrix.set_pixel(3, 2, 9).unwrap();

        scanner.step(&matrix);
        assert_eq!(scanner.current_row(), 0);
        assert_eq!(high(&rows), [true, false, false, false, false]);
        assert_eq!(high(&cols), [true, false, true, true, true]);

        scanner.step(&matrix);
        assert_eq!(high(&rows), [false, true, false, false, false]);
        assert_eq!(high(&cols), [true; 5]);

        scanner.step(&matrix);
        assert_eq!(high(&rows), [false, false, true, false, false]);
        assert_eq!(high(&cols), [true, true, true, false, true]);
    }

    #[test]
    fn test_dim_pixel_skips_later_slices() {
        let rows: [Cell<bool>; 5] = Default::default();
        let cols: [Cell<bool>; 5] = Default::default();
        let mut scanner = MatrixScanner::new(pins(&rows), pins(&cols));
        let mut matrix = LedMatrix::new();
        matrix.set_pixel(0, 0, 1).unwrap();

        let mut lit = 0;
        for _ in 0..HEIGHT * SUBFRAMES as usize {
            scanner.step(&matrix);
            if scanner.current_row() == 0 && !cols[0].get() {
                lit += 1;
            }
        }
        assert_eq!(lit, 1);
    }
}
