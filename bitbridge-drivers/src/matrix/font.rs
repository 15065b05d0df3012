//! 5×5 glyphs for printable ASCII
//!
//! Each glyph is five rows, top first. Bit 4 of a row is the leftmost LED.

/// First character in the table
const FIRST: u32 = 0x20;

/// Shown for characters outside printable ASCII
const UNKNOWN: [u8; 5] = [0x0E, 0x11, 0x02, 0x00, 0x04];

const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x00, 0x04], // '!'
    [0x0A, 0x0A, 0x00, 0x00, 0x00], // '"'
    [0x0A, 0x1F, 0x0A, 0x1F, 0x0A], // '#'
    [0x0F, 0x14, 0x0E, 0x05, 0x1E], // '$'
    [0x19, 0x1A, 0x04, 0x0B, 0x13], // '%'
    [0x0C, 0x12, 0x0C, 0x12, 0x0D], // '&'
    [0x04, 0x04, 0x00, 0x00, 0x00], // '\''
    [0x02, 0x04, 0x04, 0x04, 0x02], // '('
    [0x08, 0x04, 0x04, 0x04, 0x08], // ')'
    [0x00, 0x0A, 0x04, 0x0A, 0x00], // '*'
    [0x00, 0x04, 0x0E, 0x04, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x04, 0x08], // ','
    [0x00, 0x00, 0x0E, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x04], // '.'
    [0x01, 0x02, 0x04, 0x08, 0x10], // '/'
    [0x0C, 0x12, 0x12, 0x12, 0x0C], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x0E], // '1'
    [0x1C, 0x02, 0x0C, 0x10, 0x1E], // '2'
    [0x1E, 0x02, 0x04, 0x12, 0x0C], // '3'
    [0x06, 0x0A, 0x12, 0x1F, 0x02], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x1E], // '5'
    [0x02, 0x04, 0x0E, 0x11, 0x0E], // '6'
    [0x1F, 0x02, 0x04, 0x08, 0x10], // '7'
    [0x0E, 0x11, 0x0E, 0x11, 0x0E], // '8'
    [0x0E, 0x11, 0x0E, 0x04, 0x08], // '9'
    [0x00, 0x04, 0x00, 0x04, 0x00], // ':'
    [0x00, 0x04, 0x00, 0x04, 0x08], // ';'
    [0x02, 0x04, 0x08, 0x04, 0x02], // '<'
    [0x00, 0x0E, 0x00, 0x0E, 0x00], // '='
    [0x08, 0x04, 0x02, 0x04, 0x08], // '>'
    [0x0E, 0x02, 0x04, 0x00, 0x04], // '?'
    [0x0E, 0x11, 0x15, 0x16, 0x0C], // '@'
    [0x0C, 0x12, 0x1E, 0x12, 0x12], // 'A'
    [0x1C, 0x12, 0x1C, 0x12, 0x1C], // 'B'
    [0x0E, 0x10, 0x10, 0x10, 0x0E], // 'C'
    [0x1C, 0x12, 0x12, 0x12, 0x1C], // 'D'
    [0x1E, 0x10, 0x1C, 0x10, 0x1E], // 'E'
    [0x1E, 0x10, 0x1C, 0x10, 0x10], // 'F'
    [0x0E, 0x10, 0x16, 0x12, 0x0C], // 'G'
    [0x12, 0x12, 0x1E, 0x12, 0x12], // 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x0E], // 'I'
    [0x0E, 0x02, 0x02, 0x12, 0x0C], // 'J'
    [0x12, 0x14, 0x18, 0x14, 0x12], // 'K'
    [0x10, 0x10, 0x10, 0x10, 0x1E], // 'L'
    [0x11, 0x1B, 0x15, 0x11, 0x11], // 'M'
    [0x11, 0x19, 0x15, 0x13, 0x11], // 'N'
    [0x0C, 0x12, 0x12, 0x12, 0x0C], // 'O'
    [0x1C, 0x12, 0x1C, 0x10, 0x10], // 'P'
    [0x0C, 0x12, 0x12, 0x0C, 0x02], // 'Q'
    [0x1C, 0x12, 0x1C, 0x14, 0x12], // 'R'
    [0x0E, 0x10, 0x0C, 0x02, 0x1C], // 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04], // 'T'
    [0x12, 0x12, 0x12, 0x12, 0x0C], // 'U'
    [0x11, 0x11, 0x11, 0x0A, 0x04], // 'V'
    [0x11, 0x11, 0x15, 0x1B, 0x11], // 'W'
    [0x12, 0x12, 0x0C, 0x12, 0x12], // 'X'
    [0x11, 0x0A, 0x04, 0x04, 0x04], // 'Y'
    [0x1E, 0x04, 0x08, 0x10, 0x1E], // 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x0E], // '['
    [0x10, 0x08, 0x04, 0x02, 0x01], // '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x0E], // ']'
    [0x04, 0x0A, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x1F], // '_'
    [0x08, 0x04, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x0E, 0x12, 0x12, 0x0F], // 'a'
    [0x10, 0x10, 0x1C, 0x12, 0x1C], // 'b'
    [0x00, 0x0E, 0x10, 0x10, 0x0E], // 'c'
    [0x02, 0x02, 0x0E, 0x12, 0x0E], // 'd'
    [0x0C, 0x12, 0x1C, 0x10, 0x0E], // 'e'
    [0x06, 0x08, 0x1C, 0x08, 0x08], // 'f'
    [0x0E, 0x12, 0x0E, 0x02, 0x0C], // 'g'
    [0x10, 0x10, 0x1C, 0x12, 0x12], // 'h'
    [0x08, 0x00, 0x08, 0x08, 0x08], // 'i'
    [0x02, 0x00, 0x02, 0x12, 0x0C], // 'j'
    [0x10, 0x14, 0x18, 0x14, 0x12], // 'k'
    [0x08, 0x08, 0x08, 0x08, 0x06], // 'l'
    [0x00, 0x1A, 0x15, 0x11, 0x11], // 'm'
    [0x00, 0x1C, 0x12, 0x12, 0x12], // 'n'
    [0x00, 0x0C, 0x12, 0x12, 0x0C], // 'o'
    [0x00, 0x1C, 0x12, 0x1C, 0x10], // 'p'
    [0x00, 0x0E, 0x12, 0x0E, 0x02], // 'q'
    [0x00, 0x0E, 0x10, 0x10, 0x10], // 'r'
    [0x00, 0x06, 0x08, 0x04, 0x18], // 's'
    [0x08, 0x1E, 0x08, 0x08, 0x06], // 't'
    [0x00, 0x12, 0x12, 0x12, 0x0E], // 'u'
    [0x00, 0x11, 0x11, 0x0A, 0x04], // 'v'
    [0x00, 0x11, 0x15, 0x15, 0x0A], // 'w'
    [0x00, 0x12, 0x0C, 0x0C, 0x12], // 'x'
    [0x00, 0x11, 0x0A, 0x04, 0x18], // 'y'
    [0x00, 0x1E, 0x04, 0x08, 0x1E], // 'z'
    [0x06, 0x04, 0x0C, 0x04, 0x06], // '{'
    [0x04, 0x04, 0x04, 0x04, 0x04], // '|'
    [0x0C, 0x04, 0x06, 0x04, 0x0C], // '}'
    [0x00, 0x02, 0x1F, 0x08, 0x00], // '~'
];

/// Glyph rows for a character
pub fn glyph(c: char) -> [u8; 5] {
    let index = (c as u32).wrapping_sub(FIRST) as usize;
    GLYPHS.get(index).copied().unwrap_or(UNKNOWN)
}

/// Whether glyph row `row` lights column `x`
pub fn is_lit(rows: &[u8; 5], x: usize, row: usize) -> bool {
    x < 5 && row < 5 && rows[row] & (0x10 >> x) != 0
}
