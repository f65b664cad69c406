//! Big digits: a 3x8 seed font stretched to 16x32
//!
//! Meant for vertical addressing on a 4-page panel, where every group of
//! four data bytes fills one 32-pixel column. Each seed column is scaled
//! four times vertically by [`stretch`] and repeated four times
//! horizontally, except the middle column which is repeated six times.
//! Together with two blank columns of spacing a digit is 16 columns wide,
//! so eight digits fill 128 columns.

use tinyoled_hal::I2cMaster;

use super::Font;

/// Decimal point
pub const DECIMAL_POINT: u8 = 16;

/// Colon
pub const COLON: u8 = 17;

/// Dash
pub const DASH: u8 = 18;

/// Blank digit
pub const BLANK: u8 = 19;

/// Digit slots on a 128-column panel
pub const SLOTS: usize = 8;

/// Glyph indices for one screen of big digits, left to right
pub type ScreenBuffer = [u8; SLOTS];

/// Zero bytes written before each digit (two 4-page columns)
const SPACING: usize = 8;

/// Horizontal repeat of the outer seed columns
const REPEAT: usize = 4;

/// Horizontal repeat of the middle seed column
const MIDDLE_REPEAT: usize = 6;

/// Bytes written per digit, spacing included
pub const DIGIT_BYTES: usize = SPACING + (2 * REPEAT + MIDDLE_REPEAT) * 4;

/// Reduced 3x8 seed font: hex digits 0-F, then `.` `:` `-` and blank
pub const SEED_FONT: [[u8; 3]; 20] = [
    [0x7F, 0x41, 0x7F], // 0
    [0x00, 0x00, 0x7F], // 1
    [0x79, 0x49, 0x4F], // 2
    [0x41, 0x49, 0x7F], // 3
    [0x0F, 0x08, 0x7E], // 4
    [0x4F, 0x49, 0x79], // 5
    [0x7F, 0x49, 0x79], // 6
    [0x03, 0x01, 0x7F], // 7
    [0x7F, 0x49, 0x7F], // 8
    [0x4F, 0x49, 0x7F], // 9
    [0x7F, 0x09, 0x7F], // A
    [0x7F, 0x48, 0x78], // b
    [0x7F, 0x41, 0x63], // C
    [0x78, 0x48, 0x7F], // d
    [0x7F, 0x49, 0x41], // E
    [0x7F, 0x09, 0x01], // F
    [0x00, 0x60, 0x00], // .
    [0x00, 0x36, 0x00], // :
    [0x08, 0x08, 0x08], // -
    [0x00, 0x00, 0x00], // (blank)
];

/// Scale the two low bits of `b` by four
///
/// Bit 0 fills output bits 0-3 and bit 1 fills output bits 4-7; all other
/// input bits are ignored. So 0, 1, 2, 3 map to 0x00, 0x0F, 0xF0, 0xFF.
pub const fn stretch(b: u8) -> u8 {
    let mut b = ((b & 2) << 3) | (b & 1);
    b |= b << 1;
    b |= b << 2;
    b
}

/// The four page bytes of one seed column, top page first
pub const fn stretch_column(seed: u8) -> [u8; 4] {
    [
        stretch(seed),
        stretch(seed >> 2),
        stretch(seed >> 4),
        stretch(seed >> 6),
    ]
}

/// The 16x32 big digit font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BigDigits;

impl BigDigits {
    /// Seed columns for a glyph index; indices past 19 wrap around
    pub fn seed(index: u8) -> &'static [u8; 3] {
        &SEED_FONT[index as usize % SEED_FONT.len()]
    }
}

impl Font for BigDigits {
    fn draw<M: I2cMaster + ?Sized>(&self, code: u8, bus: &mut M) {
        for _ in 0..SPACING {
            bus.write(0x00);
        }
        for (i, &seed) in Self::seed(code).iter().enumerate() {
            let column = stretch_column(seed);
            let repeat = if i == 1 { MIDDLE_REPEAT } else { REPEAT };
            for _ in 0..repeat {
                bus.write_all(&column);
            }
        }
    }
}
