//! Standard 5x8 ASCII font, printable range 32..=95
//!
//! Each glyph is five column bytes, bit 0 at the top. A zero column is sent
//! before every glyph as spacing, so a character is 6 pixels wide.

use tinyoled_hal::I2cMaster;

use super::Font;

/// First code in the table (space)
pub const FIRST_CHAR: u8 = 32;

/// Last code in the table (underscore)
pub const LAST_CHAR: u8 = 95;

/// 5x8 glyphs adapted from the Tiny4kOLED font by Neven Boyanov and Stephen Denne
pub const FONT_5X8: [[u8; 5]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // (space)
    [0x00, 0x00, 0x2F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x62, 0x64, 0x08, 0x13, 0x23], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x00, 0xA0, 0x60, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x59, 0x51, 0x3E], // @
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
];

/// The 5x8 ASCII font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ascii5x8;

impl Ascii5x8 {
    /// Glyph columns for a character code
    ///
    /// Codes outside 32..=95 wrap around the table.
    pub fn glyph(code: u8) -> &'static [u8; 5] {
        let index = code.wrapping_sub(FIRST_CHAR) as usize % FONT_5X8.len();
        &FONT_5X8[index]
    }
}

impl Font for Ascii5x8 {
    fn draw<M: I2cMaster + ?Sized>(&self, code: u8, bus: &mut M) {
        bus.write(0x00);
        bus.write_all(Self::glyph(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, RecordingBus};

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(Ascii5x8::glyph(b'A'), &[0x7C, 0x12, 0x11, 0x12, 0x7C]);
        assert_eq!(Ascii5x8::glyph(b' '), &[0x00; 5]);
        assert_eq!(Ascii5x8::glyph(LAST_CHAR), &[0x40; 5]);
    }

    #[test]
    fn test_out_of_range_wraps() {
        // 'a' (97) lands one glyph past the start of the table
        assert_eq!(Ascii5x8::glyph(b'a'), Ascii5x8::glyph(b'!'));
        // Control codes wrap backwards from the end
        assert_eq!(Ascii5x8::glyph(31), Ascii5x8::glyph(LAST_CHAR));
    }

    #[test]
    fn test_draw_writes_spacing_then_glyph() {
        let mut bus = RecordingBus::new();
        Ascii5x8.draw(b'A', &mut bus);

        assert_eq!(
            bus.events,
            [
                Event::Byte(0x00),
                Event::Byte(0x7C),
                Event::Byte(0x12),
                Event::Byte(0x11),
                Event::Byte(0x12),
                Event::Byte(0x7C),
            ]
        );
    }
}
