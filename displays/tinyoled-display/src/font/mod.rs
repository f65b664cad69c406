//! Fonts
//!
//! A font turns one character code into the column bytes written at the
//! RAM pointer, spacing included. Fonts are fixed tables; nothing is ever
//! mutated at runtime.

mod ascii;
mod big_digit;

use tinyoled_hal::I2cMaster;

pub use ascii::{Ascii5x8, FIRST_CHAR, FONT_5X8, LAST_CHAR};
pub use big_digit::{
    stretch, stretch_column, BigDigits, ScreenBuffer, BLANK, COLON, DASH, DECIMAL_POINT,
    DIGIT_BYTES, SEED_FONT, SLOTS,
};

/// Glyph renderer
pub trait Font {
    /// Stream the spacing and glyph bytes for `code` into an open data frame
    ///
    /// Codes outside the table produce some other glyph from the table;
    /// they are never rejected.
    fn draw<M: I2cMaster + ?Sized>(&self, code: u8, bus: &mut M);
}
