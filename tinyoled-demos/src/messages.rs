//! Text demo
//!
//! Two messages, then every printable character, then the picture is
//! scrolled up out of the window and the screen cleared.

use embedded_hal::delay::DelayNs;
use tinyoled_display::font::{FIRST_CHAR, LAST_CHAR};
use tinyoled_display::{Ascii5x8, Font, Oled};
use tinyoled_hal::I2cMaster;

/// First message, printed on page 0
pub const MESSAGE_1: &str = "HELLO WORLD !";

/// Second message, printed on page 2
pub const MESSAGE_2: &str = "ATTINY13 GOES OLED !";

/// Milliseconds between two scroll steps
const SCROLL_STEP_MS: u32 = 100;

/// Scroll the picture up one row at a time until it has left the window
///
/// Leaves the shift at `height - 1`; the caller resets it.
pub fn scroll_out<M, F, D>(oled: &mut Oled<M, F>, delay: &mut D)
where
    M: I2cMaster,
    F: Font,
    D: DelayNs,
{
    for offset in 0..oled.config().height {
        oled.set_vertical_shift(offset);
        delay.delay_ms(SCROLL_STEP_MS);
    }
}

/// Print every character of the font from the cursor on, in one frame
pub fn print_charset<M: I2cMaster>(oled: &mut Oled<M, Ascii5x8>) {
    let mut frame = oled.data_frame();
    for code in FIRST_CHAR..=LAST_CHAR {
        frame.print_char(code);
    }
}

/// One pass of the demo loop
pub fn run_once<M, D>(oled: &mut Oled<M, Ascii5x8>, delay: &mut D)
where
    M: I2cMaster,
    D: DelayNs,
{
    oled.set_cursor(20, 0);
    oled.print_str(MESSAGE_1);
    delay.delay_ms(1000);
    oled.set_cursor(5, 2);
    oled.print_str(MESSAGE_2);
    delay.delay_ms(5000);

    oled.set_cursor(0, 0);
    print_charset(oled);
    delay.delay_ms(5000);

    scroll_out(oled, delay);
    oled.clear();
    if !oled.config().reset_shift_on_clear {
        oled.set_vertical_shift(0);
    }
}

/// Initialize the display and loop the demo forever
pub fn run<M, D>(oled: &mut Oled<M, Ascii5x8>, delay: &mut D) -> !
where
    M: I2cMaster,
    D: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::info!("text demo starting");

    oled.init();
    oled.clear();
    loop {
        run_once(oled, delay);
    }
}
