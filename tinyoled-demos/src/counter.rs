//! Hexadecimal counter in big digits
//!
//! A 24-bit counter split into three bytes, shown as `HH:HH.HH` with the
//! lowest byte on the right. The colon blinks with one bit of the lowest
//! byte, so its rate follows how fast the loop runs on the target.

use tinyoled_display::font::{BLANK, COLON, DECIMAL_POINT};
use tinyoled_display::{BigDigits, Oled, ScreenBuffer};
use tinyoled_hal::I2cMaster;

/// Bit of the lowest counter byte that drives the colon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColonBlink {
    /// Bit 3, for a 1.2 MHz core
    Slow,
    /// Bit 5, for a 4 MHz core
    Fast,
}

impl ColonBlink {
    const fn mask(self) -> u8 {
        match self {
            Self::Slow => 1 << 3,
            Self::Fast => 1 << 5,
        }
    }
}

/// Counter state and the screen buffer it renders to
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexCounter {
    low: u8,
    mid: u8,
    high: u8,
    blink: ColonBlink,
    buffer: ScreenBuffer,
}

impl HexCounter {
    pub const fn new(blink: ColonBlink) -> Self {
        Self {
            low: 0,
            mid: 0,
            high: 0,
            blink,
            buffer: [0, 0, COLON, 0, 0, DECIMAL_POINT, 0, 0],
        }
    }

    /// Current 24-bit value
    pub fn value(&self) -> u32 {
        u32::from(self.high) << 16 | u32::from(self.mid) << 8 | u32::from(self.low)
    }

    /// Glyph indices as they will be printed
    pub fn buffer(&self) -> &ScreenBuffer {
        &self.buffer
    }

    /// Count one step, carrying into the upper bytes, and refresh the buffer
    pub fn tick(&mut self) {
        self.low = self.low.wrapping_add(1);
        if self.low == 0 {
            self.mid = self.mid.wrapping_add(1);
            if self.mid == 0 {
                self.high = self.high.wrapping_add(1);
            }
        }

        self.buffer[7] = self.low & 0x0F;
        self.buffer[6] = self.low >> 4;
        self.buffer[4] = self.mid & 0x0F;
        self.buffer[3] = self.mid >> 4;
        self.buffer[1] = self.high & 0x0F;
        self.buffer[0] = self.high >> 4;
        self.buffer[2] = if self.low & self.blink.mask() != 0 {
            COLON
        } else {
            BLANK
        };
    }

    /// Print the buffer in one frame
    pub fn render<M: I2cMaster>(&self, oled: &mut Oled<M, BigDigits>) {
        oled.print_buffer(&self.buffer);
    }
}

/// Initialize the display and count forever
pub fn run<M: I2cMaster>(oled: &mut Oled<M, BigDigits>, blink: ColonBlink) -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("counter demo starting, colon {}", blink);

    oled.init();
    let mut counter = HexCounter::new(blink);
    loop {
        counter.render(oled);
        counter.tick();
    }
}
