//! SSD1306 OLED Driver
//!
//! Writes straight into the controller's page/column addressed RAM through
//! an [`I2cMaster`]. No frame buffer is kept and the display is never read
//! back; the cursor lives only in the controller.

use tinyoled_hal::I2cMaster;

use crate::command::{cmd, cursor_commands, InitSequence, COMMAND_MODE, DATA_MODE};
use crate::config::{ConfigError, PanelConfig};
use crate::font::{Font, ScreenBuffer};
use crate::DISPLAY_ADDRESS;

/// Driver life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// `init` has not run yet
    Uninitialized,
    /// Idle between frames
    Ready,
    /// A data frame is open
    Transmitting,
}

/// SSD1306 OLED driver
pub struct Oled<M, F> {
    bus: M,
    font: F,
    config: PanelConfig,
    state: DriverState,
}

impl<M: I2cMaster, F: Font> Oled<M, F> {
    /// Create a new driver; nothing is sent until [`Oled::init`]
    pub fn new(bus: M, font: F, config: PanelConfig) -> Self {
        Self {
            bus,
            font,
            config,
            state: DriverState::Uninitialized,
        }
    }

    /// Like [`Oled::new`], rejecting panel geometry the controller can't drive
    pub fn try_new(bus: M, font: F, config: PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(bus, font, config))
    }

    /// Initialize the transport and the display
    pub fn init(&mut self) {
        let seq = InitSequence::for_panel(&self.config);

        #[cfg(feature = "defmt")]
        defmt::debug!("oled init: {} ({} command bytes)", self.config, seq.len());

        self.bus.init();
        self.send_commands(seq.as_bytes());
        self.state = DriverState::Ready;
    }

    /// Send raw command bytes in one frame
    pub fn send_commands(&mut self, commands: &[u8]) {
        self.bus.start(DISPLAY_ADDRESS);
        self.bus.write(COMMAND_MODE);
        self.bus.write_all(commands);
        self.bus.stop();
    }

    /// Move the RAM pointer to a column (0-127) and page (0-7)
    ///
    /// Values are not checked; the page is masked to three bits.
    pub fn set_cursor(&mut self, column: u8, page: u8) {
        self.send_commands(&cursor_commands(column, page));
    }

    /// Zero the whole active window
    ///
    /// Relies on the auto-increment wrapping back to the start of the
    /// window, so the cursor ends up at (0, 0) again.
    pub fn clear(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("oled clear: {} bytes", self.config.clear_len());

        let len = self.config.clear_len();
        self.set_cursor(0, 0);
        self.data_frame().fill(0x00, len);
        if self.config.reset_shift_on_clear {
            self.set_vertical_shift(0);
        }
    }

    /// Shift the picture up by `offset` rows (0 to height - 1)
    pub fn set_vertical_shift(&mut self, offset: u8) {
        self.send_commands(&[cmd::SET_DISPLAY_OFFSET, offset]);
    }

    /// Print a string at the cursor in one frame
    ///
    /// Bytes outside the font's range render as some other glyph.
    pub fn print_str(&mut self, text: &str) {
        self.print_codes(text.as_bytes());
    }

    /// Print raw character codes at the cursor in one frame
    pub fn print_codes(&mut self, codes: &[u8]) {
        let mut frame = self.data_frame();
        for &code in codes {
            frame.print_char(code);
        }
    }

    /// Print a screen buffer of glyph indices in one frame
    pub fn print_buffer(&mut self, buffer: &ScreenBuffer) {
        self.print_codes(buffer);
    }

    /// Open a data frame
    ///
    /// Characters and raw bytes written through the returned frame land at
    /// the cursor. STOP is sent when the frame is dropped.
    pub fn data_frame(&mut self) -> DataFrame<'_, M, F> {
        #[cfg(feature = "defmt")]
        defmt::trace!("oled data frame open");

        self.bus.start(DISPLAY_ADDRESS);
        self.bus.write(DATA_MODE);
        let resume = self.state;
        self.state = DriverState::Transmitting;
        DataFrame { oled: self, resume }
    }

    /// Set contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) {
        self.send_commands(&[cmd::SET_CONTRAST, contrast]);
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) {
        let command = if on {
            cmd::DISPLAY_ON
        } else {
            cmd::DISPLAY_OFF
        };
        self.send_commands(&[command]);
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) {
        let command = if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        };
        self.send_commands(&[command]);
    }

    /// Current life cycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Whether `init` has run
    pub fn is_ready(&self) -> bool {
        self.state != DriverState::Uninitialized
    }

    /// Panel configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Give the transport back
    pub fn free(self) -> M {
        self.bus
    }
}

/// An open data-mode frame
///
/// Holding the frame borrows the driver, so no other frame can start until
/// this one has sent STOP.
pub struct DataFrame<'a, M: I2cMaster, F: Font> {
    oled: &'a mut Oled<M, F>,
    /// State to return to after STOP
    resume: DriverState,
}

impl<M: I2cMaster, F: Font> DataFrame<'_, M, F> {
    /// Render one character with its spacing
    pub fn print_char(&mut self, code: u8) {
        let oled = &mut *self.oled;
        oled.font.draw(code, &mut oled.bus);
    }

    /// Render a string
    pub fn print_str(&mut self, text: &str) {
        for &code in text.as_bytes() {
            self.print_char(code);
        }
    }

    /// Write pixel bytes verbatim
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.oled.bus.write_all(bytes);
    }

    /// Write the same byte `count` times
    pub fn fill(&mut self, byte: u8, count: u16) {
        for _ in 0..count {
            self.oled.bus.write(byte);
        }
    }

    /// Send STOP now
    pub fn finish(self) {}
}

impl<M: I2cMaster, F: Font> Drop for DataFrame<'_, M, F> {
    fn drop(&mut self) {
        self.oled.bus.stop();
        self.oled.state = self.resume;

        #[cfg(feature = "defmt")]
        defmt::trace!("oled data frame closed");
    }
}
