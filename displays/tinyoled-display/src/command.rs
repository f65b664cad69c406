//! SSD1306 command set and init sequence
//!
//! The init sequence is a fixed contract with the controller. Its byte
//! order and length must match the variants below exactly:
//!
//! | Panel preset                | no flip | flip |
//! |-----------------------------|---------|------|
//! | `TEXT_128X32`               | 18      | 20   |
//! | `BIG_DIGITS_128X32`         | 19      | 21   |
//! | `BIG_DIGITS_COMPACT_128X32` | 15      | 17   |

use heapless::Vec;

use crate::config::{InitProfile, PanelConfig};

/// Control byte: the rest of the frame is commands
pub const COMMAND_MODE: u8 = 0x00;

/// Control byte: the rest of the frame is RAM data
pub const DATA_MODE: u8 = 0x40;

/// SSD1306 opcodes and fixed arguments
pub mod cmd {
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_COLUMN_WINDOW: u8 = 0x21;
    pub const SET_PAGE_WINDOW: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_PAGE_START: u8 = 0xB0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;

    pub const CHARGE_PUMP_ON: u8 = 0x14;
    pub const COM_PINS_SEQUENTIAL: u8 = 0x02;
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;
    pub const VCOM_DETECT_DEFAULT: u8 = 0x40;
    pub const PRECHARGE_DEFAULT: u8 = 0xF1;
}

/// Longest possible init sequence
pub const MAX_INIT_LEN: usize = 24;

/// Every command group of [`InitSequence::for_panel`] enabled at once
const WORST_CASE_INIT_LEN: usize = 2 + 3 + 2 + 2 + 2 + 2 + 2 + 2 + 1 + 3 + 2;

const _: () = assert!(WORST_CASE_INIT_LEN <= MAX_INIT_LEN);

/// The three commands that move the RAM pointer to (column, page)
///
/// Inputs are not range checked; the page is masked to three bits as the
/// command encoding requires.
pub const fn cursor_commands(column: u8, page: u8) -> [u8; 3] {
    [
        cmd::SET_LOW_COLUMN | (column & 0x0F),
        cmd::SET_HIGH_COLUMN | (column >> 4),
        cmd::SET_PAGE_START | (page & 0x07),
    ]
}

/// Init command bytes for one panel configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitSequence {
    bytes: Vec<u8, MAX_INIT_LEN>,
}

impl InitSequence {
    /// Build the sequence for a panel
    pub fn for_panel(config: &PanelConfig) -> Self {
        let mut seq = Self { bytes: Vec::new() };

        seq.push(&[cmd::SET_MUX_RATIO, config.height.wrapping_sub(1)]);
        seq.push(&[cmd::SET_PAGE_WINDOW, 0x00, config.pages().wrapping_sub(1)]);
        seq.push(&[cmd::SET_ADDRESSING_MODE, config.addressing.bits()]);
        if config.reset_shift_on_init {
            seq.push(&[cmd::SET_DISPLAY_OFFSET, 0x00]);
        }

        let com_pins = if config.height > 32 {
            cmd::COM_PINS_ALTERNATIVE
        } else {
            cmd::COM_PINS_SEQUENTIAL
        };
        seq.push(&[cmd::SET_COM_PINS, com_pins]);

        if config.profile == InitProfile::Tuned {
            seq.push(&[cmd::SET_VCOM_DETECT, cmd::VCOM_DETECT_DEFAULT]);
            seq.push(&[cmd::SET_PRECHARGE, cmd::PRECHARGE_DEFAULT]);
        }

        seq.push(&[cmd::SET_CHARGE_PUMP, cmd::CHARGE_PUMP_ON]);
        seq.push(&[cmd::DISPLAY_ON]);

        if config.home_cursor_on_init {
            seq.push(&cursor_commands(0, 0));
        }
        if config.flip {
            seq.push(&[cmd::SET_SEG_REMAP, cmd::SET_COM_SCAN_DEC]);
        }

        seq
    }

    fn push(&mut self, bytes: &[u8]) {
        let pushed = self.bytes.extend_from_slice(bytes);
        debug_assert!(pushed.is_ok(), "init sequence longer than MAX_INIT_LEN");
    }

    /// Command bytes in transmission order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of command bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the sequence is empty (never true for a built sequence)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
