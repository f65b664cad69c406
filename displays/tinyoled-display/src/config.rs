//! Panel configuration
//!
//! Geometry and init options are chosen once, when the driver is built.
//! The presets reproduce the panels and init sequences the driver is
//! known to work with.

/// RAM pointer auto-increment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AddressingMode {
    /// Column first, then next page
    Horizontal = 0x00,
    /// Page first, then next column
    Vertical = 0x01,
    /// Column only, page stays put
    Page = 0x02,
}

impl AddressingMode {
    /// Argument byte of the addressing mode command
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Which optional analog settings the init sequence carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitProfile {
    /// Controller reset defaults for VCOM detect and pre-charge
    Minimal,
    /// VCOM detect 0x40 and pre-charge 0xF1 programmed explicitly
    Tuned,
}

/// Panel configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width must be 1..=128 columns
    InvalidWidth(u8),
    /// Height must be a multiple of 8 in 8..=64 rows
    InvalidHeight(u8),
}

/// Panel geometry and init options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Width in pixels (columns)
    pub width: u8,
    /// Active height in pixels; sets the multiplex ratio and page window
    pub height: u8,
    /// RAM pointer auto-increment mode
    pub addressing: AddressingMode,
    /// Optional analog settings in the init sequence
    pub profile: InitProfile,
    /// Rotate the picture by 180 degrees (segment remap + COM scan reverse)
    pub flip: bool,
    /// Put an explicit vertical shift of 0 in the init sequence
    pub reset_shift_on_init: bool,
    /// Move the RAM pointer to column 0, page 0 at the end of init
    pub home_cursor_on_init: bool,
    /// Reset the vertical shift after every `clear`
    pub reset_shift_on_clear: bool,
}

impl PanelConfig {
    /// 128x32 text panel: horizontal addressing, 5x8 font
    pub const TEXT_128X32: Self = Self {
        width: 128,
        height: 32,
        addressing: AddressingMode::Horizontal,
        profile: InitProfile::Tuned,
        flip: false,
        reset_shift_on_init: true,
        home_cursor_on_init: false,
        reset_shift_on_clear: true,
    };

    /// 128x64 text panel
    pub const TEXT_128X64: Self = Self {
        height: 64,
        ..Self::TEXT_128X32
    };

    /// 128x32 panel for eight big digits: vertical addressing
    pub const BIG_DIGITS_128X32: Self = Self {
        width: 128,
        height: 32,
        addressing: AddressingMode::Vertical,
        profile: InitProfile::Tuned,
        flip: false,
        reset_shift_on_init: false,
        home_cursor_on_init: true,
        reset_shift_on_clear: false,
    };

    /// Big digits with the shortest init sequence
    pub const BIG_DIGITS_COMPACT_128X32: Self = Self {
        profile: InitProfile::Minimal,
        ..Self::BIG_DIGITS_128X32
    };

    /// Same configuration with the picture rotated by 180 degrees
    pub const fn flipped(self) -> Self {
        Self { flip: true, ..self }
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> u8 {
        self.height / 8
    }

    /// Bytes needed to fill the whole active window
    pub const fn clear_len(&self) -> u16 {
        self.width as u16 * self.pages() as u16
    }

    /// Check the geometry
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > 128 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.height < 8 || self.height > 64 || self.height % 8 != 0 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        Ok(())
    }
}

const _: () = assert!(PanelConfig::TEXT_128X32.validate().is_ok());
const _: () = assert!(PanelConfig::TEXT_128X64.validate().is_ok());
const _: () = assert!(PanelConfig::BIG_DIGITS_128X32.validate().is_ok());
const _: () = assert!(PanelConfig::BIG_DIGITS_COMPACT_128X32.validate().is_ok());
