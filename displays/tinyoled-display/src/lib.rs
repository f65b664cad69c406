//! SSD1306 OLED driver for very small MCUs
//!
//! This crate provides:
//! - `Oled` driver: init, clear, cursor, vertical shift, text and big digits
//! - `PanelConfig` geometry and init options, fixed at construction
//! - The controller command set and init sequence builder
//! - Two fonts: 5x8 ASCII and 3x8 seed digits stretched to 16x32
//!
//! # Architecture
//!
//! The driver writes straight through an [`I2cMaster`](tinyoled_hal::I2cMaster);
//! there is no frame buffer and the display is never read back. Pixel bytes
//! land wherever the controller's RAM pointer is, which `set_cursor` moves
//! and the addressing mode advances after every byte.
//!
//! Every public operation is one complete I2C frame. Strings and screen
//! buffers are sent in a single frame regardless of length.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod driver;
pub mod font;

#[cfg(test)]
mod testing;

use tinyoled_hal::Address;

// Re-export key types
pub use command::InitSequence;
pub use config::{AddressingMode, ConfigError, InitProfile, PanelConfig};
pub use driver::{DataFrame, DriverState, Oled};
pub use font::{Ascii5x8, BigDigits, Font, ScreenBuffer};

/// 7-bit I2C address of the display (write byte 0x78)
pub const DISPLAY_ADDRESS: Address = Address::new(0x3C);
