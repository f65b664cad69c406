//! tinyoled Hardware Abstraction Layer
//!
//! This crate defines the traits the I2C transports are written against,
//! so the same bit-level and register-level code runs on any chip that can
//! provide two open-drain lines or a two-wire peripheral.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tinyoled-display (SSD1306 driver)      │
//! └─────────────────────────────────────────┘
//!                     │  I2cMaster
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tinyoled-i2c (SoftI2c / TwiMaster)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ OpenDrainLine │       │ TwiRegisters  │
//! │  (this crate) │       │  (this crate) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OpenDrainLine`] - One bus line: drive low or release
//! - [`port::DirectionPort`] - Data-direction register bank (DDRx/PORTx/PINx)
//! - [`i2c::I2cMaster`] - START / byte write / STOP primitives
//! - [`twi::TwiRegisters`] - On-chip two-wire master peripheral

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod port;
pub mod twi;

// Re-export key traits at crate root for convenience
pub use gpio::{OpenDrainLine, PinLine};
pub use i2c::{Address, I2cConfig, I2cMaster};
pub use port::{DirectionPort, PortLine};
pub use twi::TwiRegisters;
