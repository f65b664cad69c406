//! Write-only I2C masters
//!
//! Two implementations of [`tinyoled_hal::I2cMaster`]:
//!
//! - [`SoftI2c`] - bit-banged on two open-drain lines, no delay loops
//! - [`TwiMaster`] - driven by an on-chip two-wire peripheral
//!
//! Both assume a single master and a single cooperative slave: no clock
//! stretching, no arbitration, acknowledge bits are clocked but ignored.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod soft;
pub mod timing;
pub mod twi;

pub use soft::SoftI2c;
pub use timing::{Timing, TimingError, TimingProfile};
pub use twi::{TwiConfig, TwiMaster};
