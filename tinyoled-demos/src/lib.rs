//! Demo applications
//!
//! Small programs built only on the public driver operations:
//!
//! - [`messages`] - text, full character set, vertical scroll-out
//! - [`counter`] - 24-bit hexadecimal counter in big digits
//!
//! Waiting is done through `embedded_hal::delay::DelayNs`, so the demos run
//! on any board (or a host test) that can provide a delay.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod counter;
pub mod messages;

#[cfg(test)]
mod mock;

pub use counter::{ColonBlink, HexCounter};
